//! 検索入力コンポーネント

use leptos::prelude::*;

#[component]
pub fn SearchBox(
    query: ReadSignal<String>,
    set_query: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <input
            id="q"
            type="search"
            placeholder="Search titles, SKUs, albums"
            autocomplete="off"
            prop:value=move || query.get()
            on:input=move |ev| {
                set_query.set(event_target_value(&ev));
            }
        />
    }
}
