//! アルバムグループコンポーネント

use leptos::prelude::*;
use arsenal_common::AlbumView;

#[component]
pub fn AlbumGroup(group: AlbumView) -> impl IntoView {
    let AlbumView { title, cover, items } = group;

    let cover_image = cover.map(|src| {
        let alt = format!("Cover for {}", title);
        view! { <img src=src alt=alt class="album-cover" /> }
    });

    let rows = items
        .into_iter()
        .map(|item| {
            let href = item.href();
            view! {
                <li>
                    <a href=href>
                        <span class="item-title">{item.title}</span>
                        <span class="item-type">{item.kind}</span>
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="album-group">
            <div class="album-header">
                {cover_image}
                <h2 class="album-title">{title}</h2>
            </div>
            <ul class="album-item-list">{rows}</ul>
        </section>
    }
}
