//! 表示件数コンポーネント

use leptos::prelude::*;
use arsenal_common::CatalogView;

#[component]
pub fn ItemCount(catalog_view: Memo<Option<CatalogView>>) -> impl IntoView {
    view! {
        <span id="count">
            {move || catalog_view.with(|v| v.as_ref().map(CatalogView::count_label).unwrap_or_default())}
        </span>
    }
}
