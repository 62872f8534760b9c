//! カタログ検索コンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::api::{fetch_catalog, CATALOG_ENDPOINT};
use crate::components::{
    album_group::AlbumGroup,
    item_count::ItemCount,
    search_box::SearchBox,
};
use arsenal_common::{Catalog, CatalogView};

/// カタログの読み込み状態
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(Catalog),
    Failed(String),
}

impl LoadState {
    /// 読み込み済みならクエリで絞り込んだビュー
    pub fn view(&self, query: &str) -> Option<CatalogView> {
        match self {
            LoadState::Ready(catalog) => Some(catalog.view(query)),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<String> {
        match self {
            LoadState::Failed(message) => Some(message.clone()),
            _ => None,
        }
    }
}

/// カタログ検索アプリ
///
/// 起動時に1回だけ取得し、入力のたびに一覧を丸ごと描き直す。
#[component]
pub fn CatalogApp() -> impl IntoView {
    let (load_state, set_load_state) = signal(LoadState::Loading);
    let (query, set_query) = signal(String::new());

    spawn_local(async move {
        match fetch_catalog(CATALOG_ENDPOINT).await {
            Ok(catalog) => set_load_state.set(LoadState::Ready(catalog)),
            Err(e) => {
                let message = e.to_string();
                web_sys::console::error_1(&message.clone().into());
                set_load_state.set(LoadState::Failed(message));
            }
        }
    });

    let catalog_view = Memo::new(move |_| {
        let query = query.get();
        load_state.with(|state| state.view(&query))
    });

    let list = move || {
        if let Some(message) = load_state.with(LoadState::error_message) {
            return view! { <p class="catalog-error" style="color:#f88">{message}</p> }.into_any();
        }

        catalog_view
            .get()
            .map(|view| view.groups)
            .unwrap_or_default()
            .into_iter()
            .map(|group| view! { <AlbumGroup group=group /> })
            .collect_view()
            .into_any()
    };

    view! {
        <SearchBox query=query set_query=set_query />
        <ItemCount catalog_view=catalog_view />
        <div id="list">{list}</div>
    }
}
