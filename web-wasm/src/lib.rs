//! Arsenal Web (Leptos + WASM)
//!
//! ページ上の取り付け先があるものだけ起動する:
//! - `#matrix` canvas: マトリックスレイン
//! - `#catalog`: カタログ検索

mod app;
mod components;
mod api;
mod rain;

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

const MATRIX_CANVAS_ID: &str = "matrix";
const CATALOG_ROOT_ID: &str = "catalog";

fn mount_catalog(root_id: &str) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(root_id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    // 静的ビルドで事前描画された内容を置き換える
    root.set_inner_html("");
    leptos::mount::mount_to(root, app::CatalogApp).forget();
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    rain::attach(MATRIX_CANVAS_ID);
    mount_catalog(CATALOG_ROOT_ID);
}
