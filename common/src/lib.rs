//! Arsenal Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod catalog;
pub mod search;
pub mod render;
pub mod rain;

pub use types::{Album, ContentKind, ContentRow, Item, UNTITLED_ALBUM};
pub use error::{Error, Result};
pub use catalog::{asset_url, group_rows, Catalog, DEFAULT_ASSET_URL_PREFIX};
pub use search::{filter_catalog, normalize_query, AlbumView, CatalogView};
pub use render::{
    escape_html, render_catalog_html, render_content_page,
    render_index_page, ContentPage,
};
pub use rain::{Glyph, RainField};
