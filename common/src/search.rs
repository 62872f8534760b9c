//! カタログ検索
//!
//! 大文字小文字を区別しない単純な部分文字列一致。
//! トークン化・ランキング・あいまい一致は行わない。

use crate::types::{Album, Item};

/// クエリを正規化（前後の空白除去 + 小文字化）
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

impl Item {
    /// 検索対象テキスト: title + sku + album を小文字で連結
    pub fn searchable_text(&self) -> String {
        format!(
            "{} {} {}",
            self.title,
            self.sku,
            self.album.as_deref().unwrap_or_default()
        )
        .to_lowercase()
    }

    /// 正規化済みクエリに一致するか。空クエリは常に一致
    pub fn matches(&self, term: &str) -> bool {
        term.is_empty() || self.searchable_text().contains(term)
    }
}

/// 表示用アルバムグループ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumView {
    pub title: String,
    pub cover: Option<String>,
    pub items: Vec<Item>,
}

/// フィルタ結果（読み取り専用の射影）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogView {
    pub groups: Vec<AlbumView>,
    pub visible_count: usize,
}

impl CatalogView {
    /// 件数表示 ("3 item(s)")
    pub fn count_label(&self) -> String {
        format!("{} item(s)", self.visible_count)
    }

    /// 表示アイテムが1件も無いか
    pub fn is_empty(&self) -> bool {
        self.visible_count == 0
    }
}

/// アルバム一覧をクエリで絞り込む
///
/// クエリが空でなく一致アイテムが無いアルバムは結果から除外する。
/// クエリが空の場合はアイテムの無いアルバムも残す。
pub fn filter_catalog(albums: &[Album], query: &str) -> CatalogView {
    let term = normalize_query(query);
    let mut view = CatalogView::default();

    for album in albums {
        let items: Vec<Item> = album
            .items
            .iter()
            .filter(|item| item.matches(&term))
            .cloned()
            .collect();

        if items.is_empty() && !term.is_empty() {
            continue;
        }

        view.visible_count += items.len();
        view.groups.push(AlbumView {
            title: album.display_title().to_string(),
            cover: album.cover().map(str::to_string),
            items,
        });
    }

    view
}
