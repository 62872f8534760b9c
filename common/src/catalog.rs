//! カタログ本体
//!
//! 取得したアルバム一覧を保持する。読み込み後は変更しない。

use crate::error::Result;
use crate::search::{filter_catalog, CatalogView};
use crate::types::{Album, ContentRow};
use std::collections::HashMap;

/// アセットURLの既定接頭辞
pub const DEFAULT_ASSET_URL_PREFIX: &str = "/assets/";

/// 読み込み済みカタログ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    albums: Vec<Album>,
}

impl Catalog {
    pub fn new(albums: Vec<Album>) -> Self {
        Self { albums }
    }

    /// エンドポイントのJSON（Albumの配列）から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let albums: Vec<Album> = serde_json::from_str(json)?;
        Ok(Self::new(albums))
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    /// 全アイテム数
    pub fn item_count(&self) -> usize {
        self.albums.iter().map(|a| a.items.len()).sum()
    }

    /// クエリで絞り込んだ表示用ビュー
    pub fn view(&self, query: &str) -> CatalogView {
        filter_catalog(&self.albums, query)
    }
}

/// アセットの相対パスを公開URLに変換
pub fn asset_url(prefix: &str, relative: &str) -> String {
    format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        relative.trim_start_matches('/')
    )
}

/// インデックス行をアルバム単位にまとめる
///
/// 行の順序を保ったまま`album`名でグループ化する（初出順）。
/// カバー画像は最初に見つかった空でない`image_path`。
pub fn group_rows(rows: &[ContentRow], asset_url_prefix: &str) -> Vec<Album> {
    let mut albums: Vec<Album> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for row in rows {
        let position = *index.entry(row.album.as_str()).or_insert_with(|| {
            albums.push(Album {
                title: Some(row.album.clone()),
                image_path: Some(String::new()),
                items: Vec::new(),
            });
            albums.len() - 1
        });

        let album = &mut albums[position];
        album.items.push(row.to_item());

        if album.cover().is_none() && !row.image_path.is_empty() {
            album.image_path = Some(asset_url(asset_url_prefix, &row.image_path));
        }
    }

    albums
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContentKind;

    fn row(album: &str, title: &str, image: &str) -> ContentRow {
        let sku = album.to_lowercase().replace(' ', "_");
        ContentRow {
            key: format!("{}-{}", sku, title.to_lowercase()),
            sku,
            title: title.to_string(),
            album: album.to_string(),
            kind: ContentKind::Track,
            audio_path: String::new(),
            image_path: image.to_string(),
            lyrics_path: String::new(),
        }
    }

    #[test]
    fn test_from_json() {
        let json = r#"[{"items":[{"key":"a1","title":"Solar Flare","sku":"SF-001","type":"track","album":"Eclipse"}]}]"#;
        let catalog = Catalog::from_json(json).expect("読み込み失敗");
        assert_eq!(catalog.albums().len(), 1);
        assert_eq!(catalog.item_count(), 1);
        assert_eq!(catalog.view("flare").count_label(), "1 item(s)");
    }

    #[test]
    fn test_from_json_rejects_object() {
        assert!(Catalog::from_json(r#"{"items": []}"#).is_err());
    }

    #[test]
    fn test_from_json_tolerates_odd_item_values() {
        let json = r#"[
            {"items": [{"key": "a1", "title": "Solar Flare", "sku": 1001, "type": "track", "album": "Eclipse"}]},
            {"items": [{"key": "b1", "title": null, "sku": "LT-1", "type": "track", "album": "Low Tide"}]}
        ]"#;
        let catalog = Catalog::from_json(json).expect("読み込み失敗");
        assert_eq!(catalog.albums().len(), 2);
        assert_eq!(catalog.view("1001").visible_count, 1);
        assert_eq!(catalog.view("low tide").count_label(), "1 item(s)");
    }

    #[test]
    fn test_asset_url() {
        assert_eq!(asset_url("/assets/", "tracks/a/c.jpg"), "/assets/tracks/a/c.jpg");
        assert_eq!(asset_url("/assets", "/tracks/a/c.jpg"), "/assets/tracks/a/c.jpg");
    }

    #[test]
    fn test_group_rows_first_seen_order() {
        let rows = vec![
            row("Eclipse", "Corona", ""),
            row("Eclipse", "Solar Flare", "tracks/eclipse/cover.png"),
            row("Low Tide", "Undertow", ""),
        ];
        let albums = group_rows(&rows, DEFAULT_ASSET_URL_PREFIX);

        assert_eq!(albums.len(), 2);
        assert_eq!(albums[0].title.as_deref(), Some("Eclipse"));
        assert_eq!(albums[0].items.len(), 2);
        assert_eq!(albums[0].cover(), Some("/assets/tracks/eclipse/cover.png"));
        assert_eq!(albums[1].cover(), None);
        assert_eq!(albums[1].display_title(), "Low Tide");
    }

    #[test]
    fn test_group_rows_roundtrips_through_catalog() {
        let rows = vec![row("Eclipse", "Corona", "")];
        let json = serde_json::to_string(&group_rows(&rows, "/assets/")).expect("シリアライズ失敗");
        let catalog = Catalog::from_json(&json).expect("読み込み失敗");
        assert_eq!(catalog.view("").visible_count, 1);
        assert_eq!(catalog.albums()[0].items[0].kind, "track");
    }
}
