//! 静的ページ生成
//!
//! - /content/<key>/index.html: 詳細ページ
//! - /index.html: 事前描画したカタログ一覧

use crate::error::Result;
use arsenal_common::{asset_url, render_content_page, render_index_page, Catalog, ContentPage, ContentRow};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// 詳細ページの出力先ディレクトリ（出力ルートからの相対）
pub const CONTENT_DIR: &str = "content";

fn optional_url(prefix: &str, relative: &str) -> Option<String> {
    if relative.is_empty() {
        None
    } else {
        Some(asset_url(prefix, relative))
    }
}

/// 行から詳細ページの内容を組み立てる。本文は`lyrics_path`のファイル
pub fn content_page(row: &ContentRow, assets_dir: &Path, asset_url_prefix: &str) -> Result<ContentPage> {
    let body = if row.lyrics_path.is_empty() {
        None
    } else {
        let path = assets_dir.join(&row.lyrics_path);
        if path.is_file() {
            let bytes = std::fs::read(&path)?;
            Some(String::from_utf8_lossy(&bytes).into_owned())
        } else {
            None
        }
    };

    Ok(ContentPage {
        title: row.title.clone(),
        album: row.album.clone(),
        kind: row.kind.to_string(),
        audio_url: optional_url(asset_url_prefix, &row.audio_path),
        image_url: optional_url(asset_url_prefix, &row.image_path),
        body,
    })
}

fn write_content_page(
    row: &ContentRow,
    assets_dir: &Path,
    output_dir: &Path,
    asset_url_prefix: &str,
) -> Result<PathBuf> {
    let page = content_page(row, assets_dir, asset_url_prefix)?;
    let dir = output_dir.join(CONTENT_DIR).join(&row.key);
    std::fs::create_dir_all(&dir)?;

    let path = dir.join("index.html");
    std::fs::write(&path, render_content_page(&page))?;
    Ok(path)
}

/// 全行の詳細ページを並列で書き出す
pub fn write_content_pages(
    rows: &[ContentRow],
    assets_dir: &Path,
    output_dir: &Path,
    asset_url_prefix: &str,
) -> Result<Vec<PathBuf>> {
    rows.par_iter()
        .map(|row| write_content_page(row, assets_dir, output_dir, asset_url_prefix))
        .collect()
}

/// トップページを書き出す（クエリ無しの全件表示）
pub fn write_index_page(catalog: &Catalog, output_dir: &Path, site_title: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join("index.html");
    std::fs::write(&path, render_index_page(&catalog.view(""), site_title))?;
    Ok(path)
}
