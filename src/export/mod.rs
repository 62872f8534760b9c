pub mod csv;
pub mod pages;

use crate::error::{Result, SiteError};
use crate::scanner;
use arsenal_common::{group_rows, Catalog, ContentRow};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// アルバム一覧エンドポイント（出力ルートからの相対）
pub const ALBUMS_ENDPOINT_PATH: &str = "api/albums";

/// インデックスファイル名（アセットディレクトリ直下）
pub const INDEX_FILE_NAME: &str = "asset_index.json";
pub const INDEX_CSV_NAME: &str = "asset_index.csv";

/// 公開アセットの出力先（出力ルートからの相対）
pub const ASSETS_OUTPUT_DIR: &str = "assets";

/// サイト生成の設定
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub assets_dir: PathBuf,
    pub output_dir: PathBuf,
    pub asset_url_prefix: String,
    pub site_title: String,
}

/// サイト生成の結果
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub albums: usize,
    pub pages: usize,
    pub assets_copied: usize,
}

/// インデックス行をJSONで保存
pub fn write_index_json(rows: &[ContentRow], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(rows)?)?;
    Ok(())
}

pub fn read_index_json(path: &Path) -> Result<Vec<ContentRow>> {
    if !path.is_file() {
        return Err(SiteError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// インデックス行を取得
///
/// `from_index` なら `index` コマンドが保存した asset_index.json を読み、
/// そうでなければtracksフォルダを走査する。
pub fn load_rows(assets_dir: &Path, from_index: bool) -> Result<Vec<ContentRow>> {
    if from_index {
        let index_path = assets_dir.join(INDEX_FILE_NAME);
        tracing::debug!(path = %index_path.display(), "reading saved index");
        read_index_json(&index_path)
    } else {
        scanner::scan_tracks(assets_dir)
    }
}

/// アルバム一覧エンドポイントを書き出す
pub fn write_albums_json(rows: &[ContentRow], output_dir: &Path, asset_url_prefix: &str) -> Result<PathBuf> {
    let albums = group_rows(rows, asset_url_prefix);
    let path = output_dir.join(ALBUMS_ENDPOINT_PATH);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, serde_json::to_string(&albums)?)?;
    Ok(path)
}

/// 参照されている音声・画像を出力ディレクトリへコピー
///
/// 歌詞・コメンタリーは詳細ページに埋め込むのでコピーしない。
pub fn copy_assets(rows: &[ContentRow], assets_dir: &Path, output_dir: &Path) -> Result<usize> {
    let referenced: BTreeSet<&str> = rows
        .iter()
        .flat_map(|row| [row.audio_path.as_str(), row.image_path.as_str()])
        .filter(|path| !path.is_empty())
        .collect();

    let target_root = output_dir.join(ASSETS_OUTPUT_DIR);
    for relative in &referenced {
        let source = assets_dir.join(relative);
        if !source.is_file() {
            return Err(SiteError::FileNotFound(source.display().to_string()));
        }
        let target = target_root.join(relative);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::copy(&source, &target)?;
    }

    Ok(referenced.len())
}

/// 静的サイトを一括生成
pub fn build_site(rows: &[ContentRow], options: &BuildOptions) -> Result<BuildReport> {
    if rows.is_empty() {
        return Err(SiteError::NoContentFound(
            options.assets_dir.display().to_string(),
        ));
    }

    let output_dir = &options.output_dir;
    let prefix = options.asset_url_prefix.as_str();

    println!("- エンドポイントを生成中...");
    let albums_path = write_albums_json(rows, output_dir, prefix)?;
    let catalog = Catalog::from_file(&albums_path)?;
    println!("✔ {}", albums_path.display());

    println!("- 詳細ページを生成中...");
    let pages = pages::write_content_pages(rows, &options.assets_dir, output_dir, prefix)?;
    println!("✔ {}ページ", pages.len());

    let index_path = pages::write_index_page(&catalog, output_dir, &options.site_title)?;
    println!("✔ {}", index_path.display());

    println!("- アセットをコピー中...");
    let assets_copied = copy_assets(rows, &options.assets_dir, output_dir)?;
    println!("✔ {}ファイル", assets_copied);

    tracing::info!(
        albums = catalog.albums().len(),
        items = catalog.item_count(),
        output = %output_dir.display(),
        "site build finished"
    );

    Ok(BuildReport {
        albums: catalog.albums().len(),
        pages: pages.len(),
        assets_copied,
    })
}
