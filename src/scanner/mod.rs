//! アセットスキャナ
//!
//! `assets/tracks/<sku>/` を走査してインデックス行を作る。
//! - 音声ファイル → track
//! - テキストファイル → commentary（同名の音声があれば歌詞扱いでスキップ）
//! - 画像ファイル → アルバムのカバー（名前順で最初の1枚）

mod title;

pub use title::format_title;

use crate::error::{Result, SiteError};
use arsenal_common::{ContentKind, ContentRow};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// コンテンツのルート（アセットディレクトリからの相対）
pub const TRACKS_DIR: &str = "tracks";

pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "m4a", "ogg", "wav", "flac", "aac"];
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];
pub const TEXT_EXTENSIONS: &[&str] = &["txt", "lrc", "md"];

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| extensions.contains(&ext.as_str()))
}

fn stem_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// アセットディレクトリからの相対パス（`/`区切り）
fn relative_posix(assets_dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(assets_dir).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// ディレクトリ直下のエントリ（名前順）
fn list_dir(dir: &Path) -> impl Iterator<Item = walkdir::DirEntry> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
}

/// トラックの歌詞ファイル: 同じ名前のテキストファイルを拡張子順に探す
fn find_lyrics(sku_dir: &Path, stem: &str) -> Option<PathBuf> {
    TEXT_EXTENSIONS
        .iter()
        .map(|ext| sku_dir.join(format!("{}.{}", stem, ext)))
        .find(|candidate| candidate.is_file())
}

fn scan_album(assets_dir: &Path, sku_dir: &Path) -> Vec<ContentRow> {
    let sku = sku_dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let album = format_title(&sku);

    let files: Vec<PathBuf> = list_dir(sku_dir)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect();

    let image_path = files
        .iter()
        .find(|f| has_extension(f, IMAGE_EXTENSIONS))
        .map(|f| relative_posix(assets_dir, f))
        .unwrap_or_default();

    let mut rows = Vec::new();

    for file in &files {
        let stem = stem_of(file);
        if stem.starts_with('.') {
            continue;
        }

        let (kind, audio_path, lyrics_path) = if has_extension(file, AUDIO_EXTENSIONS) {
            let lyrics = find_lyrics(sku_dir, &stem)
                .map(|p| relative_posix(assets_dir, &p))
                .unwrap_or_default();
            (ContentKind::Track, relative_posix(assets_dir, file), lyrics)
        } else if has_extension(file, TEXT_EXTENSIONS) {
            let has_matching_audio = files
                .iter()
                .any(|f| stem_of(f) == stem && has_extension(f, AUDIO_EXTENSIONS));
            if has_matching_audio {
                continue;
            }
            (ContentKind::Commentary, String::new(), relative_posix(assets_dir, file))
        } else {
            continue;
        };

        rows.push(ContentRow {
            key: format!("{}-{}", sku, stem),
            sku: sku.clone(),
            title: format_title(&stem),
            album: album.clone(),
            kind,
            audio_path,
            image_path: image_path.clone(),
            lyrics_path,
        });
    }

    rows
}

/// `assets_dir/tracks` を走査してインデックス行を返す
///
/// 行は (album, title) でソートされる。
/// 同じフォルダに語幹の等しいファイル（`intro.mp3` と `intro.wav` など）があると
/// キーが重複するため `SiteError::DuplicateKey` を返す。
pub fn scan_tracks(assets_dir: &Path) -> Result<Vec<ContentRow>> {
    let content_root = assets_dir.join(TRACKS_DIR);
    if !content_root.is_dir() {
        return Err(SiteError::FolderNotFound(content_root.display().to_string()));
    }

    let mut rows = Vec::new();
    for entry in list_dir(&content_root) {
        if !entry.file_type().is_dir() {
            continue;
        }
        tracing::debug!(sku_dir = %entry.path().display(), "scanning album folder");
        rows.extend(scan_album(assets_dir, entry.path()));
    }

    // 同じ語幹の音声が複数あるとキーが衝突し、詳細ページが上書きされる
    let mut seen = HashSet::new();
    if let Some(row) = rows.iter().find(|row| !seen.insert(row.key.as_str())) {
        return Err(SiteError::DuplicateKey(row.key.clone()));
    }

    rows.sort_by(|a, b| (&a.album, &a.title).cmp(&(&b.album, &b.title)));

    Ok(rows)
}
