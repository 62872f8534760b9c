//! カタログの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Item: アルバムに属する1件（トラック/コメンタリー）
//! - Album: アイテムのグループ（表示タイトルは先頭アイテムの`album`から導出）
//! - ContentRow: アセットインデックスの1行（ビルド時のみ使用）

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// アルバム名が無い場合の表示タイトル
pub const UNTITLED_ALBUM: &str = "Untitled Album";

/// 詳細ページのパス接頭辞
pub const CONTENT_PATH_PREFIX: &str = "/content/";

/// カタログアイテム
///
/// エンドポイントの値は文字列とは限らない（数値のSKU、nullのタイトル等）。
/// 1件の型違いでカタログ全体を失わないよう文字列へ寄せて読む。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub key: String,

    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub title: String,

    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub sku: String,

    /// 種別（track / commentary）。ワイヤ上は`type`
    #[serde(default, rename = "type", deserialize_with = "deserialize_lenient_string")]
    pub kind: String,

    /// アルバム表示名（アイテムごとに冗長に保持される）
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_lenient_string_option"
    )]
    pub album: Option<String>,
}

fn lenient_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        other => Some(other.to_string()),
    }
}

/// 数値・真偽値は文字列に、nullは空文字にする
pub fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

pub fn deserialize_lenient_string_option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(Value::deserialize(deserializer)?))
}

impl Item {
    /// 詳細ページへのリンク
    pub fn href(&self) -> String {
        format!("{}{}", CONTENT_PATH_PREFIX, self.key)
    }
}

/// アルバム（アイテムのグループ）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// ビルダーが出力するタイトル。表示には使わない
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// カバー画像URL（空文字は無しとして扱う）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,

    #[serde(default)]
    pub items: Vec<Item>,
}

impl Album {
    /// 表示タイトル: 先頭アイテムの`album`、無ければ"Untitled Album"
    pub fn display_title(&self) -> &str {
        self.items
            .first()
            .and_then(|item| item.album.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or(UNTITLED_ALBUM)
    }

    pub fn cover(&self) -> Option<&str> {
        self.image_path.as_deref().filter(|path| !path.is_empty())
    }
}

/// コンテンツ種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Track,
    Commentary,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Track => "track",
            ContentKind::Commentary => "commentary",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// アセットインデックスの1行
///
/// パスはアセットディレクトリからの相対パス（`/`区切り）。無い場合は空文字。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRow {
    pub key: String,
    pub sku: String,
    pub title: String,
    pub album: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    #[serde(default)]
    pub audio_path: String,
    #[serde(default)]
    pub image_path: String,
    #[serde(default)]
    pub lyrics_path: String,
}

impl ContentRow {
    /// カタログ用のアイテムに変換
    pub fn to_item(&self) -> Item {
        Item {
            key: self.key.clone(),
            title: self.title.clone(),
            sku: self.sku.clone(),
            kind: self.kind.to_string(),
            album: Some(self.album.clone()),
        }
    }
}
