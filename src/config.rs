use crate::error::{Result, SiteError};
use arsenal_common::DEFAULT_ASSET_URL_PREFIX;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// アセットディレクトリを上書きする環境変数
pub const ASSETS_DIR_ENV: &str = "ARSENAL_ASSETS_DIR";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub assets_dir: PathBuf,
    pub output_dir: PathBuf,
    pub asset_url_prefix: String,
    pub site_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            output_dir: PathBuf::from("public"),
            asset_url_prefix: DEFAULT_ASSET_URL_PREFIX.into(),
            site_title: "Arsenal".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込み。ファイルが無ければ既定値
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SiteError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("arsenal-site").join("config.json"))
    }

    /// アセットディレクトリ（環境変数を優先）
    pub fn assets_dir(&self) -> PathBuf {
        match std::env::var_os(ASSETS_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => self.assets_dir.clone(),
        }
    }

    pub fn set_assets_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.assets_dir = dir;
        self.save()
    }

    pub fn set_output_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.output_dir = dir;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(&dir.path().join("config.json")).expect("読み込み失敗");
        assert_eq!(config.output_dir, PathBuf::from("public"));
        assert_eq!(config.asset_url_prefix, "/assets/");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            site_title: "Hawk Eye".into(),
            ..Default::default()
        };
        config.save_to(&path).expect("保存失敗");

        let loaded = Config::load_from(&path).expect("読み込み失敗");
        assert_eq!(loaded.site_title, "Hawk Eye");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"site_title": "Only Title"}"#).unwrap();

        let loaded = Config::load_from(&path).expect("読み込み失敗");
        assert_eq!(loaded.site_title, "Only Title");
        assert_eq!(loaded.assets_dir, PathBuf::from("assets"));
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(Config::load_from(&path), Err(SiteError::JsonParse(_))));
    }
}
