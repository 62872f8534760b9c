//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// カタログ取得で成功以外のHTTPステータス
    #[error("Failed to load catalog: {0}")]
    CatalogStatus(u16),

    /// カタログ取得時のネットワークエラー
    #[error("Failed to load catalog: {0}")]
    Network(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = Error::Io(io_error);
        let display = format!("{}", error);
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_display_catalog_status() {
        let error = Error::CatalogStatus(500);
        assert_eq!(format!("{}", error), "Failed to load catalog: 500");
    }

    #[test]
    fn test_error_display_network() {
        let error = Error::Network("TypeError: Failed to fetch".to_string());
        assert_eq!(
            format!("{}", error),
            "Failed to load catalog: TypeError: Failed to fetch"
        );
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }
}
