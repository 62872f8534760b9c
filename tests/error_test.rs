//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use arsenal_site::error::SiteError;

/// SiteErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        SiteError::Config("テスト設定エラー".to_string()),
        SiteError::FileNotFound("cover.png".to_string()),
        SiteError::FolderNotFound("/path/to/tracks".to_string()),
        SiteError::NoContentFound("assets".to_string()),
        SiteError::DuplicateKey("eclipse-intro".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: SiteError = io_err.into();

    assert!(matches!(err, SiteError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: SiteError = json_err.into();

    assert!(matches!(err, SiteError::JsonParse(_)));
}

/// common::Errorは透過的に表示される
#[test]
fn test_common_error_transparent() {
    let err: SiteError = arsenal_common::Error::CatalogStatus(500).into();

    assert!(matches!(err, SiteError::Common(_)));
    assert_eq!(format!("{}", err), "Failed to load catalog: 500");
}

/// 壊れたカタログJSONはcommon::Error::Jsonになる
#[test]
fn test_broken_catalog_json() {
    let err: SiteError = arsenal_common::Catalog::from_json("[{\"items\": 3}]")
        .unwrap_err()
        .into();

    assert!(matches!(err, SiteError::Common(arsenal_common::Error::Json(_))));
}
