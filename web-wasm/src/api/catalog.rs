//! カタログ取得
//!
//! 固定パスへGETを1回だけ発行する。リトライ・タイムアウトは無し。

use arsenal_common::{Catalog, Error, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// カタログエンドポイント
pub const CATALOG_ENDPOINT: &str = "/api/albums";

/// JS例外をメッセージ文字列に変換
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

fn network_error(value: JsValue) -> Error {
    Error::Network(describe_js_error(&value))
}

/// カタログを取得してパース
///
/// 成功以外のステータスは`Error::CatalogStatus`になる。
pub async fn fetch_catalog(url: &str) -> Result<Catalog> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts).map_err(network_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(network_error)?;

    let window = web_sys::window()
        .ok_or_else(|| Error::Network("window is not available".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network_error)?;
    let resp: Response = resp_value.dyn_into().map_err(network_error)?;

    if !resp.ok() {
        return Err(Error::CatalogStatus(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(network_error)?)
        .await
        .map_err(network_error)?;
    let body = text.as_string().unwrap_or_default();

    Catalog::from_json(&body)
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_describe_js_error_uses_message() {
        let error: JsValue = js_sys::Error::new("Failed to fetch").into();
        assert_eq!(describe_js_error(&error), "Failed to fetch");
    }

    #[wasm_bindgen_test]
    fn wasm_describe_js_error_plain_string() {
        assert_eq!(describe_js_error(&JsValue::from_str("boom")), "boom");
    }

    #[wasm_bindgen_test]
    async fn wasm_fetch_missing_endpoint_is_status_error() {
        let result = fetch_catalog("/__missing__/albums").await;
        assert!(matches!(result, Err(Error::CatalogStatus(404))), "{:?}", result);

        let message = result.unwrap_err().to_string();
        assert!(message.starts_with("Failed to load catalog: 404"), "{}", message);
    }
}
