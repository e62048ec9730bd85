//! REST API Wrappers
//!
//! Thin fetch bindings to the catalog API, organized by domain.

mod catalog;

use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

pub use catalog::*;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned HTTP {0}")]
    Status(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("invalid bundled catalog: {0}")]
    Dataset(String),
}

impl ApiError {
    fn from_js(value: JsValue) -> Self {
        let message = value
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{:?}", value));
        ApiError::Network(message)
    }
}

/// `GET url` and decode the JSON body
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(ApiError::from_js)?;
    request.headers().set("Accept", "application/json").map_err(ApiError::from_js)?;

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ApiError::from_js)?
        .dyn_into()
        .map_err(ApiError::from_js)?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let body = JsFuture::from(response.json().map_err(ApiError::from_js)?)
        .await
        .map_err(|e| ApiError::Decode(format!("{:?}", e)))?;
    serde_wasm_bindgen::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}
