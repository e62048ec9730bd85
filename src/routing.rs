//! Location Sync
//!
//! Mirrors search text, page and selection into the address bar.

use kangyur_catalog::UrlQuery;
use wasm_bindgen::JsValue;

/// Query parameters of the current location
pub fn current_query() -> UrlQuery {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .map(|search| UrlQuery::parse(&search))
        .unwrap_or_default()
}

/// Replace the current history entry with `query` (no navigation)
pub fn replace_query(query: &UrlQuery) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let path = window.location().pathname().unwrap_or_else(|_| "/".to_string());
    let url = format!("{}{}", path, query.to_search_string());
    let result = window
        .history()
        .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
    if let Err(err) = result {
        log::warn!("could not update location to {}: {:?}", url, err);
    }
}
