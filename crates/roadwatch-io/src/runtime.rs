//! Page-load configuration lookup.
//!
//! Deployments point the dashboard at a non-default service by setting
//! a `ROADWATCH_API_BASE` global on `window` before the WASM module
//! loads. The lookup silently falls back to the built-in default when
//! the global is absent or not a string (e.g., during local dev).

use roadwatch_api::ApiConfig;
use wasm_bindgen::JsValue;

/// Name of the window global holding the service base URL.
const API_BASE_GLOBAL: &str = "ROADWATCH_API_BASE";

/// Resolve the service configuration for this page load.
///
/// Reads `window.ROADWATCH_API_BASE` when present, otherwise uses
/// [`roadwatch_api::config::DEFAULT_BASE_URL`].
#[must_use]
pub fn api_config() -> ApiConfig {
    configured_base_url().map_or_else(ApiConfig::default, ApiConfig::new)
}

/// The configured base URL, if one was provided by the page.
fn configured_base_url() -> Option<String> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(API_BASE_GLOBAL)).ok()?;
    value.as_string().filter(|s| !s.is_empty())
}
