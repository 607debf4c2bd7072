//! Blob URL creation for fallback video playback.
//!
//! When a `<video>` element fails to stream a clip from the service,
//! the tester page re-fetches the bytes and plays them from an object
//! URL instead. Object URLs are browser-level resource handles: every
//! one created here must be revoked when superseded or when the page
//! tears down.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors that can occur when creating media Blob URLs.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for MediaError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Wrap raw media bytes in a Blob and return an object URL for it.
///
/// The returned URL must be revoked via [`revoke_blob_url`] when no
/// longer needed to avoid leaking the backing allocation.
///
/// # Errors
///
/// Returns [`MediaError::JsError`] if Blob or URL creation fails.
pub fn bytes_to_blob_url(bytes: &[u8], mime_type: &str) -> Result<String, MediaError> {
    let uint8_array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&uint8_array);

    let opts = BlobPropertyBag::new();
    opts.set_type(mime_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    Ok(url)
}

/// Revoke a Blob URL previously created by [`bytes_to_blob_url`].
///
/// Best-effort: failures are silently ignored since the URL may have
/// already been revoked.
pub fn revoke_blob_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}
