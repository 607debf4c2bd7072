//! Thin reqwest client for the detection service.
//!
//! One method per consumed endpoint, strictly request/response: no
//! retries, no caching, no pagination. On `wasm32-unknown-unknown`
//! reqwest rides the browser's `fetch`, so these calls inherit the
//! page's event loop and CORS rules.

use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::dto::{AnalysisResponse, ImageListing, VehicleStatListing, VideoListing};

/// Errors surfaced by [`ApiClient`] calls.
///
/// All are terminal to the current attempt; callers render the message
/// and move on.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (network, DNS, CORS, decode).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("server returned status {status} for {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// The URL that was requested.
        url: String,
    },
}

/// Client for the remote detection service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl ApiClient {
    /// Build a client against the given service location.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// The configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetch all stored accident frames.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] on network or decode failure and
    /// [`ApiError::Status`] on a non-2xx response.
    #[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
    pub async fn accident_images(&self) -> Result<ImageListing, ApiError> {
        self.get_json("/accident_images/").await
    }

    /// Fetch all stored accident clips.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] on network or decode failure and
    /// [`ApiError::Status`] on a non-2xx response.
    #[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
    pub async fn accident_videos(&self) -> Result<VideoListing, ApiError> {
        self.get_json("/accident_videos/").await
    }

    /// Fetch accident counts grouped by vehicle type.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] on network or decode failure and
    /// [`ApiError::Status`] on a non-2xx response.
    #[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
    pub async fn vehicle_stats(&self) -> Result<VehicleStatListing, ApiError> {
        self.get_json("/vehicle_types/").await
    }

    /// Submit a video for analysis as a single multipart POST.
    ///
    /// Exactly one round trip; the returned body may still carry a
    /// service-reported `error` field, which
    /// [`crate::session::UploadSession::apply_response`] treats as a
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] on network or decode failure and
    /// [`ApiError::Status`] on a non-2xx response.
    #[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
    pub async fn analyze_video(
        &self,
        bytes: Vec<u8>,
        filename: &str,
    ) -> Result<AnalysisResponse, ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_owned())
            .mime_str(video_mime(filename))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let url = self.config.endpoint("/upload/");
        let response = self.http.post(&url).multipart(form).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status().as_u16(),
                url,
            });
        }
        Ok(response.json().await?)
    }

    /// Fetch raw media bytes from an absolute URL.
    ///
    /// Used only by the one-shot blob playback fallback on the tester
    /// page.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] on network failure and
    /// [`ApiError::Status`] on a non-2xx response.
    #[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
    pub async fn fetch_media(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status().as_u16(),
                url: url.to_owned(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }

    #[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status().as_u16(),
                url,
            });
        }
        Ok(response.json().await?)
    }
}

/// MIME type for an uploaded video, guessed from the filename.
///
/// The service ignores the part's content type today, but sending an
/// honest one costs nothing and keeps intermediaries happy.
fn video_mime(filename: &str) -> &'static str {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .unwrap_or_default();
    if extension.eq_ignore_ascii_case("webm") {
        "video/webm"
    } else if extension.eq_ignore_ascii_case("mov") {
        "video/quicktime"
    } else if extension.eq_ignore_ascii_case("avi") {
        "video/x-msvideo"
    } else if extension.eq_ignore_ascii_case("mkv") {
        "video/x-matroska"
    } else {
        "video/mp4"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn mime_guess_covers_common_containers() {
        assert_eq!(video_mime("a.mp4"), "video/mp4");
        assert_eq!(video_mime("a.MOV"), "video/quicktime");
        assert_eq!(video_mime("a.webm"), "video/webm");
        assert_eq!(video_mime("a.mkv"), "video/x-matroska");
        assert_eq!(video_mime("noextension"), "video/mp4");
    }

    #[test]
    fn status_error_reports_code_and_url() {
        let err = ApiError::Status {
            status: 503,
            url: "http://example.test:8000/upload/".to_owned(),
        };
        let message = err.to_string();
        assert!(message.contains("503"));
        assert!(message.contains("/upload/"));
    }
}
