//! Detection service endpoint configuration.
//!
//! The dashboard talks to a single HTTP collaborator. The base URL
//! defaults to the local development server and can be overridden at
//! page load (see `roadwatch-io::runtime`); nothing is persisted.

/// Base URL used when no override is provided.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Location of the detection service.
///
/// The stored base URL never carries a trailing slash, so joining with
/// rooted paths (`/upload/`) is plain concatenation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Create a config for the given base URL.
    ///
    /// Trailing slashes are stripped so that `endpoint` and
    /// `join_rooted` produce exactly one slash between segments.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url: String = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// The normalized base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full endpoint URL from a rooted path like `/upload/`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        self.join_rooted(path)
    }

    /// Concatenate the base URL with a server-rooted path.
    ///
    /// Paths returned by the service (`/accident_frame/x.jpg`) already
    /// start with a slash; one is inserted if it is missing.
    #[must_use]
    pub fn join_rooted(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_service() {
        assert_eq!(ApiConfig::default().base_url(), "http://127.0.0.1:8000");
    }

    #[test]
    fn trailing_slashes_are_stripped() {
        let config = ApiConfig::new("http://example.test:8000///");
        assert_eq!(config.base_url(), "http://example.test:8000");
    }

    #[test]
    fn endpoint_joins_with_single_slash() {
        let config = ApiConfig::new("http://example.test:8000/");
        assert_eq!(
            config.endpoint("/vehicle_types/"),
            "http://example.test:8000/vehicle_types/"
        );
        assert_eq!(
            config.endpoint("vehicle_types/"),
            "http://example.test:8000/vehicle_types/"
        );
    }

    #[test]
    fn join_rooted_handles_service_media_paths() {
        let config = ApiConfig::default();
        assert_eq!(
            config.join_rooted("/accident_video/clip.mp4"),
            "http://127.0.0.1:8000/accident_video/clip.mp4"
        );
    }
}
