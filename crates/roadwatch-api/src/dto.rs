//! Wire types for the detection service's JSON responses.
//!
//! These mirror exactly what the service sends; any reshaping for
//! display happens in [`crate::view`]. Optional fields default to
//! `None` so older service builds that omit them still deserialize.

use serde::Deserialize;

/// Response body of `GET /accident_images/`.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageListing {
    /// One record per stored accident frame, oldest first.
    pub images: Vec<ImageRecord>,
}

/// A single stored accident frame.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageRecord {
    /// Formatted as `YYYY-MM-DD HH:MM:SS` by the service.
    pub timestamp: String,
    /// Server-local path (`images/accident_frame_123.jpg`); only the
    /// basename is meaningful to the client.
    pub image_path: String,
    /// Detected vehicle type, when the detector produced one.
    #[serde(default)]
    pub vehicle_type: Option<String>,
}

/// Response body of `GET /accident_videos/`.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoListing {
    /// One record per stored accident clip, oldest first.
    pub videos: Vec<VideoRecord>,
}

/// A single stored accident clip.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoRecord {
    /// Formatted as `YYYY-MM-DD HH:MM:SS` by the service.
    pub timestamp: String,
    /// Server-local path of the clip file.
    pub video_path: String,
    /// Server-local path of the thumbnail frame, when one was stored.
    #[serde(default)]
    pub image_path: Option<String>,
    /// Free-text camera location, when known.
    #[serde(default)]
    pub location: Option<String>,
    /// Detected vehicle type, when the detector produced one.
    #[serde(default)]
    pub vehicle_type: Option<String>,
}

/// Response body of `GET /vehicle_types/`.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleStatListing {
    /// Accident counts grouped by vehicle type, most frequent first.
    pub vehicle_stats: Vec<VehicleStat>,
}

/// Accident count for one vehicle type.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleStat {
    /// Lowercase type keyword (`car`, `truck`, `bus`, `bike`, `auto`,
    /// `other`).
    pub vehicle_type: String,
    /// Number of recorded accidents involving this type.
    pub count: u64,
}

/// Response body of `POST /upload/`.
///
/// The service reports processing failures as a `200` carrying only an
/// `error` field, so every other field defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisResponse {
    /// Whether the detector judged the uploaded video to contain an
    /// accident.
    #[serde(default)]
    pub accident_detected: bool,
    /// JPEG-encoded still of the detected frame, base64, no data-URL
    /// prefix.
    #[serde(default)]
    pub frame_base64: Option<String>,
    /// Rooted media path for the detected frame
    /// (`/accident_frame/x.jpg`).
    #[serde(default)]
    pub frame_path: Option<String>,
    /// Rooted media path for the extracted clip
    /// (`/accident_video/x.mp4`).
    #[serde(default)]
    pub video_path: Option<String>,
    /// Detected (or caller-supplied) vehicle type.
    #[serde(default)]
    pub vehicle_type: Option<String>,
    /// Set when the service failed to process the upload.
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn image_listing_parses_without_vehicle_type() {
        let body = r#"{"images":[{"timestamp":"2026-08-25 10:30:00","image_path":"images/accident_frame_7.jpg"}]}"#;
        let listing: ImageListing = serde_json::from_str(body).unwrap();
        assert_eq!(listing.images.len(), 1);
        assert_eq!(listing.images[0].vehicle_type, None);
    }

    #[test]
    fn video_record_parses_full_shape() {
        let body = r#"{"timestamp":"2026-08-25 10:30:00","video_path":"videos/accident_clip_7.mp4","image_path":"images/accident_frame_7.jpg","vehicle_type":"truck"}"#;
        let record: VideoRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.vehicle_type.as_deref(), Some("truck"));
        assert_eq!(record.location, None);
    }

    #[test]
    fn analysis_response_parses_clean_result() {
        let resp: AnalysisResponse = serde_json::from_str(r#"{"accident_detected":false}"#).unwrap();
        assert!(!resp.accident_detected);
        assert_eq!(resp.frame_base64, None);
        assert_eq!(resp.error, None);
    }

    #[test]
    fn analysis_response_parses_error_only_body() {
        // The service reports processing failures as 200 + {"error": ...}.
        let resp: AnalysisResponse = serde_json::from_str(r#"{"error":"could not decode video"}"#).unwrap();
        assert!(!resp.accident_detected);
        assert_eq!(resp.error.as_deref(), Some("could not decode video"));
    }

    #[test]
    fn vehicle_stats_parse() {
        let body = r#"{"vehicle_stats":[{"vehicle_type":"car","count":12},{"vehicle_type":"bike","count":4}]}"#;
        let listing: VehicleStatListing = serde_json::from_str(body).unwrap();
        assert_eq!(listing.vehicle_stats[0].count, 12);
    }
}
