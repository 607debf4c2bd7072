//! View models: the shapes the pages actually render.
//!
//! Raw wire records carry server-local file paths and machine-ish
//! keywords; the functions here project them into display strings and
//! resolvable media URLs. Projection only — nothing here mutates or
//! stores service data.

use crate::config::ApiConfig;
use crate::dto::{ImageRecord, VehicleStat, VideoRecord};

/// Extract the basename from a server-local media path.
///
/// The service stores paths like `images/accident_frame_7.jpg` (or
/// with backslashes when it ran on Windows); its media endpoints are
/// addressed by basename only.
#[must_use]
pub fn media_basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// URL serving the frame image for a stored `image_path`.
#[must_use]
pub fn frame_url(config: &ApiConfig, image_path: &str) -> String {
    config.join_rooted(&format!("/accident_frame/{}", media_basename(image_path)))
}

/// URL serving the clip video for a stored `video_path`.
#[must_use]
pub fn clip_url(config: &ApiConfig, video_path: &str) -> String {
    config.join_rooted(&format!("/accident_video/{}", media_basename(video_path)))
}

/// Wrap a base64 JPEG payload as a renderable data URL.
#[must_use]
pub fn jpeg_data_url(payload: &str) -> String {
    format!("data:image/jpeg;base64,{payload}")
}

/// Human label for a vehicle type keyword.
///
/// `bike` and `auto` get their local display names; anything else is
/// capitalized. Absent types render as `Unknown`.
#[must_use]
pub fn vehicle_label(vehicle_type: Option<&str>) -> String {
    match vehicle_type {
        None | Some("") => "Unknown".to_owned(),
        Some("bike") => "Two Wheeler".to_owned(),
        Some("auto") => "Auto Rickshaw".to_owned(),
        Some(other) => {
            let mut chars = other.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        }
    }
}

/// What the Accident Frames page renders for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameView {
    /// Full `YYYY-MM-DD HH:MM:SS` timestamp.
    pub timestamp: String,
    /// Display label for the vehicle type.
    pub vehicle_type: String,
    /// Resolvable image URL.
    pub image_src: String,
}

impl FrameView {
    /// Project a wire record into its display shape.
    #[must_use]
    pub fn from_record(config: &ApiConfig, record: &ImageRecord) -> Self {
        Self {
            timestamp: record.timestamp.clone(),
            vehicle_type: vehicle_label(record.vehicle_type.as_deref()),
            image_src: frame_url(config, &record.image_path),
        }
    }
}

/// What the Accident Videos page renders for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipView {
    /// Date half of the timestamp (`YYYY-MM-DD`).
    pub date: String,
    /// Time half of the timestamp (`HH:MM:SS`); empty if the service
    /// sent a date-only timestamp.
    pub time: String,
    /// Camera location, when recorded. Severity is deliberately not
    /// modeled here: the service does not report it.
    pub location: Option<String>,
    /// Thumbnail image URL, when a frame was stored with the clip.
    pub thumbnail_src: Option<String>,
    /// Resolvable video URL.
    pub clip_src: String,
    /// Display label for the vehicle type.
    pub vehicle_type: String,
}

impl ClipView {
    /// Project a wire record into its display shape.
    #[must_use]
    pub fn from_record(config: &ApiConfig, record: &VideoRecord) -> Self {
        let (date, time) = split_timestamp(&record.timestamp);
        Self {
            date: date.to_owned(),
            time: time.to_owned(),
            location: record.location.clone(),
            thumbnail_src: record
                .image_path
                .as_deref()
                .map(|path| frame_url(config, path)),
            clip_src: clip_url(config, &record.video_path),
            vehicle_type: vehicle_label(record.vehicle_type.as_deref()),
        }
    }
}

/// Split a `YYYY-MM-DD HH:MM:SS` timestamp into date and time halves.
#[must_use]
pub fn split_timestamp(timestamp: &str) -> (&str, &str) {
    timestamp
        .split_once(' ')
        .unwrap_or((timestamp, ""))
}

/// One chart slice on the Data Analysis page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleSlice {
    /// Display label for the vehicle type.
    pub label: String,
    /// Number of recorded accidents.
    pub count: u64,
}

/// Project vehicle statistics into chart slices.
#[must_use]
pub fn vehicle_slices(stats: &[VehicleStat]) -> Vec<VehicleSlice> {
    stats
        .iter()
        .map(|stat| VehicleSlice {
            label: vehicle_label(Some(&stat.vehicle_type)),
            count: stat.count,
        })
        .collect()
}

/// The slice with the highest count, for the key-insight card.
#[must_use]
pub fn most_common(slices: &[VehicleSlice]) -> Option<&VehicleSlice> {
    slices.iter().max_by_key(|slice| slice.count)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config() -> ApiConfig {
        ApiConfig::new("http://example.test:8000")
    }

    #[test]
    fn basename_strips_directories() {
        assert_eq!(media_basename("images/accident_frame_7.jpg"), "accident_frame_7.jpg");
        assert_eq!(media_basename("images\\accident_frame_7.jpg"), "accident_frame_7.jpg");
        assert_eq!(media_basename("plain.jpg"), "plain.jpg");
    }

    #[test]
    fn frame_url_addresses_media_endpoint_by_basename() {
        assert_eq!(
            frame_url(&config(), "images/accident_frame_7.jpg"),
            "http://example.test:8000/accident_frame/accident_frame_7.jpg"
        );
    }

    #[test]
    fn clip_url_addresses_media_endpoint_by_basename() {
        assert_eq!(
            clip_url(&config(), "videos/accident_clip_7.mp4"),
            "http://example.test:8000/accident_video/accident_clip_7.mp4"
        );
    }

    #[test]
    fn data_url_carries_payload_verbatim() {
        assert_eq!(jpeg_data_url("Zm9v"), "data:image/jpeg;base64,Zm9v");
    }

    #[test]
    fn vehicle_labels_localize_known_keywords() {
        assert_eq!(vehicle_label(Some("bike")), "Two Wheeler");
        assert_eq!(vehicle_label(Some("auto")), "Auto Rickshaw");
        assert_eq!(vehicle_label(Some("truck")), "Truck");
        assert_eq!(vehicle_label(Some("")), "Unknown");
        assert_eq!(vehicle_label(None), "Unknown");
    }

    #[test]
    fn timestamp_splits_into_date_and_time() {
        assert_eq!(split_timestamp("2026-08-25 10:30:00"), ("2026-08-25", "10:30:00"));
        assert_eq!(split_timestamp("2026-08-25"), ("2026-08-25", ""));
    }

    #[test]
    fn clip_view_keeps_location_absent_rather_than_fabricating() {
        let record = crate::dto::VideoRecord {
            timestamp: "2026-08-25 10:30:00".to_owned(),
            video_path: "videos/accident_clip_7.mp4".to_owned(),
            image_path: Some("images/accident_frame_7.jpg".to_owned()),
            location: None,
            vehicle_type: Some("car".to_owned()),
        };
        let view = ClipView::from_record(&config(), &record);
        assert_eq!(view.location, None);
        assert_eq!(view.date, "2026-08-25");
        assert_eq!(view.time, "10:30:00");
        assert_eq!(
            view.thumbnail_src.as_deref(),
            Some("http://example.test:8000/accident_frame/accident_frame_7.jpg")
        );
    }

    #[test]
    fn most_common_picks_max_by_count() {
        let slices = vec![
            VehicleSlice { label: "Car".to_owned(), count: 3 },
            VehicleSlice { label: "Truck".to_owned(), count: 9 },
            VehicleSlice { label: "Bus".to_owned(), count: 4 },
        ];
        assert_eq!(most_common(&slices).unwrap().label, "Truck");
        assert!(most_common(&[]).is_none());
    }
}
