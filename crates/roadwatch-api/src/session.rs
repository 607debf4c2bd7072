//! Upload-and-review session state machine.
//!
//! The tester page owns one [`UploadSession`] in a signal and drives it
//! through pure transitions: `select_file` resets, `begin_submit`
//! gates on a file being present, `apply_response`/`fail` settle the
//! attempt. Keeping the transitions free of browser types makes the
//! whole workflow natively testable.

use crate::config::ApiConfig;
use crate::dto::AnalysisResponse;
use crate::view::jpeg_data_url;

/// Where the current upload attempt stands.
///
/// `Idle → Analyzing → {Detected | Clean | Failed}`; selecting a new
/// file returns any state to `Idle`. `NoFile` is the pre-flight
/// warning for submitting without a selection — no request is made.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadStatus {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// Submit was pressed without a selected file.
    NoFile,
    /// The request is in flight.
    Analyzing,
    /// The service found an accident.
    Detected,
    /// The service analyzed the video and found nothing.
    Clean,
    /// Transport failure, non-2xx status, or service-reported error.
    Failed(String),
}

/// A user-chosen video file, held until submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Raw file bytes as read in the browser.
    pub bytes: Vec<u8>,
    /// Original filename, forwarded in the multipart part.
    pub name: String,
}

/// Renderable result of a positive detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// Frame source: a data URL when the service inlined the frame,
    /// otherwise a media URL; `None` if the service sent neither.
    pub frame_src: Option<String>,
    /// Clip source URL, when the service extracted a clip.
    pub clip_src: Option<String>,
    /// Display-ready vehicle type, when detected.
    pub vehicle_type: Option<String>,
}

/// State for one visit to the upload tester page.
#[derive(Debug, Clone, Default)]
pub struct UploadSession {
    file: Option<SelectedFile>,
    status: UploadStatus,
    detection: Option<Detection>,
}

impl UploadSession {
    /// Fresh session: no file, idle, no result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> &UploadStatus {
        &self.status
    }

    /// Current detection result, if the last attempt found one.
    #[must_use]
    pub const fn detection(&self) -> Option<&Detection> {
        self.detection.as_ref()
    }

    /// Name of the selected file, for the picker label.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.file.as_ref().map(|file| file.name.as_str())
    }

    /// Whether a file is selected.
    #[must_use]
    pub const fn has_file(&self) -> bool {
        self.file.is_some()
    }

    /// Whether a request is currently in flight.
    #[must_use]
    pub fn is_analyzing(&self) -> bool {
        self.status == UploadStatus::Analyzing
    }

    /// Store a newly chosen file and reset everything downstream,
    /// whatever state the session was in.
    pub fn select_file(&mut self, bytes: Vec<u8>, name: String) {
        self.file = Some(SelectedFile { bytes, name });
        self.status = UploadStatus::Idle;
        self.detection = None;
    }

    /// Gate a submit attempt.
    ///
    /// With a file selected: enters `Analyzing`, clears the previous
    /// result, and returns the payload to send. Without one: sets the
    /// `NoFile` warning and returns `None` — the caller must not issue
    /// a request.
    pub fn begin_submit(&mut self) -> Option<SelectedFile> {
        match &self.file {
            Some(file) => {
                self.status = UploadStatus::Analyzing;
                self.detection = None;
                Some(file.clone())
            }
            None => {
                self.status = UploadStatus::NoFile;
                None
            }
        }
    }

    /// Settle the attempt from the service's response.
    ///
    /// A service-reported `error` field counts as a failure even under
    /// a 2xx status. On detection, the frame source prefers the inline
    /// base64 payload over the media path; empty strings are treated
    /// as absent, matching the original service's loose contract.
    pub fn apply_response(&mut self, config: &ApiConfig, response: &AnalysisResponse) {
        if let Some(message) = non_empty(response.error.as_deref()) {
            self.status = UploadStatus::Failed(message.to_owned());
            self.detection = None;
            return;
        }

        if response.accident_detected {
            let frame_src = non_empty(response.frame_base64.as_deref())
                .map(jpeg_data_url)
                .or_else(|| {
                    non_empty(response.frame_path.as_deref())
                        .map(|path| config.join_rooted(path))
                });
            let clip_src = non_empty(response.video_path.as_deref())
                .map(|path| config.join_rooted(path));
            self.detection = Some(Detection {
                frame_src,
                clip_src,
                vehicle_type: response.vehicle_type.clone(),
            });
            self.status = UploadStatus::Detected;
        } else {
            self.detection = None;
            self.status = UploadStatus::Clean;
        }
    }

    /// Settle the attempt as failed with a user-facing message.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = UploadStatus::Failed(message.into());
        self.detection = None;
    }
}

/// Treat `None` and `Some("")` alike.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config() -> ApiConfig {
        ApiConfig::new("http://example.test:8000")
    }

    fn detected(frame_base64: Option<&str>, frame_path: Option<&str>, video_path: Option<&str>) -> AnalysisResponse {
        AnalysisResponse {
            accident_detected: true,
            frame_base64: frame_base64.map(str::to_owned),
            frame_path: frame_path.map(str::to_owned),
            video_path: video_path.map(str::to_owned),
            ..AnalysisResponse::default()
        }
    }

    #[test]
    fn selecting_a_file_clears_previous_result() {
        let mut session = UploadSession::new();
        session.select_file(vec![1, 2, 3], "a.mp4".to_owned());
        session.begin_submit().unwrap();
        session.apply_response(&config(), &detected(Some("Zm9v"), None, Some("/clips/a.mp4")));
        assert_eq!(session.status(), &UploadStatus::Detected);
        assert!(session.detection().is_some());

        session.select_file(vec![4, 5], "b.mp4".to_owned());
        assert_eq!(session.status(), &UploadStatus::Idle);
        assert!(session.detection().is_none());
        assert_eq!(session.file_name(), Some("b.mp4"));
    }

    #[test]
    fn submit_without_file_warns_and_returns_no_payload() {
        let mut session = UploadSession::new();
        assert!(session.begin_submit().is_none());
        assert_eq!(session.status(), &UploadStatus::NoFile);
    }

    #[test]
    fn submit_with_file_enters_analyzing_and_hands_back_payload() {
        let mut session = UploadSession::new();
        session.select_file(vec![9], "crash.mp4".to_owned());
        let payload = session.begin_submit().unwrap();
        assert_eq!(payload.name, "crash.mp4");
        assert_eq!(payload.bytes, vec![9]);
        assert!(session.is_analyzing());
    }

    #[test]
    fn inline_frame_becomes_data_url() {
        let mut session = UploadSession::new();
        session.select_file(vec![9], "crash.mp4".to_owned());
        session.begin_submit().unwrap();
        session.apply_response(&config(), &detected(Some("Zm9v"), None, None));
        let detection = session.detection().unwrap();
        assert_eq!(detection.frame_src.as_deref(), Some("data:image/jpeg;base64,Zm9v"));
    }

    #[test]
    fn frame_path_is_joined_to_base_url_when_no_inline_frame() {
        let mut session = UploadSession::new();
        session.select_file(vec![9], "crash.mp4".to_owned());
        session.begin_submit().unwrap();
        session.apply_response(
            &config(),
            &detected(None, Some("/accident_frame/f.jpg"), None),
        );
        let detection = session.detection().unwrap();
        assert_eq!(
            detection.frame_src.as_deref(),
            Some("http://example.test:8000/accident_frame/f.jpg")
        );
    }

    #[test]
    fn inline_frame_wins_over_frame_path() {
        let mut session = UploadSession::new();
        session.select_file(vec![9], "crash.mp4".to_owned());
        session.begin_submit().unwrap();
        session.apply_response(
            &config(),
            &detected(Some("Zm9v"), Some("/accident_frame/f.jpg"), None),
        );
        let detection = session.detection().unwrap();
        assert_eq!(detection.frame_src.as_deref(), Some("data:image/jpeg;base64,Zm9v"));
    }

    #[test]
    fn clean_result_renders_no_media() {
        let mut session = UploadSession::new();
        session.select_file(vec![9], "calm.mp4".to_owned());
        session.begin_submit().unwrap();
        session.apply_response(&config(), &AnalysisResponse::default());
        assert_eq!(session.status(), &UploadStatus::Clean);
        assert!(session.detection().is_none());
    }

    #[test]
    fn service_error_field_fails_the_attempt() {
        let mut session = UploadSession::new();
        session.select_file(vec![9], "bad.mp4".to_owned());
        session.begin_submit().unwrap();
        session.apply_response(
            &config(),
            &AnalysisResponse {
                error: Some("could not decode video".to_owned()),
                ..AnalysisResponse::default()
            },
        );
        assert_eq!(
            session.status(),
            &UploadStatus::Failed("could not decode video".to_owned())
        );
        assert!(session.detection().is_none());
    }

    #[test]
    fn end_to_end_detection_shapes_both_sources() {
        let mut session = UploadSession::new();
        session.select_file(vec![9], "crash.mp4".to_owned());
        session.begin_submit().unwrap();
        session.apply_response(&config(), &detected(Some("Zm9v"), None, Some("/clips/a.mp4")));
        assert_eq!(session.status(), &UploadStatus::Detected);
        let detection = session.detection().unwrap();
        assert_eq!(detection.frame_src.as_deref(), Some("data:image/jpeg;base64,Zm9v"));
        assert_eq!(
            detection.clip_src.as_deref(),
            Some("http://example.test:8000/clips/a.mp4")
        );
    }

    #[test]
    fn empty_strings_are_treated_as_absent() {
        let mut session = UploadSession::new();
        session.select_file(vec![9], "crash.mp4".to_owned());
        session.begin_submit().unwrap();
        session.apply_response(&config(), &detected(Some(""), Some(""), Some("")));
        let detection = session.detection().unwrap();
        assert_eq!(detection.frame_src, None);
        assert_eq!(detection.clip_src, None);
    }
}
