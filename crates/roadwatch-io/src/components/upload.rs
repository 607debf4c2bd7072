//! Video file picker with drag-and-drop and a file picker button.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;

/// Allowed file extensions for video uploads.
const ALLOWED_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv", "webm"];

/// Check whether a filename has an allowed video extension.
fn has_allowed_extension(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(_, ext)| {
        ALLOWED_EXTENSIONS
            .iter()
            .any(|a| a.eq_ignore_ascii_case(ext))
    })
}

/// Props for the [`VideoPicker`] component.
#[derive(Props, Clone, PartialEq)]
pub struct VideoPickerProps {
    /// Called with the raw file bytes and filename after a file is
    /// chosen. The caller resets its downstream state in response.
    on_select: EventHandler<(Vec<u8>, String)>,
}

/// A drag-and-drop zone with a file picker button.
///
/// Accepts common video containers. When a file is selected (via the
/// picker or drag-and-drop), reads the bytes and fires `on_select`
/// with `(bytes, filename)`. Content validation beyond the extension
/// is the detection service's job.
#[component]
pub fn VideoPicker(props: VideoPickerProps) -> Element {
    let mut dragging = use_signal(|| false);
    let mut filename = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);

    // Validate, read, and forward the first file from a list. Shared
    // by the file-picker and drag-and-drop paths.
    let process_files = move |files: Vec<FileData>| async move {
        if let Some(file) = files.first() {
            let name = file.name();
            if !has_allowed_extension(&name) {
                error.set(Some(format!("Unsupported file type: {name}")));
                return;
            }
            match file.read_bytes().await {
                Ok(bytes) => {
                    filename.set(Some(name.clone()));
                    error.set(None);
                    props.on_select.call((bytes.to_vec(), name));
                }
                Err(e) => {
                    error.set(Some(format!("Failed to read file: {e}")));
                }
            }
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        process_files(evt.files()).await;
    };

    let zone_class = if dragging() {
        "upload-zone upload-zone-active"
    } else {
        "upload-zone"
    };

    rsx! {
        div {
            class: "{zone_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            if let Some(ref name) = filename() {
                p { class: "upload-filename", "Selected: {name}" }
            }

            if let Some(ref err) = error() {
                p { class: "upload-error", "{err}" }
            }

            p { class: "upload-hint", "Drop a video here or " }

            label { class: "btn btn-primary",
                input {
                    r#type: "file",
                    accept: "video/*",
                    class: "hidden",
                    onchange: handle_files,
                }
                "Choose File"
            }

            p { class: "upload-formats", "MP4, MOV, AVI, MKV, WebM" }
        }
    }
}
