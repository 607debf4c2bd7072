//! Upload status banner for the tester page.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdCircleAlert, LdCircleCheck, LdLoaderCircle};
use roadwatch_api::UploadStatus;

/// Props for the [`StatusBanner`] component.
#[derive(Props, Clone, PartialEq)]
pub struct StatusBannerProps {
    /// Current session status.
    status: UploadStatus,
}

/// One-line banner reflecting the upload session's status.
///
/// Renders nothing while the session is idle.
#[component]
pub fn StatusBanner(props: StatusBannerProps) -> Element {
    let (class, message) = match &props.status {
        UploadStatus::Idle => return rsx! {},
        UploadStatus::NoFile => ("banner banner-warn", "Please select a video file.".to_owned()),
        UploadStatus::Analyzing => ("banner banner-info", "Analyzing video...".to_owned()),
        UploadStatus::Detected => ("banner banner-ok", "Accident detected".to_owned()),
        UploadStatus::Clean => (
            "banner banner-ok",
            "Analysis complete, no accident detected".to_owned(),
        ),
        UploadStatus::Failed(message) => {
            ("banner banner-error", format!("Error processing video: {message}"))
        }
    };

    rsx! {
        div { class: "{class}",
            {status_icon(&props.status)}
            span { "{message}" }
        }
    }
}

/// Icon matching the banner's tone.
fn status_icon(status: &UploadStatus) -> Element {
    match status {
        UploadStatus::Analyzing => rsx! {
            Icon { icon: LdLoaderCircle, width: 18, height: 18, class: "spin" }
        },
        UploadStatus::Detected | UploadStatus::Clean => rsx! {
            Icon { icon: LdCircleCheck, width: 18, height: 18 }
        },
        _ => rsx! {
            Icon { icon: LdCircleAlert, width: 18, height: 18 }
        },
    }
}
