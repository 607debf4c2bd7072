//! Dashboard pages, one module per route.
//!
//! Every list page follows the same contract: exactly one GET on
//! mount, JSON mapped into view models, then rendered; a failed GET
//! shows a static error panel. No retries, pagination, or caching.

mod analysis;
mod dashboard;
mod frames;
mod tester;
mod videos;

pub use analysis::DataAnalysis;
pub use dashboard::Dashboard;
pub use frames::AccidentFrames;
pub use tester::UploadTester;
pub use videos::AccidentVideos;

use dioxus::prelude::*;

/// Standard loading indicator for a page waiting on its fetch.
pub fn loading(what: &str) -> Element {
    rsx! {
        div { class: "page-loading",
            p { "Loading {what}..." }
        }
    }
}

/// Standard error panel for a failed page fetch.
pub fn fetch_error(message: &str) -> Element {
    rsx! {
        div { class: "error-panel",
            p { class: "error-title", "Error: {message}" }
            p { "Please check that the detection service is running." }
        }
    }
}
