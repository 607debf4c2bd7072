//! Dioxus UI components for roadwatch.
//!
//! Provides the video file picker, the modal clip player, the inline
//! SVG charts for the analytics page, and the upload status banner.

mod charts;
mod modal;
mod status;
mod upload;

pub use charts::BarChart;
pub use charts::DonutChart;
pub use modal::VideoModal;
pub use status::StatusBanner;
pub use upload::VideoPicker;
