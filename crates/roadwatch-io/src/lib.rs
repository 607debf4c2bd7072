//! roadwatch-io: Browser I/O and Dioxus component library.
//!
//! Handles Blob URL playback fallback, document-scoped key listeners,
//! window-global configuration lookup, and provides the reusable UI
//! components for the roadwatch dashboard.

pub mod components;
pub mod keyboard;
pub mod media;
pub mod runtime;

pub use components::{BarChart, DonutChart, StatusBanner, VideoModal, VideoPicker};
pub use keyboard::EscapeListener;
