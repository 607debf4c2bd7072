//! roadwatch-api: typed client for the accident-detection HTTP service.
//!
//! Wire DTOs, display-ready view models, the upload session state
//! machine, and a thin reqwest-based client. Everything except the
//! client itself is pure data shaping and runs on any target; the
//! client compiles to a fetch-backed implementation on
//! `wasm32-unknown-unknown`.

pub mod client;
pub mod config;
pub mod dto;
pub mod session;
pub mod view;

pub use client::{ApiClient, ApiError};
pub use config::ApiConfig;
pub use session::{Detection, SelectedFile, UploadSession, UploadStatus};
pub use view::{ClipView, FrameView, VehicleSlice};
