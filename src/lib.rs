//! ShortsGen CLI Library
//!
//! A command-line client for a YouTube-to-shorts backend: typed wire
//! models, an explicit wizard state machine, and an injectable HTTP port
//! so the whole flow can be exercised without real network I/O.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod output;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use app::{AppContainer, WizardInteractor, WizardSession};
pub use config::Settings;
pub use domain::errors::{DomainError, DomainResult};
pub use domain::model::{
    DownloadedVideo, GenerateRequest, Segment, ShortClip, VideoFormat, VideoInfo,
};
pub use domain::rules::{WizardEvent, WizardStep};
pub use ports::BackendPort;
