// Library surface for the binary, headless integration tests and reuse.
pub mod app;
pub mod app_dirs;
pub mod archive;
pub mod chart;
pub mod clock;
pub mod config;
pub mod court;
pub mod error;
pub mod export;
pub mod logging;
pub mod profile;
pub mod runtime;
pub mod session;
pub mod stats;
pub mod ui;

pub use error::{Result, TrackerError};
