//! Chromalog - leveled console logging with per-run session files
//!
//! Each message is formatted as `[SEVERITY] timestamp value`, printed to the
//! console in a per-severity color, optionally mirrored into a log file
//! created once per initialization, and returned to the caller as a string.
//!
//! Use a [`Logger`] instance directly, or install one process-wide with
//! [`global::init`] and log from anywhere.

pub mod config;
pub mod console;
pub mod error;
pub mod file_sink;
pub mod global;
pub mod logger;
pub mod retention;
pub mod severity;

pub use config::LoggerConfig;
pub use console::ConsoleSink;
pub use error::LogError;
pub use logger::Logger;
pub use retention::cleanup_old_logs;
pub use severity::Severity;
