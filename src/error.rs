//! Error types for logging and configuration

use thiserror::Error;

/// Unified error type surfaced by logging and configuration calls.
#[derive(Debug, Error)]
pub enum LogError {
    /// Logging was attempted before a logger was installed.
    #[error("Logger is not initialized: call global::init before logging")]
    Uninitialized,

    /// Creating the log directory or file, or appending to it, failed.
    #[error("Log sink I/O error: {0}")]
    Sink(#[from] std::io::Error),

    /// Configuration file parsing error.
    #[error("Configuration parsing error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration file encoding error.
    #[error("Configuration encoding error: {0}")]
    ConfigEncode(#[from] toml::ser::Error),
}
