//! Logger configuration
//!
//! A `LoggerConfig` is set once per logger and never updated in place;
//! replacing the logger is the only way to change it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LogError;
use crate::severity::Severity;

/// Configuration for a logger instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Mirror every line into the session log file
    #[serde(default)]
    pub write_to_file: bool,

    /// Prepend the wall-clock time to each line
    #[serde(default)]
    pub include_timestamp: bool,

    /// Directory the session log file is created in (default: "log/")
    ///
    /// The path is not validated here; an invalid directory surfaces as a
    /// sink error on the first file write.
    #[serde(default = "default_file_directory")]
    pub file_directory: PathBuf,

    /// Severity used when a call does not name one (default: DEBUG)
    #[serde(default = "default_severity")]
    pub default_severity: Severity,
}

fn default_file_directory() -> PathBuf {
    PathBuf::from("log/")
}

fn default_severity() -> Severity {
    Severity::Debug
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            write_to_file: false,
            include_timestamp: false,
            file_directory: default_file_directory(),
            default_severity: default_severity(),
        }
    }
}

impl LoggerConfig {
    /// Load configuration from a TOML file, or return defaults if not found
    pub fn load(path: &Path) -> Result<Self, LogError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<(), LogError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
