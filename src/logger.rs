//! Logger instances
//!
//! A `Logger` owns its configuration and the session file name derived at
//! construction time, formats each line, and drives the console and file
//! sinks.

use std::fmt::Display;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::Local;

use crate::config::LoggerConfig;
use crate::console::ConsoleSink;
use crate::error::LogError;
use crate::file_sink;
use crate::severity::Severity;

/// A configured logger
///
/// Construction is the initialization step: the configuration is stored and
/// the session file name is fixed for the instance's lifetime. Nothing is
/// touched on disk until the first file-sink write.
#[derive(Debug)]
pub struct Logger {
    config: LoggerConfig,
    session_file: String,
    console: Mutex<ConsoleSink>,
}

impl Logger {
    /// Create a logger writing console output to stdout
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_console(config, ConsoleSink::stdout())
    }

    /// Create a logger with an explicit console sink
    pub fn with_console(config: LoggerConfig, console: ConsoleSink) -> Self {
        Self {
            config,
            session_file: file_sink::session_file_name(Local::now()),
            console: Mutex::new(console),
        }
    }

    /// The configuration this logger was built with
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Path of the session log file for this run
    pub fn session_file_path(&self) -> PathBuf {
        self.config.file_directory.join(&self.session_file)
    }

    /// Format and emit one line at the given severity
    ///
    /// Returns the formatted line without its trailing newline. File sink
    /// failures propagate; console output is best-effort and unchecked.
    pub fn log_at(&self, value: impl Display, severity: Severity) -> Result<String, LogError> {
        let timestamp = if self.config.include_timestamp {
            Local::now().format("%H:%M:%S%.3f").to_string()
        } else {
            String::new()
        };

        // The separator is emitted whether or not the timestamp is, so a
        // disabled timestamp leaves a double space. Consumers parse this
        // shape; keep it byte-stable.
        let line = format!("[{}] {} {}", severity.as_str(), timestamp, value);

        // One emit at a time, so interleaved calls cannot cross-restore
        // each other's console color
        if let Ok(mut console) = self.console.lock() {
            console.emit(&line, severity);
        }

        if self.config.write_to_file {
            file_sink::append_line(&self.session_file_path(), &line)?;
        }

        Ok(line)
    }

    /// Log with the configured default severity
    pub fn log(&self, value: impl Display) -> Result<String, LogError> {
        self.log_at(value, self.config.default_severity)
    }

    /// Log at FATAL
    pub fn fatal(&self, value: impl Display) -> Result<String, LogError> {
        self.log_at(value, Severity::Fatal)
    }

    /// Log at ERROR
    pub fn error(&self, value: impl Display) -> Result<String, LogError> {
        self.log_at(value, Severity::Error)
    }

    /// Log at WARN
    pub fn warn(&self, value: impl Display) -> Result<String, LogError> {
        self.log_at(value, Severity::Warn)
    }

    /// Log at INFO
    pub fn info(&self, value: impl Display) -> Result<String, LogError> {
        self.log_at(value, Severity::Info)
    }

    /// Log at DEBUG
    pub fn debug(&self, value: impl Display) -> Result<String, LogError> {
        self.log_at(value, Severity::Debug)
    }

    /// Log at TRACE
    pub fn trace(&self, value: impl Display) -> Result<String, LogError> {
        self.log_at(value, Severity::Trace)
    }
}
