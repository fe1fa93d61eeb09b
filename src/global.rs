//! Process-wide logger facade
//!
//! Preserves the configure-once, log-anywhere contract: `init` installs a
//! logger for the whole process and the free functions below delegate to
//! it. Calling `init` again silently replaces the logger, which starts a
//! new session file.

use std::fmt::Display;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::config::LoggerConfig;
use crate::error::LogError;
use crate::logger::Logger;
use crate::severity::Severity;

static GLOBAL: RwLock<Option<Logger>> = RwLock::new(None);

/// Install the process-wide logger from a configuration
///
/// A prior logger is silently replaced; the replacement derives a fresh
/// session file name, so later calls write to the newer file only.
pub fn init(config: LoggerConfig) {
    init_with(Logger::new(config));
}

/// Install a prebuilt logger as the process-wide logger
///
/// For applications that construct the logger themselves, for example with
/// a custom console sink.
pub fn init_with(logger: Logger) {
    let mut slot = GLOBAL.write().unwrap_or_else(|e| e.into_inner());
    *slot = Some(logger);
}

fn with_logger<T>(f: impl FnOnce(&Logger) -> Result<T, LogError>) -> Result<T, LogError> {
    let slot = GLOBAL.read().unwrap_or_else(|e| e.into_inner());
    match slot.as_ref() {
        Some(logger) => f(logger),
        None => Err(LogError::Uninitialized),
    }
}

/// Log with an explicit severity
pub fn log_at(value: impl Display, severity: Severity) -> Result<String, LogError> {
    with_logger(|logger| logger.log_at(value, severity))
}

/// Log with the configured default severity
pub fn log(value: impl Display) -> Result<String, LogError> {
    with_logger(|logger| logger.log(value))
}

/// Log at FATAL
pub fn fatal(value: impl Display) -> Result<String, LogError> {
    log_at(value, Severity::Fatal)
}

/// Log at ERROR
pub fn error(value: impl Display) -> Result<String, LogError> {
    log_at(value, Severity::Error)
}

/// Log at WARN
pub fn warn(value: impl Display) -> Result<String, LogError> {
    log_at(value, Severity::Warn)
}

/// Log at INFO
pub fn info(value: impl Display) -> Result<String, LogError> {
    log_at(value, Severity::Info)
}

/// Log at DEBUG
pub fn debug(value: impl Display) -> Result<String, LogError> {
    log_at(value, Severity::Debug)
}

/// Log at TRACE
pub fn trace(value: impl Display) -> Result<String, LogError> {
    log_at(value, Severity::Trace)
}

/// Session file path of the installed logger, if any
pub fn session_file_path() -> Option<PathBuf> {
    let slot = GLOBAL.read().unwrap_or_else(|e| e.into_inner());
    slot.as_ref().map(|logger| logger.session_file_path())
}
