//! Log file retention
//!
//! One session file per run adds up over time. This sweep deletes session
//! files older than the retention period; the active file is never rotated
//! or truncated.

use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

use crate::error::LogError;

/// Default retention period in days
pub const DEFAULT_RETENTION_DAYS: u64 = 7;

/// Delete session log files older than the default retention period
///
/// Returns the number of files deleted.
pub fn cleanup_old_logs(logs_dir: &Path) -> Result<usize, LogError> {
    cleanup_old_logs_with_retention(logs_dir, DEFAULT_RETENTION_DAYS)
}

/// Delete session log files older than the specified number of days
///
/// Returns the number of files deleted.
pub fn cleanup_old_logs_with_retention(
    logs_dir: &Path,
    retention_days: u64,
) -> Result<usize, LogError> {
    if !logs_dir.exists() {
        return Ok(0);
    }

    let retention_duration = Duration::from_secs(retention_days * 24 * 60 * 60);
    let cutoff = SystemTime::now()
        .checked_sub(retention_duration)
        .unwrap_or(SystemTime::UNIX_EPOCH);

    let mut deleted_count = 0;

    for entry in fs::read_dir(logs_dir)? {
        let entry = entry?;
        let path = entry.path();

        // Only session-stamped files are ours to delete
        match path.file_name().and_then(|n| n.to_str()) {
            Some(name) if is_session_file_name(name) => {}
            _ => continue,
        }

        // Check file modification time
        if let Ok(metadata) = entry.metadata() {
            if let Ok(modified) = metadata.modified() {
                if modified < cutoff && fs::remove_file(&path).is_ok() {
                    deleted_count += 1;
                }
            }
        }
    }

    Ok(deleted_count)
}

/// Check whether a file name has the session stamp shape
/// (`yyyy-MM-dd_HH-mm-ss-fff.log`)
fn is_session_file_name(name: &str) -> bool {
    const PATTERN: &str = "0000-00-00_00-00-00-000.log";
    if name.len() != PATTERN.len() {
        return false;
    }
    name.bytes().zip(PATTERN.bytes()).all(|(b, p)| match p {
        b'0' => b.is_ascii_digit(),
        _ => b == p,
    })
}
