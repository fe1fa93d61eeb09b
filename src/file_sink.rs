//! Append-only file sink
//!
//! One session file per logger run, named from the wall clock at
//! initialization time. Every append opens, writes, syncs, and closes the
//! file independently; nothing is buffered across calls.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Local};

use crate::error::LogError;

/// Derive the session file name from a wall-clock instant
///
/// Millisecond precision keeps names distinct across process starts; two
/// initializations inside the same millisecond collide, which is accepted.
pub fn session_file_name(now: DateTime<Local>) -> String {
    format!("{}.log", now.format("%Y-%m-%d_%H-%M-%S-%3f"))
}

/// Append one line to the session file, creating the directory and file as
/// needed
///
/// The line is written with a terminating newline and synced to disk before
/// returning.
pub fn append_line(path: &Path, line: &str) -> Result<(), LogError> {
    // Ensure the configured directory exists
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(line.as_bytes())?;
    file.write_all(b"\n")?;
    file.flush()?;
    file.sync_all()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use tempfile::TempDir;

    #[test]
    fn test_session_file_name_format() {
        let now = Local.with_ymd_and_hms(2026, 1, 21, 14, 30, 45).unwrap()
            + Duration::milliseconds(123);
        assert_eq!(session_file_name(now), "2026-01-21_14-30-45-123.log");
    }

    #[test]
    fn test_session_file_name_pads_milliseconds() {
        let now = Local.with_ymd_and_hms(2026, 1, 21, 14, 30, 45).unwrap()
            + Duration::milliseconds(7);
        assert_eq!(session_file_name(now), "2026-01-21_14-30-45-007.log");
    }

    #[test]
    fn test_append_creates_directory_and_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deep").join("run.log");

        append_line(&path, "[INFO]  first").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[INFO]  first\n");
    }

    #[test]
    fn test_append_extends_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("run.log");

        append_line(&path, "one").unwrap();
        append_line(&path, "two").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "one\ntwo\n");
    }

    #[test]
    fn test_append_to_unwritable_directory_fails() {
        // A file where the directory should be makes creation fail
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let path = blocker.join("run.log");
        let err = append_line(&path, "line").unwrap_err();
        assert!(matches!(err, LogError::Sink(_)));
    }
}
