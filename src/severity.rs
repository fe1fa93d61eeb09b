//! Log severities
//!
//! Six ordered levels controlling the line prefix and console color. Levels
//! are labels only; no call is ever filtered out by threshold.

use crossterm::style::Color;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Log severity, ordered from most to least severe
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Fatal = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl Severity {
    /// Get the display name for this severity
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Fatal => "FATAL",
            Severity::Error => "ERROR",
            Severity::Warn => "WARN",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
            Severity::Trace => "TRACE",
        }
    }

    /// Console foreground color used for lines at this severity
    pub fn color(&self) -> Color {
        match self {
            Severity::Fatal => Color::Red,
            Severity::Error => Color::DarkRed,
            Severity::Warn => Color::Yellow,
            Severity::Info => Color::Reset,
            Severity::Debug | Severity::Trace => Color::DarkGrey,
        }
    }

    /// Parse a severity name, case-insensitively
    ///
    /// Unrecognized names fall back to `Info` rather than failing.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "FATAL" => Severity::Fatal,
            "ERROR" => Severity::Error,
            "WARN" => Severity::Warn,
            "INFO" => Severity::Info,
            "DEBUG" => Severity::Debug,
            "TRACE" => Severity::Trace,
            _ => Severity::Info,
        }
    }

    /// Convert a raw discriminant back into a severity
    ///
    /// Out-of-range values fall back to `Info` rather than failing.
    pub fn from_repr(value: u8) -> Self {
        match value {
            0 => Severity::Fatal,
            1 => Severity::Error,
            2 => Severity::Warn,
            3 => Severity::Info,
            4 => Severity::Debug,
            5 => Severity::Trace,
            _ => Severity::Info,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Severity::from_name(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_names() {
        assert_eq!(Severity::Fatal.as_str(), "FATAL");
        assert_eq!(Severity::Error.as_str(), "ERROR");
        assert_eq!(Severity::Warn.as_str(), "WARN");
        assert_eq!(Severity::Info.as_str(), "INFO");
        assert_eq!(Severity::Debug.as_str(), "DEBUG");
        assert_eq!(Severity::Trace.as_str(), "TRACE");
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Fatal < Severity::Error);
        assert!(Severity::Error < Severity::Warn);
        assert!(Severity::Warn < Severity::Info);
        assert!(Severity::Info < Severity::Debug);
        assert!(Severity::Debug < Severity::Trace);
    }

    #[test]
    fn test_severity_colors() {
        assert_eq!(Severity::Fatal.color(), Color::Red);
        assert_eq!(Severity::Error.color(), Color::DarkRed);
        assert_eq!(Severity::Warn.color(), Color::Yellow);
        assert_eq!(Severity::Info.color(), Color::Reset);
        assert_eq!(Severity::Debug.color(), Color::DarkGrey);
        assert_eq!(Severity::Trace.color(), Color::DarkGrey);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Severity::from_name("FATAL"), Severity::Fatal);
        assert_eq!(Severity::from_name("warn"), Severity::Warn);
        assert_eq!(Severity::from_name("Trace"), Severity::Trace);
    }

    #[test]
    fn test_from_name_falls_back_to_info() {
        assert_eq!(Severity::from_name("VERBOSE"), Severity::Info);
        assert_eq!(Severity::from_name(""), Severity::Info);
    }

    #[test]
    fn test_from_repr_falls_back_to_info() {
        assert_eq!(Severity::from_repr(0), Severity::Fatal);
        assert_eq!(Severity::from_repr(5), Severity::Trace);
        assert_eq!(Severity::from_repr(6), Severity::Info);
        assert_eq!(Severity::from_repr(255), Severity::Info);
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(format!("{}", Severity::Debug), "DEBUG");
    }
}
