//! Console sink with per-severity colors
//!
//! Writes each line in the severity's color and puts the previous foreground
//! color back before returning, so a caller's terminal state survives
//! logging. Write errors are ignored; console output is best-effort.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, SetForegroundColor};

use crate::severity::Severity;

/// Colored line writer over any byte target
pub struct ConsoleSink {
    target: Box<dyn Write + Send>,
    /// Foreground color the terminal is assumed to be in between calls
    current: Color,
}

impl ConsoleSink {
    /// Sink writing to standard output
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// Sink writing to an arbitrary target
    pub fn new(target: Box<dyn Write + Send>) -> Self {
        Self {
            target,
            current: Color::Reset,
        }
    }

    /// Write one line in the severity's color, then restore the prior color
    ///
    /// The color in effect at entry is captured and re-applied after the
    /// line, not a fixed default.
    pub fn emit(&mut self, line: &str, severity: Severity) {
        let previous = self.current;
        let _ = queue!(
            self.target,
            SetForegroundColor(severity.color()),
            Print(line),
            Print("\n"),
            SetForegroundColor(previous),
        );
        let _ = self.target.flush();
    }

    /// Color the sink will restore after the next emit
    pub fn current_color(&self) -> Color {
        self.current
    }

    /// Tell the sink which color the terminal currently shows
    ///
    /// For applications that recolor their terminal outside the logger and
    /// want subsequent restores to land on that color.
    pub fn set_current_color(&mut self, color: Color) {
        self.current = color;
    }
}

impl std::fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleSink")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}
