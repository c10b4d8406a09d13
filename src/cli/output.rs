//! Output formatting for CLI commands
//!
//! Provides utilities for formatting command output in human-readable
//! form. Supports colored output (respects NO_COLOR env var).

use std::io::{self, Write};

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for file paths
    pub fn file_path(s: &str) -> ColoredString {
        s.blue()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for success messages
    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    /// Style for error messages
    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }
}

/// Format duration into human-readable string
pub fn format_duration(secs: f64) -> String {
    if secs >= 60.0 {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs - (mins * 60.0);
        format!("{mins:.0}m {remaining_secs:.1}s")
    } else if secs >= 1.0 {
        format!("{secs:.2}s")
    } else {
        let ms = secs * 1000.0;
        format!("{ms:.0}ms")
    }
}

/// Format duration with color
pub fn format_duration_colored(secs: f64) -> String {
    format!("{}", colors::number(&format_duration(secs)))
}

/// Format a matching document as a result line
pub fn format_hit(name: &str) -> String {
    format!("- {name}")
}

/// Write a matching document as a success-styled `- <name>` line
pub fn write_hit(out: &mut impl Write, name: &str) -> io::Result<()> {
    writeln!(out, "{}", colors::success(&format_hit(name)))
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}
