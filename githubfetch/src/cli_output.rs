// ABOUTME: User-facing diagnostics written to standard error
// ABOUTME: Formats fatal errors, their causes and recovery hints consistently

use owo_colors::OwoColorize;
use std::io::{self, IsTerminal, Write};

/// Diagnostics printer; profile output never goes through here
pub struct CliOutput {
    use_color: bool,
}

impl CliOutput {
    /// Create new CLI output utility with TTY detection
    pub fn new() -> Self {
        Self {
            use_color: std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Create CLI output utility with explicit color setting
    pub fn with_color(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Display an error message
    pub fn error(&self, message: &str) {
        let _ = self.write_error(&mut io::stderr(), message);
    }

    /// Display the underlying cause of an error
    pub fn cause(&self, message: &str) {
        let _ = self.write_labeled(&mut io::stderr(), "caused by:", message);
    }

    /// Display a recovery hint
    pub fn hint(&self, message: &str) {
        let _ = self.write_labeled(&mut io::stderr(), "hint:", message);
    }

    fn write_error<W: Write>(&self, out: &mut W, message: &str) -> io::Result<()> {
        if self.use_color {
            writeln!(out, "{} {}", "error:".red().bold(), message)
        } else {
            writeln!(out, "error: {}", message)
        }
    }

    fn write_labeled<W: Write>(&self, out: &mut W, label: &str, message: &str) -> io::Result<()> {
        if self.use_color {
            writeln!(out, "  {} {}", label.dimmed(), message)
        } else {
            writeln!(out, "  {} {}", label, message)
        }
    }
}

impl Default for CliOutput {
    fn default() -> Self {
        Self::new()
    }
}
