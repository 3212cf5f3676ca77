use std::fmt::Write;

use crate::error::Result;

use super::{Diagnostic, DiagnosticFormatter, Severity};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

/// Human-readable `severity: [tool] file:line: message` lines.
pub struct PlainFormatter {
    use_colors: bool,
}

impl PlainFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, severity: Severity) -> String {
        if !self.use_colors {
            return severity.to_string();
        }

        let color = match severity {
            Severity::Error => ansi::RED,
            Severity::Warning => ansi::YELLOW,
            Severity::Info => ansi::CYAN,
        };

        format!("{color}{severity}{}", ansi::RESET)
    }
}

impl Default for PlainFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl DiagnosticFormatter for PlainFormatter {
    fn format(&self, diagnostic: &Diagnostic) -> Result<String> {
        let mut line = format!("{}: [{}] ", self.colorize(diagnostic.severity), diagnostic.tool);

        match (&diagnostic.file, diagnostic.line) {
            (Some(file), Some(number)) => {
                let _ = write!(line, "{file}:{number}: ");
            }
            (Some(file), None) => {
                let _ = write!(line, "{file}: ");
            }
            (None, _) => {}
        }

        line.push_str(&diagnostic.message);
        Ok(line)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
