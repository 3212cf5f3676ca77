mod diagnostic;
mod json;
mod reporter;
mod text;

pub use diagnostic::{Diagnostic, Severity};
pub use json::StructuredFormatter;
pub use reporter::{MemorySink, Reporter};
pub use text::{ColorMode, PlainFormatter};

use crate::error::Result;

/// Trait for rendering a single diagnostic as one output line.
pub trait DiagnosticFormatter {
    /// Render the diagnostic without a trailing newline.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, diagnostic: &Diagnostic) -> Result<String>;
}

/// Mutually exclusive diagnostic output modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable lines
    #[default]
    Plain,
    /// Machine-readable JSON lines
    Structured,
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
