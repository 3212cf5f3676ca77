use crate::error::Result;

use super::{Diagnostic, DiagnosticFormatter};

/// One compact JSON object per diagnostic, suitable for JSON-lines consumers.
///
/// Every object carries `tool`, `severity`, `file`, `line` and `message`;
/// absent locations are `null`.
pub struct StructuredFormatter;

impl DiagnosticFormatter for StructuredFormatter {
    fn format(&self, diagnostic: &Diagnostic) -> Result<String> {
        Ok(serde_json::to_string(diagnostic)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
