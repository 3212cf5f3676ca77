use std::fmt;
use std::path::Path;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Parse a tool-reported severity word; unknown words map to `None`.
    #[must_use]
    pub fn from_tool_word(word: &str) -> Option<Self> {
        match word.to_lowercase().as_str() {
            "error" | "fatal" | "fatal error" => Some(Self::Error),
            "warning" | "warn" => Some(Self::Warning),
            "note" | "info" => Some(Self::Info),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One message produced while validating a commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub tool: String,
    pub severity: Severity,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub message: String,
}

impl Diagnostic {
    #[must_use]
    pub fn new(tool: &str, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            tool: tool.to_string(),
            severity,
            file: None,
            line: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(tool: &str, message: impl Into<String>) -> Self {
        Self::new(tool, Severity::Error, message)
    }

    #[must_use]
    pub fn with_file(mut self, file: &Path) -> Self {
        self.file = Some(file.to_string_lossy().replace('\\', "/"));
        self
    }

    #[must_use]
    pub const fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }
}
