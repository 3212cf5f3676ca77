use std::error::Error as StdError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommitGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Malformed property at {}:{line}: {content}", path.display())]
    PropertyParse {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error("Path configuration config{index} is missing required key config{index}.path")]
    MissingPathKey { index: u32 },

    #[error("Check registered twice: {0}")]
    DuplicateCheck(String),

    #[error("Cyclic check dependency for path '{path}': {}", checks.join(" -> "))]
    DependencyCycle { path: String, checks: Vec<String> },

    #[error("Failed to read file: {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid regular expression: {pattern}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Cannot parse command '{command}': {reason}")]
    CommandSplit { command: String, reason: String },

    #[error("Failed to start '{program}'")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl CommitGuardError {
    /// Stable short name of the variant, used as a structured logging field.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::PropertyParse { .. } => "PropertyParse",
            Self::MissingPathKey { .. } => "MissingPathKey",
            Self::DuplicateCheck(_) => "DuplicateCheck",
            Self::DependencyCycle { .. } => "DependencyCycle",
            Self::FileRead { .. } => "FileRead",
            Self::FileWrite { .. } => "FileWrite",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::InvalidRegex { .. } => "InvalidRegex",
            Self::CommandSplit { .. } => "CommandSplit",
            Self::CommandSpawn { .. } => "CommandSpawn",
            Self::Io(_) => "Io",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }
}

pub type Result<T> = std::result::Result<T, CommitGuardError>;

/// Render an error together with its whole `source()` chain.
#[must_use]
pub fn error_chain(err: &dyn StdError) -> String {
    let mut rendered = err.to_string();
    let mut current = err.source();
    while let Some(cause) = current {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        current = cause.source();
    }
    rendered
}

/// Log an expected failure that the caller recovered from.
///
/// Only the message and its immediate cause are recorded.
pub fn report_handled(err: &CommitGuardError) {
    match err.source() {
        Some(cause) => tracing::warn!(
            error_type = err.error_type(),
            cause = %cause,
            "{err}"
        ),
        None => tracing::warn!(error_type = err.error_type(), "{err}"),
    }
}

/// Log a failure that aborts the invocation, with full detail.
pub fn report_unhandled(err: &CommitGuardError) {
    tracing::error!(
        error_type = err.error_type(),
        debug = ?err,
        "{}",
        error_chain(err)
    );
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
