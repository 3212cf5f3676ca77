//! Diagnostic logging for the hook process.
//!
//! Logs go to stderr so they never interleave with diagnostics on stdout.

use std::io::IsTerminal;
use std::path::Path;

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{CommitGuardError, Result};

/// Level used for a given `-v` count when `RUST_LOG` is not set.
#[must_use]
pub const fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive)
        .map_err(|e| CommitGuardError::Config(format!("invalid log filter '{directive}': {e}")))
}

/// Install the global subscriber.
///
/// `RUST_LOG` overrides the verbosity-derived level. With `log_file`, a
/// second plain-text layer records everything at `debug` and above.
///
/// # Errors
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init(verbosity: u8, log_file: Option<&Path>) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => filter(level_for(verbosity))?,
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .compact()
        .with_filter(env_filter);

    let file_layer = match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    CommitGuardError::Config(format!(
                        "cannot open log file {}: {e}",
                        path.display()
                    ))
                })?;
            Some(
                fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(filter("debug")?),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| CommitGuardError::Config(format!("failed to initialize logging: {e}")))
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
