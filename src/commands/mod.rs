//! Subcommand implementations.
//!
//! Each `run_*` entry point returns a process exit code; the matching
//! `*_impl` function returns a `Result` for tests and error reporting.

mod checks;
mod config;
mod plan;
mod run;

pub use checks::{render_checks, run_checks};
pub use config::{run_config, run_config_validate_impl};
pub use plan::{render_plan, run_plan, run_plan_impl};
pub use run::{run_hook, run_hook_impl};

use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use crate::EXIT_TOOL_ERROR;
use crate::cli::CommitArgs;
use crate::error::{CommitGuardError, Result, error_chain, report_unhandled};

/// Collect the committed files from the command line and `--files-from`.
///
/// Blank lines are ignored. `-` reads from stdin.
///
/// # Errors
/// Returns `FileRead` if the list cannot be read.
pub fn read_commit_files(args: &CommitArgs) -> Result<Vec<PathBuf>> {
    let mut files = args.files.clone();
    if let Some(source) = &args.files_from {
        let listed = if source == Path::new("-") {
            read_file_list(std::io::stdin().lock(), source)?
        } else {
            let file = std::fs::File::open(source).map_err(|e| CommitGuardError::FileRead {
                path: source.clone(),
                source: e,
            })?;
            read_file_list(file, source)?
        };
        files.extend(listed);
    }
    Ok(files)
}

fn read_file_list(reader: impl Read, origin: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line.map_err(|e| CommitGuardError::FileRead {
            path: origin.to_path_buf(),
            source: e,
        })?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            files.push(PathBuf::from(trimmed));
        }
    }
    Ok(files)
}

/// Report a fatal error, returning the tool-failure exit code.
///
/// Falls back to plain stderr when error events are filtered out.
pub(crate) fn fail(err: &CommitGuardError) -> i32 {
    report_unhandled(err);
    if !tracing::enabled!(tracing::Level::ERROR) {
        eprintln!("Error: {}", error_chain(err));
    }
    EXIT_TOOL_ERROR
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
