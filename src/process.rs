use std::path::Path;

use crate::checker::ExitStatus;
use crate::error::{CommitGuardError, Result};

/// Captured result of an external command that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Stdout followed by stderr, line by line.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.stdout.lines().chain(self.stderr.lines())
    }
}

/// Runs an external command synchronously and captures its output.
///
/// A non-zero exit is a normal result, not an error; only failing to start
/// or to read the process is an error.
pub trait CommandRunner: Send + Sync {
    /// # Errors
    /// Returns `CommandSpawn` if the program cannot be started or its output
    /// cannot be collected.
    fn run(&self, program: &str, args: &[String], dir: &Path) -> Result<CommandOutput>;
}

/// `CommandRunner` backed by `duct`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DuctRunner;

impl CommandRunner for DuctRunner {
    fn run(&self, program: &str, args: &[String], dir: &Path) -> Result<CommandOutput> {
        tracing::debug!(program, ?args, dir = %dir.display(), "Executing command");

        let output = duct::cmd(program, args)
            .dir(dir)
            .stdout_capture()
            .stderr_capture()
            .unchecked()
            .run()
            .map_err(|source| CommitGuardError::CommandSpawn {
                program: program.to_string(),
                source,
            })?;

        let status = output
            .status
            .code()
            .map_or(ExitStatus::FAILURE, ExitStatus::new);
        tracing::debug!(program, status = status.code(), "Command finished");

        Ok(CommandOutput {
            status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Split a configured command line into program and arguments.
///
/// # Errors
/// Returns `CommandSplit` for unbalanced quotes or an empty command.
pub fn split_command(command: &str) -> Result<(String, Vec<String>)> {
    let mut parts = shell_words::split(command).map_err(|e| CommitGuardError::CommandSplit {
        command: command.to_string(),
        reason: e.to_string(),
    })?;
    if parts.is_empty() {
        return Err(CommitGuardError::CommandSplit {
            command: command.to_string(),
            reason: "command is empty".to_string(),
        });
    }
    let program = parts.remove(0);
    Ok((program, parts))
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
