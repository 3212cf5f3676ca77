//! Checks shipped with the hook.
//!
//! Every built-in check is switched on per path with `<prefix>.enabled` and
//! gated per stage with `<prefix>.pre_commit` (default on) and
//! `<prefix>.post_commit` (default off).

mod always_fail;
mod command;
mod file_size;
mod naming;
mod required;

pub use always_fail::AlwaysFailCheck;
pub use command::{CommandCheck, parse_tool_line};
pub use file_size::FileSizeCheck;
pub use naming::PackageNamingCheck;
pub use required::RequiredFilesCheck;

use std::any::Any;
use std::sync::Arc;

use globset::{Glob, GlobMatcher, GlobSet, GlobSetBuilder};

use crate::config::{PathConfig, PropertyScope, Stage};
use crate::error::{CommitGuardError, Result};
use crate::output::{Diagnostic, Reporter};
use crate::process::CommandRunner;

use super::{CheckId, CheckRegistry, CheckState};

/// Register one instance of every built-in check.
///
/// # Errors
/// Returns `DuplicateCheck` if one of them is already registered.
pub fn register_builtin(registry: &mut CheckRegistry, runner: &Arc<dyn CommandRunner>) -> Result<()> {
    registry.register(Box::new(CommandCheck::compile(Arc::clone(runner))))?;
    registry.register(Box::new(CommandCheck::style(Arc::clone(runner))))?;
    registry.register(Box::new(FileSizeCheck))?;
    registry.register(Box::new(PackageNamingCheck))?;
    registry.register(Box::new(RequiredFilesCheck))?;
    registry.register(Box::new(AlwaysFailCheck))?;
    Ok(())
}

/// Whether the check behind `prefix` is switched on for `stage` at `path`.
pub(crate) fn stage_enabled(path: &PathConfig, prefix: &str, stage: Stage) -> bool {
    if !path.get_bool(&format!("{prefix}.enabled"), false) {
        return false;
    }
    match stage {
        Stage::PreCommit => path.get_bool(&format!("{prefix}.pre_commit"), true),
        Stage::PostCommit => path.get_bool(&format!("{prefix}.post_commit"), false),
    }
}

/// Configuration-derived input cached by a predicate for `execute`.
///
/// A configuration mistake found while preparing still makes the check
/// applicable, so the mistake surfaces as a failure diagnostic.
pub(crate) enum Prepared<T> {
    Ready(T),
    Invalid(String),
}

impl<T: Any + Send> Prepared<T> {
    pub(crate) fn from_result(result: Result<T>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Invalid(err.to_string()),
        }
    }

    /// Store into `state` and report the check as applicable.
    pub(crate) fn store(self, state: &mut CheckState) -> bool {
        state.store(self);
        true
    }
}

/// The prepared value for `execute`, or `None` after reporting why not.
pub(crate) fn ready<'s, T: Any>(
    id: CheckId,
    state: &'s CheckState,
    reporter: &mut Reporter,
) -> Option<&'s T> {
    match state.get::<Prepared<T>>() {
        Some(Prepared::Ready(value)) => Some(value),
        Some(Prepared::Invalid(message)) => {
            reporter.emit(&Diagnostic::error(id, message.clone()));
            None
        }
        None => {
            reporter.emit(&Diagnostic::error(id, "check was not prepared for this path"));
            None
        }
    }
}

fn compile_glob(pattern: &str) -> Result<Glob> {
    Glob::new(pattern).map_err(|e| CommitGuardError::InvalidPattern {
        pattern: pattern.to_string(),
        source: e,
    })
}

/// Compile `patterns` into one set.
///
/// # Errors
/// Returns `InvalidPattern` for the first malformed pattern.
pub(crate) fn compile_glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(compile_glob(pattern)?);
    }
    builder.build().map_err(|e| CommitGuardError::InvalidPattern {
        pattern: "combined patterns".to_string(),
        source: e,
    })
}

/// Compile each pattern separately, keeping the pattern text.
///
/// # Errors
/// Returns `InvalidPattern` for the first malformed pattern.
pub(crate) fn compile_matchers(patterns: &[String]) -> Result<Vec<(String, GlobMatcher)>> {
    patterns
        .iter()
        .map(|pattern| Ok((pattern.clone(), compile_glob(pattern)?.compile_matcher())))
        .collect()
}


#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
