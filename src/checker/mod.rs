pub mod builtin;
mod registry;
mod state;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use registry::CheckRegistry;
pub use state::CheckState;

use std::fmt;

use crate::config::{PathConfig, Stage};
use crate::output::Reporter;

/// Identity of a check variant. Stable across runs; used for dependencies.
pub type CheckId = &'static str;

/// Outcome of one check execution: 0 passes, anything else fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitStatus(i32);

impl ExitStatus {
    pub const SUCCESS: Self = Self(0);
    pub const FAILURE: Self = Self(1);

    #[must_use]
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    #[must_use]
    pub const fn code(self) -> i32 {
        self.0
    }

    #[must_use]
    pub const fn is_success(self) -> bool {
        self.0 == 0
    }

    /// `SUCCESS` when `passed`, otherwise `FAILURE`.
    #[must_use]
    pub const fn from_passed(passed: bool) -> Self {
        if passed { Self::SUCCESS } else { Self::FAILURE }
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A pluggable validation run against the files of one path configuration.
///
/// Registered instances are shared and never mutated. State derived from
/// configuration during the applicability predicates (compiled patterns,
/// parsed limits) goes into the `CheckState` the orchestrator creates for
/// each (check, path configuration) pair and hands back to `execute`.
pub trait Check: Send + Sync {
    fn id(&self) -> CheckId;

    /// Human-readable description for reporting.
    fn name(&self) -> &str;

    /// The check that must run before this one during `stage`, if any.
    fn depends_on(&self, _stage: Stage) -> Option<CheckId> {
        None
    }

    fn applies_to_pre_commit(&self, path: &PathConfig, state: &mut CheckState) -> bool;

    fn applies_to_post_commit(&self, path: &PathConfig, state: &mut CheckState) -> bool;

    /// Validate `path`'s files, reporting problems through `reporter`.
    ///
    /// Ordinary validation failures and collaborator I/O failures are both
    /// reported as diagnostics and a non-zero status, never as panics.
    fn execute(&self, path: &PathConfig, state: &CheckState, reporter: &mut Reporter)
    -> ExitStatus;
}

impl fmt::Debug for dyn Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("id", &self.id())
            .field("name", &self.name())
            .finish()
    }
}

/// Dispatch to the stage predicate matching `stage`.
pub fn applies_to(
    check: &dyn Check,
    stage: Stage,
    path: &PathConfig,
    state: &mut CheckState,
) -> bool {
    match stage {
        Stage::PreCommit => check.applies_to_pre_commit(path, state),
        Stage::PostCommit => check.applies_to_post_commit(path, state),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
