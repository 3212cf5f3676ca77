use crate::checker::{CheckId, ExitStatus};
use crate::{EXIT_REJECTED, EXIT_SUCCESS};

/// Terminal state of one registered check for one path configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckResult {
    /// Not applicable to the active stage; never executed.
    Skipped,
    Completed(ExitStatus),
}

impl CheckResult {
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::Completed(status) if !status.is_success())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub id: CheckId,
    pub result: CheckResult,
}

/// Results for one path configuration.
///
/// Executed checks appear in execution order, followed by the skipped ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathOutcome {
    pub path: String,
    pub checks: Vec<CheckOutcome>,
}

impl PathOutcome {
    /// Checks that ran, in execution order, with their status.
    pub fn executed(&self) -> impl Iterator<Item = (CheckId, ExitStatus)> + '_ {
        self.checks.iter().filter_map(|outcome| match outcome.result {
            CheckResult::Completed(status) => Some((outcome.id, status)),
            CheckResult::Skipped => None,
        })
    }

    pub fn failed(&self) -> impl Iterator<Item = (CheckId, ExitStatus)> + '_ {
        self.executed().filter(|(_, status)| !status.is_success())
    }

    pub fn skipped(&self) -> impl Iterator<Item = CheckId> + '_ {
        self.checks
            .iter()
            .filter(|outcome| outcome.result == CheckResult::Skipped)
            .map(|outcome| outcome.id)
    }

    /// Success iff every executed check returned 0.
    #[must_use]
    pub fn is_success(&self) -> bool {
        !self.checks.iter().any(|outcome| outcome.result.is_failure())
    }
}

/// Results for every path configuration of one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutcome {
    pub paths: Vec<PathOutcome>,
}

impl RunOutcome {
    /// Whether the commit is accepted: every path configuration succeeded.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.paths.iter().all(PathOutcome::is_success)
    }

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.is_accepted() {
            EXIT_SUCCESS
        } else {
            EXIT_REJECTED
        }
    }

    #[must_use]
    pub fn executed_count(&self) -> usize {
        self.paths.iter().map(|path| path.executed().count()).sum()
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.paths.iter().map(|path| path.failed().count()).sum()
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
