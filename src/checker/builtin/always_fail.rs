use crate::checker::{Check, CheckId, CheckState, ExitStatus};
use crate::config::{PathConfig, PropertyScope, Stage};
use crate::output::{Diagnostic, Reporter};

use super::stage_enabled;

const ID: CheckId = "always-fail";
const PREFIX: &str = "alwaysfail";
pub const DEFAULT_MESSAGE: &str = "commits to this path are blocked";

/// Unconditionally rejects the commit, e.g. to freeze a path.
pub struct AlwaysFailCheck;

impl Check for AlwaysFailCheck {
    fn id(&self) -> CheckId {
        ID
    }

    fn name(&self) -> &str {
        "Always fail"
    }

    fn applies_to_pre_commit(&self, path: &PathConfig, _state: &mut CheckState) -> bool {
        stage_enabled(path, PREFIX, Stage::PreCommit)
    }

    fn applies_to_post_commit(&self, path: &PathConfig, _state: &mut CheckState) -> bool {
        stage_enabled(path, PREFIX, Stage::PostCommit)
    }

    fn execute(
        &self,
        path: &PathConfig,
        _state: &CheckState,
        reporter: &mut Reporter,
    ) -> ExitStatus {
        let message = path.get_string("alwaysfail.message", DEFAULT_MESSAGE);
        reporter.emit(&Diagnostic::error(ID, message));
        ExitStatus::FAILURE
    }
}

#[cfg(test)]
#[path = "always_fail_tests.rs"]
mod tests;
