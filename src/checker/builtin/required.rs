use globset::GlobMatcher;

use crate::checker::{Check, CheckId, CheckState, ExitStatus};
use crate::config::{PathConfig, PropertyScope, Stage};
use crate::output::{Diagnostic, Reporter};

use super::{Prepared, compile_matchers, ready, stage_enabled};

const ID: CheckId = "required-files";
const PREFIX: &str = "required";

/// Requires each glob in `required.globs` to match at least one committed
/// file of the path configuration.
///
/// Globs are matched against paths relative to the configuration's root.
pub struct RequiredFilesCheck;

impl RequiredFilesCheck {
    fn applies(path: &PathConfig, stage: Stage, state: &mut CheckState) -> bool {
        if !stage_enabled(path, PREFIX, stage) {
            return false;
        }
        let globs = path.get_list("required.globs");
        if globs.is_empty() {
            tracing::debug!(check = ID, path = path.path(), "No required globs configured");
            return false;
        }
        Prepared::from_result(compile_matchers(&globs)).store(state)
    }
}

impl Check for RequiredFilesCheck {
    fn id(&self) -> CheckId {
        ID
    }

    fn name(&self) -> &str {
        "Require file types"
    }

    fn applies_to_pre_commit(&self, path: &PathConfig, state: &mut CheckState) -> bool {
        Self::applies(path, Stage::PreCommit, state)
    }

    fn applies_to_post_commit(&self, path: &PathConfig, state: &mut CheckState) -> bool {
        Self::applies(path, Stage::PostCommit, state)
    }

    fn execute(
        &self,
        path: &PathConfig,
        state: &CheckState,
        reporter: &mut Reporter,
    ) -> ExitStatus {
        let Some(matchers) = ready::<Vec<(String, GlobMatcher)>>(ID, state, reporter) else {
            return ExitStatus::FAILURE;
        };

        let relative: Vec<_> = path
            .files()
            .iter()
            .map(|file| path.relative_to_root(file))
            .collect();

        let mut passed = true;
        for (pattern, matcher) in matchers {
            if !relative.iter().any(|file| matcher.is_match(file)) {
                reporter.emit(&Diagnostic::error(
                    ID,
                    format!("no committed file under '{}' matches '{pattern}'", path.path()),
                ));
                passed = false;
            }
        }

        ExitStatus::from_passed(passed)
    }
}

#[cfg(test)]
#[path = "required_tests.rs"]
mod tests;
