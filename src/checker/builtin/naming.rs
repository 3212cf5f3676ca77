use std::collections::BTreeSet;
use std::path::PathBuf;

use regex::Regex;

use crate::checker::{Check, CheckId, CheckState, ExitStatus};
use crate::config::{PathConfig, PropertyScope, Stage};
use crate::error::CommitGuardError;
use crate::output::{Diagnostic, Reporter};

use super::{Prepared, ready, stage_enabled};

const ID: CheckId = "package-naming";
const PREFIX: &str = "naming";
pub const DEFAULT_LANGUAGE: &str = "Java";
pub const DEFAULT_PATTERN: &str = "^[a-z_][a-z0-9_]*$";

struct NamingRule {
    pattern: Regex,
    files: Vec<PathBuf>,
}

/// Requires every package directory holding files of `naming.language` to
/// match `naming.pattern`.
///
/// Directories are taken relative to the path configuration's root.
pub struct PackageNamingCheck;

impl PackageNamingCheck {
    fn applies(path: &PathConfig, stage: Stage, state: &mut CheckState) -> bool {
        if !stage_enabled(path, PREFIX, stage) {
            return false;
        }
        let language = path.get_string("naming.language", DEFAULT_LANGUAGE);
        let files = path.files_of_language(&language);
        if files.is_empty() {
            return false;
        }

        let raw = path.get_string("naming.pattern", DEFAULT_PATTERN);
        let prepared = Regex::new(&raw)
            .map(|pattern| NamingRule {
                pattern,
                files: files.to_vec(),
            })
            .map_err(|source| CommitGuardError::InvalidRegex {
                pattern: raw,
                source,
            });
        Prepared::from_result(prepared).store(state)
    }
}

impl Check for PackageNamingCheck {
    fn id(&self) -> CheckId {
        ID
    }

    fn name(&self) -> &str {
        "Enforce package naming"
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
        let Some(rule) = ready::<NamingRule>(ID, state, reporter) else {
            return ExitStatus::FAILURE;
        };

        // Report each offending directory once, in a stable order.
        let mut offending = BTreeSet::new();
        for file in &rule.files {
            let relative = path.relative_to_root(file);
            let Some(parent) = relative.parent() else {
                continue;
            };
            for component in parent.components() {
                let name = component.as_os_str().to_string_lossy();
                if !rule.pattern.is_match(&name) {
                    offending.insert((name.into_owned(), file.clone()));
                }
            }
        }

        let mut reported = BTreeSet::new();
        for (name, file) in &offending {
            if reported.insert(name.as_str()) {
                reporter.emit(&Diagnostic::error(
                    ID,
                    format!(
                        "package directory '{name}' does not match {}",
                        rule.pattern.as_str()
                    ),
                )
                .with_file(file));
            }
        }

        ExitStatus::from_passed(offending.is_empty())
    }
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
