use globset::GlobSet;

use crate::checker::{Check, CheckId, CheckState, ExitStatus};
use crate::config::{PathConfig, PropertyScope, Stage};
use crate::error::{CommitGuardError, report_handled};
use crate::output::{Diagnostic, Reporter};

use super::{Prepared, compile_glob_set, ready, stage_enabled};

const ID: CheckId = "file-size";
const PREFIX: &str = "filesize";
pub const DEFAULT_MAX_BYTES: u64 = 1024 * 1024;

struct SizeLimit {
    max_bytes: u64,
    exclude: GlobSet,
}

/// Rejects committed files larger than `filesize.max_bytes`.
///
/// Files removed by the commit are ignored. `filesize.exclude` globs are
/// matched against repository-relative paths.
pub struct FileSizeCheck;

impl FileSizeCheck {
    fn applies(path: &PathConfig, stage: Stage, state: &mut CheckState) -> bool {
        if !stage_enabled(path, PREFIX, stage) || path.files().is_empty() {
            return false;
        }
        let max_bytes = path.get_parsed("filesize.max_bytes", DEFAULT_MAX_BYTES);
        let prepared = compile_glob_set(&path.get_list("filesize.exclude"))
            .map(|exclude| SizeLimit { max_bytes, exclude });
        Prepared::from_result(prepared).store(state)
    }
}

impl Check for FileSizeCheck {
    fn id(&self) -> CheckId {
        ID
    }

    fn name(&self) -> &str {
        "Limit file size"
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
        let Some(limit) = ready::<SizeLimit>(ID, state, reporter) else {
            return ExitStatus::FAILURE;
        };

        let mut passed = true;
        for file in path.files() {
            if limit.exclude.is_match(file) {
                continue;
            }
            let on_disk = path.repo_file(file);
            let metadata = match std::fs::metadata(&on_disk) {
                Ok(metadata) => metadata,
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => continue,
                Err(source) => {
                    let err = CommitGuardError::FileRead {
                        path: on_disk,
                        source,
                    };
                    report_handled(&err);
                    reporter.emit(&Diagnostic::error(ID, err.to_string()).with_file(file));
                    passed = false;
                    continue;
                }
            };

            if metadata.is_file() && metadata.len() > limit.max_bytes {
                reporter.emit(&Diagnostic::error(
                    ID,
                    format!(
                        "file is {} bytes, exceeding the limit of {} bytes",
                        metadata.len(),
                        limit.max_bytes
                    ),
                )
                .with_file(file));
                passed = false;
            }
        }

        ExitStatus::from_passed(passed)
    }
}

#[cfg(test)]
#[path = "file_size_tests.rs"]
mod tests;
