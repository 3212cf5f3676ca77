use std::path::PathBuf;
use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::checker::{Check, CheckId, CheckState, ExitStatus};
use crate::config::{PathConfig, PropertyScope, Stage};
use crate::error::{error_chain, report_handled};
use crate::output::{Diagnostic, Reporter, Severity};
use crate::process::{CommandRunner, split_command};

use super::{Prepared, ready, stage_enabled};

static TOOL_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<file>[^\s:][^:]*):(?P<line>\d+)(?::\d+)?:\s*(?:(?P<severity>fatal error|error|warning|warn|note|info):\s*)?(?P<message>\S.*)$",
    )
    .expect("Invalid regex")
});

/// Parse a `file:line[:col]: [severity:] message` line from a tool.
///
/// Lines without an explicit severity get `default_severity`.
#[must_use]
pub fn parse_tool_line(tool: &str, line: &str, default_severity: Severity) -> Option<Diagnostic> {
    let caps = TOOL_LINE.captures(line.trim_end())?;
    let number: u32 = caps["line"].parse().ok()?;
    let severity = caps
        .name("severity")
        .and_then(|m| Severity::from_tool_word(m.as_str()))
        .unwrap_or(default_severity);

    let mut diagnostic = Diagnostic::new(tool, severity, caps["message"].trim());
    diagnostic.file = Some(caps["file"].replace('\\', "/"));
    Some(diagnostic.with_line(number))
}

struct PreparedCommand {
    program: String,
    args: Vec<String>,
    dir: PathBuf,
}

/// Runs a configured external command against a path configuration.
///
/// Backs both the `compile` and the `style` checks; a non-zero exit of the
/// command fails the check.
pub struct CommandCheck {
    id: CheckId,
    name: &'static str,
    prefix: &'static str,
    pre_commit_dependency: Option<CheckId>,
    append_files_default: bool,
    runner: Arc<dyn CommandRunner>,
}

impl CommandCheck {
    /// `compile`: run `compile.command` in `compile.workdir`.
    #[must_use]
    pub fn compile(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            id: "compile",
            name: "Compile sources",
            prefix: "compile",
            pre_commit_dependency: None,
            append_files_default: false,
            runner,
        }
    }

    /// `style`: run `style.command` over the committed files, after `compile`
    /// when both run before a commit.
    #[must_use]
    pub fn style(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            id: "style",
            name: "Check code style",
            prefix: "style",
            pre_commit_dependency: Some("compile"),
            append_files_default: true,
            runner,
        }
    }

    fn key(&self, name: &str) -> String {
        format!("{}.{name}", self.prefix)
    }

    fn applies(&self, path: &PathConfig, stage: Stage, state: &mut CheckState) -> bool {
        if !stage_enabled(path, self.prefix, stage) {
            return false;
        }

        let command = path.get_string(&self.key("command"), "");
        if command.trim().is_empty() {
            return Prepared::<PreparedCommand>::Invalid(format!(
                "{} is enabled but {} is not set",
                self.id,
                self.key("command")
            ))
            .store(state);
        }

        let dir = match path.lookup(&self.key("workdir")).filter(|v| !v.is_empty()) {
            Some(workdir) => path.resolve(std::path::Path::new(workdir)),
            None => path.root(),
        };

        let mut prepared = match split_command(&command) {
            Ok((program, args)) => PreparedCommand { program, args, dir },
            Err(err) => return Prepared::<PreparedCommand>::Invalid(err.to_string()).store(state),
        };

        if path.get_bool(&self.key("append_files"), self.append_files_default) {
            let existing: Vec<String> = path
                .files()
                .iter()
                .map(|file| path.repo_file(file))
                .filter(|file| file.is_file())
                .filter_map(|file| std::path::absolute(file).ok())
                .map(|file| file.to_string_lossy().into_owned())
                .collect();
            if existing.is_empty() {
                tracing::debug!(check = self.id, path = path.path(), "No files to pass to command");
                return false;
            }
            prepared.args.extend(existing);
        }

        Prepared::Ready(prepared).store(state)
    }
}

impl Check for CommandCheck {
    fn id(&self) -> CheckId {
        self.id
    }

    fn name(&self) -> &str {
        self.name
    }

    fn depends_on(&self, stage: Stage) -> Option<CheckId> {
        match stage {
            Stage::PreCommit => self.pre_commit_dependency,
            Stage::PostCommit => None,
        }
    }

    fn applies_to_pre_commit(&self, path: &PathConfig, state: &mut CheckState) -> bool {
        self.applies(path, Stage::PreCommit, state)
    }

    fn applies_to_post_commit(&self, path: &PathConfig, state: &mut CheckState) -> bool {
        self.applies(path, Stage::PostCommit, state)
    }

    fn execute(
        &self,
        path: &PathConfig,
        state: &CheckState,
        reporter: &mut Reporter,
    ) -> ExitStatus {
        let Some(command) = ready::<PreparedCommand>(self.id, state, reporter) else {
            return ExitStatus::FAILURE;
        };

        let output = match self.runner.run(&command.program, &command.args, &command.dir) {
            Ok(output) => output,
            Err(err) => {
                report_handled(&err);
                reporter.emit(&Diagnostic::error(self.id, error_chain(&err)));
                return ExitStatus::FAILURE;
            }
        };

        let failed = !output.status.is_success();
        let default_severity = if failed { Severity::Error } else { Severity::Warning };
        for line in output.lines() {
            if let Some(diagnostic) = parse_tool_line(self.id, line, default_severity) {
                reporter.emit(&diagnostic);
            } else if failed && !line.trim().is_empty() {
                reporter.emit(&Diagnostic::new(self.id, Severity::Info, line.trim_end()));
            }
        }

        if failed {
            tracing::debug!(
                check = self.id,
                path = path.path(),
                status = output.status.code(),
                "Command reported failure"
            );
        }
        output.status
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
