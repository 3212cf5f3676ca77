//! Configurable fake check shared by checker and engine tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::config::{GlobalConfig, PathConfig, Properties, PropertyScope, Stage};
use crate::output::{Diagnostic, Reporter};

use super::{Check, CheckId, CheckState, ExitStatus};

/// Shared record of executions, as `"<id>@<path>"` entries.
pub type ExecutionLog = Arc<Mutex<Vec<String>>>;

pub struct FakeCheck {
    id: CheckId,
    name: String,
    pre_dependency: Option<CheckId>,
    post_dependency: Option<CheckId>,
    pre_commit: bool,
    post_commit: bool,
    status: ExitStatus,
    message: Option<String>,
    log: ExecutionLog,
    predicate_calls: Arc<AtomicUsize>,
}

impl FakeCheck {
    pub fn new(id: CheckId, log: &ExecutionLog) -> Self {
        Self {
            id,
            name: format!("fake check {id}"),
            pre_dependency: None,
            post_dependency: None,
            pre_commit: true,
            post_commit: false,
            status: ExitStatus::SUCCESS,
            message: None,
            log: Arc::clone(log),
            predicate_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn after(mut self, dependency: CheckId) -> Self {
        self.pre_dependency = Some(dependency);
        self
    }

    pub fn after_post(mut self, dependency: CheckId) -> Self {
        self.post_dependency = Some(dependency);
        self
    }

    pub fn stages(mut self, pre_commit: bool, post_commit: bool) -> Self {
        self.pre_commit = pre_commit;
        self.post_commit = post_commit;
        self
    }

    pub fn returning(mut self, code: i32) -> Self {
        self.status = ExitStatus::new(code);
        self
    }

    pub fn emitting(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn predicate_calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.predicate_calls)
    }

    fn gate(&self, enabled: bool, path: &PathConfig, state: &mut CheckState) -> bool {
        self.predicate_calls.fetch_add(1, Ordering::SeqCst);
        // A path can veto a fake check with `fake.<id>.skip=true`.
        let vetoed = path.get_bool(&format!("fake.{}.skip", self.id), false);
        if enabled && !vetoed {
            state.store(path.path().to_string());
            true
        } else {
            false
        }
    }
}

impl Check for FakeCheck {
    fn id(&self) -> CheckId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn depends_on(&self, stage: Stage) -> Option<CheckId> {
        match stage {
            Stage::PreCommit => self.pre_dependency,
            Stage::PostCommit => self.post_dependency,
        }
    }

    fn applies_to_pre_commit(&self, path: &PathConfig, state: &mut CheckState) -> bool {
        self.gate(self.pre_commit, path, state)
    }

    fn applies_to_post_commit(&self, path: &PathConfig, state: &mut CheckState) -> bool {
        self.gate(self.post_commit, path, state)
    }

    fn execute(
        &self,
        path: &PathConfig,
        state: &CheckState,
        reporter: &mut Reporter,
    ) -> ExitStatus {
        let cached = state.get::<String>().cloned().unwrap_or_default();
        assert_eq!(cached, path.path(), "state leaked between path configurations");

        if let Ok(mut log) = self.log.lock() {
            log.push(format!("{}@{}", self.id, path.path()));
        }
        if let Some(message) = &self.message {
            reporter.emit(&Diagnostic::error(self.id, message.clone()));
        }
        self.status
    }
}

pub fn new_log() -> ExecutionLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn logged(log: &ExecutionLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

/// Global configuration with the given properties and commit files.
pub fn config_with(pairs: &[(&str, &str)], stage: Stage, files: &[&str]) -> GlobalConfig {
    let properties: Properties = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    let files: Vec<_> = files.iter().map(std::path::PathBuf::from).collect();
    GlobalConfig::from_properties(properties, stage, &files).unwrap()
}
