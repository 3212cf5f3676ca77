use crate::checker::{Check, CheckId, CheckRegistry, CheckState, applies_to};
use crate::config::{GlobalConfig, PathConfig};
use crate::error::Result;
use crate::output::{Diagnostic, Reporter};

use super::ENGINE_TOOL;
use super::result::{CheckOutcome, CheckResult, PathOutcome, RunOutcome};
use super::schedule::execution_order;

struct Scheduled<'a> {
    check: &'a dyn Check,
    state: CheckState,
}

/// Applicable checks of one path configuration in execution order, with
/// the state their predicates prepared.
pub struct PathPlan<'a> {
    path: &'a PathConfig,
    scheduled: Vec<Scheduled<'a>>,
    skipped: Vec<CheckId>,
}

impl<'a> PathPlan<'a> {
    #[must_use]
    pub const fn path(&self) -> &'a PathConfig {
        self.path
    }

    /// Checks that will run, in order.
    pub fn ordered(&self) -> impl Iterator<Item = &'a dyn Check> + '_ {
        self.scheduled.iter().map(|entry| entry.check)
    }

    /// Checks filtered out by their stage predicate, in registration order.
    #[must_use]
    pub fn skipped(&self) -> &[CheckId] {
        &self.skipped
    }

    /// Run every scheduled check in order.
    ///
    /// A check runs even when an earlier check failed; dependencies decide
    /// order only. Each failure is summarized by one engine diagnostic.
    pub fn execute(self, reporter: &mut Reporter) -> PathOutcome {
        let path = self.path;
        let mut checks = Vec::with_capacity(self.scheduled.len() + self.skipped.len());

        for entry in self.scheduled {
            let id = entry.check.id();
            let status = entry.check.execute(path, &entry.state, reporter);
            tracing::info!(
                check = id,
                path = path.path(),
                status = status.code(),
                "Check completed"
            );
            if !status.is_success() {
                reporter.emit(&Diagnostic::error(
                    ENGINE_TOOL,
                    format!(
                        "check '{id}' ({}) failed for path '{}' with status {status}",
                        entry.check.name(),
                        path.path()
                    ),
                ));
            }
            checks.push(CheckOutcome {
                id,
                result: CheckResult::Completed(status),
            });
        }

        checks.extend(self.skipped.into_iter().map(|id| CheckOutcome {
            id,
            result: CheckResult::Skipped,
        }));

        PathOutcome {
            path: path.path().to_string(),
            checks,
        }
    }
}

/// Plans for every path configuration, built before anything executes.
pub struct RunPlan<'a> {
    paths: Vec<PathPlan<'a>>,
}

impl<'a> RunPlan<'a> {
    #[must_use]
    pub fn paths(&self) -> &[PathPlan<'a>] {
        &self.paths
    }

    /// Execute the path plans sequentially in declared order.
    pub fn execute(self, reporter: &mut Reporter) -> RunOutcome {
        RunOutcome {
            paths: self
                .paths
                .into_iter()
                .map(|plan| plan.execute(reporter))
                .collect(),
        }
    }
}

/// Filters, orders and runs the registered checks.
#[derive(Debug, Clone, Copy)]
pub struct Orchestrator<'r> {
    registry: &'r CheckRegistry,
}

impl<'r> Orchestrator<'r> {
    #[must_use]
    pub const fn new(registry: &'r CheckRegistry) -> Self {
        Self { registry }
    }

    /// Evaluate each check's stage predicate once for `path` and order the
    /// applicable ones.
    ///
    /// # Errors
    /// Returns `DependencyCycle` if the applicable checks' dependencies form
    /// a cycle.
    pub fn plan_path<'a>(&self, path: &'a PathConfig) -> Result<PathPlan<'a>>
    where
        'r: 'a,
    {
        let registry: &'r CheckRegistry = self.registry;
        let stage = path.stage();
        let mut candidates: Vec<Scheduled<'a>> = Vec::new();
        let mut skipped = Vec::new();

        for check in registry.all() {
            let check: &'a dyn Check = check.as_ref();
            let mut state = CheckState::new();
            if applies_to(check, stage, path, &mut state) {
                tracing::debug!(check = check.id(), path = path.path(), %stage, "Check applies");
                candidates.push(Scheduled { check, state });
            } else {
                tracing::debug!(check = check.id(), path = path.path(), %stage, "Check skipped");
                skipped.push(check.id());
            }
        }

        let checks: Vec<&dyn Check> = candidates.iter().map(|entry| entry.check).collect();
        let order = execution_order(&checks, stage, path.path())?;

        let mut slots: Vec<Option<Scheduled<'a>>> = candidates.into_iter().map(Some).collect();
        let scheduled: Vec<Scheduled<'a>> = order
            .into_iter()
            .filter_map(|index| slots[index].take())
            .collect();

        tracing::debug!(
            path = path.path(),
            order = ?scheduled.iter().map(|entry| entry.check.id()).collect::<Vec<_>>(),
            "Execution order"
        );

        Ok(PathPlan {
            path,
            scheduled,
            skipped,
        })
    }

    /// Plan every path configuration of `config`.
    ///
    /// # Errors
    /// Returns the first `DependencyCycle`; no check has executed by then.
    pub fn plan<'a>(&self, config: &'a GlobalConfig) -> Result<RunPlan<'a>>
    where
        'r: 'a,
    {
        let paths = config
            .path_configs()
            .iter()
            .map(|path| self.plan_path(path))
            .collect::<Result<Vec<_>>>()?;
        Ok(RunPlan { paths })
    }

    /// Plan and execute a single path configuration.
    ///
    /// # Errors
    /// Returns `DependencyCycle` before executing anything.
    pub fn run_path(&self, path: &PathConfig, reporter: &mut Reporter) -> Result<PathOutcome> {
        Ok(self.plan_path(path)?.execute(reporter))
    }

    /// Plan every path configuration, then execute them in declared order.
    ///
    /// # Errors
    /// Returns `DependencyCycle` before executing anything.
    pub fn run(&self, config: &GlobalConfig, reporter: &mut Reporter) -> Result<RunOutcome> {
        let plan = self.plan(config)?;
        let outcome = plan.execute(reporter);
        tracing::info!(
            paths = outcome.paths.len(),
            executed = outcome.executed_count(),
            failed = outcome.failed_count(),
            "Run finished"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
