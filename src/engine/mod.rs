//! Check orchestration: applicability filtering, dependency ordering and
//! sequential execution per path configuration.

mod orchestrator;
mod result;
mod schedule;

pub use orchestrator::{Orchestrator, PathPlan, RunPlan};
pub use result::{CheckOutcome, CheckResult, PathOutcome, RunOutcome};
pub use schedule::execution_order;

/// Tool name used for diagnostics the engine itself emits.
pub const ENGINE_TOOL: &str = "commit-guard";
