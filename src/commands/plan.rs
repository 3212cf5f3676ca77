use std::fmt::Write;

use crate::EXIT_SUCCESS;
use crate::checker::CheckRegistry;
use crate::cli::{Cli, PlanArgs};
use crate::config::{GlobalConfig, Properties};
use crate::engine::{Orchestrator, RunPlan};
use crate::error::Result;

use super::{fail, read_commit_files};

#[must_use]
pub fn run_plan(args: &PlanArgs, cli: &Cli) -> i32 {
    match run_plan_impl(args, cli) {
        Ok(rendered) => {
            print!("{rendered}");
            EXIT_SUCCESS
        }
        Err(e) => fail(&e),
    }
}

/// Build every path plan without executing anything and render it.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or check
/// dependencies form a cycle.
pub fn run_plan_impl(args: &PlanArgs, cli: &Cli) -> Result<String> {
    let files = read_commit_files(&args.commit)?;
    let config = GlobalConfig::load(
        &args.commit.config,
        args.commit.stage,
        &files,
        &Properties::new(),
    )?;
    let registry = CheckRegistry::builtin()?;
    let plan = Orchestrator::new(&registry).plan(&config)?;
    Ok(render_plan(&config, &plan, cli.quiet))
}

/// Human-readable plan: each path with its ordered and skipped checks.
///
/// `quiet` omits the header and the skipped checks.
#[must_use]
pub fn render_plan(config: &GlobalConfig, plan: &RunPlan<'_>, quiet: bool) -> String {
    let stage = config.stage();
    let mut out = String::new();
    if !quiet {
        let _ = writeln!(out, "Stage: {stage} (run {})", config.run_id());
    }

    for path_plan in plan.paths() {
        let path = path_plan.path();
        let _ = writeln!(out, "{} ({} file(s))", path.path(), path.files().len());

        let mut any = false;
        for (position, check) in path_plan.ordered().enumerate() {
            any = true;
            let _ = write!(out, "  {}. {} - {}", position + 1, check.id(), check.name());
            if let Some(prerequisite) = check.depends_on(stage) {
                let _ = write!(out, " (after {prerequisite})");
            }
            out.push('\n');
        }
        if !any {
            out.push_str("  no applicable checks\n");
        }

        if !quiet && !path_plan.skipped().is_empty() {
            let _ = writeln!(out, "  skipped: {}", path_plan.skipped().join(", "));
        }
    }
    out
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
