use std::fs::File;
use std::io::BufWriter;

use crate::checker::CheckRegistry;
use crate::cli::{Cli, RunArgs};
use crate::config::{GlobalConfig, KEY_OUTPUT_FILE, KEY_STRUCTURED_OUTPUT, Properties};
use crate::engine::{Orchestrator, RunOutcome};
use crate::error::{CommitGuardError, Result};
use crate::output::Reporter;

use super::{fail, read_commit_files};

#[must_use]
pub fn run_hook(args: &RunArgs, cli: &Cli) -> i32 {
    match run_hook_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => fail(&e),
    }
}

/// Load the configuration, run every applicable check and report.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded, the output file
/// cannot be created, or check dependencies form a cycle.
pub fn run_hook_impl(args: &RunArgs, cli: &Cli) -> Result<i32> {
    let files = read_commit_files(&args.commit)?;
    let config = GlobalConfig::load(
        &args.commit.config,
        args.commit.stage,
        &files,
        &cli_overrides(args),
    )?;
    tracing::info!(
        run_id = config.run_id(),
        stage = %config.stage(),
        paths = config.path_configs().len(),
        files = files.len(),
        "Loaded configuration"
    );

    let registry = CheckRegistry::builtin()?;
    let mut reporter = Reporter::stdout(config.output_mode(), cli.color.into());
    if let Some(path) = config.settings().output_file() {
        let file = File::create(path).map_err(|source| CommitGuardError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
        reporter.redirect(Box::new(BufWriter::new(file)));
    }

    let outcome = Orchestrator::new(&registry).run(&config, &mut reporter)?;
    reporter.flush();

    if !cli.quiet {
        eprintln!("{}", summary(&outcome));
    }
    Ok(outcome.exit_code())
}

/// Command-line switches expressed as global properties.
fn cli_overrides(args: &RunArgs) -> Properties {
    let mut overrides = Properties::new();
    if args.structured {
        overrides.insert(KEY_STRUCTURED_OUTPUT.to_string(), "true".to_string());
    }
    if let Some(output) = &args.output {
        overrides.insert(
            KEY_OUTPUT_FILE.to_string(),
            output.to_string_lossy().into_owned(),
        );
    }
    overrides
}

pub(crate) fn summary(outcome: &RunOutcome) -> String {
    let verdict = if outcome.is_accepted() {
        "commit accepted"
    } else {
        "commit rejected"
    };
    format!(
        "commit-guard: {} check(s) run across {} path(s), {} failed; {verdict}",
        outcome.executed_count(),
        outcome.paths.len(),
        outcome.failed_count()
    )
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
