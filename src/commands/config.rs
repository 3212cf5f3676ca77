use std::path::Path;

use crate::EXIT_SUCCESS;
use crate::checker::CheckRegistry;
use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::{GlobalConfig, Properties, Stage};
use crate::engine::Orchestrator;
use crate::error::Result;

use super::fail;

#[must_use]
pub fn run_config(args: &ConfigArgs) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => fail(&e),
    }
}

/// Build the configuration and the check plans for both stages.
///
/// # Errors
/// Returns an error if the file is malformed, a path group lacks its path
/// key, or check dependencies form a cycle in either stage.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    let registry = CheckRegistry::builtin()?;
    let orchestrator = Orchestrator::new(&registry);
    for stage in [Stage::PreCommit, Stage::PostCommit] {
        let config = GlobalConfig::load(config_path, stage, &[], &Properties::new())?;
        orchestrator.plan(&config)?;
        tracing::debug!(%stage, paths = config.path_configs().len(), "Configuration valid for stage");
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
