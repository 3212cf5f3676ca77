use std::fmt::Write;

use crate::EXIT_SUCCESS;
use crate::checker::CheckRegistry;
use crate::config::Stage;

use super::fail;

#[must_use]
pub fn run_checks() -> i32 {
    match CheckRegistry::builtin() {
        Ok(registry) => {
            print!("{}", render_checks(&registry));
            EXIT_SUCCESS
        }
        Err(e) => fail(&e),
    }
}

/// One line per registered check: id, name and per-stage prerequisites.
#[must_use]
pub fn render_checks(registry: &CheckRegistry) -> String {
    let width = registry
        .all()
        .iter()
        .map(|check| check.id().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for check in registry.all() {
        let _ = write!(out, "{:<width$}  {}", check.id(), check.name());
        let prerequisites: Vec<String> = [Stage::PreCommit, Stage::PostCommit]
            .into_iter()
            .filter_map(|stage| {
                check
                    .depends_on(stage)
                    .map(|prerequisite| format!("{stage}: after {prerequisite}"))
            })
            .collect();
        if !prerequisites.is_empty() {
            let _ = write!(out, " [{}]", prerequisites.join("; "));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "checks_tests.rs"]
mod tests;
