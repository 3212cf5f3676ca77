use std::collections::{BTreeSet, HashMap};

use crate::checker::Check;
use crate::config::Stage;
use crate::error::{CommitGuardError, Result};

/// Order `checks` so every check comes after its prerequisite.
///
/// Returns indexes into `checks`. Only dependencies between two members of
/// `checks` constrain the order; a dependency on a check that is absent is
/// already satisfied. Among checks that are ready at the same time, the one
/// with the lowest index runs first, so the order is reproducible.
///
/// # Errors
/// Returns `DependencyCycle` naming the checks on the cycle.
pub fn execution_order(checks: &[&dyn Check], stage: Stage, path: &str) -> Result<Vec<usize>> {
    let index_of: HashMap<&str, usize> = checks
        .iter()
        .enumerate()
        .map(|(index, check)| (check.id(), index))
        .collect();

    // At most one prerequisite per check, so in-degree is 0 or 1.
    let prerequisite: Vec<Option<usize>> = checks
        .iter()
        .map(|check| {
            check
                .depends_on(stage)
                .and_then(|id| index_of.get(id).copied())
        })
        .collect();

    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); checks.len()];
    for (index, prereq) in prerequisite.iter().enumerate() {
        if let Some(prereq) = prereq {
            dependents[*prereq].push(index);
        }
    }

    let mut ready: BTreeSet<usize> = prerequisite
        .iter()
        .enumerate()
        .filter_map(|(index, prereq)| prereq.is_none().then_some(index))
        .collect();
    let mut order = Vec::with_capacity(checks.len());

    while let Some(index) = ready.pop_first() {
        order.push(index);
        ready.extend(dependents[index].iter().copied());
    }

    if order.len() < checks.len() {
        let done: BTreeSet<usize> = order.into_iter().collect();
        let cycle = find_cycle(&prerequisite, &done);
        return Err(CommitGuardError::DependencyCycle {
            path: path.to_string(),
            checks: cycle.iter().map(|&i| checks[i].id().to_string()).collect(),
        });
    }

    Ok(order)
}

/// Follow prerequisites from the first unscheduled check until one repeats.
///
/// The result starts and ends with the same check.
fn find_cycle(prerequisite: &[Option<usize>], done: &BTreeSet<usize>) -> Vec<usize> {
    let Some(start) = (0..prerequisite.len()).find(|index| !done.contains(index)) else {
        return Vec::new();
    };

    let mut walk = vec![start];
    let mut current = start;
    while let Some(next) = prerequisite[current] {
        if let Some(position) = walk.iter().position(|&seen| seen == next) {
            let mut cycle = walk.split_off(position);
            cycle.push(next);
            return cycle;
        }
        walk.push(next);
        current = next;
    }
    walk
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod tests;
