use crate::checker::test_fixtures::{FakeCheck, new_log};

use super::*;

fn ids(checks: &[FakeCheck], order: &[usize]) -> Vec<&'static str> {
    order.iter().map(|&i| checks[i].id()).collect()
}

fn order_of(checks: &[FakeCheck], stage: Stage) -> Result<Vec<usize>> {
    let refs: Vec<&dyn Check> = checks.iter().map(|c| c as &dyn Check).collect();
    execution_order(&refs, stage, "/src")
}

#[test]
fn empty_set_has_empty_order() {
    assert!(order_of(&[], Stage::PreCommit).unwrap().is_empty());
}

#[test]
fn independent_checks_keep_registration_order() {
    let log = new_log();
    let checks = vec![
        FakeCheck::new("c", &log),
        FakeCheck::new("a", &log),
        FakeCheck::new("b", &log),
    ];
    let order = order_of(&checks, Stage::PreCommit).unwrap();
    assert_eq!(ids(&checks, &order), vec!["c", "a", "b"]);
}

#[test]
fn prerequisite_runs_first_regardless_of_registration() {
    let log = new_log();
    let checks = vec![FakeCheck::new("b", &log).after("a"), FakeCheck::new("a", &log)];
    let order = order_of(&checks, Stage::PreCommit).unwrap();
    assert_eq!(ids(&checks, &order), vec!["a", "b"]);
}

#[test]
fn shared_prerequisite_forms_dag() {
    let log = new_log();
    let checks = vec![
        FakeCheck::new("d", &log).after("b"),
        FakeCheck::new("c", &log).after("a"),
        FakeCheck::new("b", &log).after("a"),
        FakeCheck::new("a", &log),
        FakeCheck::new("e", &log),
    ];
    let order = order_of(&checks, Stage::PreCommit).unwrap();
    let names = ids(&checks, &order);
    assert_eq!(names, vec!["a", "c", "b", "d", "e"]);

    let position = |id: &str| names.iter().position(|n| *n == id).unwrap();
    for check in &checks {
        if let Some(prereq) = check.depends_on(Stage::PreCommit) {
            assert!(position(prereq) < position(check.id()));
        }
    }
}

#[test]
fn dependency_on_absent_check_is_satisfied() {
    let log = new_log();
    let checks = vec![FakeCheck::new("style", &log).after("compile")];
    let order = order_of(&checks, Stage::PreCommit).unwrap();
    assert_eq!(order, vec![0]);
}

#[test]
fn dependencies_are_per_stage() {
    let log = new_log();
    let checks = vec![
        FakeCheck::new("b", &log).after_post("a"),
        FakeCheck::new("a", &log).after("b"),
    ];
    assert_eq!(ids(&checks, &order_of(&checks, Stage::PreCommit).unwrap()), vec!["b", "a"]);
    assert_eq!(ids(&checks, &order_of(&checks, Stage::PostCommit).unwrap()), vec!["a", "b"]);
}

#[test]
fn two_check_cycle_is_error() {
    let log = new_log();
    let checks = vec![
        FakeCheck::new("a", &log).after("b"),
        FakeCheck::new("b", &log).after("a"),
    ];
    let err = order_of(&checks, Stage::PreCommit).unwrap_err();
    match err {
        CommitGuardError::DependencyCycle { path, checks } => {
            assert_eq!(path, "/src");
            assert_eq!(checks, vec!["a", "b", "a"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn self_dependency_is_cycle() {
    let log = new_log();
    let checks = vec![FakeCheck::new("loop", &log).after("loop")];
    let err = order_of(&checks, Stage::PreCommit).unwrap_err();
    assert_eq!(err.to_string(), "Cyclic check dependency for path '/src': loop -> loop");
}

#[test]
fn cycle_is_reported_without_its_dependents() {
    let log = new_log();
    let checks = vec![
        FakeCheck::new("tail", &log).after("x"),
        FakeCheck::new("ok", &log),
        FakeCheck::new("x", &log).after("y"),
        FakeCheck::new("y", &log).after("z"),
        FakeCheck::new("z", &log).after("x"),
    ];
    let err = order_of(&checks, Stage::PreCommit).unwrap_err();
    match err {
        CommitGuardError::DependencyCycle { checks, .. } => {
            assert_eq!(checks, vec!["x", "y", "z", "x"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn repeated_runs_give_same_order() {
    let log = new_log();
    let checks = vec![
        FakeCheck::new("q", &log),
        FakeCheck::new("p", &log).after("r"),
        FakeCheck::new("r", &log),
        FakeCheck::new("s", &log).after("q"),
    ];
    let first = order_of(&checks, Stage::PreCommit).unwrap();
    for _ in 0..10 {
        assert_eq!(order_of(&checks, Stage::PreCommit).unwrap(), first);
    }
    assert_eq!(ids(&checks, &first), vec!["q", "r", "p", "s"]);
}
