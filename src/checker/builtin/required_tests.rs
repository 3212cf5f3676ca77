use crate::checker::builtin::test_support::run_check;
use crate::checker::test_fixtures::config_with;

use super::*;

fn run(globs: &str, files: &[&str]) -> Option<(ExitStatus, Vec<String>)> {
    let config = config_with(
        &[
            ("config1.path", "/app"),
            ("required.enabled", "true"),
            ("required.globs", globs),
        ],
        Stage::PreCommit,
        files,
    );
    run_check(&RequiredFilesCheck, Stage::PreCommit, &config.path_configs()[0])
}

#[test]
fn every_glob_matched_passes() {
    let (status, lines) = run("**/*.java, tests/**", &["app/src/A.java", "app/tests/ATest.java"]).unwrap();
    assert!(status.is_success());
    assert!(lines.is_empty());
}

#[test]
fn each_unmatched_glob_is_reported() {
    let (status, lines) = run("*.md,**/*.java,docs/**", &["app/src/A.java"]).unwrap();
    assert_eq!(status, ExitStatus::FAILURE);
    assert_eq!(
        lines,
        vec![
            "error: [required-files] no committed file under '/app' matches '*.md'",
            "error: [required-files] no committed file under '/app' matches 'docs/**'",
        ]
    );
}

#[test]
fn globs_are_relative_to_path_root() {
    let (status, _) = run("README.md", &["app/README.md"]).unwrap();
    assert!(status.is_success());
}

#[test]
fn empty_commit_fails_every_glob() {
    let (status, lines) = run("*.java", &[]).unwrap();
    assert_eq!(status, ExitStatus::FAILURE);
    assert_eq!(lines.len(), 1);
}

#[test]
fn no_globs_means_not_applicable() {
    assert!(run(" , ", &["app/a.java"]).is_none());
}

#[test]
fn invalid_glob_fails_the_check() {
    let (status, lines) = run("src/{a", &["app/src/a"]).unwrap();
    assert_eq!(status, ExitStatus::FAILURE);
    assert!(lines[0].contains("Invalid glob pattern"));
}
