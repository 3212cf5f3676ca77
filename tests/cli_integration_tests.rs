//! Integration tests for the `plan`, `checks` and `config` commands and
//! global flags.

mod common;

use common::{CONFIG_FILE, EMPTY_CONFIG, POLICY_CONFIG, TestFixture};
use predicates::prelude::*;

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn help_lists_exit_codes() {
    commit_guard!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exit codes"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("plan"));
}

#[test]
fn version_flag() {
    commit_guard!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("commit-guard"));
}

#[test]
fn missing_subcommand_is_usage_error() {
    commit_guard!().assert().failure().code(2);
}

#[test]
fn log_file_receives_debug_events() {
    let fixture = TestFixture::new();
    fixture.create_config(EMPTY_CONFIG);

    commit_guard!()
        .current_dir(fixture.path())
        .env_remove("RUST_LOG")
        .args(["--log-file", "hook.log", "-q", "run", "pre-commit", "-c", CONFIG_FILE])
        .assert()
        .success();

    let log = fixture.read("hook.log");
    assert!(log.contains("Execution order"), "{log}");
}

#[test]
fn verbose_logs_to_stderr() {
    let fixture = TestFixture::new();
    fixture.create_config(EMPTY_CONFIG);

    commit_guard!()
        .current_dir(fixture.path())
        .env_remove("RUST_LOG")
        .args(["-v", "run", "pre-commit", "-c", CONFIG_FILE])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Loaded configuration"));
}

// =============================================================================
// Checks
// =============================================================================

#[test]
fn checks_lists_builtins() {
    commit_guard!()
        .arg("checks")
        .assert()
        .success()
        .stdout(predicate::str::contains("compile"))
        .stdout(predicate::str::contains("[pre-commit: after compile]"))
        .stdout(predicate::str::contains("file-size"))
        .stdout(predicate::str::contains("package-naming"))
        .stdout(predicate::str::contains("required-files"))
        .stdout(predicate::str::contains("always-fail"));
}

// =============================================================================
// Plan
// =============================================================================

#[test]
fn plan_shows_applicable_checks_per_path() {
    let fixture = TestFixture::new();
    fixture.create_config(POLICY_CONFIG);
    fixture.create_sized_file("lib/a.txt", 1);

    commit_guard!()
        .current_dir(fixture.path())
        .args(["plan", "pre-commit", "-c", CONFIG_FILE, "lib/a.txt", "vendor/b.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stage: pre-commit"))
        .stdout(predicate::str::contains("/ (1 file(s))\n  1. file-size - Limit file size"))
        .stdout(predicate::str::contains("/vendor (1 file(s))\n  no applicable checks"));
}

#[test]
fn plan_does_not_execute_checks() {
    let fixture = TestFixture::new();
    fixture.create_config("config1.path=/\nalwaysfail.enabled=true\n");

    commit_guard!()
        .current_dir(fixture.path())
        .args(["plan", "pre-commit", "-c", CONFIG_FILE])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. always-fail - Always fail"))
        .stdout(predicate::str::contains("error:").not());
}

// =============================================================================
// Config Validate
// =============================================================================

#[test]
fn config_validate_valid_config() {
    let fixture = TestFixture::new();
    fixture.create_config(POLICY_CONFIG);

    commit_guard!()
        .current_dir(fixture.path())
        .args(["config", "validate", "-c", CONFIG_FILE])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn config_validate_malformed_line() {
    let fixture = TestFixture::new();
    fixture.create_config("config1.path=/\nno separator here\n");

    commit_guard!()
        .current_dir(fixture.path())
        .args(["config", "validate", "-c", CONFIG_FILE])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Malformed property"));
}

#[test]
fn config_validate_missing_file() {
    let fixture = TestFixture::new();

    commit_guard!()
        .current_dir(fixture.path())
        .args(["config", "validate", "-c", "missing.properties"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing.properties"));
}
