use std::fs;

use clap::Parser;
use tempfile::TempDir;

use super::*;

fn plan_output(body: &str, extra: &[&str]) -> Result<String> {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("hook.properties");
    fs::write(&config, body).unwrap();
    let config_arg = config.to_string_lossy().into_owned();

    let mut args = vec!["commit-guard", "plan", "pre-commit", "-c", config_arg.as_str()];
    args.extend_from_slice(extra);
    let cli = Cli::try_parse_from(args).unwrap();
    let crate::cli::Commands::Plan(plan_args) = &cli.command else {
        panic!("expected plan command");
    };
    run_plan_impl(plan_args, &cli)
}

#[test]
fn lists_ordered_and_skipped_checks() {
    let rendered = plan_output(
        "run.id=fixed\n\
         config1.path=/src\n\
         compile.enabled=true\n\
         compile.command=make\n\
         style.enabled=true\n\
         style.command=lint\n\
         style.append_files=false\n",
        &[],
    )
    .unwrap();

    assert_eq!(
        rendered,
        "Stage: pre-commit (run fixed)\n\
         /src (0 file(s))\n  \
         1. compile - Compile sources\n  \
         2. style - Check code style (after compile)\n  \
         skipped: file-size, package-naming, required-files, always-fail\n"
    );
}

#[test]
fn quiet_omits_header_and_skips() {
    let rendered = plan_output("config1.path=/src\n", &["-q"]).unwrap();
    assert_eq!(rendered, "/src (0 file(s))\n  no applicable checks\n");
}

#[test]
fn counts_files_under_each_path() {
    let rendered = plan_output(
        "config1.path=/a\nconfig2.path=/b\n",
        &["-q", "a/x.c", "a/y.c", "b/z.c", "elsewhere/w.c"],
    )
    .unwrap();
    assert!(rendered.contains("/a (2 file(s))"));
    assert!(rendered.contains("/b (1 file(s))"));
}

#[test]
fn missing_path_key_is_error() {
    let err = plan_output("config1.compile.enabled=true\n", &[]).unwrap_err();
    assert_eq!(err.error_type(), "MissingPathKey");
}
