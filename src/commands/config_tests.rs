use std::fs;

use tempfile::TempDir;

use super::*;

fn write(body: &str) -> (TempDir, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("hook.properties");
    fs::write(&path, body).unwrap();
    (temp, path)
}

#[test]
fn valid_configuration_passes() {
    let (_temp, path) = write(
        "# global\n\
         output.structured=false\n\
         config1.path=/src\n\
         config1.compile.enabled=true\n\
         config2.path=/docs\n",
    );
    assert!(run_config_validate_impl(&path).is_ok());
}

#[test]
fn malformed_line_is_rejected() {
    let (_temp, path) = write("config1.path=/src\nthis line is broken\n");
    let err = run_config_validate_impl(&path).unwrap_err();
    assert_eq!(err.error_type(), "PropertyParse");
}

#[test]
fn group_without_path_is_rejected() {
    let (_temp, path) = write("config1.path=/src\nconfig2.style.enabled=true\n");
    let err = run_config_validate_impl(&path).unwrap_err();
    assert!(matches!(err, crate::CommitGuardError::MissingPathKey { index: 2 }));
}

#[test]
fn missing_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    assert!(run_config_validate_impl(&temp.path().join("nope.properties")).is_err());
}
