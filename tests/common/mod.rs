#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the commit-guard binary.
#[macro_export]
macro_rules! commit_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("commit-guard"))
    };
}

/// A temporary repository with a hook property file.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a file of `size` bytes.
    pub fn create_sized_file(&self, relative_path: &str, size: usize) {
        self.create_file(relative_path, &"x".repeat(size));
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `hook.properties` at the repository root.
    pub fn create_config(&self, content: &str) {
        self.create_file(CONFIG_FILE, content);
    }

    /// Reads a file from the temp directory.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

pub const CONFIG_FILE: &str = "hook.properties";

/// One path configuration with no checks enabled.
pub const EMPTY_CONFIG: &str = "\
# no checks enabled
config1.path=/src
";

/// Limits file size everywhere except under `/vendor`.
pub const POLICY_CONFIG: &str = "\
filesize.enabled=true
filesize.max_bytes=100
config1.path=/
config2.path=/vendor
config2.filesize.enabled=false
";

/// Rejects every commit.
pub const FROZEN_CONFIG: &str = "\
config1.path=/
config1.alwaysfail.enabled=true
config1.alwaysfail.message=frozen for release
";
