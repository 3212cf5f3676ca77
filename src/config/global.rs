use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use sha2::{Digest, Sha256};

use crate::error::{CommitGuardError, Result};
use crate::language::LanguageRegistry;
use crate::output::OutputMode;

use super::path::{PathConfig, assign_files};
use super::properties::{Properties, load_properties};
use super::scope::PropertyScope;
use super::stage::Stage;

pub const KEY_STRUCTURED_OUTPUT: &str = "output.structured";
pub const KEY_OUTPUT_FILE: &str = "output.file";
pub const KEY_TEMP_DIR: &str = "temp.dir";
pub const KEY_RUN_ID: &str = "run.id";
pub const KEY_REPO_ROOT: &str = "repo.root";

const PATH_GROUP_PREFIX: &str = "config";
const PATH_KEY: &str = "path";
const RUN_ID_LEN: usize = 16;

/// Settings shared by every path configuration of one hook invocation.
///
/// Immutable once built. Path configurations hold a shared handle to it and
/// use it only for fallback lookups.
#[derive(Debug)]
pub struct GlobalSettings {
    properties: Properties,
    run_id: String,
    stage: Stage,
    output_mode: OutputMode,
    output_file: Option<PathBuf>,
    temp_dir: PathBuf,
    repo_root: PathBuf,
    languages: LanguageRegistry,
}

impl GlobalSettings {
    fn from_properties(properties: Properties, stage: Stage) -> Self {
        let output_mode = if properties.get_bool(KEY_STRUCTURED_OUTPUT, false) {
            OutputMode::Structured
        } else {
            OutputMode::Plain
        };
        let output_file = properties
            .lookup(KEY_OUTPUT_FILE)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        let temp_dir = properties
            .lookup(KEY_TEMP_DIR)
            .filter(|value| !value.is_empty())
            .map_or_else(std::env::temp_dir, PathBuf::from);
        let repo_root = PathBuf::from(properties.get_string(KEY_REPO_ROOT, "."));
        let run_id = properties
            .lookup(KEY_RUN_ID)
            .filter(|value| !value.is_empty())
            .map_or_else(generate_run_id, String::from);
        let languages = LanguageRegistry::with_custom_languages(&properties);

        Self {
            properties,
            run_id,
            stage,
            output_mode,
            output_file,
            temp_dir,
            repo_root,
            languages,
        }
    }

    #[must_use]
    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub const fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    #[must_use]
    pub fn output_file(&self) -> Option<&Path> {
        self.output_file.as_deref()
    }

    #[must_use]
    pub fn temp_dir(&self) -> &Path {
        &self.temp_dir
    }

    #[must_use]
    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    #[must_use]
    pub const fn languages(&self) -> &LanguageRegistry {
        &self.languages
    }
}

impl PropertyScope for GlobalSettings {
    fn properties(&self) -> &Properties {
        &self.properties
    }
}

/// Configuration for one hook invocation: global settings plus the ordered
/// path-scoped overrides, each holding the commit files that fall under it.
#[derive(Debug)]
pub struct GlobalConfig {
    settings: Arc<GlobalSettings>,
    paths: Vec<PathConfig>,
}

impl GlobalConfig {
    /// Load a property file and build the configuration for `stage`.
    ///
    /// `overrides` are applied on top of the file's global properties.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or a path
    /// group lacks its path key.
    pub fn load(
        path: &Path,
        stage: Stage,
        files: &[PathBuf],
        overrides: &Properties,
    ) -> Result<Self> {
        let mut properties = load_properties(path)?;
        for (key, value) in overrides {
            properties.insert(key.clone(), value.clone());
        }
        Self::from_properties(properties, stage, files)
    }

    /// Build the configuration from already-parsed properties.
    ///
    /// Keys of the form `config<N>.<name>` are grouped into path
    /// configurations ordered by `N`; all other keys are global.
    ///
    /// # Errors
    /// Returns `MissingPathKey` if a group has no `config<N>.path`.
    pub fn from_properties(
        properties: Properties,
        stage: Stage,
        files: &[PathBuf],
    ) -> Result<Self> {
        let (global, groups) = split_path_groups(properties);
        let settings = Arc::new(GlobalSettings::from_properties(global, stage));

        let mut scoped = Vec::with_capacity(groups.len());
        for (index, group) in groups {
            let path = group
                .get(PATH_KEY)
                .cloned()
                .ok_or(CommitGuardError::MissingPathKey { index })?;
            scoped.push((path, group));
        }

        let prefixes: Vec<&str> = scoped.iter().map(|(path, _)| path.as_str()).collect();
        let assigned = assign_files(&prefixes, files);

        let paths = scoped
            .into_iter()
            .zip(assigned)
            .map(|((path, group), files)| {
                PathConfig::new(path, group, Arc::clone(&settings), files)
            })
            .collect();

        Ok(Self { settings, paths })
    }

    #[must_use]
    pub fn settings(&self) -> &GlobalSettings {
        &self.settings
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.settings.stage()
    }

    #[must_use]
    pub fn run_id(&self) -> &str {
        self.settings.run_id()
    }

    #[must_use]
    pub fn output_mode(&self) -> OutputMode {
        self.settings.output_mode()
    }

    #[must_use]
    pub fn path_configs(&self) -> &[PathConfig] {
        &self.paths
    }
}

impl PropertyScope for GlobalConfig {
    fn properties(&self) -> &Properties {
        self.settings.properties()
    }
}

/// Separate unscoped keys from `config<N>.<name>` groups.
fn split_path_groups(properties: Properties) -> (Properties, BTreeMap<u32, Properties>) {
    let mut global = Properties::new();
    let mut groups: BTreeMap<u32, Properties> = BTreeMap::new();

    for (key, value) in properties {
        match parse_group_key(&key) {
            Some((index, name)) => {
                groups
                    .entry(index)
                    .or_default()
                    .insert(name.to_string(), value);
            }
            None => {
                global.insert(key, value);
            }
        }
    }

    (global, groups)
}

fn parse_group_key(key: &str) -> Option<(u32, &str)> {
    let rest = key.strip_prefix(PATH_GROUP_PREFIX)?;
    let (index, name) = rest.split_once('.')?;
    if index.is_empty() || name.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((index.parse().ok()?, name))
}

fn generate_run_id() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    let mut hasher = Sha256::new();
    hasher.update(nanos.to_le_bytes());
    hasher.update(std::process::id().to_le_bytes());
    let mut id = format!("{:x}", hasher.finalize());
    id.truncate(RUN_ID_LEN);
    id
}

#[cfg(test)]
#[path = "global_tests.rs"]
mod tests;
