use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;

use crate::output::OutputMode;

use super::global::GlobalSettings;
use super::properties::Properties;
use super::scope::PropertyScope;
use super::stage::Stage;

/// A repository sub-tree with its own property overrides and the commit
/// files that fall under it.
#[derive(Debug)]
pub struct PathConfig {
    path: String,
    properties: Properties,
    global: Arc<GlobalSettings>,
    files: Vec<PathBuf>,
    files_by_language: IndexMap<String, Vec<PathBuf>>,
}

impl PathConfig {
    /// Build a path configuration, partitioning `files` by language.
    #[must_use]
    pub fn new(
        path: String,
        properties: Properties,
        global: Arc<GlobalSettings>,
        files: Vec<PathBuf>,
    ) -> Self {
        let mut files_by_language: IndexMap<String, Vec<PathBuf>> = IndexMap::new();
        for file in &files {
            if let Some(language) = global.languages().classify(file) {
                files_by_language
                    .entry(language.name.clone())
                    .or_default()
                    .push(file.clone());
            }
        }

        Self {
            path,
            properties,
            global,
            files,
            files_by_language,
        }
    }

    /// The configured path, as written in the property file.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Commit files assigned to this path, repository-relative.
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Commit files recognized as `language` (e.g. `"Java"`).
    #[must_use]
    pub fn files_of_language(&self, language: &str) -> &[PathBuf] {
        self.files_by_language
            .get(language)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Languages present among this path's files, in first-seen order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.files_by_language.keys().map(String::as_str)
    }

    #[must_use]
    pub fn global(&self) -> &GlobalSettings {
        &self.global
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.global.stage()
    }

    #[must_use]
    pub fn run_id(&self) -> &str {
        self.global.run_id()
    }

    #[must_use]
    pub fn output_mode(&self) -> OutputMode {
        self.global.output_mode()
    }

    #[must_use]
    pub fn temp_dir(&self) -> &Path {
        self.global.temp_dir()
    }

    /// Directory this configuration governs on disk.
    #[must_use]
    pub fn root(&self) -> PathBuf {
        let mut root = self.global.repo_root().to_path_buf();
        root.extend(path_components(&self.path));
        root
    }

    /// Resolve `relative` against this configuration's root directory.
    #[must_use]
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.root().join(relative)
    }

    /// Location on disk of a repository-relative commit file.
    #[must_use]
    pub fn repo_file(&self, file: &Path) -> PathBuf {
        self.global.repo_root().join(normalize(file))
    }

    /// `file` with this configuration's path prefix removed.
    #[must_use]
    pub fn relative_to_root(&self, file: &Path) -> PathBuf {
        let prefix_len = path_components(&self.path).len();
        normalize(file).components().skip(prefix_len).collect()
    }
}

impl PropertyScope for PathConfig {
    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn parent_scope(&self) -> Option<&dyn PropertyScope> {
        Some(&*self.global)
    }
}

/// Assign each file to the most specific (longest) matching prefix.
///
/// Returns one file list per prefix, in the same order. Prefixes are
/// compared by whole path components, so `/src` matches `src/a.c` but not
/// `srcgen/a.c`. On equal length the earlier prefix wins. Files matching no
/// prefix are dropped.
#[must_use]
pub fn assign_files(prefixes: &[&str], files: &[PathBuf]) -> Vec<Vec<PathBuf>> {
    let split: Vec<Vec<&str>> = prefixes.iter().map(|p| path_components(p)).collect();
    let mut assigned = vec![Vec::new(); prefixes.len()];

    for file in files {
        let normalized = normalize(file);
        let file_components: Vec<_> = normalized
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();

        let best = split
            .iter()
            .enumerate()
            .filter(|(_, prefix)| {
                prefix.len() <= file_components.len()
                    && prefix
                        .iter()
                        .zip(&file_components)
                        .all(|(want, have)| *want == have.as_str())
            })
            .fold(None, |best: Option<(usize, usize)>, (index, prefix)| match best {
                Some((_, len)) if len >= prefix.len() => best,
                _ => Some((index, prefix.len())),
            });

        if let Some((index, _)) = best {
            assigned[index].push(file.clone());
        }
    }

    assigned
}

fn path_components(path: &str) -> Vec<&str> {
    path.split(['/', '\\'])
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect()
}

/// Strip root, prefix, and `.` components so commit paths compare uniformly.
fn normalize(file: &Path) -> PathBuf {
    file.components()
        .filter(|component| matches!(component, Component::Normal(_) | Component::ParentDir))
        .collect()
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
