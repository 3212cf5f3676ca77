use std::collections::HashMap;
use std::path::Path;

use crate::config::Properties;

/// Property key prefix declaring an extra language: `language.<Name>=ext1,ext2`.
pub const CUSTOM_LANGUAGE_PREFIX: &str = "language.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub name: String,
    pub extensions: Vec<String>,
}

impl Language {
    #[must_use]
    pub fn new(name: &str, extensions: Vec<&str>) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.into_iter().map(String::from).collect(),
        }
    }
}

#[derive(Debug)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
    extension_map: HashMap<String, usize>,
}

impl LanguageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            languages: Vec::new(),
            extension_map: HashMap::new(),
        }
    }

    /// Add a language. Its extensions take over any earlier mapping.
    pub fn register(&mut self, language: Language) {
        let idx = self.languages.len();
        for ext in &language.extensions {
            self.extension_map.insert(ext.to_lowercase(), idx);
        }
        self.languages.push(language);
    }

    #[must_use]
    pub fn get_by_extension(&self, ext: &str) -> Option<&Language> {
        self.extension_map
            .get(&ext.to_lowercase())
            .map(|&idx| &self.languages[idx])
    }

    /// Language of `path`, judged by its extension.
    #[must_use]
    pub fn classify(&self, path: &Path) -> Option<&Language> {
        let ext = path.extension()?.to_str()?;
        self.get_by_extension(ext)
    }

    #[must_use]
    pub fn all(&self) -> &[Language] {
        &self.languages
    }

    /// Built-in languages plus every `language.<Name>` entry in `properties`.
    #[must_use]
    pub fn with_custom_languages(properties: &Properties) -> Self {
        let mut registry = Self::default();

        for (key, value) in properties {
            let Some(name) = key.strip_prefix(CUSTOM_LANGUAGE_PREFIX) else {
                continue;
            };
            let extensions: Vec<&str> = value
                .split(',')
                .map(|ext| ext.trim().trim_start_matches('.'))
                .filter(|ext| !ext.is_empty())
                .collect();
            if name.is_empty() || extensions.is_empty() {
                continue;
            }
            registry.register(Language::new(name, extensions));
        }

        registry
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        let mut registry = Self::new();

        registry.register(Language::new("Java", vec!["java"]));
        registry.register(Language::new("C", vec!["c", "h"]));
        registry.register(Language::new("C++", vec!["cpp", "hpp", "cc", "cxx", "hxx"]));
        registry.register(Language::new("Rust", vec!["rs"]));
        registry.register(Language::new("Go", vec!["go"]));
        registry.register(Language::new("Python", vec!["py", "pyi"]));
        registry.register(Language::new("JavaScript", vec!["js", "mjs", "cjs"]));
        registry.register(Language::new("TypeScript", vec!["ts", "mts", "cts", "tsx"]));

        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
