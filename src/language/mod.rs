mod registry;

pub use registry::{CUSTOM_LANGUAGE_PREFIX, Language, LanguageRegistry};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
