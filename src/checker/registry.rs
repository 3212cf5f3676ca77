use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{CommitGuardError, Result};
use crate::process::{CommandRunner, DuctRunner};

use super::builtin::register_builtin;
use super::{Check, CheckId};

/// Every known check, one instance per variant, in registration order.
///
/// Populated once at startup and read-only while checks run.
#[derive(Debug, Default)]
pub struct CheckRegistry {
    checks: Vec<Box<dyn Check>>,
    index: HashMap<CheckId, usize>,
}

impl CheckRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in check, running commands with `duct`.
    ///
    /// # Errors
    /// Returns `DuplicateCheck` if two built-in checks share an id.
    pub fn builtin() -> Result<Self> {
        Self::builtin_with_runner(Arc::new(DuctRunner))
    }

    /// Registry holding every built-in check, running commands with `runner`.
    ///
    /// # Errors
    /// Returns `DuplicateCheck` if two built-in checks share an id.
    pub fn builtin_with_runner(runner: Arc<dyn CommandRunner>) -> Result<Self> {
        let mut registry = Self::new();
        register_builtin(&mut registry, &runner)?;
        Ok(registry)
    }

    /// Add a check instance.
    ///
    /// # Errors
    /// Returns `DuplicateCheck` if a check with the same id is registered.
    pub fn register(&mut self, check: Box<dyn Check>) -> Result<()> {
        let id = check.id();
        if self.index.contains_key(id) {
            return Err(CommitGuardError::DuplicateCheck(id.to_string()));
        }
        tracing::trace!(check = id, "Registered check");
        self.index.insert(id, self.checks.len());
        self.checks.push(check);
        Ok(())
    }

    /// All registered checks. Callers must not rely on the order.
    #[must_use]
    pub fn all(&self) -> &[Box<dyn Check>] {
        &self.checks
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&dyn Check> {
        self.index.get(id).map(|&idx| self.checks[idx].as_ref())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
