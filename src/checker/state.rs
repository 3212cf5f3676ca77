use std::any::Any;

/// Per-(check, path configuration) scratch space.
///
/// Filled by a check's applicability predicate and read back by its
/// `execute`. A fresh, empty state is created for every path
/// configuration, so nothing leaks between paths.
#[derive(Default)]
pub struct CheckState {
    value: Option<Box<dyn Any + Send>>,
}

impl CheckState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store<T: Any + Send>(&mut self, value: T) {
        self.value = Some(Box::new(value));
    }

    /// The stored value, if one of type `T` was stored.
    #[must_use]
    pub fn get<T: Any>(&self) -> Option<&T> {
        self.value.as_deref()?.downcast_ref()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

impl std::fmt::Debug for CheckState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckState")
            .field("populated", &self.value.is_some())
            .finish()
    }
}
