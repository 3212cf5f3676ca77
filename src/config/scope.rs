use std::str::FromStr;

use super::properties::Properties;

/// A layer of configuration properties with an optional fallback layer.
///
/// Lookups consult the scope's own mapping first, then the parent scope,
/// then the caller-supplied default. A missing key is never an error.
pub trait PropertyScope {
    /// Properties defined directly on this scope.
    fn properties(&self) -> &Properties;

    /// Scope consulted when a key is absent here.
    fn parent_scope(&self) -> Option<&dyn PropertyScope> {
        None
    }

    /// Raw value of `key`, cascading to the parent scope.
    fn lookup(&self, key: &str) -> Option<&str> {
        self.properties()
            .get(key)
            .map(String::as_str)
            .or_else(|| self.parent_scope().and_then(|parent| parent.lookup(key)))
    }

    fn get_string(&self, key: &str, default: &str) -> String {
        self.lookup(key).unwrap_or(default).to_string()
    }

    /// Every value of `key` from this scope outward, most specific first.
    fn lookup_chain(&self, key: &str) -> Vec<&str> {
        let mut chain: Vec<&str> = self
            .properties()
            .get(key)
            .map(String::as_str)
            .into_iter()
            .collect();
        if let Some(parent) = self.parent_scope() {
            chain.extend(parent.lookup_chain(key));
        }
        chain
    }

    /// Case-insensitive `true`/`false`. Any other stored value is treated
    /// as absent and the cascade continues.
    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.lookup_chain(key)
            .into_iter()
            .find_map(parse_bool)
            .unwrap_or(default)
    }

    /// Value parsed with `FromStr`; unparsable values cascade like booleans.
    fn get_parsed<T: FromStr>(&self, key: &str, default: T) -> T
    where
        Self: Sized,
    {
        self.lookup_chain(key)
            .into_iter()
            .find_map(|raw| raw.trim().parse().ok())
            .unwrap_or(default)
    }

    /// Comma-separated list with items trimmed and empty items dropped.
    fn get_list(&self, key: &str) -> Vec<String> {
        self.lookup(key)
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl PropertyScope for Properties {
    fn properties(&self) -> &Properties {
        self
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    let value = raw.trim();
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "scope_tests.rs"]
mod tests;
