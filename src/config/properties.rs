use std::path::Path;

use indexmap::IndexMap;

use crate::error::{CommitGuardError, Result};

/// Flat key/value mapping in the order keys were first seen.
pub type Properties = IndexMap<String, String>;

/// Read and parse a property file.
///
/// # Errors
/// Returns an error if the file cannot be read or contains a malformed line.
pub fn load_properties(path: &Path) -> Result<Properties> {
    let content = std::fs::read_to_string(path).map_err(|source| CommitGuardError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_properties(&content, path)
}

/// Parse `key=value` / `key: value` text.
///
/// Blank lines and lines starting with `#` or `!` are skipped. An unescaped
/// trailing backslash joins the next line onto the current value. A later
/// duplicate key replaces the earlier value but keeps its original position.
///
/// # Errors
/// Returns `PropertyParse` for a line that has no separator or an empty key.
pub fn parse_properties(content: &str, origin: &Path) -> Result<Properties> {
    let mut properties = Properties::new();
    let mut lines = content.lines().enumerate();

    while let Some((index, raw)) = lines.next() {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }

        let line_number = index + 1;
        let mut logical = trimmed.to_string();
        while continues(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start()),
                None => break,
            }
        }

        let (key, value) = split_entry(&logical).ok_or_else(|| CommitGuardError::PropertyParse {
            path: origin.to_path_buf(),
            line: line_number,
            content: trimmed.to_string(),
        })?;
        properties.insert(key.to_string(), value.to_string());
    }

    Ok(properties)
}

/// An odd run of trailing backslashes ends in an unescaped continuation.
fn continues(line: &str) -> bool {
    line.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

fn split_entry(line: &str) -> Option<(&str, &str)> {
    let separator = line.find(['=', ':'])?;
    let key = line[..separator].trim();
    if key.is_empty() {
        return None;
    }
    Some((key, line[separator + 1..].trim()))
}

#[cfg(test)]
#[path = "properties_tests.rs"]
mod tests;
