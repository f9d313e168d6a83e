//! Label remap table.
//!
//! The table is read from a C++ source file that assigns fix-ups for known
//! label irregularities, one per line:
//!
//! ```cpp
//! capitalize_string_remaps["Msaa"] = "MSAA";
//! ```

use std::{fs, io::ErrorKind, path::Path, sync::LazyLock};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use regex::Regex;

static REMAP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"capitalize_string_remaps\["(.+)"\] = "(.+)";"#).unwrap()
});

/// Literal substring replacements applied to normalized labels.
///
/// Keeps insertion order. Re-inserting a key updates its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemapTable {
    entries: IndexMap<String, String>,
}

impl RemapTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from the text of the collaborator file.
    pub fn parse(source: &str) -> Self {
        let mut table = Self::new();
        for line in source.lines() {
            if let Some(captures) = REMAP_REGEX.captures(line) {
                table.insert(&captures[1], &captures[2]);
            }
        }
        table
    }

    /// Load the table from `path`.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(Self::parse(&content))),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err)
                .with_context(|| format!("Failed to read remap table: {}", path.display())),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Replace every occurrence of every key, in table order.
    pub fn apply(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (key, value) in &self.entries {
            if result.contains(key.as_str()) {
                result = result.replace(key.as_str(), value);
            }
        }
        result
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
