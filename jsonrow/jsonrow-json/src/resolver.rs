//! Column name to JSON key resolution.

use std::collections::HashMap;

use jsonrow_core::SchemaError;

/// Reserved column name whose value is the whole raw input line.
pub const RAW_LINE_COLUMN: &str = "json_value";

/// Where a column's value comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnKey {
    /// The entire raw input line, bypassing JSON lookup.
    RawLine,
    /// A top-level JSON key, already lowercased.
    Json(String),
}

/// Mapping from declared column name to the JSON key holding its value.
///
/// Built from a list of the form `jsonKey1>column1,jsonKey2>column2`.
/// Column names are matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameMap {
    by_column: HashMap<String, String>,
}

impl RenameMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a rename list. Blank entries are skipped; a later entry for the
    /// same column replaces an earlier one.
    pub fn parse(spec: &str) -> Result<Self, SchemaError> {
        let mut renames = Self::new();
        for entry in spec.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let invalid = || SchemaError::InvalidRename {
                entry: entry.to_string(),
            };
            let (json_key, column) = entry.split_once('>').ok_or_else(invalid)?;
            let (json_key, column) = (json_key.trim(), column.trim());
            if json_key.is_empty() || column.is_empty() || column.contains('>') {
                return Err(invalid());
            }
            renames.insert(column, json_key);
        }
        Ok(renames)
    }

    pub fn insert(&mut self, column: &str, json_key: &str) {
        self.by_column
            .insert(column.to_lowercase(), json_key.to_string());
    }

    /// JSON key for a declared column, if renamed.
    pub fn json_key(&self, column: &str) -> Option<&str> {
        self.by_column
            .get(&column.to_lowercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_column.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_column.is_empty()
    }
}

/// Resolve the source of a declared column.
///
/// The reserved [`RAW_LINE_COLUMN`] wins over any rename. The returned JSON
/// key is lowercased to match the lowercased keys of the parsed object.
pub fn resolve(declared: &str, renames: &RenameMap) -> ColumnKey {
    if declared.eq_ignore_ascii_case(RAW_LINE_COLUMN) {
        return ColumnKey::RawLine;
    }
    let key = renames.json_key(declared).unwrap_or(declared);
    ColumnKey::Json(key.to_lowercase())
}
