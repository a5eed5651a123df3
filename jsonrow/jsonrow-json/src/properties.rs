//! Decoder configuration.

/// Table property holding the comma-separated column names.
pub const COLUMN_NAMES_PROPERTY: &str = "columns";

/// Table property holding the column type string.
pub const COLUMN_TYPES_PROPERTY: &str = "columns.types";

/// Table property holding the optional `jsonKey>column` rename list.
pub const RENAME_COLUMNS_PROPERTY: &str = "rename_columns";

/// Tunables for [`JsonRowDecoder`](crate::JsonRowDecoder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderOptions {
    /// Deepest array/object nesting converted inside list columns. Deeper
    /// elements are replaced by diagnostic text.
    pub max_nesting_depth: usize,
}

impl DecoderOptions {
    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_nesting_depth: 64,
        }
    }
}
