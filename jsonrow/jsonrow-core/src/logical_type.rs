//! Declared column types and the column type string grammar.

use std::fmt;

use crate::error::SchemaError;

/// Declared target type of a schema column.
///
/// Resolved once from the type string when a decoder is built, so decoding
/// never compares type names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogicalType {
    Bool,
    I8,
    I32,
    I64,
    F32,
    F64,
    String,
    /// `array<...>`; the element type is not tracked.
    List,
    /// `map<...>`; the key/value types are not tracked.
    Map,
    /// Any other declared type, kept verbatim (lowercased).
    Other(String),
}

impl LogicalType {
    /// Resolve one type name such as `int`, `bigint` or `array<string>`.
    /// Unknown names become [`LogicalType::Other`].
    pub fn from_type_name(name: &str) -> Self {
        let name = name.trim().to_ascii_lowercase();
        match name.as_str() {
            "boolean" => Self::Bool,
            "tinyint" => Self::I8,
            "int" => Self::I32,
            "bigint" => Self::I64,
            "float" => Self::F32,
            "double" => Self::F64,
            "string" => Self::String,
            "array" => Self::List,
            "map" => Self::Map,
            _ if name.starts_with("array<") => Self::List,
            _ if name.starts_with("map<") => Self::Map,
            _ => Self::Other(name),
        }
    }

    /// Types whose textual JSON values go through the coercion table.
    pub fn is_text_coercible(&self) -> bool {
        matches!(
            self,
            Self::Bool | Self::I8 | Self::I32 | Self::I64 | Self::F32 | Self::F64
        )
    }

    pub fn type_name(&self) -> &str {
        match self {
            Self::Bool => "boolean",
            Self::I8 => "tinyint",
            Self::I32 => "int",
            Self::I64 => "bigint",
            Self::F32 => "float",
            Self::F64 => "double",
            Self::String => "string",
            Self::List => "array",
            Self::Map => "map",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Split a column type string into [`LogicalType`]s.
///
/// Entries are separated by `:` or `,` at nesting depth zero, so
/// `int:array<string>:map<string,int>:decimal(10,2)` yields four types.
/// A blank input yields no types.
pub fn parse_type_list(input: &str) -> Result<Vec<LogicalType>, SchemaError> {
    let invalid = |detail: String| SchemaError::InvalidTypeString {
        input: input.to_string(),
        detail,
    };

    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut types = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (pos, ch) in input.char_indices() {
        match ch {
            '<' | '(' => depth += 1,
            '>' | ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| invalid(format!("unbalanced '{ch}' at offset {pos}")))?;
            }
            ':' | ',' if depth == 0 => {
                types.push(parse_entry(&input[start..pos], types.len()).map_err(&invalid)?);
                start = pos + ch.len_utf8();
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(invalid("unclosed type parameter list".to_string()));
    }
    types.push(parse_entry(&input[start..], types.len()).map_err(&invalid)?);
    Ok(types)
}

fn parse_entry(entry: &str, index: usize) -> Result<LogicalType, String> {
    if entry.trim().is_empty() {
        return Err(format!("type {index} is empty"));
    }
    Ok(LogicalType::from_type_name(entry))
}
