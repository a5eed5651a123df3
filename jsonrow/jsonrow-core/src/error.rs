//! Error types shared by decoders and their hosts.

/// Setup-time error returned while building a decoder from a schema.
///
/// These are the only failures that are fatal to a decoder; everything that
/// goes wrong while decoding a line is recovered inside the decode call.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Column name list and column type list have different lengths.
    #[error("schema has {names} column names but {types} column types")]
    ArityMismatch { names: usize, types: usize },

    /// A column name was empty after splitting the column list.
    #[error("column {index} has an empty name")]
    EmptyColumnName { index: usize },

    /// Two columns share the same name (compared case-insensitively).
    #[error("duplicate column name '{name}'")]
    DuplicateColumn { name: String },

    /// The column type string could not be split into type names.
    #[error("invalid column type string '{input}': {detail}")]
    InvalidTypeString { input: String, detail: String },

    /// A rename entry is not of the form `jsonKey>columnName`.
    #[error("invalid rename entry '{entry}': expected 'jsonKey>columnName'")]
    InvalidRename { entry: String },

    /// A required table property is not set.
    #[error("missing table property '{key}'")]
    MissingProperty { key: String },
}

/// Per-line and per-column decode failures.
///
/// A decoder never lets one of these escape
/// [`LineDecoder::decode`](crate::LineDecoder::decode): line errors turn into an absent record,
/// column errors into a null value, element errors into diagnostic text.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The raw line is not valid JSON or not a JSON object.
    #[error("line is not a valid JSON object: {detail}")]
    LineParse { detail: String },

    /// The value for a column is missing or has the wrong structural shape.
    #[error("column '{column}' (key '{key}'): {detail}")]
    ColumnLookup {
        column: String,
        key: String,
        detail: String,
    },

    /// A textual value declared as numeric did not parse.
    #[error("column '{column}': {source}")]
    MalformedNumber {
        column: String,
        #[source]
        source: CoerceError,
    },

    /// One element of an array could not be converted.
    #[error("array element {index}: {detail}")]
    ArrayElement { index: usize, detail: String },
}

/// Failure converting a textual value into a primitive logical type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoerceError {
    #[error("malformed {type_name} value '{raw}'")]
    MalformedNumber {
        type_name: &'static str,
        raw: String,
    },

    #[error("no text coercion for type {type_name}")]
    Unsupported { type_name: String },
}

/// Error returned by the `Value::try_*` accessors on a shape mismatch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected}, got {actual}")]
pub struct ValueTypeError {
    pub expected: String,
    pub actual: String,
}

impl ValueTypeError {
    pub fn new(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}
