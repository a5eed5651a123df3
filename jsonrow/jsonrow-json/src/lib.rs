//! JSON [`LineDecoder`] implementation for the jsonrow pipeline.
//!
//! [`JsonRowDecoder`] decodes one line of JSON text into a positional
//! [`Record`] aligned to a declared schema, coercing textual values into the
//! declared column types. Bad input is absorbed at the narrowest scope:
//! an unparsable line is dropped, a bad column becomes null and a bad array
//! element becomes diagnostic text.
//!
//! ```rust
//! use jsonrow_core::Value;
//! use jsonrow_json::JsonRowDecoder;
//!
//! let decoder = JsonRowDecoder::init("id,name", "int:string", None).unwrap();
//! let record = decoder.decode(r#"{"ID": "42", "name": "ada"}"#).unwrap();
//! assert_eq!(record.as_slice(), &[Value::I32(42), Value::string("ada")]);
//! ```
//!
//! [`LineDecoder`]: jsonrow_core::LineDecoder
//! [`Record`]: jsonrow_core::Record

pub mod coerce;
mod decoder;
mod properties;
pub mod resolver;
pub mod tree;

pub use decoder::JsonRowDecoder;
pub use properties::{
    COLUMN_NAMES_PROPERTY, COLUMN_TYPES_PROPERTY, DecoderOptions, RENAME_COLUMNS_PROPERTY,
};
pub use resolver::{ColumnKey, RAW_LINE_COLUMN, RenameMap};
