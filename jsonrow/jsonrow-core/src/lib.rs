//! Host-facing core types and decoder contracts for `jsonrow`.
//!
//! This crate provides the row-shape descriptor ([`FieldDefs`] /
//! [`LogicalType`]), the decoded value representation ([`Value`] / [`Record`])
//! and the [`LineDecoder`] trait implemented by concrete line decoders.

mod decoder;
mod error;
mod logical_type;
mod record;
mod schema;
mod value;

pub use decoder::LineDecoder;
pub use error::{CoerceError, DecodeError, SchemaError, ValueTypeError};
pub use logical_type::{LogicalType, parse_type_list};
pub use record::Record;
pub use schema::{FieldDef, FieldDefs, format_field_defs};
pub use value::Value;
