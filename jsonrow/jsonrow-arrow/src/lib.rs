//! Arrow integration layer for `jsonrow`.
//!
//! This crate converts:
//! 1. `jsonrow-core` row-shape descriptors (`FieldDefs`) to an Arrow `Schema`.
//! 2. Decoded `Record`s into an Arrow `RecordBatch`.
//!
//! List columns become `List<Utf8>` and map columns `Map<Utf8, Utf8>`, since
//! their contents are opaque. Columns declared with a type outside the
//! supported set become `Utf8`.
//!
//! # Typical Flow
//! ```rust
//! use jsonrow_arrow::{field_defs_to_arrow_schema, records_to_record_batch};
//! use jsonrow_core::{FieldDef, FieldDefs, LogicalType, Record, Value};
//!
//! let field_defs: FieldDefs = vec![FieldDef::new("id", LogicalType::I64)].into();
//! let schema = field_defs_to_arrow_schema(&field_defs);
//! let rows = vec![Record::from(vec![Value::I64(1)])];
//! let batch = records_to_record_batch(&schema, &rows).unwrap();
//! assert_eq!(batch.num_rows(), 1);
//! ```
pub mod arrow_convert;
pub mod error;
pub mod nested;
pub mod schema_convert;

/// Re-export of [`arrow_convert::records_to_record_batch`].
pub use arrow_convert::records_to_record_batch;
/// Re-export of [`error::ArrowConvertError`].
pub use error::ArrowConvertError;
/// Re-exports from [`nested`].
pub use nested::{NestedPolicy, apply_nested_policy};
/// Re-export of [`schema_convert::field_defs_to_arrow_schema`].
pub use schema_convert::field_defs_to_arrow_schema;
