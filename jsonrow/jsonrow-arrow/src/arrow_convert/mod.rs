//! Conversion from decoded `Record` rows to Arrow `RecordBatch`.

mod append;
mod builder;
mod scalar;

use std::sync::Arc;

use arrow::array::ArrayRef;
use arrow::datatypes::{DataType, Schema};
use arrow::record_batch::{RecordBatch, RecordBatchOptions};
use jsonrow_core::{Record, Value};

use crate::error::ArrowConvertError;

/// Convert decoded rows to a RecordBatch with the given schema.
///
/// Values are placed leniently: a value that cannot be represented exactly in
/// its column type (e.g. the raw-line text in an `Int32` column, or `300` in
/// an `Int8` column) becomes null, and any scalar placed in a `Utf8` column is
/// rendered as text. Rows shorter than the schema are padded with nulls.
///
/// # Errors
/// Returns an error if `rows` is empty or the schema holds a data type that
/// is not produced by [`field_defs_to_arrow_schema`](crate::field_defs_to_arrow_schema).
pub fn records_to_record_batch(
    schema: &Schema,
    rows: &[Record],
) -> Result<RecordBatch, ArrowConvertError> {
    if rows.is_empty() {
        return Err(ArrowConvertError::EmptyRows);
    }

    let fields = schema.fields();
    let mut arrays: Vec<ArrayRef> = Vec::with_capacity(fields.len());

    for (i, field) in fields.iter().enumerate() {
        let values: Vec<&Value> = rows.iter().map(|r| extract_field(r, i)).collect();
        arrays.push(build_array_from_values(field.data_type(), &values)?);
    }

    let options = RecordBatchOptions::new().with_row_count(Some(rows.len()));
    Ok(RecordBatch::try_new_with_options(
        Arc::new(schema.clone()),
        arrays,
        &options,
    )?)
}

fn extract_field(row: &Record, field_index: usize) -> &Value {
    row.get(field_index).unwrap_or(&Value::Null)
}

fn build_array_from_values(
    dt: &DataType,
    values: &[&Value],
) -> Result<ArrayRef, ArrowConvertError> {
    let capacity = match dt {
        DataType::List(_) | DataType::Map(_, _) => values.len().saturating_mul(4),
        _ => values.len(),
    };
    let mut builder = builder::make_builder(dt, capacity)?;
    for value in values {
        append::append_value_to_builder(&mut builder, dt, value)?;
    }
    Ok(builder.finish())
}
