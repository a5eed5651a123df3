//! Handling of `List` / `Map` columns for writers that only accept flat
//! columns (e.g. CSV).

use std::str::FromStr;

use arrow::datatypes::DataType;
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;

/// Policy for [`DataType::List`] and [`DataType::Map`] columns in
/// [`apply_nested_policy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NestedPolicy {
    /// Drop the column entirely (e.g. for CSV output).
    Drop,
    /// Pass the column through unchanged (e.g. for Parquet output).
    #[default]
    Keep,
}

impl FromStr for NestedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drop" => Ok(Self::Drop),
            "keep" => Ok(Self::Keep),
            other => Err(format!(
                "invalid nested policy '{other}', expected drop | keep"
            )),
        }
    }
}

/// Apply `policy` to every nested column of `batch`.
///
/// Dropped column names are returned as the second element of the tuple.
///
/// # Errors
///
/// Propagates [`ArrowError`] from projecting the batch.
pub fn apply_nested_policy(
    batch: &RecordBatch,
    policy: NestedPolicy,
) -> Result<(RecordBatch, Vec<String>), ArrowError> {
    if policy == NestedPolicy::Keep {
        return Ok((batch.clone(), Vec::new()));
    }

    let schema = batch.schema();
    let mut kept = Vec::with_capacity(schema.fields().len());
    let mut dropped = Vec::new();
    for (i, field) in schema.fields().iter().enumerate() {
        if is_nested(field.data_type()) {
            dropped.push(field.name().clone());
        } else {
            kept.push(i);
        }
    }

    Ok((batch.project(&kept)?, dropped))
}

fn is_nested(dt: &DataType) -> bool {
    matches!(
        dt,
        DataType::List(_)
            | DataType::LargeList(_)
            | DataType::FixedSizeList(_, _)
            | DataType::Map(_, _)
            | DataType::Struct(_)
    )
}
