use arrow::{datatypes::DataType, error::ArrowError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArrowConvertError {
    #[error("Cannot create RecordBatch from empty rows")]
    EmptyRows,
    #[error("unsupported Arrow data type for record conversion: {0}")]
    UnsupportedType(DataType),
    #[error(transparent)]
    Arrow(#[from] ArrowError),
}
