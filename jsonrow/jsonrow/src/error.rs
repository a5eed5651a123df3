//! Error types for the JSON lines reader.

use jsonrow_arrow::ArrowConvertError;
use jsonrow_core::SchemaError;

/// Errors produced by [`JsonlReader`](crate::JsonlReader).
///
/// Malformed lines and columns are not errors; they are dropped or nulled by
/// the decoder and show up in [`ReadStats`](crate::ReadStats).
#[derive(Debug, thiserror::Error)]
pub enum JsonlReaderError {
    /// I/O error while opening, memory-mapping or reading the input.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The declared schema could not be turned into a decoder.
    #[error("invalid schema: {0}")]
    Schema(#[from] SchemaError),

    /// Decoded rows could not be converted into an Arrow record batch.
    #[error("record batch conversion failed: {0}")]
    Convert(#[from] ArrowConvertError),

    /// An error returned by the user-supplied callback in
    /// [`JsonlReader::for_each_record_batch`](crate::JsonlReader::for_each_record_batch).
    #[error(transparent)]
    Callback(Box<dyn std::error::Error + Send + Sync>),
}
