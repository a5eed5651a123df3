//! Decoder trait implemented by concrete line formats.

use crate::{record::Record, schema::FieldDefs};

/// Schema-bound decoder turning one raw input line into a [`Record`].
///
/// Implementations are built once per schema and reused for every line.
/// `decode` takes `&self`, so a decoder can be shared between threads.
pub trait LineDecoder: Send + Sync {
    /// Decode one line. `None` means the line is dropped.
    fn decode(&self, line: &str) -> Option<Record>;

    /// Row-shape descriptor: declared columns in record order.
    fn field_defs(&self) -> &FieldDefs;
}
