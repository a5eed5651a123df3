//! Row-shape descriptor handed to hosts.

mod format;
mod types;

pub use format::format_field_defs;
pub use types::{FieldDef, FieldDefs};
