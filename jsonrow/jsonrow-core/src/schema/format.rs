use std::fmt::{Error, Write as _};

use super::FieldDef;

/// Format field definitions one column per line, as `name: type`.
/// The name column is padded so the types line up.
pub fn format_field_defs(fields: impl AsRef<[FieldDef]>) -> Result<String, Error> {
    let fields = fields.as_ref();
    let width = fields.iter().map(|f| f.name.len()).max().unwrap_or(0);
    let mut out = String::new();

    for field in fields {
        let label = format!("{}:", field.name);
        writeln!(out, "{label:<w$} {}", field.logical_type, w = width + 1)?;
    }

    Ok(out)
}
