//! Text-to-primitive coercion table.
//!
//! Used when a JSON value is a string but the column is declared numeric or
//! boolean, e.g. `{"count": "12"}` for an `int` column.

use std::str::FromStr;

use jsonrow_core::{CoerceError, LogicalType, Value};

/// Textual null marker, matched case-insensitively before any parser runs.
pub const NULL_LITERAL: &str = "null";

type FieldParser = fn(&str) -> Result<Value, CoerceError>;

/// Coerce `raw` into `target`.
///
/// `"null"` in any case yields [`Value::Null`]. Non-primitive targets return
/// [`CoerceError::Unsupported`].
pub fn coerce(raw: &str, target: &LogicalType) -> Result<Value, CoerceError> {
    let parser = parser_for(target).ok_or_else(|| CoerceError::Unsupported {
        type_name: target.type_name().to_string(),
    })?;
    if raw.eq_ignore_ascii_case(NULL_LITERAL) {
        return Ok(Value::Null);
    }
    parser(raw)
}

fn parser_for(target: &LogicalType) -> Option<FieldParser> {
    let parser: FieldParser = match target {
        LogicalType::I8 => parse_i8,
        LogicalType::I32 => parse_i32,
        LogicalType::I64 => parse_i64,
        LogicalType::F32 => parse_f32,
        LogicalType::F64 => parse_f64,
        LogicalType::Bool => parse_bool,
        _ => return None,
    };
    Some(parser)
}

fn malformed(type_name: &'static str, raw: &str) -> CoerceError {
    CoerceError::MalformedNumber {
        type_name,
        raw: raw.to_string(),
    }
}

fn parse_i8(raw: &str) -> Result<Value, CoerceError> {
    raw.parse().map(Value::I8).map_err(|_| malformed("tinyint", raw))
}

fn parse_i32(raw: &str) -> Result<Value, CoerceError> {
    raw.parse().map(Value::I32).map_err(|_| malformed("int", raw))
}

fn parse_i64(raw: &str) -> Result<Value, CoerceError> {
    raw.parse().map(Value::I64).map_err(|_| malformed("bigint", raw))
}

// Float literals tolerate surrounding whitespace; integer literals do not.
fn parse_f32(raw: &str) -> Result<Value, CoerceError> {
    parse_float_literal(raw)
        .map(Value::F32)
        .ok_or_else(|| malformed("float", raw))
}

fn parse_f64(raw: &str) -> Result<Value, CoerceError> {
    parse_float_literal(raw)
        .map(Value::F64)
        .ok_or_else(|| malformed("double", raw))
}

fn parse_float_literal<T: Float>(raw: &str) -> Option<T> {
    let text = raw.trim();
    match text {
        "Infinity" | "+Infinity" => Some(T::INFINITY),
        "-Infinity" => Some(T::NEG_INFINITY),
        "NaN" => Some(T::NAN),
        // `FromStr` also takes "inf"/"nan" spellings; only the literal forms
        // above are accepted.
        _ if text.bytes().any(|b| b.is_ascii_alphabetic() && !matches!(b, b'e' | b'E')) => None,
        _ => text.parse().ok(),
    }
}

trait Float: FromStr {
    const INFINITY: Self;
    const NEG_INFINITY: Self;
    const NAN: Self;
}

impl Float for f32 {
    const INFINITY: Self = f32::INFINITY;
    const NEG_INFINITY: Self = f32::NEG_INFINITY;
    const NAN: Self = f32::NAN;
}

impl Float for f64 {
    const INFINITY: Self = f64::INFINITY;
    const NEG_INFINITY: Self = f64::NEG_INFINITY;
    const NAN: Self = f64::NAN;
}

/// Anything other than a case-insensitive `"true"` is `false`.
fn parse_bool(raw: &str) -> Result<Value, CoerceError> {
    Ok(Value::Bool(raw.eq_ignore_ascii_case("true")))
}
