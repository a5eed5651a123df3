//! Conversion of JSON arrays and objects into [`Value::List`] / [`Value::Map`].
//!
//! The two directions are deliberately asymmetric: [`to_list`] keeps nested
//! structure (objects become maps, arrays become lists) while [`to_map`]
//! flattens every value to its text.

use jsonrow_core::{DecodeError, Value};
use serde_json::{Map, Number, Value as JsonValue};

/// Convert a JSON array into a [`Value::List`], preserving element order.
///
/// `depth` is the nesting level of `items` itself (1 for a column value).
/// An element nested deeper than `max_depth` does not fail the list; its slot
/// holds the error message instead.
pub fn to_list(items: &[JsonValue], depth: usize, max_depth: usize) -> Value {
    let values = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            element_to_value(item, depth + 1, max_depth).unwrap_or_else(|detail| {
                let err = DecodeError::ArrayElement { index, detail };
                tracing::debug!(error = %err, "array element replaced by diagnostic text");
                Value::string(err.to_string())
            })
        })
        .collect();
    Value::List(values)
}

/// Convert a JSON object into a [`Value::Map`] of string keys to stringified
/// values, in source order. Nested values are not converted further.
pub fn to_map(object: &Map<String, JsonValue>) -> Value {
    let entries = object
        .iter()
        .map(|(key, value)| (Value::string(key), Value::string(stringify(value))))
        .collect();
    Value::Map(entries)
}

/// Generic to-string conversion: strings verbatim, `null` as `"null"`,
/// everything else as compact JSON text.
pub fn stringify(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Convert a JSON value without any declared target type.
pub fn native_value(value: &JsonValue, max_depth: usize) -> Value {
    match value {
        JsonValue::Array(items) => to_list(items, 1, max_depth),
        JsonValue::Object(object) => to_map(object),
        scalar => scalar_value(scalar),
    }
}

/// Integers that fit `i64` stay integral; other numbers become `F64`.
pub fn number_value(n: &Number) -> Value {
    match n.as_i64() {
        Some(v) => Value::I64(v),
        None => n.as_f64().map_or(Value::Null, Value::F64),
    }
}

fn scalar_value(value: &JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => number_value(n),
        JsonValue::String(s) => Value::string(s),
        composite => Value::string(stringify(composite)),
    }
}

fn element_to_value(item: &JsonValue, depth: usize, max_depth: usize) -> Result<Value, String> {
    match item {
        JsonValue::Array(_) | JsonValue::Object(_) if depth > max_depth => Err(format!(
            "nesting depth {depth} exceeds the maximum of {max_depth}"
        )),
        JsonValue::Array(items) => Ok(to_list(items, depth, max_depth)),
        JsonValue::Object(object) => Ok(to_map(object)),
        scalar => Ok(scalar_value(scalar)),
    }
}
