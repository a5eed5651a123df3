use std::borrow::Cow;

use arrow::datatypes::DataType;
use jsonrow_core::Value;

pub(super) enum ScalarValue<'a> {
    Boolean(Option<bool>),
    Int8(Option<i8>),
    Int32(Option<i32>),
    Int64(Option<i64>),
    Float32(Option<f32>),
    Float64(Option<f64>),
    Utf8(Option<Cow<'a, str>>),
}

/// Scalar view of `value` for a primitive column type, or `None` if `dt` is
/// not primitive.
pub(super) fn scalar_value_for_datatype<'a>(
    dt: &DataType,
    value: &'a Value,
) -> Option<ScalarValue<'a>> {
    Some(match dt {
        DataType::Boolean => ScalarValue::Boolean(value.as_bool()),
        DataType::Int8 => ScalarValue::Int8(value.as_i8()),
        DataType::Int32 => ScalarValue::Int32(value.as_i32()),
        DataType::Int64 => ScalarValue::Int64(value.as_i64()),
        DataType::Float32 => ScalarValue::Float32(value.as_f32()),
        DataType::Float64 => ScalarValue::Float64(value.as_f64()),
        DataType::Utf8 => ScalarValue::Utf8(text_of(value)),
        _ => return None,
    })
}

pub(super) fn text_of(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_ref())),
        other => other.to_text().map(Cow::Owned),
    }
}
