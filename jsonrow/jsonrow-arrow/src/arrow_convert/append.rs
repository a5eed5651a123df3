use arrow::array::{
    ArrayBuilder, BooleanBuilder, Float32Builder, Float64Builder, Int8Builder, Int32Builder,
    Int64Builder, StringBuilder,
};
use arrow::datatypes::DataType;
use jsonrow_core::Value;

use super::{
    builder::{Utf8ListBuilder, Utf8MapBuilder},
    scalar::{ScalarValue, scalar_value_for_datatype, text_of},
};
use crate::error::ArrowConvertError;

macro_rules! cast_builder {
    ($b:expr, $T:ty) => {
        $b.as_any_mut()
            .downcast_mut::<$T>()
            .expect(concat!("expected builder type: ", stringify!($T)))
    };
}

fn append_scalar_dyn(builder: &mut Box<dyn ArrayBuilder>, scalar: ScalarValue<'_>) {
    match scalar {
        ScalarValue::Boolean(v) => cast_builder!(builder, BooleanBuilder).append_option(v),
        ScalarValue::Int8(v) => cast_builder!(builder, Int8Builder).append_option(v),
        ScalarValue::Int32(v) => cast_builder!(builder, Int32Builder).append_option(v),
        ScalarValue::Int64(v) => cast_builder!(builder, Int64Builder).append_option(v),
        ScalarValue::Float32(v) => cast_builder!(builder, Float32Builder).append_option(v),
        ScalarValue::Float64(v) => cast_builder!(builder, Float64Builder).append_option(v),
        ScalarValue::Utf8(v) => cast_builder!(builder, StringBuilder).append_option(v),
    }
}

fn append_list(builder: &mut Utf8ListBuilder, value: &Value) {
    match value {
        Value::List(items) => {
            for item in items {
                builder.values().append_option(text_of(item));
            }
            builder.append(true);
        }
        _ => builder.append(false),
    }
}

fn append_map(builder: &mut Utf8MapBuilder, value: &Value) -> Result<(), ArrowConvertError> {
    match value {
        Value::Map(entries) => {
            for (key, map_value) in entries {
                builder
                    .keys()
                    .append_value(text_of(key).unwrap_or_default());
                builder.values().append_option(text_of(map_value));
            }
            builder.append(true)?;
        }
        _ => builder.append(false)?,
    }
    Ok(())
}

pub(super) fn append_value_to_builder(
    builder: &mut Box<dyn ArrayBuilder>,
    dt: &DataType,
    value: &Value,
) -> Result<(), ArrowConvertError> {
    if let Some(scalar) = scalar_value_for_datatype(dt, value) {
        append_scalar_dyn(builder, scalar);
        return Ok(());
    }

    match dt {
        DataType::List(_) => append_list(cast_builder!(builder, Utf8ListBuilder), value),
        DataType::Map(_, _) => append_map(cast_builder!(builder, Utf8MapBuilder), value)?,
        other => return Err(ArrowConvertError::UnsupportedType(other.clone())),
    }
    Ok(())
}
