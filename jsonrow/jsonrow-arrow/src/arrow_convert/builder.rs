use arrow::array::{
    ArrayBuilder, BooleanBuilder, Float32Builder, Float64Builder, Int8Builder, Int32Builder,
    Int64Builder, ListBuilder, MapBuilder, MapFieldNames, StringBuilder,
};
use arrow::datatypes::DataType;

use crate::error::ArrowConvertError;

pub(super) type Utf8ListBuilder = ListBuilder<StringBuilder>;
pub(super) type Utf8MapBuilder = MapBuilder<StringBuilder, StringBuilder>;

pub(super) fn make_builder(
    dt: &DataType,
    capacity: usize,
) -> Result<Box<dyn ArrayBuilder>, ArrowConvertError> {
    Ok(match dt {
        DataType::Boolean => Box::new(BooleanBuilder::with_capacity(capacity)),
        DataType::Int8 => Box::new(Int8Builder::with_capacity(capacity)),
        DataType::Int32 => Box::new(Int32Builder::with_capacity(capacity)),
        DataType::Int64 => Box::new(Int64Builder::with_capacity(capacity)),
        DataType::Float32 => Box::new(Float32Builder::with_capacity(capacity)),
        DataType::Float64 => Box::new(Float64Builder::with_capacity(capacity)),
        DataType::Utf8 => Box::new(StringBuilder::with_capacity(capacity, 64)),
        DataType::List(field) if field.data_type() == &DataType::Utf8 => {
            let child = StringBuilder::with_capacity(capacity, 64);
            Box::new(Utf8ListBuilder::new(child).with_field(field.clone()))
        }
        DataType::Map(entry_field, _) => {
            let (key_field, value_field) = match entry_field.data_type() {
                DataType::Struct(fields)
                    if fields.len() == 2
                        && fields[0].data_type() == &DataType::Utf8
                        && fields[1].data_type() == &DataType::Utf8 =>
                {
                    (fields[0].clone(), fields[1].clone())
                }
                _ => return Err(ArrowConvertError::UnsupportedType(dt.clone())),
            };
            Box::new(
                Utf8MapBuilder::new(
                    Some(MapFieldNames {
                        entry: entry_field.name().to_string(),
                        key: key_field.name().to_string(),
                        value: value_field.name().to_string(),
                    }),
                    StringBuilder::with_capacity(capacity, 64),
                    StringBuilder::with_capacity(capacity, 64),
                )
                .with_keys_field(key_field)
                .with_values_field(value_field),
            )
        }
        other => return Err(ArrowConvertError::UnsupportedType(other.clone())),
    })
}
