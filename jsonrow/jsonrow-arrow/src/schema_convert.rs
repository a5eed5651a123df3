use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema};
use jsonrow_core::{FieldDef, FieldDefs, LogicalType};

/// Converts a `jsonrow-core` row-shape descriptor into an Arrow `Schema`.
///
/// Every column is nullable: missing or malformed JSON values decode to null.
pub fn field_defs_to_arrow_schema(fields: &FieldDefs) -> Schema {
    let arrow_fields: Vec<Field> = fields.iter().map(field_def_to_arrow_field).collect();
    Schema::new(arrow_fields)
}

fn field_def_to_arrow_field(f: &FieldDef) -> Field {
    Field::new(&f.name, logical_type_to_datatype(&f.logical_type), true)
}

pub(crate) fn logical_type_to_datatype(logical_type: &LogicalType) -> DataType {
    match logical_type {
        LogicalType::Bool => DataType::Boolean,
        LogicalType::I8 => DataType::Int8,
        LogicalType::I32 => DataType::Int32,
        LogicalType::I64 => DataType::Int64,
        LogicalType::F32 => DataType::Float32,
        LogicalType::F64 => DataType::Float64,
        LogicalType::String | LogicalType::Other(_) => DataType::Utf8,
        LogicalType::List => DataType::List(list_item_field()),
        LogicalType::Map => {
            let key_field = Field::new("key", DataType::Utf8, false);
            let val_field = Field::new("value", DataType::Utf8, true);
            let entry_struct = DataType::Struct(vec![key_field, val_field].into());
            let entry_field = Field::new("entries", entry_struct, false);
            DataType::Map(Arc::new(entry_field), false)
        }
    }
}

pub(crate) fn list_item_field() -> Arc<Field> {
    Arc::new(Field::new("item", DataType::Utf8, true))
}
