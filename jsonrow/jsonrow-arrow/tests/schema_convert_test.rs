use std::sync::Arc;

use arrow::datatypes::{DataType, Field};
use jsonrow_arrow::field_defs_to_arrow_schema;
use jsonrow_core::{FieldDef, FieldDefs, LogicalType};

#[test]
fn primitive_types_map_to_arrow_and_are_nullable() {
    let fields: FieldDefs = vec![
        FieldDef::new("b", LogicalType::Bool),
        FieldDef::new("t", LogicalType::I8),
        FieldDef::new("i", LogicalType::I32),
        FieldDef::new("l", LogicalType::I64),
        FieldDef::new("f", LogicalType::F32),
        FieldDef::new("d", LogicalType::F64),
        FieldDef::new("s", LogicalType::String),
        FieldDef::new("o", LogicalType::Other("timestamp".to_string())),
    ]
    .into();

    let schema = field_defs_to_arrow_schema(&fields);
    let types: Vec<&DataType> = schema.fields().iter().map(|f| f.data_type()).collect();
    assert_eq!(
        types,
        vec![
            &DataType::Boolean,
            &DataType::Int8,
            &DataType::Int32,
            &DataType::Int64,
            &DataType::Float32,
            &DataType::Float64,
            &DataType::Utf8,
            &DataType::Utf8,
        ]
    );
    assert!(schema.fields().iter().all(|f| f.is_nullable()));
}

#[test]
fn list_and_map_hold_utf8_contents() {
    let fields: FieldDefs = vec![
        FieldDef::new("tags", LogicalType::List),
        FieldDef::new("attrs", LogicalType::Map),
    ]
    .into();

    let schema = field_defs_to_arrow_schema(&fields);
    assert_eq!(
        schema.field(0).data_type(),
        &DataType::List(Arc::new(Field::new("item", DataType::Utf8, true)))
    );

    let DataType::Map(entries, sorted) = schema.field(1).data_type() else {
        panic!("expected map, got {:?}", schema.field(1).data_type());
    };
    assert!(!sorted);
    assert_eq!(entries.name(), "entries");
    assert_eq!(
        entries.data_type(),
        &DataType::Struct(
            vec![
                Field::new("key", DataType::Utf8, false),
                Field::new("value", DataType::Utf8, true),
            ]
            .into()
        )
    );
}
