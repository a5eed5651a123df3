use arrow::array::{
    Array, BooleanArray, Float32Array, Int8Array, Int32Array, Int64Array, ListArray, MapArray,
    StringArray,
};
use jsonrow_arrow::{ArrowConvertError, field_defs_to_arrow_schema, records_to_record_batch};
use jsonrow_core::{FieldDef, FieldDefs, LogicalType, Record, Value};

fn test_fields() -> FieldDefs {
    vec![
        FieldDef::new("id", LogicalType::I32),
        FieldDef::new("big", LogicalType::I64),
        FieldDef::new("small", LogicalType::I8),
        FieldDef::new("ratio", LogicalType::F32),
        FieldDef::new("flag", LogicalType::Bool),
        FieldDef::new("name", LogicalType::String),
        FieldDef::new("tags", LogicalType::List),
        FieldDef::new("attrs", LogicalType::Map),
    ]
    .into()
}

#[test]
fn records_to_record_batch_mixed_types() {
    let schema = field_defs_to_arrow_schema(&test_fields());
    let rows = vec![
        Record::from(vec![
            Value::I32(1),
            Value::I64(10),
            Value::I8(-1),
            Value::F32(0.5),
            Value::Bool(true),
            Value::string("ada"),
            Value::List(vec![Value::string("x"), Value::I64(2), Value::Null]),
            Value::Map(vec![(Value::string("k"), Value::string("v"))]),
        ]),
        Record::from(vec![Value::Null; 8]),
    ];

    let batch = records_to_record_batch(&schema, &rows).unwrap();
    assert_eq!(batch.num_rows(), 2);
    assert_eq!(batch.num_columns(), 8);

    let id = batch.column(0).as_any().downcast_ref::<Int32Array>().unwrap();
    assert_eq!(id.value(0), 1);
    assert!(id.is_null(1));

    let big = batch.column(1).as_any().downcast_ref::<Int64Array>().unwrap();
    assert_eq!(big.value(0), 10);

    let small = batch.column(2).as_any().downcast_ref::<Int8Array>().unwrap();
    assert_eq!(small.value(0), -1);

    let ratio = batch.column(3).as_any().downcast_ref::<Float32Array>().unwrap();
    assert_eq!(ratio.value(0), 0.5);

    let flag = batch.column(4).as_any().downcast_ref::<BooleanArray>().unwrap();
    assert!(flag.value(0));
    assert!(flag.is_null(1));

    let name = batch.column(5).as_any().downcast_ref::<StringArray>().unwrap();
    assert_eq!(name.value(0), "ada");

    let tags = batch.column(6).as_any().downcast_ref::<ListArray>().unwrap();
    assert!(tags.is_null(1));
    let first = tags.value(0);
    let items = first.as_any().downcast_ref::<StringArray>().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items.value(0), "x");
    assert_eq!(items.value(1), "2");
    assert!(items.is_null(2));

    let attrs = batch.column(7).as_any().downcast_ref::<MapArray>().unwrap();
    assert!(attrs.is_null(1));
    let keys = attrs.keys().as_any().downcast_ref::<StringArray>().unwrap();
    let values = attrs.values().as_any().downcast_ref::<StringArray>().unwrap();
    assert_eq!(keys.value(0), "k");
    assert_eq!(values.value(0), "v");
}

#[test]
fn mismatched_values_are_converted_or_nulled() {
    let fields: FieldDefs = vec![
        FieldDef::new("narrow", LogicalType::I8),
        FieldDef::new("id", LogicalType::I32),
        FieldDef::new("text", LogicalType::String),
        FieldDef::new("tags", LogicalType::List),
    ]
    .into();
    let schema = field_defs_to_arrow_schema(&fields);
    let rows = vec![
        Record::from(vec![
            Value::I64(300),
            Value::string(r#"{"id":1}"#),
            Value::I64(42),
            Value::string("solo"),
        ]),
        Record::from(vec![
            Value::I64(5),
            Value::F64(7.0),
            Value::Bool(false),
            Value::Null,
        ]),
    ];

    let batch = records_to_record_batch(&schema, &rows).unwrap();

    let narrow = batch.column(0).as_any().downcast_ref::<Int8Array>().unwrap();
    assert!(narrow.is_null(0));
    assert_eq!(narrow.value(1), 5);

    let id = batch.column(1).as_any().downcast_ref::<Int32Array>().unwrap();
    assert!(id.is_null(0));
    assert_eq!(id.value(1), 7);

    let text = batch.column(2).as_any().downcast_ref::<StringArray>().unwrap();
    assert_eq!(text.value(0), "42");
    assert_eq!(text.value(1), "false");

    let tags = batch.column(3).as_any().downcast_ref::<ListArray>().unwrap();
    assert!(tags.is_null(0));
    assert!(tags.is_null(1));
}

#[test]
fn short_rows_are_padded_with_nulls() {
    let schema = field_defs_to_arrow_schema(&test_fields());
    let rows = vec![Record::from(vec![Value::I32(9)])];

    let batch = records_to_record_batch(&schema, &rows).unwrap();
    assert_eq!(batch.num_rows(), 1);
    for column in 1..batch.num_columns() {
        assert!(batch.column(column).is_null(0), "column {column}");
    }
}

#[test]
fn empty_schema_keeps_row_count() {
    let schema = field_defs_to_arrow_schema(&FieldDefs::default());
    let rows = vec![Record::default(), Record::default()];

    let batch = records_to_record_batch(&schema, &rows).unwrap();
    assert_eq!(batch.num_rows(), 2);
    assert_eq!(batch.num_columns(), 0);
}

#[test]
fn empty_rows_are_rejected() {
    let schema = field_defs_to_arrow_schema(&test_fields());
    let err = records_to_record_batch(&schema, &[]).unwrap_err();
    assert!(matches!(err, ArrowConvertError::EmptyRows));
}
