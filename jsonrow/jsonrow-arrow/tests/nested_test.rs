use jsonrow_arrow::{
    NestedPolicy, apply_nested_policy, field_defs_to_arrow_schema, records_to_record_batch,
};
use jsonrow_core::{FieldDef, FieldDefs, LogicalType, Record, Value};

fn batch() -> arrow::record_batch::RecordBatch {
    let fields: FieldDefs = vec![
        FieldDef::new("id", LogicalType::I64),
        FieldDef::new("tags", LogicalType::List),
        FieldDef::new("name", LogicalType::String),
        FieldDef::new("attrs", LogicalType::Map),
    ]
    .into();
    let schema = field_defs_to_arrow_schema(&fields);
    let rows = vec![Record::from(vec![
        Value::I64(1),
        Value::List(vec![Value::string("a")]),
        Value::string("n"),
        Value::Map(Vec::new()),
    ])];
    records_to_record_batch(&schema, &rows).unwrap()
}

#[test]
fn drop_policy_removes_list_and_map_columns() {
    let (flat, dropped) = apply_nested_policy(&batch(), NestedPolicy::Drop).unwrap();
    let names: Vec<&str> = flat
        .schema_ref()
        .fields()
        .iter()
        .map(|f| f.name().as_str())
        .collect();
    assert_eq!(names, vec!["id", "name"]);
    assert_eq!(dropped, vec!["tags".to_string(), "attrs".to_string()]);
    assert_eq!(flat.num_rows(), 1);
}

#[test]
fn keep_policy_passes_batch_through() {
    let original = batch();
    let (kept, dropped) = apply_nested_policy(&original, NestedPolicy::Keep).unwrap();
    assert_eq!(kept, original);
    assert!(dropped.is_empty());
}

#[test]
fn policy_parses_from_cli_text() {
    assert_eq!("drop".parse::<NestedPolicy>(), Ok(NestedPolicy::Drop));
    assert_eq!("keep".parse::<NestedPolicy>(), Ok(NestedPolicy::Keep));
    assert!("flatten".parse::<NestedPolicy>().is_err());
}
