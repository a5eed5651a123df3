use jsonrow_core::{FieldDef, FieldDefs, LogicalType, Record, Value};

#[test]
fn value_string_creates_arc_str_value() {
    let value = Value::string("hello");
    match value {
        Value::String(s) => assert_eq!(&*s, "hello"),
        other => panic!("unexpected value variant: {:?}", other),
    }
}

#[test]
fn try_accessors_accept_null_and_reject_other_shapes() {
    assert_eq!(Value::I32(7).try_i32().unwrap(), Some(7));
    assert_eq!(Value::Null.try_i32().unwrap(), None);

    let err = Value::string("7").try_i32().unwrap_err();
    assert_eq!(err.expected, "I32");
    assert_eq!(err.actual, "String");
}

#[test]
fn numeric_views_only_convert_exactly() {
    assert_eq!(Value::I64(300).as_i32(), Some(300));
    assert_eq!(Value::I64(300).as_i8(), None);
    assert_eq!(Value::F64(2.0).as_i64(), Some(2));
    assert_eq!(Value::F64(2.5).as_i64(), None);
    assert_eq!(Value::I32(3).as_f64(), Some(3.0));
    assert_eq!(Value::string("3").as_i64(), None);
}

#[test]
fn to_text_renders_scalars_and_composites() {
    assert_eq!(Value::Null.to_text(), None);
    assert_eq!(Value::string("a b").to_text().as_deref(), Some("a b"));
    assert_eq!(Value::Bool(true).to_text().as_deref(), Some("true"));

    let list = Value::List(vec![Value::I64(1), Value::string("x"), Value::Null]);
    assert_eq!(list.to_text().as_deref(), Some("[1, x, null]"));

    let map = Value::Map(vec![(Value::string("k"), Value::string("v"))]);
    assert_eq!(map.to_text().as_deref(), Some("{k: v}"));
}

#[test]
fn field_def_new_sets_all_fields() {
    let field = FieldDef::new("count", LogicalType::I64);
    assert_eq!(field.name, "count");
    assert_eq!(field.logical_type, LogicalType::I64);
}

#[test]
fn field_defs_index_of_ignores_case() {
    let fields: FieldDefs = vec![
        FieldDef::new("id", LogicalType::I64),
        FieldDef::new("Name", LogicalType::String),
    ]
    .into();
    assert_eq!(fields.index_of("name"), Some(1));
    assert_eq!(fields.index_of("missing"), None);
}

#[test]
fn record_reset_keeps_arity_and_clears_values() {
    let mut record = Record::from(vec![Value::I32(1), Value::string("x")]);
    record.reset(3);
    assert_eq!(record.as_slice(), &[Value::Null, Value::Null, Value::Null]);
    assert_eq!(Record::nulls(2).len(), 2);
}
