use jsonrow_core::{LogicalType, SchemaError, parse_type_list};

#[test]
fn known_type_names_resolve_case_insensitively() {
    assert_eq!(LogicalType::from_type_name("INT"), LogicalType::I32);
    assert_eq!(LogicalType::from_type_name("BigInt"), LogicalType::I64);
    assert_eq!(LogicalType::from_type_name("tinyint"), LogicalType::I8);
    assert_eq!(LogicalType::from_type_name("float"), LogicalType::F32);
    assert_eq!(LogicalType::from_type_name("double"), LogicalType::F64);
    assert_eq!(LogicalType::from_type_name("boolean"), LogicalType::Bool);
    assert_eq!(LogicalType::from_type_name("string"), LogicalType::String);
    assert_eq!(LogicalType::from_type_name("array<int>"), LogicalType::List);
    assert_eq!(
        LogicalType::from_type_name("map<string,string>"),
        LogicalType::Map
    );
}

#[test]
fn unknown_type_names_are_kept_as_other() {
    assert_eq!(
        LogicalType::from_type_name("SmallInt"),
        LogicalType::Other("smallint".to_string())
    );
    assert_eq!(LogicalType::from_type_name("arrays").type_name(), "arrays");
}

#[test]
fn type_list_splits_only_at_top_level() -> Result<(), SchemaError> {
    let types = parse_type_list("int:array<string>:map<string,int>:decimal(10,2):struct<a:int,b:string>")?;
    assert_eq!(
        types,
        vec![
            LogicalType::I32,
            LogicalType::List,
            LogicalType::Map,
            LogicalType::Other("decimal(10,2)".to_string()),
            LogicalType::Other("struct<a:int,b:string>".to_string()),
        ]
    );
    Ok(())
}

#[test]
fn type_list_accepts_comma_separators() -> Result<(), SchemaError> {
    let types = parse_type_list("string, bigint ,boolean")?;
    assert_eq!(
        types,
        vec![LogicalType::String, LogicalType::I64, LogicalType::Bool]
    );
    Ok(())
}

#[test]
fn blank_type_list_is_empty() -> Result<(), SchemaError> {
    assert!(parse_type_list("  ")?.is_empty());
    Ok(())
}

#[test]
fn malformed_type_lists_are_rejected() {
    for input in ["int::string", "array<int", "int>", "string:"] {
        let err = parse_type_list(input).unwrap_err();
        assert!(
            matches!(err, SchemaError::InvalidTypeString { .. }),
            "{input}: {err}"
        );
    }
}
