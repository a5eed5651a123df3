use jsonrow_core::SchemaError;
use jsonrow_json::{
    ColumnKey, RenameMap,
    resolver::resolve,
};

#[test]
fn rename_spec_maps_columns_to_json_keys() -> Result<(), SchemaError> {
    let renames = RenameMap::parse("jkey>col1, other.key>Col2")?;
    assert_eq!(renames.len(), 2);
    assert_eq!(renames.json_key("col1"), Some("jkey"));
    assert_eq!(renames.json_key("COL2"), Some("other.key"));
    assert_eq!(renames.json_key("jkey"), None);
    Ok(())
}

#[test]
fn blank_rename_spec_is_empty() -> Result<(), SchemaError> {
    assert!(RenameMap::parse("")?.is_empty());
    assert!(RenameMap::parse(" , ")?.is_empty());
    Ok(())
}

#[test]
fn later_rename_entry_wins() -> Result<(), SchemaError> {
    let renames = RenameMap::parse("a>col,b>col")?;
    assert_eq!(renames.json_key("col"), Some("b"));
    Ok(())
}

#[test]
fn malformed_rename_entries_are_rejected() {
    for spec in ["nocolumn", ">col", "key>", "a>b>c"] {
        let err = RenameMap::parse(spec).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidRename { .. }), "{spec}");
    }
}

#[test]
fn resolve_uses_rename_then_declared_name_lowercased() -> Result<(), SchemaError> {
    let renames = RenameMap::parse("JKey>col1")?;
    assert_eq!(resolve("col1", &renames), ColumnKey::Json("jkey".to_string()));
    assert_eq!(
        resolve("Field1", &renames),
        ColumnKey::Json("field1".to_string())
    );
    Ok(())
}

#[test]
fn reserved_column_resolves_to_raw_line() -> Result<(), SchemaError> {
    let renames = RenameMap::parse("payload>json_value")?;
    assert_eq!(resolve("json_value", &renames), ColumnKey::RawLine);
    assert_eq!(resolve("JSON_VALUE", &RenameMap::new()), ColumnKey::RawLine);
    Ok(())
}
