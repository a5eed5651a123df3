use jsonrow_core::{FieldDef, FieldDefs, LogicalType, format_field_defs};

#[test]
fn columns_are_listed_with_aligned_types() -> Result<(), std::fmt::Error> {
    let fields = vec![
        FieldDef::new("id", LogicalType::I64),
        FieldDef::new("tags", LogicalType::List),
        FieldDef::new("json_value", LogicalType::String),
        FieldDef::new("ts", LogicalType::Other("timestamp".to_string())),
    ];

    let text = format_field_defs(&fields)?;
    let expected = "\
id:         bigint
tags:       array
json_value: string
ts:         timestamp
";
    assert_eq!(text, expected);
    Ok(())
}

#[test]
fn field_defs_display_matches_formatter() -> Result<(), std::fmt::Error> {
    let fields: FieldDefs = vec![FieldDef::new("field_a", LogicalType::I32)].into();
    assert_eq!(fields.to_string(), format_field_defs(fields.as_slice())?);
    Ok(())
}
