//! Line-to-record decoding.

use std::collections::{HashMap, HashSet};

use jsonrow_core::{
    DecodeError, FieldDef, FieldDefs, LineDecoder, LogicalType, Record, SchemaError, Value,
    parse_type_list,
};
use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};

use crate::{
    coerce::coerce,
    properties::{
        COLUMN_NAMES_PROPERTY, COLUMN_TYPES_PROPERTY, DecoderOptions, RENAME_COLUMNS_PROPERTY,
    },
    resolver::{ColumnKey, RenameMap, resolve},
    tree,
};

type JsonObject = Map<String, JsonValue>;

/// Decodes JSON lines into records aligned to a fixed schema.
///
/// Built once per schema. Column sources are resolved at construction, so a
/// decode only does key lookups and per-type dispatch. The decoder holds no
/// per-line state and can be shared between threads.
#[derive(Debug, Clone)]
pub struct JsonRowDecoder {
    field_defs: FieldDefs,
    columns: Vec<ColumnKey>,
    renames: RenameMap,
    options: DecoderOptions,
}

impl JsonRowDecoder {
    /// Build a decoder for `field_defs`.
    ///
    /// Returns `Err` if a column name is empty or two columns share a name
    /// (ignoring case).
    pub fn new(field_defs: FieldDefs, renames: RenameMap) -> Result<Self, SchemaError> {
        let mut seen = HashSet::with_capacity(field_defs.len());
        for (index, field) in field_defs.iter().enumerate() {
            if field.name.is_empty() {
                return Err(SchemaError::EmptyColumnName { index });
            }
            if !seen.insert(field.name.to_lowercase()) {
                return Err(SchemaError::DuplicateColumn {
                    name: field.name.clone(),
                });
            }
        }

        let columns = field_defs
            .iter()
            .map(|field| resolve(&field.name, &renames))
            .collect();

        tracing::debug!(
            columns = field_defs.len(),
            renames = renames.len(),
            "json row decoder initialized"
        );

        Ok(Self {
            field_defs,
            columns,
            renames,
            options: DecoderOptions::default(),
        })
    }

    /// Build a decoder from comma-separated column names, a column type
    /// string (see [`parse_type_list`]) and an optional rename list.
    pub fn init(
        column_names: &str,
        column_types: &str,
        rename_spec: Option<&str>,
    ) -> Result<Self, SchemaError> {
        let names: Vec<&str> = if column_names.trim().is_empty() {
            Vec::new()
        } else {
            column_names.split(',').map(str::trim).collect()
        };
        let types = parse_type_list(column_types)?;
        if names.len() != types.len() {
            return Err(SchemaError::ArityMismatch {
                names: names.len(),
                types: types.len(),
            });
        }

        let field_defs: FieldDefs = names
            .into_iter()
            .zip(types)
            .map(|(name, logical_type)| FieldDef::new(name, logical_type))
            .collect::<Vec<_>>()
            .into();
        let renames = match rename_spec {
            Some(spec) => RenameMap::parse(spec)?,
            None => RenameMap::new(),
        };
        Self::new(field_defs, renames)
    }

    /// Build a decoder from table properties (`columns`, `columns.types` and
    /// the optional `rename_columns`).
    pub fn from_properties(properties: &HashMap<String, String>) -> Result<Self, SchemaError> {
        let required = |key: &str| {
            properties
                .get(key)
                .map(String::as_str)
                .ok_or_else(|| SchemaError::MissingProperty {
                    key: key.to_string(),
                })
        };
        Self::init(
            required(COLUMN_NAMES_PROPERTY)?,
            required(COLUMN_TYPES_PROPERTY)?,
            properties.get(RENAME_COLUMNS_PROPERTY).map(String::as_str),
        )
    }

    pub fn with_options(mut self, options: DecoderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn field_defs(&self) -> &FieldDefs {
        &self.field_defs
    }

    pub fn renames(&self) -> &RenameMap {
        &self.renames
    }

    pub fn options(&self) -> DecoderOptions {
        self.options
    }

    /// Decode one line into a fresh record.
    ///
    /// Returns `None` when the line is not a JSON object; the caller should
    /// drop it. Column-level problems never fail the line.
    pub fn decode(&self, line: &str) -> Option<Record> {
        let mut record = Record::default();
        self.decode_into(line, &mut record).then_some(record)
    }

    /// Decode one line into a caller-owned buffer.
    ///
    /// Every slot is reset before decoding, so no value survives from a
    /// previous line. Returns `false` (leaving all nulls) when the line is
    /// dropped.
    pub fn decode_into(&self, line: &str, record: &mut Record) -> bool {
        record.reset(self.field_defs.len());

        let object = match parse_object(line) {
            Ok(object) => object,
            Err(err) => {
                tracing::warn!(error = %err, line, "dropping line");
                return false;
            }
        };

        for (index, key) in self.columns.iter().enumerate() {
            record[index] = match self.decode_column(index, key, &object, line) {
                Ok(value) => value,
                Err(err) => {
                    tracing::debug!(
                        column = %self.field_defs[index].name,
                        error = %err,
                        "column decoded as null"
                    );
                    Value::Null
                }
            };
        }
        true
    }

    fn decode_column(
        &self,
        index: usize,
        key: &ColumnKey,
        object: &JsonObject,
        line: &str,
    ) -> Result<Value, DecodeError> {
        let json_key = match key {
            ColumnKey::RawLine => return Ok(Value::string(line)),
            ColumnKey::Json(json_key) => json_key,
        };
        let json = match object.get(json_key) {
            None | Some(JsonValue::Null) => return Ok(Value::Null),
            Some(json) => json,
        };

        let field = &self.field_defs[index];
        let max_depth = self.options.max_nesting_depth;
        match (&field.logical_type, json) {
            (target, JsonValue::String(raw)) if target.is_text_coercible() => {
                coerce(raw, target).map_err(|source| DecodeError::MalformedNumber {
                    column: field.name.clone(),
                    source,
                })
            }
            (target, native) if target.is_text_coercible() => {
                Ok(native_as(target, native, max_depth))
            }
            (LogicalType::String, JsonValue::Number(n)) => Ok(Value::string(n.to_string())),
            (LogicalType::List, JsonValue::Array(items)) => Ok(tree::to_list(items, 1, max_depth)),
            (LogicalType::Map, JsonValue::Object(entries)) => Ok(tree::to_map(entries)),
            (LogicalType::Map, other) => Err(DecodeError::ColumnLookup {
                column: field.name.clone(),
                key: json_key.clone(),
                detail: format!("expected a JSON object, found {}", json_kind(other)),
            }),
            (_, JsonValue::Array(items)) => Ok(Value::string(wrap_array(items))),
            (_, other) => Ok(Value::string(tree::stringify(other))),
        }
    }
}

impl LineDecoder for JsonRowDecoder {
    fn decode(&self, line: &str) -> Option<Record> {
        JsonRowDecoder::decode(self, line)
    }

    fn field_defs(&self) -> &FieldDefs {
        &self.field_defs
    }
}

/// Parse `line` as a JSON object with lowercased top-level keys. When two
/// keys differ only in case, the later one wins.
///
/// Nesting depth is unbounded; deep values grow the stack on the heap
/// instead of failing the line.
fn parse_object(line: &str) -> Result<JsonObject, DecodeError> {
    let mut deserializer = serde_json::Deserializer::from_str(line);
    deserializer.disable_recursion_limit();
    let value = JsonValue::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
        .and_then(|value| deserializer.end().map(|()| value))
        .map_err(|e| DecodeError::LineParse {
            detail: e.to_string(),
        })?;
    match value {
        JsonValue::Object(object) => Ok(object
            .into_iter()
            .map(|(key, value)| (key.to_lowercase(), value))
            .collect()),
        other => Err(DecodeError::LineParse {
            detail: format!("expected a JSON object, found {}", json_kind(&other)),
        }),
    }
}

/// A non-string JSON value in a numeric or boolean column is kept as-is,
/// except that numbers are re-typed to the declared width when exact.
fn native_as(target: &LogicalType, json: &JsonValue, max_depth: usize) -> Value {
    let native = tree::native_value(json, max_depth);
    let exact = match target {
        LogicalType::I8 => native.as_i8().map(Value::I8),
        LogicalType::I32 => native.as_i32().map(Value::I32),
        LogicalType::I64 => native.as_i64().map(Value::I64),
        LogicalType::F32 => native.as_f32().map(Value::F32),
        LogicalType::F64 => native.as_f64().map(Value::F64),
        _ => None,
    };
    exact.unwrap_or(native)
}

/// Arrays in string-ish columns are exposed as `{"array":[...]}` text so that
/// JSON path functions can still address them.
fn wrap_array(items: &[JsonValue]) -> String {
    let mut container = Map::new();
    container.insert("array".to_string(), JsonValue::Array(items.to_vec()));
    JsonValue::Object(container).to_string()
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
