use anyhow::{Context, Result};
use schemars::{JsonSchema, Schema, schema_for};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
}

/// What the wizard needs to know to ask for one parameter.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub required: bool,
    pub kind: FieldKind,
    pub default: Option<Value>,
    pub min: Option<u64>,
    pub max: Option<u64>,
}

pub fn params_schema<T: JsonSchema>() -> Schema {
    schema_for!(T)
}

/// Flattens the top-level properties of a parameter struct's schema.
/// Properties of a type the wizard cannot ask for are skipped.
pub fn field_specs(schema: &Schema) -> Result<Vec<FieldSpec>> {
    let root = schema.as_object().context("params schema is not an object")?;

    let Some(props) = root.get("properties").and_then(Value::as_object) else {
        return Ok(vec![]);
    };

    let required: Vec<&str> = root
        .get("required")
        .and_then(Value::as_array)
        .map(|a| a.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut out = Vec::new();
    for (name, field) in props {
        let field = field
            .as_object()
            .with_context(|| format!("schema for '{name}' is not an object"))?;

        let Some(kind) = detect_field_kind(field.get("type")) else {
            continue;
        };

        out.push(FieldSpec {
            name: name.clone(),
            title: str_prop(field, "title").unwrap_or_else(|| name.clone()),
            description: str_prop(field, "description"),
            required: required.contains(&name.as_str()),
            kind,
            default: field.get("default").cloned(),
            min: field.get("minimum").and_then(Value::as_u64),
            max: field.get("maximum").and_then(Value::as_u64),
        });
    }
    Ok(out)
}

fn str_prop(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

fn detect_field_kind(ty: Option<&Value>) -> Option<FieldKind> {
    let by_name = |s: &str| match s {
        "string" => Some(FieldKind::String),
        "integer" => Some(FieldKind::Integer),
        _ => None,
    };
    match ty {
        Some(Value::String(s)) => by_name(s),
        // Option<T> shows up as ["T", "null"]
        Some(Value::Array(arr)) => arr.iter().filter_map(Value::as_str).find_map(by_name),
        _ => None,
    }
}
