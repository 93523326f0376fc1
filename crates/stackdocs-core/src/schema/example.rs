//! Representative example synthesis from canonical fields

use crate::schema::transform::{ChildField, FieldOutcome, FieldType, ItemsField, SchemaField};
use serde_json::{json, Map, Value};

/// Synthesize an example value tree from transformed fields.
///
/// Per-field priority: an explicit default wins verbatim; otherwise a
/// type-appropriate synthetic value (`"example-<name>"`, `1`, `true`);
/// array and object fields build one level of structure from their
/// nested descriptions. Fields with no applicable rule are omitted.
/// Returns `None` (not an empty map) when nothing contributes a value.
pub fn synthesize_example(outcomes: &[FieldOutcome]) -> Option<Value> {
    let mut example = Map::new();

    for outcome in outcomes {
        let field = outcome.field();
        if let Some(value) = field_example(field) {
            example.insert(field.name.clone(), value);
        }
    }

    if example.is_empty() {
        None
    } else {
        Some(Value::Object(example))
    }
}

fn field_example(field: &SchemaField) -> Option<Value> {
    if let Some(default) = &field.default {
        return Some(default.clone());
    }

    match field.field_type {
        FieldType::String => Some(json!(format!("example-{}", field.name))),
        FieldType::Integer => Some(json!(1)),
        FieldType::Boolean => Some(json!(true)),
        FieldType::Array => field.items.as_ref().map(items_example),
        FieldType::Object => field.properties.as_deref().map(children_example),
        FieldType::Unknown => None,
    }
}

fn items_example(items: &ItemsField) -> Value {
    match &items.properties {
        Some(children) => json!([children_example(children)]),
        None => json!([]),
    }
}

fn children_example(children: &[ChildField]) -> Value {
    let mut example = Map::new();

    for child in children {
        let value = if let Some(default) = &child.default {
            Some(default.clone())
        } else {
            match child.field_type {
                FieldType::String => Some(json!(format!("example-{}", child.name))),
                FieldType::Integer => Some(json!(1)),
                FieldType::Boolean => Some(json!(true)),
                _ => None,
            }
        };
        if let Some(value) = value {
            example.insert(child.name.clone(), value);
        }
    }

    Value::Object(example)
}
