//! Canonical field model and the schema transformer

use serde::Serialize;
use serde_json::{Map, Value};

/// The canonical field types the documentation model understands.
///
/// Anything else in a schema's `type` keyword degrades to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Integer,
    Boolean,
    Array,
    Object,
    Unknown,
}

impl FieldType {
    /// Read the `type` keyword from a property spec
    pub fn from_spec(spec: &Value) -> Self {
        match spec.get("type").and_then(Value::as_str) {
            Some("string") => FieldType::String,
            Some("integer") => FieldType::Integer,
            Some("boolean") => FieldType::Boolean,
            Some("array") => FieldType::Array,
            Some("object") => FieldType::Object,
            _ => FieldType::Unknown,
        }
    }

    /// Display name used in rendered documentation
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Boolean => "boolean",
            FieldType::Array => "array",
            FieldType::Object => "object",
            FieldType::Unknown => "unknown",
        }
    }
}

/// Flattened representation of one schema property
#[derive(Debug, Clone, Serialize)]
pub struct SchemaField {
    pub name: String,

    #[serde(rename = "type")]
    pub field_type: FieldType,

    pub description: String,

    pub required: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Element description for array-typed fields, one level deep
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<ItemsField>,

    /// Child fields for object-typed fields, one level deep
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<ChildField>>,
}

/// Array element description nested inside a [`SchemaField`]
#[derive(Debug, Clone, Serialize)]
pub struct ItemsField {
    #[serde(rename = "type")]
    pub field_type: FieldType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<ChildField>>,
}

/// One level of nested property, kept intentionally shallow
#[derive(Debug, Clone, Serialize)]
pub struct ChildField {
    pub name: String,

    #[serde(rename = "type")]
    pub field_type: FieldType,

    pub description: String,

    pub required: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

/// Outcome of transforming one property.
///
/// A property whose spec is not an object still yields a well-formed
/// field, but as `Degraded` so the tolerant path stays visible and
/// testable instead of being an implicit fallback.
#[derive(Debug, Clone)]
pub enum FieldOutcome {
    Valid(SchemaField),
    Degraded(SchemaField),
}

impl FieldOutcome {
    pub fn field(&self) -> &SchemaField {
        match self {
            FieldOutcome::Valid(f) | FieldOutcome::Degraded(f) => f,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, FieldOutcome::Degraded(_))
    }
}

/// A normalized schema: ordered fields plus an optional example tree
#[derive(Debug, Clone)]
pub struct CanonicalSchema {
    pub outcomes: Vec<FieldOutcome>,

    /// `None` means "no field contributed a value", which callers must
    /// be able to distinguish from an empty example map.
    pub example: Option<Value>,
}

impl CanonicalSchema {
    /// The fields in source order, valid and degraded alike
    pub fn fields(&self) -> Vec<&SchemaField> {
        self.outcomes.iter().map(FieldOutcome::field).collect()
    }

    pub fn field_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Names of fields listed in the schema's required set
    pub fn required_names(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .map(FieldOutcome::field)
            .filter(|f| f.required)
            .map(|f| f.name.as_str())
            .collect()
    }
}

/// The two accepted schema document shapes, discriminated once at the
/// transformer's entry by the presence of a `properties` key.
#[derive(Debug)]
pub enum SchemaInput<'a> {
    /// JSON-Schema-style wrapper with a `properties` map and an
    /// optional `required` array
    Wrapped {
        properties: &'a Value,
        required: Vec<&'a str>,
    },
    /// Bare property map; treated as having an empty required list
    Bare(&'a Value),
}

impl<'a> SchemaInput<'a> {
    /// Classify a raw schema document
    pub fn classify(raw: &'a Value) -> Self {
        match raw.get("properties") {
            Some(properties) => SchemaInput::Wrapped {
                properties,
                required: raw
                    .get("required")
                    .and_then(Value::as_array)
                    .map(|arr| arr.iter().filter_map(Value::as_str).collect())
                    .unwrap_or_default(),
            },
            None => SchemaInput::Bare(raw),
        }
    }

    fn into_parts(self) -> (&'a Value, Vec<&'a str>) {
        match self {
            SchemaInput::Wrapped { properties, required } => (properties, required),
            SchemaInput::Bare(map) => (map, Vec::new()),
        }
    }
}

/// Normalize a raw schema document into its canonical form.
///
/// Returns `None` when there is no schema to document: the input is
/// absent, or the resolved property map is not an object. Fails closed,
/// never panics, and never rejects a whole schema because one property
/// is malformed.
pub fn transform(raw: Option<&Value>) -> Option<CanonicalSchema> {
    let raw = raw?;
    let (properties, required) = SchemaInput::classify(raw).into_parts();
    let properties = properties.as_object()?;

    let outcomes: Vec<FieldOutcome> = properties
        .iter()
        .map(|(name, spec)| transform_property(name, spec, &required))
        .collect();

    let example = super::example::synthesize_example(&outcomes);

    Some(CanonicalSchema { outcomes, example })
}

fn transform_property(name: &str, spec: &Value, required: &[&str]) -> FieldOutcome {
    if !spec.is_object() {
        return FieldOutcome::Degraded(SchemaField {
            name: name.to_string(),
            field_type: FieldType::Unknown,
            description: "Configuration field".to_string(),
            required: false,
            default: None,
            items: None,
            properties: None,
        });
    }

    FieldOutcome::Valid(SchemaField {
        name: name.to_string(),
        field_type: FieldType::from_spec(spec),
        description: spec
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        required: required.contains(&name),
        default: spec.get("default").cloned(),
        items: spec.get("items").map(transform_items),
        properties: spec
            .get("properties")
            .and_then(Value::as_object)
            .map(transform_children),
    })
}

fn transform_items(items: &Value) -> ItemsField {
    ItemsField {
        field_type: FieldType::from_spec(items),
        properties: items
            .get("properties")
            .and_then(Value::as_object)
            .map(transform_children),
    }
}

fn transform_children(properties: &Map<String, Value>) -> Vec<ChildField> {
    properties
        .iter()
        .map(|(name, spec)| ChildField {
            name: name.clone(),
            field_type: FieldType::from_spec(spec),
            description: spec
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            required: spec
                .get("required")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            default: spec.get("default").cloned(),
        })
        .collect()
}
