//! Schema normalization
//!
//! Raw embedded schemas arrive in two duck-typed shapes: a full
//! JSON-Schema-style document (`properties` map plus `required` array)
//! or a bare property map. This module normalizes both into a canonical
//! flat field model plus a synthesized example value, tolerating
//! malformed individual properties without ever aborting the siblings.

pub mod example;
pub mod transform;

pub use example::synthesize_example;
pub use transform::{
    transform, CanonicalSchema, ChildField, FieldOutcome, FieldType, ItemsField, SchemaField,
    SchemaInput,
};
