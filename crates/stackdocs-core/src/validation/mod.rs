//! Catalog validation against the JSON Schema engine
//!
//! A pure reporting pass over the loaded catalog: embedded schemas are
//! compiled to prove they are well-formed, and missing descriptions are
//! flagged. Nothing here mutates the catalog or stops early; one
//! service's broken schema never shadows its siblings' reports.

use crate::catalog::Catalog;
use serde_json::Value;

/// Accumulated findings from a validation pass over the whole catalog.
///
/// Errors block generation only when the caller runs in strict mode;
/// warnings are always advisory.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Result of checking one concrete configuration value against a schema
#[derive(Debug, Clone)]
pub struct InstanceReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Validate every service definition in the catalog.
///
/// A `configuration_schema` that fails to compile appends an error
/// tagged with the service name; a missing description appends a
/// warning. Services without a schema are only description-checked.
pub fn validate_all(catalog: &Catalog) -> ValidationReport {
    let mut report = ValidationReport::default();

    for (name, definition) in catalog {
        if let Some(schema) = &definition.configuration_schema {
            if let Err(error) = jsonschema::validator_for(schema) {
                report
                    .errors
                    .push(format!("{name}: Invalid schema - {error}"));
            }
        }

        if !definition.has_description() {
            report.warnings.push(format!("{name}: Missing description"));
        }
    }

    report
}

/// Validate a concrete configuration value against a service's schema.
///
/// Unlike [`validate_all`], this checks an instance, not the schema's
/// own well-formedness. Error messages carry the service name and the
/// instance path of each violation.
pub fn validate_instance(name: &str, instance: &Value, schema: &Value) -> InstanceReport {
    let validator = match jsonschema::validator_for(schema) {
        Ok(validator) => validator,
        Err(error) => {
            return InstanceReport {
                valid: false,
                errors: vec![format!("{name}: Invalid schema - {error}")],
            }
        }
    };

    let errors: Vec<String> = validator
        .iter_errors(instance)
        .map(|error| format!("{name}: {} {}", error.instance_path, error))
        .collect();

    InstanceReport {
        valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ServiceDefinition;
    use serde_json::json;

    fn service(description: Option<&str>, schema: Option<Value>) -> ServiceDefinition {
        let mut definition: ServiceDefinition = serde_json::from_value(json!({})).unwrap();
        definition.description = description.map(String::from);
        definition.configuration_schema = schema;
        definition
    }

    #[test]
    fn test_missing_description_warns_once() {
        let mut catalog = Catalog::new();
        catalog.insert("postgres".into(), service(None, None));
        catalog.insert("redis".into(), service(Some("Redis cache"), None));

        let report = validate_all(&catalog);
        assert!(report.errors.is_empty());
        assert_eq!(report.warnings, vec!["postgres: Missing description"]);
    }

    #[test]
    fn test_uncompilable_schema_errors_and_siblings_continue() {
        let bad = json!({
            "type": "object",
            "properties": {"x": {"type": 42}}
        });
        let good = json!({
            "type": "object",
            "properties": {"x": {"type": "string"}}
        });

        let mut catalog = Catalog::new();
        catalog.insert("broken".into(), service(Some("d"), Some(bad)));
        catalog.insert("fine".into(), service(None, Some(good)));

        let report = validate_all(&catalog);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].starts_with("broken: Invalid schema"));
        // The sibling was still validated and produced its own warning.
        assert_eq!(report.warnings, vec!["fine: Missing description"]);
    }

    #[test]
    fn test_clean_catalog() {
        let mut catalog = Catalog::new();
        catalog.insert(
            "redis".into(),
            service(
                Some("Redis cache"),
                Some(json!({"properties": {"password": {"type": "string"}}})),
            ),
        );

        assert!(validate_all(&catalog).is_clean());
    }

    #[test]
    fn test_validate_instance_reports_paths() {
        let schema = json!({
            "type": "object",
            "properties": {
                "port": {"type": "integer"},
                "database": {"type": "string"}
            },
            "required": ["database"]
        });

        let valid = validate_instance("postgres", &json!({"database": "app"}), &schema);
        assert!(valid.valid);
        assert!(valid.errors.is_empty());

        let invalid = validate_instance("postgres", &json!({"port": "not-a-number"}), &schema);
        assert!(!invalid.valid);
        assert_eq!(invalid.errors.len(), 2);
        assert!(invalid.errors.iter().all(|e| e.starts_with("postgres:")));
    }
}
