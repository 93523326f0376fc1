//! Services guide: every service, grouped by category

use super::{Generator, GeneratorContext, GeneratorError};
use crate::catalog::ServiceDefinition;
use crate::category;
use crate::render::Frontmatter;
use crate::schema;
use serde_json::{json, Value};

const TEMPLATE: &str = "service.md";
const WEIGHT: u32 = 30;

pub struct ServicesGuideGenerator;

impl Generator for ServicesGuideGenerator {
    fn name(&self) -> &'static str {
        "services-guide"
    }

    fn generate(&self, ctx: &GeneratorContext<'_>) -> Result<Option<String>, GeneratorError> {
        let groups = category::categorize(ctx.catalog);

        let mut body = format!(
            "{} services are available, grouped by category.\n\n",
            ctx.catalog.len()
        );

        for (name, services) in &groups {
            body.push_str(&format!(
                "## {} {}\n\n",
                category::icon(name),
                capitalize(name)
            ));

            for service in services {
                let context = service_context(service);
                let section = ctx.renderer.render(TEMPLATE, &context, None)?;
                body.push_str(section.trim_end());
                body.push_str("\n\n");
            }
        }

        let frontmatter = Frontmatter::new(
            "Services",
            "Available services and their configuration",
            "Every service the stack can run, with its configuration reference",
            WEIGHT,
        );
        let page = ctx.renderer.frame(&frontmatter, body.trim_end())?;
        Ok(Some(page))
    }
}

/// Template context for one service section
fn service_context(service: &ServiceDefinition) -> tera::Context {
    let mut context = tera::Context::new();
    context.insert("name", &service.name);
    context.insert(
        "description",
        service.description.as_deref().unwrap_or_default(),
    );
    context.insert("details", &detail_rows(service));

    if let Some(canonical) = schema::transform(service.configuration_schema.as_ref()) {
        context.insert(
            "configuration_schema",
            &json!({
                "fields": canonical.fields(),
                "example": canonical.example,
            }),
        );
    }

    if let Some(docs) = &service.documentation {
        if !docs.examples.is_empty() {
            context.insert("examples", &docs.examples);
        }
        if !docs.use_cases.is_empty() {
            context.insert("use_cases", &docs.use_cases);
        }
    }

    context
}

/// Label/value rows for the service's summary table; absent facts
/// produce no row at all.
fn detail_rows(service: &ServiceDefinition) -> Vec<Value> {
    let mut rows = Vec::new();

    if !service.ports.is_empty() {
        let ports: Vec<String> = service
            .ports
            .iter()
            .map(|p| format!("{}:{}", p.host, p.container))
            .collect();
        rows.push(json!({"label": "Ports", "value": ports.join(", ")}));
    }

    if let Some(web) = &service.web_interface {
        rows.push(json!({
            "label": "Web Interface",
            "value": format!("[{}]({})", web.name, web.url),
        }));
    }

    if !service.provides.is_empty() {
        rows.push(json!({"label": "Provides", "value": service.provides.join(", ")}));
    }

    if !service.requires.is_empty() {
        rows.push(json!({"label": "Requires", "value": service.requires.join(", ")}));
    }

    rows
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("database"), "Database");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_detail_rows_skip_absent_facts() {
        let service: ServiceDefinition = serde_json::from_value(json!({
            "ports": [{"host": 5432, "container": 5432}],
            "provides": ["database"]
        }))
        .unwrap();

        let rows = detail_rows(&service);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["label"], "Ports");
        assert_eq!(rows[0]["value"], "5432:5432");
        assert_eq!(rows[1]["label"], "Provides");
    }

    #[test]
    fn test_web_interface_renders_as_link() {
        let service: ServiceDefinition = serde_json::from_value(json!({
            "web_interface": {"name": "pgAdmin", "url": "http://localhost:5050"}
        }))
        .unwrap();

        let rows = detail_rows(&service);
        assert_eq!(rows[0]["value"], "[pgAdmin](http://localhost:5050)");
    }

    #[test]
    fn test_context_omits_schema_when_absent() {
        let service: ServiceDefinition = serde_json::from_value(json!({
            "description": "A service"
        }))
        .unwrap();

        let context = service_context(&service);
        let value = context.into_json();
        assert!(value.get("configuration_schema").is_none());
        assert!(value.get("examples").is_none());
    }
}
