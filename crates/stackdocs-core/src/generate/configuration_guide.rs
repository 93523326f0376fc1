//! Configuration guide: how to write a stack configuration file

use super::{Generator, GeneratorContext, GeneratorError};
use crate::render::Frontmatter;
use crate::schema;
use serde_json::{Map, Value};

const TEMPLATE: &str = "configuration-guide.md";
const WEIGHT: u32 = 25;

/// Services worth showing in the worked example, when present
const SHOWCASE: &[&str] = &["postgres", "redis", "kafka"];

pub struct ConfigurationGuideGenerator;

impl Generator for ConfigurationGuideGenerator {
    fn name(&self) -> &'static str {
        "configuration-guide"
    }

    fn generate(&self, ctx: &GeneratorContext<'_>) -> Result<Option<String>, GeneratorError> {
        let mut context = tera::Context::new();
        context.insert("structure_example", STRUCTURE_EXAMPLE);
        context.insert("service_list", &service_list(ctx));

        if let Some(example) = complete_example(ctx) {
            context.insert("complete_example", &example);
        }

        let frontmatter = Frontmatter::new(
            "Configuration",
            "Configuration file format and options",
            "How to declare the services your stack should run",
            WEIGHT,
        );
        let page = ctx.renderer.render(TEMPLATE, &context, Some(&frontmatter))?;
        Ok(Some(page))
    }
}

const STRUCTURE_EXAMPLE: &str = "\
services:
  <service-name>:
    <option>: <value>
";

/// One bullet per service, in catalog order
fn service_list(ctx: &GeneratorContext<'_>) -> Vec<String> {
    ctx.catalog
        .values()
        .map(|service| {
            let description = service.description.as_deref().unwrap_or_default().trim();
            if description.is_empty() {
                format!("**{}**", service.name)
            } else {
                format!("**{}** - {}", service.name, description)
            }
        })
        .collect()
}

/// A worked configuration built from the showcase services' synthesized
/// examples. `None` when no showcase service yields an example.
fn complete_example(ctx: &GeneratorContext<'_>) -> Option<Value> {
    let mut services = Map::new();

    for name in SHOWCASE {
        let Some(service) = ctx.catalog.get(*name) else {
            continue;
        };
        let Some(canonical) = schema::transform(service.configuration_schema.as_ref()) else {
            continue;
        };
        if let Some(example) = canonical.example {
            services.insert((*name).to_string(), example);
        }
    }

    if services.is_empty() {
        return None;
    }

    let mut root = Map::new();
    root.insert("services".to_string(), Value::Object(services));
    Some(Value::Object(root))
}
