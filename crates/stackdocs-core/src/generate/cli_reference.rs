//! CLI reference: rendered from the authored command catalog

use super::{Generator, GeneratorContext, GeneratorError};
use crate::render::Frontmatter;
use serde_json::Value;
use std::fs;

const TEMPLATE: &str = "cli-reference.md";
const WEIGHT: u32 = 50;

pub struct CliReferenceGenerator;

impl Generator for CliReferenceGenerator {
    fn name(&self) -> &'static str {
        "cli-reference"
    }

    fn generate(&self, ctx: &GeneratorContext<'_>) -> Result<Option<String>, GeneratorError> {
        let path = &ctx.config.commands_file;
        if !path.exists() {
            return Err(GeneratorError::MissingInput(format!(
                "command catalog '{}' does not exist",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|source| GeneratorError::Io {
            path: path.clone(),
            source,
        })?;
        let document: Value =
            serde_yaml::from_str(&content).map_err(|e| GeneratorError::Parse {
                path: path.clone(),
                reason: e.to_string(),
            })?;
        if !document.is_object() {
            return Err(GeneratorError::Parse {
                path: path.clone(),
                reason: "top level must be a mapping".to_string(),
            });
        }

        let mut context = tera::Context::new();
        context.insert(
            "metadata",
            document.get("metadata").unwrap_or(&Value::Null),
        );
        context.insert(
            "categories",
            document
                .get("categories")
                .unwrap_or(&Value::Array(Vec::new())),
        );
        context.insert(
            "global_flags",
            document
                .get("global_flags")
                .unwrap_or(&Value::Array(Vec::new())),
        );

        let frontmatter = Frontmatter::new(
            "CLI Reference",
            "Complete command-line reference",
            "Every command, flag, and alias",
            WEIGHT,
        );
        let page = ctx.renderer.render(TEMPLATE, &context, Some(&frontmatter))?;
        Ok(Some(page))
    }
}
