//! Contributing guide: republishes the contribution document

use super::{Generator, GeneratorContext, GeneratorError};
use crate::render::Frontmatter;
use std::fs;

const WEIGHT: u32 = 60;

pub struct ContributingGenerator;

impl Generator for ContributingGenerator {
    fn name(&self) -> &'static str {
        "contributing-guide"
    }

    fn generate(&self, ctx: &GeneratorContext<'_>) -> Result<Option<String>, GeneratorError> {
        let path = &ctx.config.contributing_path;
        if !path.exists() {
            return Err(GeneratorError::MissingInput(format!(
                "contribution guide '{}' does not exist",
                path.display()
            )));
        }

        let body = fs::read_to_string(path).map_err(|source| GeneratorError::Io {
            path: path.clone(),
            source,
        })?;

        let frontmatter = Frontmatter::new(
            "Contributing",
            "How to contribute to the project",
            "Development setup, conventions, and the review process",
            WEIGHT,
        );
        let page = ctx.renderer.frame(&frontmatter, body.trim())?;
        Ok(Some(page))
    }
}
