//! Template rendering and frontmatter framing
//!
//! All generator output passes through here. Templates are loaded from a
//! single directory at startup and addressed by file name; a request for
//! a name that was never loaded is an error, not a silent empty page.
//! This module is also the only place that frames a document with
//! frontmatter, so every generated page carries the same envelope.

use chrono::Local;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use tera::Tera;
use thiserror::Error;

/// Fixed authoring date stamped into every page's `date` field
const AUTHORING_DATE: &str = "2025-10-01";

pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template not found: {name}")]
    TemplateNotFound { name: String },

    #[error("failed to load templates: {0}")]
    Load(String),

    #[error("failed to render template '{template}'")]
    Render {
        template: String,
        #[source]
        source: tera::Error,
    },

    #[error("failed to serialize frontmatter")]
    Frontmatter {
        #[source]
        source: serde_yaml::Error,
    },
}

/// Page metadata serialized as the YAML frontmatter block.
///
/// Field order here is the order in the emitted block.
#[derive(Debug, Clone, Serialize)]
pub struct Frontmatter {
    pub title: String,
    pub description: String,
    pub lead: String,
    pub date: String,
    pub lastmod: String,
    pub draft: bool,
    pub weight: u32,
    pub toc: bool,
}

impl Frontmatter {
    /// A page with the standard envelope: authored on the fixed date,
    /// last modified today, visible, with a table of contents.
    pub fn new(title: &str, description: &str, lead: &str, weight: u32) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            lead: lead.to_string(),
            date: AUTHORING_DATE.to_string(),
            lastmod: Local::now().format("%Y-%m-%d").to_string(),
            draft: false,
            weight,
            toc: true,
        }
    }
}

/// Template engine wrapper shared by all generators in a run
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Load every template in `dir` (non-recursively addressed by file
    /// name) and register the rendering helpers.
    pub fn from_dir(dir: &Path) -> RenderResult<Self> {
        let glob = format!("{}/*", dir.display());
        let mut tera = Tera::new(&glob).map_err(|e| RenderError::Load(e.to_string()))?;
        tera.autoescape_on(vec![]);
        tera.register_filter("to_yaml", to_yaml_filter);
        Ok(Self { tera })
    }

    /// Render `template` with `context`, optionally framed in frontmatter
    pub fn render(
        &self,
        template: &str,
        context: &tera::Context,
        frontmatter: Option<&Frontmatter>,
    ) -> RenderResult<String> {
        if !self.tera.get_template_names().any(|name| name == template) {
            return Err(RenderError::TemplateNotFound {
                name: template.to_string(),
            });
        }

        let body = self
            .tera
            .render(template, context)
            .map_err(|source| RenderError::Render {
                template: template.to_string(),
                source,
            })?;

        match frontmatter {
            Some(frontmatter) => self.frame(frontmatter, &body),
            None => Ok(body),
        }
    }

    /// Wrap a rendered body in a frontmatter envelope.
    ///
    /// The body is emitted as produced; only the envelope is added.
    pub fn frame(&self, frontmatter: &Frontmatter, body: &str) -> RenderResult<String> {
        let yaml = serde_yaml::to_string(frontmatter)
            .map_err(|source| RenderError::Frontmatter { source })?;
        Ok(format!("---\n{yaml}---\n\n{body}"))
    }
}

/// `to_yaml` template filter: serialize any value as a YAML fragment.
///
/// Keys keep their source order; the trailing newline serde_yaml adds is
/// trimmed so templates control their own spacing.
fn to_yaml_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let yaml = serde_yaml::to_string(value)
        .map_err(|e| tera::Error::msg(format!("to_yaml filter failed: {e}")))?;
    Ok(tera::Value::String(yaml.trim_end().to_string()))
}
