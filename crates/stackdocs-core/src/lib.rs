//! stackdocs-core: schema-driven documentation generation
//!
//! This crate turns a tree of service definition files into a set of
//! documentation pages. The pipeline discovers definitions, normalizes
//! their embedded configuration schemas into a canonical field model,
//! validates them, groups services by a directory-derived taxonomy, and
//! renders everything through named templates. Generators run
//! independently so one failure never takes down the rest of the run.
//!
//! The typical entry point is [`generate::run`] with a [`DocsConfig`]
//! and a [`generate::GeneratorRegistry`].

pub mod catalog;
pub mod category;
pub mod config;
pub mod generate;
pub mod render;
pub mod schema;
pub mod validation;

pub use catalog::{Catalog, CatalogError, CatalogLoader, ServiceDefinition};
pub use config::{ConfigError, DocsConfig};
pub use generate::{Generator, GeneratorContext, GeneratorError, GeneratorRegistry, PipelineError, RunSummary};
pub use render::{Frontmatter, RenderError, Renderer};
pub use schema::{transform, CanonicalSchema, FieldOutcome, FieldType, SchemaField};
pub use validation::{validate_all, validate_instance, InstanceReport, ValidationReport};
