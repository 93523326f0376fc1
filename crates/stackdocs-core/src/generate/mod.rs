//! Generator orchestration
//!
//! The pipeline loads the catalog once, validates it once, and then runs
//! each configured generator against that shared snapshot. Generators
//! are isolated from each other: one failing never stops the rest, and
//! the run summary records every outcome by name.

use crate::catalog::{Catalog, CatalogError, CatalogLoader};
use crate::config::DocsConfig;
use crate::render::{RenderError, Renderer};
use crate::validation::{self, ValidationReport};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

mod cli_reference;
mod configuration_guide;
mod contributing;
mod homepage;
mod services_guide;

pub use cli_reference::CliReferenceGenerator;
pub use configuration_guide::ConfigurationGuideGenerator;
pub use contributing::ContributingGenerator;
pub use homepage::HomepageGenerator;
pub use services_guide::ServicesGuideGenerator;

/// Error from a single generator; never escapes the run loop
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("failed to read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("required input missing: {0}")]
    MissingInput(String),

    #[error("failed to parse '{}': {reason}", path.display())]
    Parse { path: PathBuf, reason: String },
}

/// Error that aborts the whole run before any generator executes
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("validation failed with {} error(s)", errors.len())]
    StrictValidation { errors: Vec<String> },

    #[error("failed to write '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Everything a generator may read during one run.
///
/// The catalog and validation report are loaded once and shared; no
/// generator gets a fresher or staler view than its siblings.
pub struct GeneratorContext<'a> {
    pub config: &'a DocsConfig,
    pub catalog: &'a Catalog,
    pub validation: &'a ValidationReport,
    pub renderer: &'a Renderer,
}

/// One documentation generator.
///
/// `Ok(Some(content))` is a page to write, `Ok(None)` is a deliberate
/// no-op (the generator ran and chose to produce nothing), and `Err` is
/// a failure recorded against this generator alone.
pub trait Generator {
    fn name(&self) -> &'static str;

    fn generate(&self, ctx: &GeneratorContext<'_>) -> Result<Option<String>, GeneratorError>;
}

/// Name-to-generator lookup used by the run loop
#[derive(Default)]
pub struct GeneratorRegistry {
    generators: HashMap<&'static str, Box<dyn Generator>>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The five built-in generators
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ServicesGuideGenerator));
        registry.register(Box::new(ConfigurationGuideGenerator));
        registry.register(Box::new(CliReferenceGenerator));
        registry.register(Box::new(HomepageGenerator));
        registry.register(Box::new(ContributingGenerator));
        registry
    }

    pub fn register(&mut self, generator: Box<dyn Generator>) {
        self.generators.insert(generator.name(), generator);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Generator> {
        self.generators.get(name).map(Box::as_ref)
    }

    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.generators.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

/// Per-generator outcomes of one pipeline run
#[derive(Debug, Default)]
pub struct RunSummary {
    pub succeeded: Vec<String>,
    pub failed: Vec<(String, String)>,
}

impl RunSummary {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Run the full pipeline: load, validate, generate, write.
///
/// Validation warnings are always logged. Errors abort the run only in
/// strict mode, and then before any output is written. Generator
/// failures are collected into the summary rather than propagated.
pub fn run(config: &DocsConfig, registry: &GeneratorRegistry) -> Result<RunSummary, PipelineError> {
    let catalog = CatalogLoader::new(&config.services_dir)
        .with_anchor(&config.category_anchor)
        .load_all()?;
    info!(services = catalog.len(), "catalog loaded");

    let validation = if config.validation.enabled {
        validation::validate_all(&catalog)
    } else {
        ValidationReport::default()
    };

    for warning in &validation.warnings {
        warn!("{warning}");
    }
    for error in &validation.errors {
        warn!("{error}");
    }
    if config.validation.strict && validation.has_errors() {
        return Err(PipelineError::StrictValidation {
            errors: validation.errors.clone(),
        });
    }

    let renderer = Renderer::from_dir(&config.templates_dir)?;

    fs::create_dir_all(&config.output_dir).map_err(|source| PipelineError::Io {
        path: config.output_dir.clone(),
        source,
    })?;

    let ctx = GeneratorContext {
        config,
        catalog: &catalog,
        validation: &validation,
        renderer: &renderer,
    };

    let mut summary = RunSummary::default();
    for toggle in &config.generators {
        if !toggle.enabled {
            continue;
        }

        let Some(generator) = registry.get(&toggle.name) else {
            warn!(generator = %toggle.name, "unknown generator, skipping");
            continue;
        };

        match generator.generate(&ctx) {
            Ok(Some(content)) => {
                let path = config.output_dir.join(&toggle.output);
                match fs::write(&path, content) {
                    Ok(()) => {
                        info!(generator = %toggle.name, path = %path.display(), "wrote page");
                        summary.succeeded.push(toggle.name.clone());
                    }
                    Err(error) => {
                        summary.failed.push((toggle.name.clone(), error.to_string()));
                    }
                }
            }
            Ok(None) => {
                info!(generator = %toggle.name, "produced no output");
                summary.succeeded.push(toggle.name.clone());
            }
            Err(error) => {
                warn!(generator = %toggle.name, %error, "generator failed");
                summary.failed.push((toggle.name.clone(), error.to_string()));
            }
        }
    }

    Ok(summary)
}
