//! CLI error type and process exit codes

use stackdocs_core::{CatalogError, ConfigError, PipelineError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("{failed} of {total} generator(s) failed")]
    GeneratorsFailed { failed: usize, total: usize },

    #[error("validation found {0} error(s)")]
    ValidationFailed(usize),

    #[error("failed to serialize report")]
    Report(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) => 2,
            CliError::Catalog(_) => 1,
            CliError::Pipeline(_) => 1,
            CliError::GeneratorsFailed { .. } => 3,
            CliError::ValidationFailed(_) => 4,
            CliError::Report(_) => 1,
        }
    }
}
