//! Error types for service catalog loading

use std::path::PathBuf;
use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while walking and parsing the service-definition tree.
///
/// Every variant is fatal to the run: downstream generators depend on a
/// complete catalog, so a partially-read tree is never returned.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File or directory I/O errors
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parsing errors
    #[error("Failed to parse YAML file '{}': {source}", path.display())]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// JSON parsing errors
    #[error("Failed to parse JSON file '{}': {source}", path.display())]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A parsed document does not have the service-definition shape
    #[error("Invalid service definition '{}': {reason}", path.display())]
    InvalidDefinition { path: PathBuf, reason: String },

    /// The catalog root is missing or not a directory
    #[error("Service directory '{}' does not exist or is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// Two definition files derive the same service name.
    ///
    /// Last-write-wins would silently depend on filesystem iteration
    /// order, so collisions fail the run and name both files.
    #[error("Duplicate service name '{name}': defined by both '{}' and '{}'", first.display(), second.display())]
    DuplicateService {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },
}

impl CatalogError {
    /// Create an I/O error with path context
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        Self::Io { path, source }
    }

    /// Create a YAML parsing error with path context
    pub fn yaml_parse(path: PathBuf, source: serde_yaml::Error) -> Self {
        Self::YamlParse { path, source }
    }

    /// Create a JSON parsing error with path context
    pub fn json_parse(path: PathBuf, source: serde_json::Error) -> Self {
        Self::JsonParse { path, source }
    }

    /// Create an invalid-definition error
    pub fn invalid_definition(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::InvalidDefinition {
            path,
            reason: reason.into(),
        }
    }

    /// Get the path associated with this error, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::YamlParse { path, .. } => Some(path),
            Self::JsonParse { path, .. } => Some(path),
            Self::InvalidDefinition { path, .. } => Some(path),
            Self::NotADirectory { path } => Some(path),
            Self::DuplicateService { .. } => None,
        }
    }
}
