//! The in-memory service definition model

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

/// One discovered, documentable service.
///
/// Instances are created by the catalog loader when a definition file is
/// parsed and are immutable for the rest of the generation run. The
/// `name` and `category` fields do not come from the document body: the
/// name is derived from the file name and the category from the file's
/// position in the tree, both filled in by the loader before the source
/// path is discarded from sight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDefinition {
    /// Derived from the file name; unique within the catalog
    #[serde(skip)]
    pub name: String,

    /// Human-readable summary; its absence is a validation warning
    #[serde(default)]
    pub description: Option<String>,

    /// Raw embedded schema document, transformed on demand
    #[serde(default)]
    pub configuration_schema: Option<Value>,

    /// Optional examples and use cases for the service page
    #[serde(default)]
    pub documentation: Option<ServiceDocs>,

    #[serde(default)]
    pub ports: Vec<PortMapping>,

    #[serde(default)]
    pub web_interface: Option<WebInterface>,

    /// Names of capabilities this service provides
    #[serde(default)]
    pub provides: Vec<String>,

    /// Names of capabilities this service requires
    #[serde(default)]
    pub requires: Vec<String>,

    /// Hidden services are parsed but excluded from the catalog
    #[serde(default)]
    pub hidden: bool,

    /// Discovery path; used only for category derivation, never rendered
    #[serde(skip)]
    pub source_path: PathBuf,

    /// Taxonomy bucket derived from the discovery path
    #[serde(skip)]
    pub category: String,
}

impl ServiceDefinition {
    /// Whether the definition carries a non-empty description
    pub fn has_description(&self) -> bool {
        self.description
            .as_deref()
            .map(|d| !d.trim().is_empty())
            .unwrap_or(false)
    }
}

/// Host-to-container port mapping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortMapping {
    pub host: u16,
    pub container: u16,
}

/// A linked web interface exposed by the service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebInterface {
    pub name: String,
    pub url: String,
}

/// Authored documentation embedded in a service definition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceDocs {
    #[serde(default)]
    pub examples: Vec<DocExample>,

    #[serde(default)]
    pub use_cases: Vec<String>,
}

/// One worked example in a service's documentation block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocExample {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub code: Option<String>,
}
