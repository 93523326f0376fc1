//! Recursive service-definition discovery and parsing

use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::service::ServiceDefinition;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Fallback category for services whose path carries no taxonomy segment
pub const OTHER_CATEGORY: &str = "other";

/// Default anchor directory name used for category derivation
pub const DEFAULT_ANCHOR: &str = "services";

/// Catalog of discovered services, keyed by derived name
pub type Catalog = BTreeMap<String, ServiceDefinition>;

/// Supported file formats for service definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML format (.yaml, .yml)
    Yaml,
    /// JSON format (.json)
    Json,
}

impl Format {
    /// Detect format from file extension; `None` for unrecognized files
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => match ext.to_lowercase().as_str() {
                "yaml" | "yml" => Some(Format::Yaml),
                "json" => Some(Format::Json),
                _ => None,
            },
            None => None,
        }
    }
}

/// Walks a service-definition directory tree and produces the catalog.
///
/// Entries are visited in lexicographic order so discovery is
/// deterministic across platforms. Files with a recognized extension are
/// parsed as structured documents; a parse failure anywhere is fatal to
/// the run. Duplicate derived names fail fast rather than silently
/// picking a winner.
#[derive(Debug)]
pub struct CatalogLoader {
    root: PathBuf,
    anchor: String,
}

impl CatalogLoader {
    /// Create a loader rooted at `root` with the default category anchor
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            anchor: DEFAULT_ANCHOR.to_string(),
        }
    }

    /// Override the anchor directory name used for category derivation
    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = anchor.into();
        self
    }

    /// Load every visible service definition under the root.
    ///
    /// Definitions with `hidden: true` are parsed (so upstream callers
    /// still see their parse errors) but excluded from the catalog.
    pub fn load_all(&self) -> CatalogResult<Catalog> {
        if !self.root.is_dir() {
            return Err(CatalogError::NotADirectory {
                path: self.root.clone(),
            });
        }

        let mut catalog = Catalog::new();
        self.visit_dir(&self.root, &mut catalog)?;

        tracing::debug!(
            root = %self.root.display(),
            services = catalog.len(),
            "loaded service catalog"
        );

        Ok(catalog)
    }

    fn visit_dir(&self, dir: &Path, catalog: &mut Catalog) -> CatalogResult<()> {
        let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
            .map_err(|e| CatalogError::io(dir.to_path_buf(), e))?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<_, _>>()
            .map_err(|e| CatalogError::io(dir.to_path_buf(), e))?;
        entries.sort();

        for path in entries {
            let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
            if file_name.starts_with('.') {
                continue;
            }

            if path.is_dir() {
                self.visit_dir(&path, catalog)?;
            } else if let Some(format) = Format::from_path(&path) {
                self.load_definition(&path, format, catalog)?;
            }
        }

        Ok(())
    }

    fn load_definition(
        &self,
        path: &Path,
        format: Format,
        catalog: &mut Catalog,
    ) -> CatalogResult<()> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::io(path.to_path_buf(), e))?;

        let value = parse_content(&content, format, path)?;
        if !value.is_object() {
            return Err(CatalogError::invalid_definition(
                path.to_path_buf(),
                "definition must be a mapping at the root level",
            ));
        }

        let mut definition: ServiceDefinition = serde_json::from_value(value)
            .map_err(|e| CatalogError::json_parse(path.to_path_buf(), e))?;

        if definition.hidden {
            tracing::debug!(path = %path.display(), "skipping hidden service");
            return Ok(());
        }

        let name = derive_name(path);
        definition.name = name.clone();
        definition.category = category_from_path(path, &self.anchor);
        definition.source_path = path.to_path_buf();

        if let Some(existing) = catalog.get(&name) {
            return Err(CatalogError::DuplicateService {
                name,
                first: existing.source_path.clone(),
                second: path.to_path_buf(),
            });
        }
        catalog.insert(name, definition);

        Ok(())
    }
}

/// Derive the service name from the definition file name (stem)
fn derive_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string()
}

/// Parse definition content into a JSON value for uniform handling
fn parse_content(content: &str, format: Format, path: &Path) -> CatalogResult<Value> {
    match format {
        Format::Yaml => {
            let yaml_value: serde_yaml::Value = serde_yaml::from_str(content)
                .map_err(|e| CatalogError::yaml_parse(path.to_path_buf(), e))?;
            serde_json::to_value(yaml_value)
                .map_err(|e| CatalogError::json_parse(path.to_path_buf(), e))
        }
        Format::Json => serde_json::from_str(content)
            .map_err(|e| CatalogError::json_parse(path.to_path_buf(), e)),
    }
}

/// Derive the category from a discovery path.
///
/// The category is the path segment immediately following the anchor
/// directory name. A path with no anchor segment, or where the anchor is
/// the final directory, resolves to [`OTHER_CATEGORY`]. This is a pure
/// function of the path and never reads file content.
pub fn category_from_path(path: &Path, anchor: &str) -> String {
    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let segments: Vec<&str> = path.iter().filter_map(|s| s.to_str()).collect();

    for window in segments.windows(2) {
        // The segment after the anchor must be a directory, not the
        // definition file itself.
        if window[0] == anchor && window[1] != file_name {
            return window[1].to_string();
        }
    }

    OTHER_CATEGORY.to_string()
}
