//! Pipeline configuration
//!
//! Loaded from a YAML or JSON file, with every field defaulted so a
//! missing config file and an empty one behave the same. Paths are
//! interpreted relative to the process working directory.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file '{}'", path.display())]
    Parse { path: PathBuf, reason: String },
}

/// Top-level pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Root of the service definition tree
    pub services_dir: PathBuf,

    /// Directory holding the named templates
    pub templates_dir: PathBuf,

    /// Directory generated pages are written into
    pub output_dir: PathBuf,

    /// Path segment after which the category is read
    pub category_anchor: String,

    /// Command reference source document
    pub commands_file: PathBuf,

    /// Project README, reused for the homepage body
    pub readme_path: PathBuf,

    /// Contribution guide, republished verbatim
    pub contributing_path: PathBuf,

    pub site: SiteConfig,

    pub validation: ValidationConfig,

    /// Generators to run, in order; unknown names are skipped with a warning
    pub generators: Vec<GeneratorToggle>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub lead: String,
    pub repository_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub enabled: bool,

    /// When set, validation errors halt the run before anything is written
    pub strict: bool,
}

/// One generator entry in the run plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorToggle {
    pub name: String,

    #[serde(default = "enabled_default")]
    pub enabled: bool,

    /// Output file name, relative to `output_dir`
    pub output: PathBuf,
}

fn enabled_default() -> bool {
    true
}

impl GeneratorToggle {
    fn new(name: &str, output: &str) -> Self {
        Self {
            name: name.to_string(),
            enabled: true,
            output: PathBuf::from(output),
        }
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            services_dir: PathBuf::from("services"),
            templates_dir: PathBuf::from("templates"),
            output_dir: PathBuf::from("docs/content"),
            category_anchor: "services".to_string(),
            commands_file: PathBuf::from("docs/commands.yaml"),
            readme_path: PathBuf::from("README.md"),
            contributing_path: PathBuf::from("CONTRIBUTING.md"),
            site: SiteConfig::default(),
            validation: ValidationConfig::default(),
            generators: vec![
                GeneratorToggle::new("services-guide", "services.md"),
                GeneratorToggle::new("configuration-guide", "configuration.md"),
                GeneratorToggle::new("cli-reference", "cli-reference.md"),
                GeneratorToggle::new("homepage", "_index.md"),
                GeneratorToggle::new("contributing-guide", "contributing.md"),
            ],
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Stack Documentation".to_string(),
            description: "Generated documentation for the development stack".to_string(),
            lead: "Everything you need to run the stack locally".to_string(),
            repository_url: "https://github.com/example/stack".to_string(),
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            strict: false,
        }
    }
}

impl DocsConfig {
    /// Load a config file, dispatching on its extension.
    ///
    /// `.json` parses as JSON; anything else parses as YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        if is_json {
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        } else {
            serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = DocsConfig::default();
        assert_eq!(config.services_dir, PathBuf::from("services"));
        assert_eq!(config.category_anchor, "services");
        assert!(config.validation.enabled);
        assert!(!config.validation.strict);
        assert_eq!(config.generators.len(), 5);
        assert!(config.generators.iter().all(|g| g.enabled));
    }

    #[test]
    fn test_partial_yaml_overlays_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("docs.yaml");
        fs::write(
            &path,
            "services_dir: custom/services\nvalidation:\n  strict: true\n",
        )
        .unwrap();

        let config = DocsConfig::from_file(&path).unwrap();
        assert_eq!(config.services_dir, PathBuf::from("custom/services"));
        assert!(config.validation.strict);
        // Untouched sections keep their defaults.
        assert_eq!(config.output_dir, PathBuf::from("docs/content"));
        assert_eq!(config.generators.len(), 5);
    }

    #[test]
    fn test_json_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("docs.json");
        fs::write(
            &path,
            r#"{"generators": [{"name": "homepage", "output": "_index.md"}]}"#,
        )
        .unwrap();

        let config = DocsConfig::from_file(&path).unwrap();
        assert_eq!(config.generators.len(), 1);
        assert!(config.generators[0].enabled);
    }

    #[test]
    fn test_unreadable_file_is_io_error() {
        let result = DocsConfig::from_file(Path::new("/nonexistent/docs.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("docs.yaml");
        fs::write(&path, "services_dir: [unclosed").unwrap();

        let result = DocsConfig::from_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_validation_default_in_partial_block() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("docs.yaml");
        fs::write(&path, "validation:\n  strict: true\n").unwrap();

        let config = DocsConfig::from_file(&path).unwrap();
        assert!(config.validation.enabled);
        assert!(config.validation.strict);
    }
}
