//! End-to-end pipeline tests: discovery through written pages

use stackdocs_core::config::GeneratorToggle;
use stackdocs_core::generate::{self, Generator, GeneratorContext, GeneratorError};
use stackdocs_core::{DocsConfig, GeneratorRegistry, PipelineError};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const POSTGRES: &str = "\
description: PostgreSQL database
ports:
  - host: 5432
    container: 5432
provides:
  - database
configuration_schema:
  properties:
    database:
      type: string
      description: Database name
      default: app
    port:
      type: integer
      description: Listen port
  required:
    - database
";

const REDIS: &str = "\
description: Redis cache
configuration_schema:
  password:
    type: string
    description: Auth password
";

const COMMANDS: &str = "\
metadata:
  description: Manage the local stack
categories:
  - name: Stack
    icon: S
    commands:
      - name: up
        description: Start the stack
global_flags:
  - name: --verbose
    description: Verbose output
";

struct Fixture {
    _dir: TempDir,
    root: PathBuf,
    config: DocsConfig,
}

fn fixture() -> Fixture {
    let dir = TempDir::new().unwrap();
    let root = dir.path().to_path_buf();

    let services = root.join("services");
    fs::create_dir_all(services.join("database")).unwrap();
    fs::create_dir_all(services.join("cache")).unwrap();
    fs::write(services.join("database/postgres.yaml"), POSTGRES).unwrap();
    fs::write(services.join("cache/redis.yaml"), REDIS).unwrap();

    let templates = root.join("templates");
    fs::create_dir_all(&templates).unwrap();
    fs::write(
        templates.join("service.md"),
        "### {{ name }}\n{{ description }}\n\
         {% if configuration_schema %}fields: {{ configuration_schema.fields | length }}\n\
         {% if configuration_schema.example %}```yaml\n{{ configuration_schema.example | to_yaml }}\n```\n{% endif %}{% endif %}",
    )
    .unwrap();
    fs::write(
        templates.join("configuration-guide.md"),
        "{% for item in service_list %}{{ item }}\n{% endfor %}\
         {% if complete_example %}{{ complete_example | to_yaml }}{% endif %}",
    )
    .unwrap();
    fs::write(
        templates.join("cli-reference.md"),
        "{{ metadata.description }}\n\
         {% for category in categories %}{% for command in category.commands %}{{ command.name }}\n{% endfor %}{% endfor %}",
    )
    .unwrap();

    fs::write(
        root.join("README.md"),
        "# The Stack\n\nRun services locally. See [config](docs/content/configuration.md).\n",
    )
    .unwrap();
    fs::write(root.join("CONTRIBUTING.md"), "## Setup\n\nClone and build.\n").unwrap();
    fs::write(root.join("commands.yaml"), COMMANDS).unwrap();

    let mut config = DocsConfig::default();
    config.services_dir = services;
    config.templates_dir = templates;
    config.output_dir = root.join("out");
    config.commands_file = root.join("commands.yaml");
    config.readme_path = root.join("README.md");
    config.contributing_path = root.join("CONTRIBUTING.md");

    Fixture {
        _dir: dir,
        root,
        config,
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_full_run_writes_every_page() {
    let fixture = fixture();
    let registry = GeneratorRegistry::with_defaults();

    let summary = generate::run(&fixture.config, &registry).unwrap();
    assert!(summary.all_succeeded());
    assert_eq!(summary.succeeded.len(), 5);

    let out = &fixture.config.output_dir;
    for page in [
        "services.md",
        "configuration.md",
        "cli-reference.md",
        "_index.md",
        "contributing.md",
    ] {
        assert!(out.join(page).exists(), "missing page {page}");
    }

    let services = read(&out.join("services.md"));
    assert!(services.starts_with("---\n"));
    assert!(services.contains("title: Services"));
    // Categories come from the directory after the anchor, in taxonomy order.
    let database_at = services.find("Database").unwrap();
    let cache_at = services.find("Cache").unwrap();
    assert!(database_at < cache_at);
    assert!(services.contains("### postgres"));
    assert!(services.contains("### redis"));
    // The wrapped schema contributed both fields and a synthesized example.
    assert!(services.contains("fields: 2"));
    assert!(services.contains("database: app"));
    assert!(services.contains("port: 1"));
}

#[test]
fn test_configuration_guide_lists_and_shows_example() {
    let fixture = fixture();
    let registry = GeneratorRegistry::with_defaults();
    generate::run(&fixture.config, &registry).unwrap();

    let page = read(&fixture.config.output_dir.join("configuration.md"));
    assert!(page.contains("**postgres** - PostgreSQL database"));
    assert!(page.contains("**redis** - Redis cache"));
    // postgres and redis are showcase services, so the worked example appears.
    assert!(page.contains("services:"));
    assert!(page.contains("password: example-password"));
}

#[test]
fn test_homepage_rewrites_readme() {
    let fixture = fixture();
    let registry = GeneratorRegistry::with_defaults();
    generate::run(&fixture.config, &registry).unwrap();

    let page = read(&fixture.config.output_dir.join("_index.md"));
    // The README heading stays in the body under the frontmatter.
    assert!(page.contains("# The Stack"));
    assert!(page.contains("[config](configuration/)"));
}

#[test]
fn test_missing_readme_is_a_quiet_no_op() {
    let fixture = fixture();
    fs::remove_file(&fixture.config.readme_path).unwrap();
    let registry = GeneratorRegistry::with_defaults();

    let summary = generate::run(&fixture.config, &registry).unwrap();
    assert!(summary.all_succeeded());
    assert!(summary.succeeded.iter().any(|n| n == "homepage"));
    assert!(!fixture.config.output_dir.join("_index.md").exists());
}

#[test]
fn test_strict_validation_halts_before_writing() {
    let fixture = fixture();
    fs::write(
        fixture.root.join("services/database/broken.yaml"),
        "description: Broken\nconfiguration_schema:\n  properties:\n    x:\n      type: 42\n",
    )
    .unwrap();

    let mut config = fixture.config.clone();
    config.validation.strict = true;
    let registry = GeneratorRegistry::with_defaults();

    let result = generate::run(&config, &registry);
    match result {
        Err(PipelineError::StrictValidation { errors }) => {
            assert_eq!(errors.len(), 1);
            assert!(errors[0].starts_with("broken:"));
        }
        other => panic!("expected strict validation failure, got {other:?}"),
    }
    assert!(!config.output_dir.exists());
}

#[test]
fn test_lenient_validation_still_generates() {
    let fixture = fixture();
    fs::write(
        fixture.root.join("services/database/broken.yaml"),
        "description: Broken\nconfiguration_schema:\n  properties:\n    x:\n      type: 42\n",
    )
    .unwrap();

    let registry = GeneratorRegistry::with_defaults();
    let summary = generate::run(&fixture.config, &registry).unwrap();
    assert!(summary.all_succeeded());
    assert!(fixture.config.output_dir.join("services.md").exists());
}

struct FailingGenerator;

impl Generator for FailingGenerator {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn generate(&self, _ctx: &GeneratorContext<'_>) -> Result<Option<String>, GeneratorError> {
        Err(GeneratorError::MissingInput("always fails".to_string()))
    }
}

#[test]
fn test_one_failure_never_stops_the_rest() {
    let fixture = fixture();
    let mut config = fixture.config.clone();
    config.generators.insert(
        0,
        GeneratorToggle {
            name: "failing".to_string(),
            enabled: true,
            output: PathBuf::from("failing.md"),
        },
    );

    let mut registry = GeneratorRegistry::with_defaults();
    registry.register(Box::new(FailingGenerator));

    let summary = generate::run(&config, &registry).unwrap();
    assert_eq!(summary.succeeded.len(), 5);
    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.failed[0].0, "failing");
    assert!(summary.failed[0].1.contains("always fails"));

    // Every sibling still wrote its page.
    assert!(config.output_dir.join("services.md").exists());
    assert!(config.output_dir.join("contributing.md").exists());
    assert!(!config.output_dir.join("failing.md").exists());
}

#[test]
fn test_unknown_generator_is_skipped() {
    let fixture = fixture();
    let mut config = fixture.config.clone();
    config.generators.push(GeneratorToggle {
        name: "does-not-exist".to_string(),
        enabled: true,
        output: PathBuf::from("never.md"),
    });

    let registry = GeneratorRegistry::with_defaults();
    let summary = generate::run(&config, &registry).unwrap();
    assert_eq!(summary.succeeded.len(), 5);
    assert!(summary.failed.is_empty());
    assert!(!config.output_dir.join("never.md").exists());
}

#[test]
fn test_disabled_generator_does_not_run() {
    let fixture = fixture();
    let mut config = fixture.config.clone();
    for toggle in &mut config.generators {
        if toggle.name != "homepage" {
            toggle.enabled = false;
        }
    }

    let registry = GeneratorRegistry::with_defaults();
    let summary = generate::run(&config, &registry).unwrap();
    assert_eq!(summary.succeeded, vec!["homepage"]);
    assert!(!config.output_dir.join("services.md").exists());
    assert!(config.output_dir.join("_index.md").exists());
}
