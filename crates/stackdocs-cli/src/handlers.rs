//! Subcommand handlers

use crate::cli::{GenerateArgs, ReportFormat, ValidateArgs};
use crate::error::CliError;
use colored::Colorize;
use stackdocs_core::{generate, validate_all, CatalogLoader, DocsConfig, GeneratorRegistry};
use tracing::{debug, info};

pub fn generate(mut config: DocsConfig, args: GenerateArgs) -> Result<(), CliError> {
    if let Some(dir) = args.services_dir {
        config.services_dir = dir;
    }
    if let Some(dir) = args.templates_dir {
        config.templates_dir = dir;
    }
    if let Some(dir) = args.output_dir {
        config.output_dir = dir;
    }
    if args.strict {
        config.validation.strict = true;
    }
    if !args.only.is_empty() {
        config
            .generators
            .retain(|toggle| args.only.iter().any(|name| *name == toggle.name));
        debug!(generators = config.generators.len(), "restricted run plan");
    }

    let registry = GeneratorRegistry::with_defaults();
    let summary = generate::run(&config, &registry)?;
    info!(
        succeeded = summary.succeeded.len(),
        failed = summary.failed.len(),
        "generation run finished"
    );

    for name in &summary.succeeded {
        println!("{} {}", "ok".green(), name);
    }
    for (name, message) in &summary.failed {
        println!("{} {}: {}", "failed".red(), name, message);
    }

    if summary.all_succeeded() {
        println!(
            "\n{} {} generator(s) completed, output in {}",
            "done:".bold(),
            summary.succeeded.len(),
            config.output_dir.display()
        );
        Ok(())
    } else {
        Err(CliError::GeneratorsFailed {
            failed: summary.failed.len(),
            total: summary.succeeded.len() + summary.failed.len(),
        })
    }
}

pub fn validate(mut config: DocsConfig, args: ValidateArgs) -> Result<(), CliError> {
    if let Some(dir) = args.services_dir {
        config.services_dir = dir;
    }

    let catalog = CatalogLoader::new(&config.services_dir)
        .with_anchor(&config.category_anchor)
        .load_all()?;
    let report = validate_all(&catalog);
    debug!(
        services = catalog.len(),
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "validation pass complete"
    );

    match args.format {
        ReportFormat::Json => {
            let json = serde_json::json!({
                "services": catalog.len(),
                "valid": !report.has_errors(),
                "errors": report.errors,
                "warnings": report.warnings,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        ReportFormat::Text => {
            for error in &report.errors {
                println!("{} {}", "error:".red(), error);
            }
            for warning in &report.warnings {
                println!("{} {}", "warning:".yellow(), warning);
            }
            if report.is_clean() {
                println!(
                    "{} {} service(s) validated",
                    "ok:".green(),
                    catalog.len()
                );
            } else {
                println!(
                    "\n{} service(s), {} error(s), {} warning(s)",
                    catalog.len(),
                    report.errors.len(),
                    report.warnings.len()
                );
            }
        }
    }

    if report.has_errors() {
        Err(CliError::ValidationFailed(report.errors.len()))
    } else {
        Ok(())
    }
}
