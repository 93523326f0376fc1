//! stackdocs: documentation generation for service stacks

mod cli;
mod error;
mod handlers;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use error::CliError;
use stackdocs_core::DocsConfig;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Config file picked up from the working directory when none is given
const DEFAULT_CONFIG: &str = "stackdocs.yaml";

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    init_tracing(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{} {}", "error:".red().bold(), error);
            let mut source = std::error::Error::source(&error);
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::from(error.exit_code() as u8)
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate(args) => handlers::generate(config, args),
        Commands::Validate(args) => handlers::validate(config, args),
    }
}

/// An explicit config path must load; the default path is optional.
fn load_config(path: Option<&Path>) -> Result<DocsConfig, CliError> {
    match path {
        Some(path) => Ok(DocsConfig::from_file(path)?),
        None => {
            let default = Path::new(DEFAULT_CONFIG);
            if default.exists() {
                Ok(DocsConfig::from_file(default)?)
            } else {
                Ok(DocsConfig::default())
            }
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("stackdocs={level},stackdocs_core={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
