//! Command-line argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "stackdocs",
    version,
    about = "Generate documentation from service definitions",
    long_about = "Discovers service definition files, validates their embedded \
configuration schemas, and renders documentation pages through templates."
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to the pipeline config file
    #[arg(short, long, global = true, env = "STACKDOCS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the generators and write documentation pages
    Generate(GenerateArgs),

    /// Validate the service catalog without writing anything
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Override the service definition directory
    #[arg(long)]
    pub services_dir: Option<PathBuf>,

    /// Override the template directory
    #[arg(long)]
    pub templates_dir: Option<PathBuf>,

    /// Override the output directory
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Treat validation errors as fatal
    #[arg(long)]
    pub strict: bool,

    /// Run only the named generators (repeatable)
    #[arg(long = "only", value_name = "GENERATOR")]
    pub only: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Override the service definition directory
    #[arg(long)]
    pub services_dir: Option<PathBuf>,

    /// Output format for the validation report
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}
