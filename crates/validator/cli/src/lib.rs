//! csaf-check - validate CSAF documents from the terminal
//!
//! This CLI drives one validation session per invocation:
//! - Validate a document with the external validator or a recorded payload
//! - Normalize a recorded engine payload into the canonical outcome
//! - List the available presets
//! - Show the effective configuration

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use commands::{normalize, presets, validate};
use config::CliConfig;
pub use error::{CliError, CliResult};

/// csaf-check CLI application
#[derive(Parser)]
#[command(name = "csaf-check")]
#[command(about = "Validate CSAF advisories against a conformance preset", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "CSAF_CHECK_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Output format (table, json, yaml)
    #[arg(short, long, default_value = "table", global = true)]
    output: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Validate a CSAF document
    Validate(validate::ValidateArgs),

    /// Print the canonical outcome of a recorded engine payload
    Normalize {
        /// Recorded engine payload (JSON)
        path: PathBuf,
    },

    /// List validation presets
    Presets,

    /// Show configuration
    Config,
}

/// Run using the current process arguments.
pub async fn run() -> CliResult<()> {
    run_with_args(std::env::args_os()).await
}

/// Run using the provided argument iterator.
pub async fn run_with_args<I, T>(args: I) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();

    // Load config
    let config = CliConfig::load(cli.config.as_deref())?;

    // Execute command
    match cli.command {
        Commands::Validate(args) => validate::execute(args, &config, cli.output).await,
        Commands::Normalize { path } => normalize::execute(&path, cli.output),
        Commands::Presets => presets::execute(cli.output),
        Commands::Config => match cli.output {
            output::OutputFormat::Table => {
                print!("{}", config.to_toml()?);
                Ok(())
            }
            format => output::print_single(&config, format),
        },
    }
}
