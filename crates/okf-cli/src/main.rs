//! # okf CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use okf_cli::config::OkfConfig;
use okf_cli::enums::{run_enums, EnumsArgs};
use okf_cli::sample::{run_sample, SampleArgs};
use okf_cli::schema::{run_schema, SchemaArgs};
use okf_cli::validate::{run_validate, ValidateArgs};

/// Open Knowledge Framework CLI
///
/// Generates, describes and validates Open Know Where (OKW) and Open Know
/// Terms (OKT) facility records in YAML, JSON and DAML.
#[derive(Parser, Debug)]
#[command(name = "okf", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    /// Path to configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the sample record of each schema as YAML, JSON and DAML.
    Sample(SampleArgs),

    /// List the closed vocabularies of a schema.
    Enums(EnumsArgs),

    /// Print a schema as JSON Schema or DAML.
    Schema(SchemaArgs),

    /// Validate a YAML or JSON document against a schema.
    Validate(ValidateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flag when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    if cli.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "okf CLI starting");

    let config = match OkfConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(2);
        }
    };

    let result = match cli.command {
        Commands::Sample(args) => run_sample(&args, &config),
        Commands::Enums(args) => run_enums(&args),
        Commands::Schema(args) => run_schema(&args),
        Commands::Validate(args) => run_validate(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
