//! # stix CLI entry point
//!
//! Parses command-line arguments, loads configuration, installs logging,
//! and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use stix_cli::bundle::{run_bundle, BundleArgs};
use stix_cli::config::CliConfig;
use stix_cli::create::{run_new, NewArgs};
use stix_cli::decode::{run_decode, DecodeArgs};
use stix_cli::validate::{run_validate, ValidateArgs};

/// STIX 2.1 object toolkit.
///
/// Decodes objects of any type, validates envelopes and per-type required
/// properties, creates new objects, and assembles bundles.
#[derive(Parser, Debug)]
#[command(name = "stix", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode one object and print it back out.
    Decode(DecodeArgs),

    /// Validate objects and bundles.
    Validate(ValidateArgs),

    /// Create a new object of any type.
    New(NewArgs),

    /// Wrap objects from several files in one bundle.
    Bundle(BundleArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    if cli.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "stix CLI starting");

    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };

    let result = match cli.command {
        Commands::Decode(args) => run_decode(&args, &config),
        Commands::Validate(args) => run_validate(&args, &config),
        Commands::New(args) => run_new(&args, &config),
        Commands::Bundle(args) => run_bundle(&args, &config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
