//! # Bundle Subcommand
//!
//! Decodes each input file and wraps the objects in a new bundle.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use stix_objects::Bundle;

use crate::config::CliConfig;

/// Arguments for the `stix bundle` subcommand.
#[derive(Args, Debug)]
pub struct BundleArgs {
    /// Files holding one STIX object each.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Pretty-print the bundle.
    #[arg(long)]
    pub pretty: bool,
}

/// Execute the bundle subcommand.
pub fn run_bundle(args: &BundleArgs, config: &CliConfig) -> Result<u8> {
    let bundle = build_bundle(&args.files)?;
    tracing::info!(id = %bundle.id, objects = bundle.len(), "bundle assembled");
    println!(
        "{}",
        crate::render_json(&bundle, args.pretty || config.output.pretty)?
    );
    Ok(0)
}

/// Decode every file, in order, into one bundle.
pub fn build_bundle(files: &[PathBuf]) -> Result<Bundle> {
    let mut bundle = Bundle::new();
    for path in files {
        bundle.add_object(decode_file(path)?);
    }
    Ok(bundle)
}

fn decode_file(path: &Path) -> Result<stix_objects::AnyObject> {
    let data = crate::read_input(path)?;
    stix_objects::decode(&data).with_context(|| format!("failed to decode {}", path.display()))
}
