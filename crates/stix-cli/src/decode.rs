//! # Decode Subcommand
//!
//! Decodes a single object, prints its discriminator and identifier, then
//! the re-encoded JSON. Unregistered types are marked `(custom)`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use stix_objects::{AnyObject, StixObject};

use crate::config::CliConfig;

/// Arguments for the `stix decode` subcommand.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// JSON file holding one STIX object.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Pretty-print the re-encoded object.
    #[arg(long)]
    pub pretty: bool,
}

/// Execute the decode subcommand.
///
/// Returns exit code: 0 on success, 2 if the file does not decode.
pub fn run_decode(args: &DecodeArgs, config: &CliConfig) -> Result<u8> {
    let data = crate::read_input(&args.file)?;
    let object = match stix_objects::decode(&data) {
        Ok(object) => object,
        Err(e) => {
            println!("FAIL: {} — {e}", args.file.display());
            return Ok(2);
        }
    };

    println!("{}", summary_line(&object));
    println!(
        "{}",
        crate::render_json(&object, args.pretty || config.output.pretty)?
    );
    Ok(0)
}

/// `<type> <id>` with a `(custom)` marker for fallback objects.
pub fn summary_line(object: &AnyObject) -> String {
    let id = if object.id().is_empty() {
        "<no id>"
    } else {
        object.id()
    };
    if object.is_custom() {
        format!("{} {id} (custom)", object.object_type())
    } else {
        format!("{} {id}", object.object_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stix_objects::objects::campaign::Campaign;
    use stix_objects::CustomObject;

    fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn summary_marks_custom() {
        let custom = AnyObject::from(CustomObject::new("x-widget"));
        assert!(summary_line(&custom).ends_with("(custom)"));

        let campaign = AnyObject::from(Campaign::new());
        let line = summary_line(&campaign);
        assert!(line.starts_with("campaign campaign--"));
        assert!(!line.contains("custom"));
    }

    #[test]
    fn summary_without_id() {
        let object = stix_objects::decode(br#"{"type":"tool"}"#).unwrap();
        assert_eq!(summary_line(&object), "tool <no id>");
    }

    #[test]
    fn decode_valid_file_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "tool.json", r#"{"type":"tool","name":"nmap"}"#);
        let args = DecodeArgs {
            file: path,
            pretty: false,
        };
        assert_eq!(run_decode(&args, &CliConfig::default()).unwrap(), 0);
    }

    #[test]
    fn decode_malformed_file_returns_two() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "bad.json", r#"{"type":"tool""#);
        let args = DecodeArgs {
            file: path,
            pretty: true,
        };
        assert_eq!(run_decode(&args, &CliConfig::default()).unwrap(), 2);
    }

    #[test]
    fn decode_missing_file_is_error() {
        let args = DecodeArgs {
            file: PathBuf::from("/nonexistent/tool.json"),
            pretty: false,
        };
        assert!(run_decode(&args, &CliConfig::default()).is_err());
    }
}
