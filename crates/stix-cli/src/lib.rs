//! # stix-cli — Command-Line Interface for STIX 2.1 Objects
//!
//! Provides the `stix` binary.
//!
//! ## Subcommands
//!
//! - `stix decode` — Decode one object and print it back out.
//! - `stix validate` — Validate objects or bundles, one report per object.
//! - `stix new` — Emit a freshly stamped object of any type.
//! - `stix bundle` — Wrap decoded objects in a bundle.
//!
//! ```bash
//! stix validate --strict --objects indicator.json bundle.json
//! stix new campaign --name "Green Group Attacks" --label espionage
//! ```
//!
//! Handlers return a process exit code: 0 on success, 1 on validation
//! failure or operational error, 2 when an input does not decode.

pub mod bundle;
pub mod config;
pub mod create;
pub mod decode;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// Read an input file in full.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Render `value` as JSON, compact or indented.
pub fn render_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.context("failed to encode JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_json_switches_layout() {
        let value = serde_json::json!({"type": "tool"});
        assert_eq!(render_json(&value, false).unwrap(), r#"{"type":"tool"}"#);
        assert!(render_json(&value, true).unwrap().contains('\n'));
    }

    #[test]
    fn read_input_names_missing_file() {
        let err = read_input(Path::new("/nonexistent/object.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/object.json"));
    }
}
