//! # CLI Configuration
//!
//! Optional YAML file passed with the global `--config` flag:
//!
//! ```yaml
//! validation:
//!   strict: true
//! output:
//!   pretty: true
//! ```
//!
//! Every key is optional. Command-line flags win over file values.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub validation: ValidationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    /// Apply identifier, timestamp and ordering checks on top of presence.
    pub strict: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Pretty-print emitted JSON.
    pub pretty: bool,
}

impl CliConfig {
    /// Load `path`, or return defaults when no path was given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: CliConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }
}
