//! Run configuration.
//!
//! Every field has a default, so a config file only needs the keys it
//! changes. Without `--config` the defaults are used as-is.

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Column separator of the demographics file.
    pub data_delimiter: char,
    /// Separator between a command verb and its arguments.
    pub command_delimiter: char,
    /// Initial record capacity. A hint only; the record set grows freely.
    pub capacity_hint: usize,
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per query event.
    Json,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            data_delimiter:    ',',
            command_delimiter: ':',
            capacity_hint:     5000,
            output:            OutputFormat::Text,
        }
    }
}

impl RunConfig {
    /// Load from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?;
        let config: RunConfig = serde_json::from_str(&content)?;
        if config.data_delimiter == config.command_delimiter {
            log::warn!(
                "config: data and command delimiters are both '{}'",
                config.data_delimiter
            );
        }
        Ok(config)
    }

    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }
}
