//! Configuration for the dumper and its table rendering

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level dumper configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DumpConfig {
    #[serde(default)]
    pub render: RenderConfig,
}

impl DumpConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: DumpConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Table rendering options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Use the first row of each sheet as column headers
    pub header_row: bool,
    /// Print a 0-based row index gutter on the left
    pub index_column: bool,
    /// Clip cells longer than this many characters
    pub max_col_width: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            header_row: true,
            index_column: true,
            max_col_width: None,
        }
    }
}
