//! Run configuration file support.
//!
//! A complete run is described by one configuration value: the input field
//! delimiter, the aggregation period, and the input/output column layouts.
//! Hosts can build the value directly or load it from a TOML file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::io::reader::ColumnLayout;
use crate::io::writer::OutputLayout;
use crate::time::period::Period;
use crate::time::timestamp::Unit;

/// Configuration for one aggregation run.
///
/// Every field has a default, so a TOML file only needs to name what it
/// changes:
///
/// ```toml
/// delimiter = ";"
/// period = { length = 15, unit = "minutes" }
///
/// [input]
/// date_column = 0
/// time_column = 0
/// separator = "space"
/// ignored_columns = [3]
///
/// [output]
/// same_column = true
/// separator = "tab"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub delimiter: char,
    pub period: Period,
    pub input: ColumnLayout,
    pub output: OutputLayout,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            period: Period::of(1, Unit::Hours),
            input: ColumnLayout::default(),
            output: OutputLayout::default(),
        }
    }
}

impl RunConfig {
    /// Loads a configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration file {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("failed to parse configuration file {}", path.display()))?;
        Ok(config)
    }
}
