use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::errors::CheckerError;
use crate::extraction::RegionOrder;
use crate::report::DEFAULT_SNIPPET_WIDTH;

/// Application configuration module
/// This module holds the settings of one comparison run. Values start from
/// the defaults below and are overridden by command line flags and their
/// environment variables; there is no configuration file.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Order in which regions are extracted and aligned
    #[serde(default)]
    pub region_order: RegionOrder,

    /// Characters shown per snippet in the console report
    #[serde(default = "default_snippet_width")]
    pub snippet_width: usize,

    /// Whether console output may be colored (still subject to terminal detection)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Report format
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Whether a brace imbalance in the translation fails the run
    #[serde(default)]
    pub fail_on_imbalance: bool,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Report output format
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    // @format: Colored, line-oriented console report
    #[default]
    Text,
    // @format: Pretty-printed JSON comparison result
    Json,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<&LogLevel> for LevelFilter {
    fn from(level: &LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_snippet_width() -> usize {
    DEFAULT_SNIPPET_WIDTH
}

impl Config {
    /// Validate the configuration values
    pub fn validate(&self) -> Result<(), CheckerError> {
        if self.snippet_width == 0 {
            return Err(CheckerError::InvalidConfig(
                "snippet width must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Self {
            region_order: RegionOrder::default(),
            snippet_width: default_snippet_width(),
            color: default_true(),
            output_format: OutputFormat::default(),
            fail_on_imbalance: false,
            log_level: LogLevel::default(),
        }
    }
}
