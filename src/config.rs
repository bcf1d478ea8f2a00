//! # Configuration Module
//!
//! Handles loading and validating configuration from TOML files.

use clap::ValueEnum;
use serde::de::Error;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Accepted `logging.level` values
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Rendering format for decoded records
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Labelled, human-readable dump
    #[default]
    Text,
    /// One JSON object per line
    Jsonl,
}

/// Output configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Empty: log to stderr
    #[serde(default)]
    pub log_dir: String,

    #[serde(default = "default_log_file_name")]
    pub file_name: String,
}

// Default value functions
fn default_log_level() -> String { "warn".to_string() }
fn default_log_file_name() -> String { "strato3.log".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_dir: String::new(),
            file_name: default_log_file_name(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    ///
    /// * `Result<Config>` - Loaded and validated configuration
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use strato3::config::Config;
    ///
    /// let config = Config::load("config/strato3.toml")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns error if any configuration value is out of valid range
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(crate::error::Strato3Error::Config(
                toml::de::Error::custom(format!(
                    "logging level must be one of: {}",
                    LOG_LEVELS.join(", ")
                ))
            ));
        }

        if self.logging.file_name.is_empty() {
            return Err(crate::error::Strato3Error::Config(
                toml::de::Error::custom("logging file_name cannot be empty")
            ));
        }

        // A file name with a directory part would escape log_dir
        if self.logging.file_name.contains(['/', '\\']) {
            return Err(crate::error::Strato3Error::Config(
                toml::de::Error::custom("logging file_name must not contain a path separator")
            ));
        }

        Ok(())
    }
}
