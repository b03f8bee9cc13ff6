//! Configuration file handling
//!
//! A configuration is a single JSON object:
//!
//! ```json
//! {
//!   "log_level": "info",
//!   "log_format": "text",
//!   "tables": [
//!     { "name": "users", "fields": [
//!       { "name": "id", "type": "integer", "primaryKey": true, "autoIncrement": true },
//!       { "name": "name", "type": "text", "notNull": true }
//!     ] }
//!   ]
//! }
//! ```
//!
//! Every key is optional. Tables are created in the order listed.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::LogFormat;
use crate::schema::TableSchema;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Read { .. } => "TABULA_CONFIG_READ",
            ConfigError::Parse(_) => "TABULA_CONFIG_PARSE",
            ConfigError::Invalid(_) => "TABULA_CONFIG_INVALID",
        }
    }
}

/// Store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Log filter directive (optional, default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log output format: "text" or "json" (optional, default "text")
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Tables to create at startup
    #[serde(default)]
    pub tables: Vec<TableSchema>,
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "text".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
            tables: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(content: &str) -> ConfigResult<Self> {
        let config: Config = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if !matches!(self.log_format.as_str(), "text" | "json") {
            return Err(ConfigError::Invalid(format!(
                "log_format must be 'text' or 'json', got '{}'",
                self.log_format
            )));
        }

        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Invalid("log_level must not be empty".into()));
        }

        let mut names = HashSet::new();
        for table in &self.tables {
            if !names.insert(table.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "table '{}' declared twice",
                    table.name
                )));
            }
            table.validate_structure().map_err(|reason| {
                ConfigError::Invalid(format!("table '{}': {}", table.name, reason))
            })?;
        }

        Ok(())
    }

    /// Parsed log format
    pub fn log_format(&self) -> LogFormat {
        LogFormat::parse(&self.log_format)
    }
}
