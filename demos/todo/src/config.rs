//! Configuration for the demo binary.
//!
//! Loaded from environment variables. `main` loads an optional `.env` file
//! first, so values there are picked up too.

use std::str::FromStr;
use thiserror::Error;

/// Default `tracing` filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "todo=info,reflux_runtime=info";

/// Default store name when `TODO_DEMO_STORE_NAME` is unset
pub const DEFAULT_STORE_NAME: &str = "todo";

/// Errors raised while reading configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `TODO_DEMO_FORMAT` held something other than `text` or `json`
    #[error("Unknown output format {0:?}, expected \"text\" or \"json\"")]
    UnknownFormat(String),
}

/// How the subscriber prints the state after each dispatch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable listing
    #[default]
    Text,
    /// One JSON document per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }
}

/// Demo configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    /// `tracing` filter directive (`RUST_LOG`)
    pub log_filter: String,
    /// Output format (`TODO_DEMO_FORMAT`)
    pub format: OutputFormat,
    /// Store name for spans and metric labels (`TODO_DEMO_STORE_NAME`)
    pub store_name: String,
}

impl DemoConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownFormat`] for an unrecognized
    /// `TODO_DEMO_FORMAT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownFormat`] for an unrecognized
    /// `TODO_DEMO_FORMAT`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = match lookup("TODO_DEMO_FORMAT") {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            format,
            store_name: lookup("TODO_DEMO_STORE_NAME")
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_STORE_NAME.to_string()),
        })
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            format: OutputFormat::Text,
            store_name: DEFAULT_STORE_NAME.to_string(),
        }
    }
}
