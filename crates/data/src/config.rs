//! Data layer configuration
//!
//! Read from the environment:
//! - `CLEANSLATE_DATA_SOURCE`: `remote` (default) or `mock`
//! - `CLEANSLATE_API_URL`: REST base URL
//! - `CLEANSLATE_DELETE_MISSING`: `fail` (default) or `ignore`

use cleanslate_core::task::MissingTaskPolicy;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://api.example.com/";

const DATA_SOURCE_VAR: &str = "CLEANSLATE_DATA_SOURCE";
const API_URL_VAR: &str = "CLEANSLATE_API_URL";
const DELETE_MISSING_VAR: &str = "CLEANSLATE_DELETE_MISSING";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {name}, expected one of: {expected}")]
    InvalidValue {
        name: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("{name} must not be empty")]
    Empty { name: &'static str },
}

/// Where tasks live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataSource {
    #[default]
    Remote,
    Mock,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataConfig {
    pub source: DataSource,
    pub base_url: String,
    pub missing_task_policy: MissingTaskPolicy,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source: DataSource::default(),
            base_url: DEFAULT_API_URL.to_string(),
            missing_task_policy: MissingTaskPolicy::default(),
        }
    }
}

impl DataConfig {
    /// Load from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load from an arbitrary variable lookup; unset variables keep defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(DATA_SOURCE_VAR) {
            config.source = parse_data_source(&raw)?;
        }
        if let Some(raw) = lookup(API_URL_VAR) {
            let url = raw.trim();
            if url.is_empty() {
                return Err(ConfigError::Empty { name: API_URL_VAR });
            }
            config.base_url = url.to_string();
        }
        if let Some(raw) = lookup(DELETE_MISSING_VAR) {
            config.missing_task_policy = parse_missing_task_policy(&raw)?;
        }

        Ok(config)
    }
}

fn parse_data_source(raw: &str) -> Result<DataSource, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "remote" | "rest" => Ok(DataSource::Remote),
        "mock" | "memory" | "offline" => Ok(DataSource::Mock),
        _ => Err(ConfigError::InvalidValue {
            name: DATA_SOURCE_VAR,
            value: raw.to_string(),
            expected: "remote, mock",
        }),
    }
}

fn parse_missing_task_policy(raw: &str) -> Result<MissingTaskPolicy, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "fail" | "error" => Ok(MissingTaskPolicy::Fail),
        "ignore" => Ok(MissingTaskPolicy::Ignore),
        _ => Err(ConfigError::InvalidValue {
            name: DELETE_MISSING_VAR,
            value: raw.to_string(),
            expected: "fail, ignore",
        }),
    }
}
