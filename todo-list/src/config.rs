use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "todo-list.toml";
pub const ENV_PREFIX: &str = "TODO";
pub const DEFAULT_SEPARATOR: &str = "-----------------------------";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Load(#[from] config::ConfigError),
    #[error("unknown log level '{0}'")]
    InvalidLogLevel(String),
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct LogConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LogConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        parse_level(&self.level)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default)]
    pub show_index: bool,
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_index: false,
            separator: default_separator(),
        }
    }
}

impl Config {
    /// Loads configuration from defaults, then `file` (or [`DEFAULT_CONFIG_FILE`] if it
    /// exists), then `TODO__*` environment variables.
    ///
    /// An explicitly given file must exist. The log level is left unchecked; callers
    /// validate whichever level they end up using.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let file_source = match file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };
        let settings = config::Config::builder()
            .add_source(file_source)
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

pub fn parse_level(level: &str) -> Result<LevelFilter, ConfigError> {
    LevelFilter::from_str(level.trim())
        .map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))
}

fn default_level() -> String {
    "warn".to_string()
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}
