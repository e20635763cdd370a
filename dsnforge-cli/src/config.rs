//! CLI configuration handling.

use dsnforge_core::{CheckDatabaseRequest, EnvExpander, EnvSource};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Default config file name (looked up in the working directory)
pub const CONFIG_FILE_NAME: &str = "dsnforge.toml";

/// dsnforge CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Database description, in the setup wizard's request shape
    pub database: CheckDatabaseRequest,

    /// Logging configuration
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &Path) -> CliResult<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            CliError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::parse(&content)?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Parse configuration from TOML text, expanding `${VAR}` references
    /// from the process environment
    pub fn parse(content: &str) -> CliResult<Self> {
        Self::parse_with(content, &EnvExpander::new())
    }

    /// Parse configuration from TOML text with a custom environment source.
    ///
    /// References are expanded in the parsed string values, so comments are
    /// never expanded and substituted text is never read as TOML.
    pub fn parse_with<S: EnvSource>(content: &str, expander: &EnvExpander<S>) -> CliResult<Self> {
        let mut config: Config = toml::from_str(content)?;
        config.database = config.database.expand_env(expander)?;
        config.log.level = expander.expand(&config.log.level)?;
        Ok(config)
    }

    /// Resolve the configuration for this run.
    ///
    /// An explicit path must exist. Without one, `dsnforge.toml` in the
    /// working directory is used when present, otherwise the defaults.
    pub async fn discover(explicit: Option<&Path>) -> CliResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path).await;
        }

        let default_path = Path::new(CONFIG_FILE_NAME);
        if tokio::fs::try_exists(default_path).await.unwrap_or(false) {
            Self::load(default_path).await
        } else {
            Ok(Self::default())
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Level applied to the dsnforge crates
    pub level: String,

    /// Output format
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::default(),
        }
    }
}

/// Log output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Single-line human readable output
    #[default]
    Compact,
    /// Multi-line human readable output
    Pretty,
    /// Newline-delimited JSON
    Json,
}

impl LogFormat {
    /// Parse a format name, as given in `DSNFORGE_LOG_FORMAT`
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "compact" => Some(Self::Compact),
            "pretty" => Some(Self::Pretty),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}
