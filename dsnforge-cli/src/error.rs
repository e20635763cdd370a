//! CLI error types and result alias.

use dsnforge_core::ConnectionError;
use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// IO error
    #[error("IO error: {0}")]
    #[diagnostic(code(dsnforge::io))]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    #[diagnostic(code(dsnforge::config))]
    Config(String),

    /// Invalid database description
    #[error("Connection error: {0}")]
    #[diagnostic(code(dsnforge::connection))]
    Connection(ConnectionError),

    /// The description cannot produce a connection string
    #[error("Database configuration incomplete: {0}")]
    #[diagnostic(
        code(dsnforge::incomplete),
        help("set --db-type, and with --ssl use --ssl-mode require, verify-ca or verify-full")
    )]
    Incomplete(String),

    /// Output error
    #[error("Output error: {0}")]
    #[diagnostic(code(dsnforge::output))]
    Output(String),
}

impl From<ConnectionError> for CliError {
    fn from(err: ConnectionError) -> Self {
        match err {
            err if err.is_incomplete() => CliError::Incomplete(err.to_string()),
            ConnectionError::EnvNotFound(_) | ConnectionError::InvalidEnvValue { .. } => {
                CliError::Config(err.to_string())
            }
            other => CliError::Connection(other),
        }
    }
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        CliError::Config(format!("Failed to parse TOML: {}", err))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Output(format!("Failed to serialize JSON: {}", err))
    }
}
