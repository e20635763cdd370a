//! Error types for connection string construction.

use thiserror::Error;

/// Result type for connection operations.
pub type ConnectionResult<T> = Result<T, ConnectionError>;

/// Errors that can occur while turning a database description into a connection string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    /// Unknown database type.
    #[error("Unknown database type: {0}")]
    UnknownDriver(String),

    /// Missing required field.
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Request body could not be decoded.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// TLS is enabled but the mode is not one the PostgreSQL backend can emit.
    #[error("Unsupported sslmode '{0}' with SSL enabled")]
    UnsupportedSslMode(String),

    /// Environment variable not found.
    #[error("Environment variable not found: {0}")]
    EnvNotFound(String),

    /// Invalid environment variable reference.
    #[error("Invalid environment variable '{name}': {message}")]
    InvalidEnvValue { name: String, message: String },
}

impl ConnectionError {
    /// Create a missing field error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    /// Create an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Check if this error means the configuration is incomplete rather than malformed.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::UnsupportedSslMode(_) | Self::MissingField(_))
    }
}

impl From<serde_json::Error> for ConnectionError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidRequest(err.to_string())
    }
}
