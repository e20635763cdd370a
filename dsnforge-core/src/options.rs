//! SSL/TLS options.

use std::fmt;

use serde::{Deserialize, Serialize};

/// SSL/TLS mode requested for a PostgreSQL connection.
///
/// Unrecognized wire values are kept verbatim in [`SslMode::Other`] so they
/// can be reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SslMode {
    /// Disable SSL.
    #[default]
    Disable,
    /// Require SSL without verifying the server.
    Require,
    /// Require SSL and verify the server certificate authority.
    VerifyCa,
    /// Require SSL and verify the certificate authority and hostname.
    VerifyFull,
    /// Any other value supplied by the user.
    Other(String),
}

impl SslMode {
    /// Parse from string. Never fails.
    pub fn parse(s: &str) -> Self {
        match s {
            "disable" => Self::Disable,
            "require" => Self::Require,
            "verify-ca" => Self::VerifyCa,
            "verify-full" => Self::VerifyFull,
            other => Self::Other(other.to_string()),
        }
    }

    /// Convert to the `sslmode` value understood by libpq.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Disable => "disable",
            Self::Require => "require",
            Self::VerifyCa => "verify-ca",
            Self::VerifyFull => "verify-full",
            Self::Other(raw) => raw,
        }
    }

    /// Whether this mode verifies the server certificate.
    pub fn is_verifying(&self) -> bool {
        matches!(self, Self::VerifyCa | Self::VerifyFull)
    }
}

impl fmt::Display for SslMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for SslMode {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<&str> for SslMode {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<SslMode> for String {
    fn from(mode: SslMode) -> Self {
        mode.as_str().to_string()
    }
}

/// Certificate and key paths for verifying TLS modes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SslFiles {
    /// Path to the root CA certificate (`sslrootcert`).
    pub root_cert: Option<String>,
    /// Path to the client certificate (`sslcert`).
    pub cert: Option<String>,
    /// Path to the client key (`sslkey`).
    pub key: Option<String>,
}

impl SslFiles {
    /// Create an empty set of paths.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root CA certificate path.
    pub fn with_root_cert(mut self, path: impl Into<String>) -> Self {
        self.root_cert = Some(path.into());
        self
    }

    /// Set the client certificate path.
    pub fn with_cert(mut self, path: impl Into<String>) -> Self {
        self.cert = Some(path.into());
        self
    }

    /// Set the client key path.
    pub fn with_key(mut self, path: impl Into<String>) -> Self {
        self.key = Some(path.into());
        self
    }

    /// Iterate `(libpq key, path)` pairs in emission order.
    pub fn entries(&self) -> [(&'static str, Option<&str>); 3] {
        [
            ("sslrootcert", self.root_cert.as_deref()),
            ("sslcert", self.cert.as_deref()),
            ("sslkey", self.key.as_deref()),
        ]
    }
}
