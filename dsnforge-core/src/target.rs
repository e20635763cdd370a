//! Resolved connection targets.
//!
//! A [`Target`] is what a [`DatabaseConfig`] means once the backend has been
//! chosen and the TLS settings have been checked against the filesystem. TLS
//! only exists inside the PostgreSQL arm.

use tracing::trace;

use crate::config::DatabaseConfig;
use crate::error::{ConnectionError, ConnectionResult};
use crate::host_port::HostPort;
use crate::kind::DatabaseKind;
use crate::options::SslMode;
use crate::probe::PathProbe;

/// A borrowed, fully resolved connection target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target<'a> {
    /// Embedded file database.
    File {
        /// Database file path, used verbatim.
        path: &'a str,
    },
    /// MySQL `user:pass@tcp(host)/db` target.
    MySql {
        /// Username.
        username: &'a str,
        /// Password.
        password: &'a str,
        /// Host, passed through unparsed.
        host: &'a str,
        /// Database name.
        database: &'a str,
    },
    /// PostgreSQL key=value target.
    Postgres {
        /// Split host and port.
        host_port: HostPort<'a>,
        /// Username.
        username: &'a str,
        /// Password.
        password: &'a str,
        /// Database name.
        database: &'a str,
        /// TLS negotiation tier.
        tls: Tls<'a>,
    },
}

/// TLS tier of a PostgreSQL target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tls<'a> {
    /// SSL not requested.
    Disabled,
    /// SSL required, server not verified.
    Require,
    /// SSL required and the server verified.
    Verify {
        /// Verification depth.
        mode: VerifyMode,
        /// Certificate paths that were supplied, with their existence status.
        certs: Vec<CertFile<'a>>,
    },
    /// SSL requested with a mode that cannot be emitted.
    Unsupported(&'a SslMode),
}

/// Verification depth for verifying TLS tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyMode {
    /// Verify the certificate authority (`verify-ca`).
    Ca,
    /// Verify the certificate authority and hostname (`verify-full`).
    Full,
}

impl VerifyMode {
    /// Get the `sslmode` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ca => "verify-ca",
            Self::Full => "verify-full",
        }
    }
}

/// A supplied certificate or key path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CertFile<'a> {
    /// libpq parameter name (`sslrootcert`, `sslcert`, `sslkey`).
    pub param: &'static str,
    /// Path as supplied.
    pub path: &'a str,
    /// Whether the probe found the path.
    pub present: bool,
}

impl<'a> Tls<'a> {
    /// Resolve the TLS tier for a PostgreSQL configuration.
    pub fn resolve<P: PathProbe + ?Sized>(config: &'a DatabaseConfig, probe: &P) -> Self {
        if !config.ssl_enabled {
            return Self::Disabled;
        }

        let mode = match &config.ssl_mode {
            SslMode::Require => return Self::Require,
            SslMode::VerifyCa => VerifyMode::Ca,
            SslMode::VerifyFull => VerifyMode::Full,
            other => return Self::Unsupported(other),
        };

        let certs = config
            .ssl_files
            .entries()
            .into_iter()
            .filter_map(|(param, path)| {
                let path = path.filter(|p| !p.is_empty())?;
                let present = probe.exists(path);
                trace!(param, present, "checked certificate path");
                Some(CertFile {
                    param,
                    path,
                    present,
                })
            })
            .collect();

        Self::Verify { mode, certs }
    }

    /// Get the `sslmode` value, if this tier can be emitted.
    pub fn sslmode(&self) -> Option<&'static str> {
        match self {
            Self::Disabled => Some("disable"),
            Self::Require => Some("require"),
            Self::Verify { mode, .. } => Some(mode.as_str()),
            Self::Unsupported(_) => None,
        }
    }
}

impl<'a> Target<'a> {
    /// Resolve a configuration into a target, checking certificate paths with `probe`.
    pub fn resolve<P: PathProbe + ?Sized>(config: &'a DatabaseConfig, probe: &P) -> Self {
        match config.kind {
            DatabaseKind::Sqlite => Self::File { path: &config.file },
            DatabaseKind::MySql => Self::MySql {
                username: &config.username,
                password: &config.password,
                host: &config.host,
                database: &config.database,
            },
            DatabaseKind::Postgres => Self::Postgres {
                host_port: HostPort::parse(&config.host),
                username: &config.username,
                password: &config.password,
                database: &config.database,
                tls: Tls::resolve(config, probe),
            },
        }
    }

    /// Get the backend of this target.
    pub fn kind(&self) -> DatabaseKind {
        match self {
            Self::File { .. } => DatabaseKind::Sqlite,
            Self::MySql { .. } => DatabaseKind::MySql,
            Self::Postgres { .. } => DatabaseKind::Postgres,
        }
    }

    /// Render the driver connection string.
    pub fn to_connection_string(&self) -> ConnectionResult<String> {
        match self {
            Self::File { path } => Ok((*path).to_string()),
            Self::MySql {
                username,
                password,
                host,
                database,
            } => Ok(format!("{}:{}@tcp({})/{}", username, password, host, database)),
            Self::Postgres {
                host_port,
                username,
                password,
                database,
                tls,
            } => {
                let sslmode = match tls {
                    Tls::Unsupported(mode) => {
                        return Err(ConnectionError::UnsupportedSslMode(mode.to_string()));
                    }
                    tls => tls.sslmode().unwrap_or_default(),
                };

                let mut dsn = format!(
                    "host={} port={} user={} password={} dbname={} sslmode={}",
                    host_port.host, host_port.port, username, password, database, sslmode
                );

                if let Tls::Verify { certs, .. } = tls {
                    for cert in certs.iter().filter(|c| c.present) {
                        dsn.push_str(&format!(" {}={}", cert.param, cert.path));
                    }
                }

                Ok(dsn)
            }
        }
    }
}
