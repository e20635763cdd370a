//! Setup wizard request and response bodies.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DatabaseConfig;
use crate::env::{EnvExpander, EnvSource};
use crate::error::{ConnectionError, ConnectionResult};
use crate::kind::DatabaseKind;
use crate::options::{SslFiles, SslMode};

/// The "check database" request sent by the setup wizard.
///
/// Every field except `db_type` may be omitted.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckDatabaseRequest {
    /// Backend name: `postgres`, `sqlite3` or `mysql`.
    pub db_type: String,
    /// Username.
    pub db_username: String,
    /// Password.
    pub db_password: String,
    /// Host, optionally with `:port`.
    pub db_host: String,
    /// Database name.
    pub db_name: String,
    /// Database file (SQLite).
    pub db_file: String,
    /// Whether SSL is requested.
    #[serde(rename = "ssl_enabled")]
    pub ssl: bool,
    /// SSL mode.
    pub ssl_mode: String,
    /// Root CA certificate path.
    pub ssl_root_cert: String,
    /// Client key path.
    pub ssl_key: String,
    /// Client certificate path.
    pub ssl_cert: String,
}

impl CheckDatabaseRequest {
    /// Decode a request from JSON.
    pub fn from_json(body: &str) -> ConnectionResult<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Validate the request into a [`DatabaseConfig`].
    pub fn validate(&self) -> ConnectionResult<DatabaseConfig> {
        let kind: DatabaseKind = self.db_type.parse()?;
        debug!(%kind, "validated database request");

        Ok(DatabaseConfig {
            kind,
            username: self.db_username.clone(),
            password: self.db_password.clone(),
            host: self.db_host.clone(),
            database: self.db_name.clone(),
            file: self.db_file.clone(),
            ssl_enabled: self.ssl,
            ssl_mode: if self.ssl_mode.is_empty() {
                SslMode::default()
            } else {
                SslMode::parse(&self.ssl_mode)
            },
            ssl_files: SslFiles {
                root_cert: non_empty(&self.ssl_root_cert),
                cert: non_empty(&self.ssl_cert),
                key: non_empty(&self.ssl_key),
            },
        })
    }

    /// Overlay every non-empty field of `other` onto this request.
    ///
    /// `ssl` is only ever switched on by an overlay, never off.
    pub fn merge(mut self, other: CheckDatabaseRequest) -> Self {
        fn take(target: &mut String, value: String) {
            if !value.is_empty() {
                *target = value;
            }
        }

        take(&mut self.db_type, other.db_type);
        take(&mut self.db_username, other.db_username);
        take(&mut self.db_password, other.db_password);
        take(&mut self.db_host, other.db_host);
        take(&mut self.db_name, other.db_name);
        take(&mut self.db_file, other.db_file);
        take(&mut self.ssl_mode, other.ssl_mode);
        take(&mut self.ssl_root_cert, other.ssl_root_cert);
        take(&mut self.ssl_key, other.ssl_key);
        take(&mut self.ssl_cert, other.ssl_cert);
        self.ssl |= other.ssl;
        self
    }
}

impl CheckDatabaseRequest {
    /// Expand `${VAR}` references in every string field.
    pub fn expand_env<S: EnvSource>(mut self, expander: &EnvExpander<S>) -> ConnectionResult<Self> {
        for field in [
            &mut self.db_type,
            &mut self.db_username,
            &mut self.db_password,
            &mut self.db_host,
            &mut self.db_name,
            &mut self.db_file,
            &mut self.ssl_mode,
            &mut self.ssl_root_cert,
            &mut self.ssl_key,
            &mut self.ssl_cert,
        ] {
            *field = expander.expand(field)?;
        }
        Ok(self)
    }
}

impl std::fmt::Debug for CheckDatabaseRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckDatabaseRequest")
            .field("db_type", &self.db_type)
            .field("db_username", &self.db_username)
            .field("db_password", &"***")
            .field("db_host", &self.db_host)
            .field("db_name", &self.db_name)
            .field("db_file", &self.db_file)
            .field("ssl", &self.ssl)
            .field("ssl_mode", &self.ssl_mode)
            .field("ssl_root_cert", &self.ssl_root_cert)
            .field("ssl_key", &self.ssl_key)
            .field("ssl_cert", &self.ssl_cert)
            .finish()
    }
}

impl TryFrom<CheckDatabaseRequest> for DatabaseConfig {
    type Error = ConnectionError;

    fn try_from(request: CheckDatabaseRequest) -> Result<Self, Self::Error> {
        request.validate()
    }
}

impl From<&DatabaseConfig> for CheckDatabaseRequest {
    fn from(config: &DatabaseConfig) -> Self {
        Self {
            db_type: config.kind.as_str().to_string(),
            db_username: config.username.clone(),
            db_password: config.password.clone(),
            db_host: config.host.clone(),
            db_name: config.database.clone(),
            db_file: config.file.clone(),
            ssl: config.ssl_enabled,
            ssl_mode: config.ssl_mode.to_string(),
            ssl_root_cert: config.ssl_files.root_cert.clone().unwrap_or_default(),
            ssl_key: config.ssl_files.key.clone().unwrap_or_default(),
            ssl_cert: config.ssl_files.cert.clone().unwrap_or_default(),
        }
    }
}

/// The "check database" response returned to the setup wizard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckDatabaseResponse {
    /// Whether the connection attempt succeeded.
    pub connection_success: bool,
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
