//! Database configuration record.

use std::fmt;

use crate::kind::DatabaseKind;
use crate::options::{SslFiles, SslMode};

/// A validated description of the target database.
///
/// Which fields matter depends on [`DatabaseKind`]: SQLite reads only `file`,
/// the network backends read host, database name and credentials, and only
/// PostgreSQL reads the SSL settings.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Database backend.
    pub kind: DatabaseKind,
    /// Username.
    pub username: String,
    /// Password.
    pub password: String,
    /// Host, optionally with `:port`.
    pub host: String,
    /// Database name.
    pub database: String,
    /// Database file path (SQLite).
    pub file: String,
    /// Whether SSL was requested.
    pub ssl_enabled: bool,
    /// Requested SSL mode.
    pub ssl_mode: SslMode,
    /// Certificate and key paths.
    pub ssl_files: SslFiles,
}

impl DatabaseConfig {
    /// Create a new configuration builder for the given backend.
    pub fn builder(kind: DatabaseKind) -> DatabaseConfigBuilder {
        DatabaseConfigBuilder::new(kind)
    }

    /// Create a new PostgreSQL configuration builder.
    pub fn postgres() -> DatabaseConfigBuilder {
        DatabaseConfigBuilder::new(DatabaseKind::Postgres)
    }

    /// Create a new MySQL configuration builder.
    pub fn mysql() -> DatabaseConfigBuilder {
        DatabaseConfigBuilder::new(DatabaseKind::MySql)
    }

    /// Create a SQLite configuration for the given file.
    pub fn sqlite(file: impl Into<String>) -> Self {
        DatabaseConfigBuilder::new(DatabaseKind::Sqlite)
            .file(file)
            .build()
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("kind", &self.kind)
            .field("username", &self.username)
            .field("password", &"***")
            .field("host", &self.host)
            .field("database", &self.database)
            .field("file", &self.file)
            .field("ssl_enabled", &self.ssl_enabled)
            .field("ssl_mode", &self.ssl_mode)
            .field("ssl_files", &self.ssl_files)
            .finish()
    }
}

/// Builder for [`DatabaseConfig`].
#[derive(Debug, Clone)]
pub struct DatabaseConfigBuilder {
    kind: DatabaseKind,
    username: String,
    password: String,
    host: String,
    database: String,
    file: String,
    ssl_enabled: bool,
    ssl_mode: SslMode,
    ssl_files: SslFiles,
}

impl DatabaseConfigBuilder {
    /// Create a new builder for the given backend.
    pub fn new(kind: DatabaseKind) -> Self {
        Self {
            kind,
            username: String::new(),
            password: String::new(),
            host: String::new(),
            database: String::new(),
            file: String::new(),
            ssl_enabled: false,
            ssl_mode: SslMode::default(),
            ssl_files: SslFiles::default(),
        }
    }

    /// Set the username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Set the password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Set the host (`host` or `host:port`).
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the database name.
    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Set the database file path.
    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    /// Enable SSL with the given mode.
    pub fn ssl(mut self, mode: impl Into<SslMode>) -> Self {
        self.ssl_enabled = true;
        self.ssl_mode = mode.into();
        self
    }

    /// Set the SSL mode without changing whether SSL is enabled.
    pub fn ssl_mode(mut self, mode: impl Into<SslMode>) -> Self {
        self.ssl_mode = mode.into();
        self
    }

    /// Enable or disable SSL.
    pub fn ssl_enabled(mut self, enabled: bool) -> Self {
        self.ssl_enabled = enabled;
        self
    }

    /// Set the root CA certificate path.
    pub fn ssl_root_cert(mut self, path: impl Into<String>) -> Self {
        self.ssl_files.root_cert = Some(path.into());
        self
    }

    /// Set the client certificate path.
    pub fn ssl_cert(mut self, path: impl Into<String>) -> Self {
        self.ssl_files.cert = Some(path.into());
        self
    }

    /// Set the client key path.
    pub fn ssl_key(mut self, path: impl Into<String>) -> Self {
        self.ssl_files.key = Some(path.into());
        self
    }

    /// Set all certificate paths at once.
    pub fn ssl_files(mut self, files: SslFiles) -> Self {
        self.ssl_files = files;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> DatabaseConfig {
        DatabaseConfig {
            kind: self.kind,
            username: self.username,
            password: self.password,
            host: self.host,
            database: self.database,
            file: self.file,
            ssl_enabled: self.ssl_enabled,
            ssl_mode: self.ssl_mode,
            ssl_files: self.ssl_files,
        }
    }
}
