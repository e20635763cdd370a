//! Database backend kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConnectionError;

/// The database backend a connection string is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatabaseKind {
    /// Embedded single-file database (SQLite).
    #[serde(rename = "sqlite3", alias = "sqlite")]
    Sqlite,
    /// MySQL / MariaDB, `user:pass@tcp(host)/db` syntax.
    #[serde(rename = "mysql")]
    MySql,
    /// PostgreSQL, key=value syntax with TLS support.
    #[serde(rename = "postgres", alias = "postgresql")]
    Postgres,
}

impl DatabaseKind {
    /// All supported kinds, in wizard display order.
    pub const ALL: [DatabaseKind; 3] = [Self::Postgres, Self::MySql, Self::Sqlite];

    /// Get the wire name used by the setup request (`db_type`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite3",
            Self::MySql => "mysql",
            Self::Postgres => "postgres",
        }
    }

    /// Get a human-readable backend name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Sqlite => "SQLite",
            Self::MySql => "MySQL",
            Self::Postgres => "PostgreSQL",
        }
    }

    /// Whether this backend needs host and credentials.
    pub fn is_network(&self) -> bool {
        !matches!(self, Self::Sqlite)
    }

    /// Whether this backend understands the TLS settings.
    pub fn supports_tls(&self) -> bool {
        matches!(self, Self::Postgres)
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DatabaseKind {
    type Err = ConnectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(ConnectionError::missing("db_type")),
            "sqlite3" | "sqlite" => Ok(Self::Sqlite),
            "mysql" => Ok(Self::MySql),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            _ => Err(ConnectionError::UnknownDriver(s.to_string())),
        }
    }
}
