//! # dsnforge-core
//!
//! Turns a setup wizard's database description into a driver connection string.
//!
//! # Connection String Formats
//!
//! ## SQLite
//! ```text
//! /path/to/database.db
//! ```
//!
//! ## MySQL
//! ```text
//! user:password@tcp(host:port)/database
//! ```
//!
//! ## PostgreSQL
//! ```text
//! host=h port=p user=u password=pw dbname=db sslmode=disable
//! host=h port=p user=u password=pw dbname=db sslmode=verify-full sslrootcert=ca.pem sslcert=c.pem sslkey=c.key
//! ```
//!
//! # Example
//!
//! ```rust
//! use dsnforge_core::{ConnectionStringBuilder, DatabaseConfig, MapPathProbe};
//!
//! let config = DatabaseConfig::postgres()
//!     .username("answer")
//!     .password("secret")
//!     .host("db.example.com:5433")
//!     .database("answer")
//!     .ssl("verify-ca")
//!     .ssl_root_cert("/certs/ca.pem")
//!     .build();
//!
//! let builder = ConnectionStringBuilder::with_probe(MapPathProbe::new().with("/certs/ca.pem"));
//! assert_eq!(
//!     builder.build(&config),
//!     "host=db.example.com port=5433 user=answer password=secret dbname=answer \
//!      sslmode=verify-ca sslrootcert=/certs/ca.pem"
//! );
//! ```
//!
//! SSL enabled with a mode other than `require`, `verify-ca` or `verify-full`
//! produces an empty string from [`ConnectionStringBuilder::build`]; use
//! [`ConnectionStringBuilder::try_build`] to get the reason instead.

pub mod builder;
pub mod config;
pub mod env;
pub mod error;
pub mod host_port;
pub mod kind;
pub mod options;
pub mod probe;
pub mod request;
pub mod target;

pub use builder::{ConnectionStringBuilder, build_connection_string};
pub use config::{DatabaseConfig, DatabaseConfigBuilder};
pub use env::{EnvExpander, EnvSource, MapEnvSource, StdEnvSource, expand_env};
pub use error::{ConnectionError, ConnectionResult};
pub use host_port::{DEFAULT_HOST, DEFAULT_PORT, HostPort};
pub use kind::DatabaseKind;
pub use options::{SslFiles, SslMode};
pub use probe::{FsProbe, MapPathProbe, PathProbe};
pub use request::{CheckDatabaseRequest, CheckDatabaseResponse};
pub use target::{CertFile, Target, Tls, VerifyMode};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::builder::{ConnectionStringBuilder, build_connection_string};
    pub use crate::config::{DatabaseConfig, DatabaseConfigBuilder};
    pub use crate::error::{ConnectionError, ConnectionResult};
    pub use crate::kind::DatabaseKind;
    pub use crate::options::{SslFiles, SslMode};
    pub use crate::probe::{FsProbe, PathProbe};
    pub use crate::request::CheckDatabaseRequest;
}
