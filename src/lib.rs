//! # dsnforge
//!
//! Connection string construction for database setup wizards.
//!
//! dsnforge provides:
//! - A builder that turns a database description into a driver connection string
//! - SQLite, MySQL and PostgreSQL output, with PostgreSQL TLS tiers
//! - The setup wizard's "check database" request and response bodies
//! - `${VAR}` expansion for configuration files
//!
//! ## Quick Start
//!
//! ```rust
//! use dsnforge::prelude::*;
//!
//! let request = CheckDatabaseRequest::from_json(
//!     r#"{"db_type":"postgres","db_host":"pg:5433","db_username":"answer","db_name":"answer"}"#,
//! )?;
//! let config = request.validate()?;
//!
//! assert_eq!(
//!     build_connection_string(&config),
//!     "host=pg port=5433 user=answer password= dbname=answer sslmode=disable"
//! );
//! # Ok::<(), dsnforge::ConnectionError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Connection string construction.
pub mod connection {
    pub use dsnforge_core::*;
}

// Re-export key types at the crate root
pub use dsnforge_core::{
    CheckDatabaseRequest, CheckDatabaseResponse, ConnectionError, ConnectionResult,
    ConnectionStringBuilder, DatabaseConfig, DatabaseKind, FsProbe, HostPort, MapPathProbe,
    PathProbe, SslFiles, SslMode, build_connection_string,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use dsnforge_core::prelude::*;
}
