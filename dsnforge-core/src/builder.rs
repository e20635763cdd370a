//! Connection string construction.

use tracing::debug;

use crate::config::DatabaseConfig;
use crate::error::ConnectionResult;
use crate::probe::{FsProbe, PathProbe};
use crate::target::Target;

/// Turns a [`DatabaseConfig`] into a driver connection string.
///
/// The builder holds no state besides its probe, so one instance can be
/// shared across threads.
///
/// ```rust
/// use dsnforge_core::{ConnectionStringBuilder, DatabaseConfig};
///
/// let config = DatabaseConfig::mysql()
///     .username("root")
///     .password("secret")
///     .host("127.0.0.1:3306")
///     .database("forum")
///     .build();
///
/// let dsn = ConnectionStringBuilder::new().build(&config);
/// assert_eq!(dsn, "root:secret@tcp(127.0.0.1:3306)/forum");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConnectionStringBuilder<P: PathProbe = FsProbe> {
    probe: P,
}

impl ConnectionStringBuilder<FsProbe> {
    /// Create a builder that checks certificate paths on the local filesystem.
    pub fn new() -> Self {
        Self { probe: FsProbe }
    }
}

impl<P: PathProbe> ConnectionStringBuilder<P> {
    /// Create a builder with a custom path probe.
    pub fn with_probe(probe: P) -> Self {
        Self { probe }
    }

    /// Get the path probe.
    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Resolve the configuration without rendering it.
    pub fn resolve<'a>(&self, config: &'a DatabaseConfig) -> Target<'a> {
        Target::resolve(config, &self.probe)
    }

    /// Build the connection string, reporting an unusable TLS mode as an error.
    pub fn try_build(&self, config: &DatabaseConfig) -> ConnectionResult<String> {
        debug!(kind = %config.kind, ssl_enabled = config.ssl_enabled, "building connection string");
        self.resolve(config).to_connection_string()
    }

    /// Build the connection string.
    ///
    /// Returns an empty string when SSL is enabled with a mode other than
    /// `require`, `verify-ca` or `verify-full`; callers treat that as an
    /// incomplete configuration.
    pub fn build(&self, config: &DatabaseConfig) -> String {
        match self.try_build(config) {
            Ok(dsn) => dsn,
            Err(err) => {
                debug!(error = %err, "no connection string produced");
                String::new()
            }
        }
    }
}

/// Build a connection string, checking certificate paths on the local filesystem.
pub fn build_connection_string(config: &DatabaseConfig) -> String {
    ConnectionStringBuilder::new().build(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConnectionError;
    use crate::kind::DatabaseKind;
    use crate::probe::MapPathProbe;
    use pretty_assertions::assert_eq;

    fn postgres() -> crate::config::DatabaseConfigBuilder {
        DatabaseConfig::postgres()
            .username("answer")
            .password("p4ss")
            .host("db.internal:5433")
            .database("answer")
    }

    fn builder(paths: &[&str]) -> ConnectionStringBuilder<MapPathProbe> {
        ConnectionStringBuilder::with_probe(MapPathProbe::new().with_paths(paths.iter().copied()))
    }

    #[test]
    fn test_sqlite_returns_file_verbatim() {
        let config = DatabaseConfig::builder(DatabaseKind::Sqlite)
            .file("/var/lib/answer/data base ünïcode.db")
            .host("ignored:1")
            .username("ignored")
            .ssl("verify-full")
            .build();

        assert_eq!(builder(&[]).build(&config), "/var/lib/answer/data base ünïcode.db");
    }

    #[test]
    fn test_mysql_format() {
        let config = DatabaseConfig::mysql()
            .username("root")
            .password("pa:ss@word")
            .host("mysql:3307")
            .database("answer")
            .ssl("require")
            .build();

        assert_eq!(
            builder(&[]).build(&config),
            "root:pa:ss@word@tcp(mysql:3307)/answer"
        );
    }

    #[test]
    fn test_mysql_substitutes_fields_literally() {
        let cases = [
            ("us@er", "pw", "db:3306", "answer", "us@er:pw@tcp(db:3306)/answer"),
            ("root", "p/a(s)s", "db", "answer", "root:p/a(s)s@tcp(db)/answer"),
            ("root", "pw", "my host)", "answer", "root:pw@tcp(my host))/answer"),
            ("a b", "c d", "(h)", "x/y z", "a b:c d@tcp((h))/x/y z"),
            ("", "", "", "", ":@tcp()/"),
        ];

        for (username, password, host, database, expected) in cases {
            let config = DatabaseConfig::mysql()
                .username(username)
                .password(password)
                .host(host)
                .database(database)
                .build();
            assert_eq!(builder(&[]).build(&config), expected, "username={username:?}");
        }
    }

    #[test]
    fn test_postgres_ssl_disabled() {
        let config = postgres().ssl_mode("verify-full").build();
        assert_eq!(
            builder(&[]).build(&config),
            "host=db.internal port=5433 user=answer password=p4ss dbname=answer sslmode=disable"
        );
    }

    #[test]
    fn test_postgres_defaults_host_and_port() {
        let config = postgres().host("").build();
        assert_eq!(
            builder(&[]).build(&config),
            "host=127.0.0.1 port=5432 user=answer password=p4ss dbname=answer sslmode=disable"
        );
    }

    #[test]
    fn test_postgres_require_ignores_certs() {
        let config = postgres()
            .ssl("require")
            .ssl_root_cert("/ca.pem")
            .ssl_cert("/client.pem")
            .ssl_key("/client.key")
            .build();

        let dsn = builder(&["/ca.pem", "/client.pem", "/client.key"]).build(&config);
        assert_eq!(
            dsn,
            "host=db.internal port=5433 user=answer password=p4ss dbname=answer sslmode=require"
        );
    }

    #[test]
    fn test_postgres_verify_full_all_certs() {
        let config = postgres()
            .ssl("verify-full")
            .ssl_key("/client.key")
            .ssl_cert("/client.pem")
            .ssl_root_cert("/ca.pem")
            .build();

        let dsn = builder(&["/ca.pem", "/client.pem", "/client.key"]).build(&config);
        assert_eq!(
            dsn,
            "host=db.internal port=5433 user=answer password=p4ss dbname=answer sslmode=verify-full \
             sslrootcert=/ca.pem sslcert=/client.pem sslkey=/client.key"
        );
    }

    #[test]
    fn test_postgres_verify_ca_skips_missing_certs() {
        let config = postgres()
            .ssl("verify-ca")
            .ssl_root_cert("/ca.pem")
            .ssl_cert("/client.pem")
            .ssl_key("/client.key")
            .build();

        let dsn = builder(&["/client.key"]).build(&config);
        assert_eq!(
            dsn,
            "host=db.internal port=5433 user=answer password=p4ss dbname=answer sslmode=verify-ca \
             sslkey=/client.key"
        );
    }

    #[test]
    fn test_postgres_verify_every_cert_subset() {
        let paths = ["/ca.pem", "/client.pem", "/client.key"];
        let params = ["sslrootcert", "sslcert", "sslkey"];
        let config = postgres()
            .ssl("verify-ca")
            .ssl_root_cert(paths[0])
            .ssl_cert(paths[1])
            .ssl_key(paths[2])
            .build();

        for mask in 0..8u8 {
            let present: Vec<&str> = (0..3)
                .filter(|i| mask & (1 << i) != 0)
                .map(|i| paths[i])
                .collect();
            let dsn = builder(&present).build(&config);

            let clauses: Vec<&str> = dsn.split(' ').skip(6).collect();
            let expected: Vec<String> = (0..3)
                .filter(|i| mask & (1 << i) != 0)
                .map(|i| format!("{}={}", params[i], paths[i]))
                .collect();
            assert_eq!(clauses, expected, "mask {mask:03b}");
        }
    }

    #[test]
    fn test_postgres_verify_with_empty_paths_skips_probe() {
        let probe = |path: &str| {
            assert!(!path.is_empty(), "empty path must not be probed");
            true
        };
        let config = postgres().ssl("verify-full").ssl_root_cert("").build();

        let dsn = ConnectionStringBuilder::with_probe(probe).build(&config);
        assert!(dsn.ends_with("sslmode=verify-full"));
    }

    #[test]
    fn test_postgres_unsupported_mode_is_empty() {
        for mode in ["disable", "prefer", "allow", "", "VERIFY-FULL"] {
            let config = postgres().ssl(mode).build();
            assert_eq!(builder(&[]).build(&config), "", "mode {mode:?}");
        }
    }

    #[test]
    fn test_try_build_reports_unsupported_mode() {
        let config = postgres().ssl("prefer").build();
        assert_eq!(
            builder(&[]).try_build(&config),
            Err(ConnectionError::UnsupportedSslMode("prefer".to_string()))
        );
    }

    #[test]
    fn test_build_is_idempotent() {
        let config = postgres()
            .ssl("verify-ca")
            .ssl_root_cert("/ca.pem")
            .build();
        let builder = builder(&["/ca.pem"]);

        assert_eq!(builder.build(&config), builder.build(&config));
    }

    #[test]
    fn test_builder_is_shareable_across_threads() {
        let builder = std::sync::Arc::new(builder(&[]));
        let config = std::sync::Arc::new(postgres().build());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let builder = builder.clone();
                let config = config.clone();
                std::thread::spawn(move || builder.build(&config))
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().ends_with("sslmode=disable"));
        }
    }
}
