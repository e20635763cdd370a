//! PostgreSQL host/port splitting.

use std::fmt;

/// Host used when none is supplied.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Port used when none is supplied.
pub const DEFAULT_PORT: &str = "5432";

/// A host and port split out of a `host[:port]` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostPort<'a> {
    /// Host name or address.
    pub host: &'a str,
    /// Port, kept as text.
    pub port: &'a str,
}

impl<'a> HostPort<'a> {
    /// Split `raw` on its last colon, filling in defaults for empty parts.
    ///
    /// IPv6 brackets are not special-cased: `::1` splits into `:` and `1`.
    ///
    /// ```rust
    /// use dsnforge_core::HostPort;
    ///
    /// let hp = HostPort::parse("db.example.com:5433");
    /// assert_eq!((hp.host, hp.port), ("db.example.com", "5433"));
    ///
    /// let hp = HostPort::parse("");
    /// assert_eq!((hp.host, hp.port), ("127.0.0.1", "5432"));
    /// ```
    pub fn parse(raw: &'a str) -> Self {
        let (host, port) = match raw.rfind(':') {
            Some(idx) => (&raw[..idx], &raw[idx + 1..]),
            None => (raw, ""),
        };

        Self {
            host: if host.is_empty() { DEFAULT_HOST } else { host },
            port: if port.is_empty() { DEFAULT_PORT } else { port },
        }
    }
}

impl fmt::Display for HostPort<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
