//! Tracing subscriber setup.
//!
//! ```bash
//! # Full filter directive, overrides everything else
//! DSNFORGE_LOG=dsnforge_core=trace dsnforge build -r request.json
//!
//! # Output format (compact, pretty, json)
//! DSNFORGE_LOG_FORMAT=json dsnforge -v inspect
//! ```
//!
//! Logs are written to stderr so `build` output stays pipeable.

use tracing_subscriber::EnvFilter;

use crate::config::{LogConfig, LogFormat};

/// Environment variable holding a filter directive
pub const LOG_ENV: &str = "DSNFORGE_LOG";

/// Environment variable selecting the output format
pub const LOG_FORMAT_ENV: &str = "DSNFORGE_LOG_FORMAT";

/// Install the global subscriber.
///
/// Calling this more than once keeps the first subscriber.
pub fn init(config: &LogConfig, verbose: u8) {
    let filter = filter_for(std::env::var(LOG_ENV).ok().as_deref(), config, verbose);
    let format = std::env::var(LOG_FORMAT_ENV)
        .ok()
        .and_then(|name| LogFormat::from_name(&name))
        .unwrap_or(config.format);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let _ = match format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

/// Build the filter from an explicit directive, verbosity flags or config.
pub fn filter_for(directive: Option<&str>, config: &LogConfig, verbose: u8) -> EnvFilter {
    if let Some(directive) = directive.filter(|d| !d.trim().is_empty()) {
        return EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    }

    let level = level_for(&config.level, verbose);
    EnvFilter::try_new(format!("dsnforge_cli={},dsnforge_core={}", level, level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn level_for(configured: &str, verbose: u8) -> &str {
    match verbose {
        0 => configured,
        1 => "debug",
        _ => "trace",
    }
}
