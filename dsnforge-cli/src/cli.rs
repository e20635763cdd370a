//! CLI argument definitions using clap.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use dsnforge_core::{CheckDatabaseRequest, DatabaseKind};
use std::path::PathBuf;

/// dsnforge - Build database connection strings from setup wizard input
#[derive(Parser, Debug)]
#[command(name = "dsnforge")]
#[command(version)]
#[command(about = "dsnforge - Build database connection strings from setup wizard input", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a dsnforge.toml config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a connection string
    Build(BuildArgs),

    /// Show how a database description resolves
    Inspect(InspectArgs),

    /// Display version information
    Version,
}

// =============================================================================
// Shared input
// =============================================================================

/// Where the database description comes from
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// JSON file holding a check-database request
    #[arg(short, long)]
    pub request: Option<PathBuf>,

    #[command(flatten)]
    pub fields: FieldArgs,
}

/// Individual database fields; these override file values
#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Database type (postgres, mysql, sqlite3)
    #[arg(short = 't', long)]
    pub db_type: Option<DatabaseKind>,

    /// Database username
    #[arg(short, long)]
    pub username: Option<String>,

    /// Database password
    #[arg(short, long, env = "DSNFORGE_DB_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Database host, optionally with :port
    #[arg(long)]
    pub host: Option<String>,

    /// Database name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Database file (sqlite3)
    #[arg(short, long)]
    pub file: Option<String>,

    /// Enable SSL
    #[arg(long)]
    pub ssl: bool,

    /// Disable SSL even if the config enables it
    #[arg(long, conflicts_with = "ssl")]
    pub no_ssl: bool,

    /// SSL mode (require, verify-ca, verify-full)
    #[arg(long)]
    pub ssl_mode: Option<String>,

    /// Root CA certificate path
    #[arg(long)]
    pub ssl_root_cert: Option<String>,

    /// Client certificate path
    #[arg(long)]
    pub ssl_cert: Option<String>,

    /// Client key path
    #[arg(long)]
    pub ssl_key: Option<String>,
}

impl FieldArgs {
    /// Collect the supplied flags into a request overlay.
    pub fn to_request(&self) -> CheckDatabaseRequest {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();

        CheckDatabaseRequest {
            db_type: self
                .db_type
                .map(|kind| kind.as_str().to_string())
                .unwrap_or_default(),
            db_username: text(&self.username),
            db_password: text(&self.password),
            db_host: text(&self.host),
            db_name: text(&self.name),
            db_file: text(&self.file),
            ssl: self.ssl,
            ssl_mode: text(&self.ssl_mode),
            ssl_root_cert: text(&self.ssl_root_cert),
            ssl_key: text(&self.ssl_key),
            ssl_cert: text(&self.ssl_cert),
        }
    }
}

// =============================================================================
// Build Command
// =============================================================================

/// Arguments for the `build` command
#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Output formats for `build`
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The bare connection string
    #[default]
    Text,
    /// `{"connection": "..."}`
    Json,
}

// =============================================================================
// Inspect Command
// =============================================================================

/// Arguments for the `inspect` command
#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_build_flags() {
        let cli = Cli::try_parse_from([
            "dsnforge",
            "build",
            "--db-type",
            "postgres",
            "--host",
            "pg:5433",
            "--ssl",
            "--ssl-mode",
            "require",
            "--format",
            "json",
        ])
        .unwrap();

        let Command::Build(args) = cli.command else {
            panic!("expected build command");
        };
        assert_eq!(args.format, OutputFormat::Json);

        let request = args.source.fields.to_request();
        assert_eq!(request.db_type, "postgres");
        assert_eq!(request.db_host, "pg:5433");
        assert!(request.ssl);
        assert_eq!(request.ssl_mode, "require");
        assert_eq!(request.db_file, "");
    }

    #[test]
    fn test_parse_rejects_unknown_db_type() {
        let result = Cli::try_parse_from(["dsnforge", "build", "--db-type", "oracle"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_ssl_conflicts_with_no_ssl() {
        let result = Cli::try_parse_from(["dsnforge", "inspect", "--ssl", "--no-ssl"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["dsnforge", "inspect", "--config", "x.toml", "-vv"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert_eq!(cli.verbose, 2);
    }
}
