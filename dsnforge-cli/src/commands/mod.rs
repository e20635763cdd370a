//! CLI command implementations.

pub mod build;
pub mod inspect;
pub mod version;

use dsnforge_core::{CheckDatabaseRequest, DatabaseConfig};
use tracing::debug;

use crate::cli::SourceArgs;
use crate::config::Config;
use crate::error::{CliError, CliResult};

/// Assemble the database description for a command.
///
/// Layers, lowest first: the config file's `[database]` table, the JSON
/// request file, then individual flags.
pub async fn load_database(source: &SourceArgs, config: &Config) -> CliResult<DatabaseConfig> {
    let mut request = config.database.clone();

    if let Some(path) = &source.request {
        let body = tokio::fs::read_to_string(path).await.map_err(|e| {
            CliError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        request = request.merge(CheckDatabaseRequest::from_json(&body)?);
        debug!(path = %path.display(), "merged request file");
    }

    request = request.merge(source.fields.to_request());
    if source.fields.no_ssl {
        request.ssl = false;
    }

    Ok(request.validate()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::FieldArgs;
    use dsnforge_core::{DatabaseKind, SslMode};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn file_config() -> Config {
        Config::parse(
            r#"
            [database]
            db_type = "postgres"
            db_username = "answer"
            db_password = "from-file"
            db_host = "pg.internal"
            db_name = "answer"
            ssl_enabled = true
            ssl_mode = "require"
            "#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_flags_override_config() {
        let source = SourceArgs {
            request: None,
            fields: FieldArgs {
                password: Some("from-flag".to_string()),
                host: Some("pg.internal:6432".to_string()),
                ..Default::default()
            },
        };

        let db = load_database(&source, &file_config()).await.unwrap();
        assert_eq!(db.kind, DatabaseKind::Postgres);
        assert_eq!(db.password, "from-flag");
        assert_eq!(db.host, "pg.internal:6432");
        assert_eq!(db.username, "answer");
        assert!(db.ssl_enabled);
    }

    #[tokio::test]
    async fn test_no_ssl_switches_off_config() {
        let source = SourceArgs {
            request: None,
            fields: FieldArgs {
                no_ssl: true,
                ..Default::default()
            },
        };

        let db = load_database(&source, &file_config()).await.unwrap();
        assert!(!db.ssl_enabled);
        assert_eq!(db.ssl_mode, SslMode::Require);
    }

    #[tokio::test]
    async fn test_request_file_between_config_and_flags() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("request.json");
        std::fs::write(
            &path,
            r#"{"db_type":"mysql","db_host":"mysql:3306","db_name":"forum"}"#,
        )
        .unwrap();

        let source = SourceArgs {
            request: Some(path),
            fields: FieldArgs {
                name: Some("override".to_string()),
                ..Default::default()
            },
        };

        let db = load_database(&source, &file_config()).await.unwrap();
        assert_eq!(db.kind, DatabaseKind::MySql);
        assert_eq!(db.host, "mysql:3306");
        assert_eq!(db.database, "override");
        assert_eq!(db.password, "from-file");
    }

    #[tokio::test]
    async fn test_missing_request_file() {
        let source = SourceArgs {
            request: Some("/nonexistent/request.json".into()),
            fields: FieldArgs::default(),
        };

        let err = load_database(&source, &Config::default()).await.unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().contains("/nonexistent/request.json"));
    }

    #[tokio::test]
    async fn test_no_type_anywhere() {
        let err = load_database(&SourceArgs::default(), &Config::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::Incomplete(_)));
    }
}
