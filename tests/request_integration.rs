//! Integration tests for the setup wizard request bodies.

use dsnforge::prelude::*;
use dsnforge::{CheckDatabaseResponse, MapPathProbe};
use pretty_assertions::assert_eq;

fn build(body: &str, probe: MapPathProbe) -> String {
    let config = CheckDatabaseRequest::from_json(body)
        .and_then(|request| request.validate())
        .expect("Failed to validate request");
    ConnectionStringBuilder::with_probe(probe).build(&config)
}

#[test]
fn test_sqlite_request() {
    let dsn = build(
        r#"{"db_type":"sqlite3","db_file":"/var/lib/answer/answer.db"}"#,
        MapPathProbe::new(),
    );
    assert_eq!(dsn, "/var/lib/answer/answer.db");
}

#[test]
fn test_mysql_request_passes_host_through() {
    let dsn = build(
        r#"{
            "db_type": "mysql",
            "db_username": "root",
            "db_password": "p@ss:word",
            "db_host": "db",
            "db_name": "answer"
        }"#,
        MapPathProbe::new(),
    );
    assert_eq!(dsn, "root:p@ss:word@tcp(db)/answer");
}

#[test]
fn test_postgres_request_with_certs() {
    let dsn = build(
        r#"{
            "db_type": "postgres",
            "db_username": "answer",
            "db_password": "secret",
            "db_host": "10.0.0.5:6543",
            "db_name": "answer",
            "ssl_enabled": true,
            "ssl_mode": "verify-full",
            "ssl_root_cert": "/certs/ca.pem",
            "ssl_cert": "/certs/client.pem",
            "ssl_key": "/certs/client.key"
        }"#,
        MapPathProbe::new()
            .with("/certs/ca.pem")
            .with("/certs/client.key"),
    );
    assert_eq!(
        dsn,
        "host=10.0.0.5 port=6543 user=answer password=secret dbname=answer \
         sslmode=verify-full sslrootcert=/certs/ca.pem sslkey=/certs/client.key"
    );
}

#[test]
fn test_postgres_request_ssl_flag_only() {
    let dsn = build(
        r#"{"db_type":"postgres","db_host":"pg","ssl_enabled":true}"#,
        MapPathProbe::new(),
    );
    assert_eq!(dsn, "");
}

#[test]
fn test_postgres_request_mode_without_flag() {
    let dsn = build(
        r#"{"db_type":"postgres","db_host":"pg","ssl_mode":"verify-ca","ssl_root_cert":"/ca"}"#,
        MapPathProbe::new().with("/ca"),
    );
    assert_eq!(dsn, "host=pg port=5432 user= password= dbname= sslmode=disable");
}

#[test]
fn test_request_rejects_unknown_type() {
    let result = CheckDatabaseRequest::from_json(r#"{"db_type":"mssql"}"#)
        .and_then(|request| request.validate());
    assert_eq!(result, Err(ConnectionError::UnknownDriver("mssql".to_string())));
}

#[test]
fn test_request_round_trips_through_config() {
    let config = DatabaseConfig::postgres()
        .username("answer")
        .host("pg:5433")
        .ssl("verify-ca")
        .ssl_root_cert("/certs/ca.pem")
        .build();

    let body = serde_json::to_string(&CheckDatabaseRequest::from(&config)).unwrap();
    let decoded = CheckDatabaseRequest::from_json(&body).unwrap();
    assert_eq!(decoded.validate().unwrap(), config);
}

#[test]
fn test_response_body() {
    let response: CheckDatabaseResponse =
        serde_json::from_str(r#"{"connection_success":false}"#).unwrap();
    assert!(!response.connection_success);
}
