//! `dsnforge inspect` command - Show how a database description resolves.

use dsnforge_core::{CertFile, ConnectionStringBuilder, PathProbe, Target, Tls};

use crate::cli::InspectArgs;
use crate::config::Config;
use crate::error::CliResult;
use crate::output::{self, kv};

/// Run the inspect command
pub async fn run(args: InspectArgs, config: Config) -> CliResult<()> {
    let database = super::load_database(&args.source, &config).await?;
    let builder = ConnectionStringBuilder::new();
    let target = builder.resolve(&database);

    output::header("Connection target");
    kv("Backend", target.kind().display_name());

    match &target {
        Target::File { path } => {
            kv("File", path);
            if !builder.probe().exists(path) {
                output::warn("Database file does not exist yet");
            }
        }
        Target::MySql {
            username,
            password,
            host,
            database,
        } => {
            kv("Host", host);
            kv("Database", database);
            kv("Username", username);
            kv("Password", &output::mask(password));
        }
        Target::Postgres {
            host_port,
            username,
            password,
            database,
            tls,
        } => {
            kv("Host", host_port.host);
            kv("Port", host_port.port);
            kv("Database", database);
            kv("Username", username);
            kv("Password", &output::mask(password));
            print_tls(tls);
        }
    }

    output::newline();
    match target.to_connection_string() {
        Ok(_) => output::success("Connection string can be built"),
        Err(err) => output::warn(&format!("Database configuration incomplete: {}", err)),
    }

    Ok(())
}

fn print_tls(tls: &Tls<'_>) {
    match tls {
        Tls::Unsupported(mode) => kv("SSL mode", &format!("{} (unsupported)", mode)),
        Tls::Verify { certs, .. } => {
            kv("SSL mode", tls.sslmode().unwrap_or_default());
            output::newline();
            output::section("Certificates");
            if certs.is_empty() {
                output::dim("  none supplied");
            }
            for cert in certs {
                output::list_item(&describe_cert(cert));
            }
        }
        tls => kv("SSL mode", tls.sslmode().unwrap_or_default()),
    }
}

fn describe_cert(cert: &CertFile<'_>) -> String {
    let status = if cert.present {
        "found"
    } else {
        "not found, skipped"
    };
    format!("{} {} ({})", cert.param, cert.path, status)
}
