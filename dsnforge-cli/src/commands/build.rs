//! `dsnforge build` command - Print the connection string.

use dsnforge_core::ConnectionStringBuilder;
use serde::Serialize;

use crate::cli::{BuildArgs, OutputFormat};
use crate::config::Config;
use crate::error::CliResult;

/// JSON body printed with `--format json`
#[derive(Debug, Serialize)]
struct BuildOutput<'a> {
    connection: &'a str,
}

/// Run the build command
pub async fn run(args: BuildArgs, config: Config) -> CliResult<()> {
    let database = super::load_database(&args.source, &config).await?;
    let connection = ConnectionStringBuilder::new().try_build(&database)?;

    println!("{}", render(&connection, args.format)?);
    Ok(())
}

fn render(connection: &str, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(connection.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(&BuildOutput { connection })?),
    }
}
