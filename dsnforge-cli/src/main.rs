//! dsnforge CLI - Command-line interface for building database connection strings.

use clap::Parser;

use dsnforge_cli::cli::{Cli, Command};
use dsnforge_cli::commands;
use dsnforge_cli::config::Config;
use dsnforge_cli::error::CliResult;
use dsnforge_cli::{logging, output};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let config = Config::discover(cli.config.as_deref()).await?;
    logging::init(&config.log, cli.verbose);

    match cli.command {
        Command::Build(args) => commands::build::run(args, config).await,
        Command::Inspect(args) => commands::inspect::run(args, config).await,
        Command::Version => commands::version::run().await,
    }
}
