//! `dsnforge version` command - Display version information.

use dsnforge_core::DatabaseKind;

use crate::error::CliResult;
use crate::output::{self, kv};

/// Package version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name
const NAME: &str = env!("CARGO_PKG_NAME");

/// Run the version command
pub async fn run() -> CliResult<()> {
    output::header("dsnforge");

    kv("Version", VERSION);
    kv("Binary", NAME);

    #[cfg(debug_assertions)]
    let build_mode = "debug";
    #[cfg(not(debug_assertions))]
    let build_mode = "release";

    kv("Build", build_mode);

    let backends: Vec<&str> = DatabaseKind::ALL.iter().map(|kind| kind.as_str()).collect();
    kv("Backends", &backends.join(", "));

    output::newline();
    Ok(())
}
