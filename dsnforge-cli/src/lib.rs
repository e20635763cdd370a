//! dsnforge CLI - Command-line interface for building database connection strings.
//!
//! Reads a database description from flags, a JSON request file or a
//! `dsnforge.toml` config file and prints the connection string.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
