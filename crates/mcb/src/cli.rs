//! Command-line surface for the `mcb` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Analysis Execution Core — HTTP server and operational commands.
#[derive(Debug, Parser)]
#[command(name = "mcb", version, about)]
pub struct Cli {
    /// Path to the YAML configuration file. Falls back to the loco-style
    /// `config/{env}.yaml` resolution `ConfigLoader` applies when absent.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the Analysis Execution Core HTTP server.
    Serve,
}
