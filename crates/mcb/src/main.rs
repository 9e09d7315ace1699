//! Analysis Execution Core binary entry point.

use clap::Parser;
use mcb::cli::{Cli, Command};
use mcb::commands;

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Serve => commands::serve(cli.config).await,
    };

    if let Err(e) = result {
        eprintln!("mcb: {e}");
        return std::process::ExitCode::FAILURE;
    }
    std::process::ExitCode::SUCCESS
}
