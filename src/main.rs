//! rulesweep - IP restriction sweeper for Azure App Services
//!
//! Finds every App Service in a subscription whose name starts with a given
//! prefix, then reports the IP restriction rules of each one or rewrites a
//! named rule across all of them in a single sequential pass.

use clap::Parser;

mod cli;
mod client;
mod commands;
mod config;
mod error;
mod progress;
mod sweep;

use cli::{Cli, Commands};
use commands::RunStatus;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Get(args) => commands::get::run(cli.connection, args).await,
        Commands::Set(args) => commands::set::run(cli.connection, args).await,
        Commands::Completions(args) => commands::completions::run(args),
    };

    match result {
        Ok(RunStatus::Success) => {}
        Ok(status) => std::process::exit(status.exit_code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
