//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - get: Get command arguments
//! - set: Set command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};

pub mod completions;
pub mod get;
pub mod set;

pub use completions::CompletionsArgs;
pub use get::GetArgs;
pub use set::SetArgs;

/// rulesweep - IP restriction sweeper for Azure App Services
///
/// Find app services by name prefix, then report or rewrite a named IP
/// restriction rule in each one's web configuration.
#[derive(Parser, Debug)]
#[command(
    name = "rulesweep",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Sweep IP security restrictions across Azure App Services",
    long_about = "rulesweep finds every App Service in a subscription whose name starts with a \
                  given prefix, then reports the IP restriction rules of each one or rewrites a \
                  named rule in all of them in a single sequential pass.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  rulesweep get kenfautest                            \x1b[90m# Report rules of matching app services\x1b[0m\n   \
                  rulesweep set kenfautest allow-office 100 1.2.3.4   \x1b[90m# Rewrite a rule everywhere it appears\x1b[0m\n\n\
                  Credentials come from the ambient environment; export AZURE_SUBSCRIPTION_ID and\n   \
                  AZURE_ACCESS_TOKEN (e.g. from 'az account get-access-token') before running.\n\n\
                  "
)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Connection details shared by all sweeping commands
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Azure subscription to sweep
    #[arg(long, global = true, env = "AZURE_SUBSCRIPTION_ID")]
    pub subscription: Option<String>,

    /// Pre-authenticated ARM bearer token
    #[arg(
        long,
        global = true,
        env = "AZURE_ACCESS_TOKEN",
        hide_env_values = true
    )]
    pub access_token: Option<String>,

    /// ARM endpoint base URL
    #[arg(
        long,
        global = true,
        env = "AZURE_MANAGEMENT_URL",
        default_value = "https://management.azure.com"
    )]
    pub endpoint: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report IP restriction rules of matching app services
    Get(GetArgs),

    /// Rewrite a named IP restriction rule across matching app services
    Set(SetArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
