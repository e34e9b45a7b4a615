//! Error types and handling for rulesweep
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for sweep operations
#[derive(Error, Diagnostic, Debug)]
pub enum SweepError {
    // Configuration errors
    #[error("Azure subscription is not set")]
    #[diagnostic(
        code(rulesweep::config::missing_subscription),
        help("Pass --subscription or set AZURE_SUBSCRIPTION_ID")
    )]
    MissingSubscription,

    #[error("Azure access token is not set")]
    #[diagnostic(
        code(rulesweep::config::missing_token),
        help(
            "Export AZURE_ACCESS_TOKEN with a management token (e.g. from 'az account get-access-token') or pass --access-token"
        )
    )]
    MissingAccessToken,

    #[error("Invalid access token: {reason}")]
    #[diagnostic(code(rulesweep::config::invalid_token))]
    InvalidAccessToken { reason: String },

    #[error("Invalid management endpoint: {url}")]
    #[diagnostic(
        code(rulesweep::config::invalid_endpoint),
        help("The endpoint must be an http(s) base URL, e.g. https://management.azure.com")
    )]
    InvalidEndpoint { url: String },

    // HTTP client errors
    #[error("Failed to build HTTP client: {reason}")]
    #[diagnostic(code(rulesweep::http::client_build))]
    ClientBuild { reason: String },

    // Sweep errors
    #[error("Failed to list app services: {reason}")]
    #[diagnostic(
        code(rulesweep::sweep::discovery),
        help("Check the subscription id and that the access token has not expired")
    )]
    Discovery { reason: String },

    #[error("Failed to fetch configuration for '{site}': {reason}")]
    #[diagnostic(code(rulesweep::sweep::fetch))]
    Fetch { site: String, reason: String },

    #[error("Failed to update configuration for '{site}': {reason}")]
    #[diagnostic(code(rulesweep::sweep::update))]
    Update { site: String, reason: String },
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SweepError>;
