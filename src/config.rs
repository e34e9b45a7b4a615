//! Runtime settings resolved from CLI flags and environment

use std::time::Duration;

use crate::cli::ConnectionArgs;
use crate::error::{Result, SweepError};

/// Timeout applied to every management API request
pub const REQUEST_TIMEOUT_SECS: u64 = 600;

/// Validated connection settings for one sweep run
#[derive(Debug, Clone)]
pub struct Settings {
    /// Azure subscription id
    pub subscription: String,
    /// Pre-authenticated ARM bearer token
    pub access_token: String,
    /// ARM base URL without a trailing slash
    pub endpoint: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Settings {
    /// Validate CLI connection arguments into usable settings
    pub fn resolve(connection: ConnectionArgs) -> Result<Self> {
        let subscription = connection
            .subscription
            .filter(|s| !s.is_empty())
            .ok_or(SweepError::MissingSubscription)?;

        let access_token = connection
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or(SweepError::MissingAccessToken)?;

        let endpoint = normalize_endpoint(&connection.endpoint)?;

        Ok(Self {
            subscription,
            access_token,
            endpoint,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        })
    }
}

/// Trim trailing slashes and reject anything that is not an http(s) base URL
fn normalize_endpoint(url: &str) -> Result<String> {
    let trimmed = url.trim_end_matches('/');
    if !trimmed.starts_with("https://") && !trimmed.starts_with("http://") {
        return Err(SweepError::InvalidEndpoint {
            url: url.to_string(),
        });
    }
    Ok(trimmed.to_string())
}
