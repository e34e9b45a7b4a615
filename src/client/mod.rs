//! Thin client for the ARM web sites API
//!
//! Wraps a preconfigured `reqwest` client with the three calls the sweep
//! needs: list sites, read a site's web configuration, write it back.

pub mod models;

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use crate::config::Settings;
use crate::error::{Result, SweepError};
use models::{Site, SiteConfigPage, SiteConfigResource, SiteListPage};

/// API version pinned for every site and configuration call
pub const API_VERSION: &str = "2018-02-01";

/// Authenticated ARM client scoped to one subscription
pub struct ArmClient {
    http: reqwest::Client,
    endpoint: String,
    subscription: String,
}

impl ArmClient {
    /// Build a client from validated settings
    pub fn new(settings: &Settings) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", settings.access_token))
            .map_err(|e| SweepError::InvalidAccessToken {
                reason: e.to_string(),
            })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(settings.timeout)
            .build()
            .map_err(|e| SweepError::ClientBuild {
                reason: e.to_string(),
            })?;

        Ok(Self {
            http,
            endpoint: settings.endpoint.clone(),
            subscription: settings.subscription.clone(),
        })
    }

    /// List every site in the subscription, following continuation links
    pub async fn list_sites(&self) -> Result<Vec<Site>> {
        let mut sites = Vec::new();
        let mut url = format!(
            "{}/subscriptions/{}/providers/Microsoft.Web/sites?api-version={}",
            self.endpoint, self.subscription, API_VERSION
        );

        loop {
            let resp = self
                .http
                .get(&url)
                .send()
                .await
                .map_err(|e| SweepError::Discovery {
                    reason: request_error(&e),
                })?;
            let page: SiteListPage = read_json(resp)
                .await
                .map_err(|reason| SweepError::Discovery { reason })?;

            sites.extend(page.value);

            match page.next_link {
                Some(next) if !next.is_empty() => url = next,
                _ => break,
            }
        }

        Ok(sites)
    }

    /// Fetch the web configuration for one site
    pub async fn get_site_config(
        &self,
        resource_group: &str,
        site_name: &str,
    ) -> Result<SiteConfigResource> {
        let url = format!(
            "{}/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Web/sites/{}/config?api-version={}",
            self.endpoint, self.subscription, resource_group, site_name, API_VERSION
        );

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| SweepError::Fetch {
                site: site_name.to_string(),
                reason: request_error(&e),
            })?;
        let page: SiteConfigPage =
            read_json(resp).await.map_err(|reason| SweepError::Fetch {
                site: site_name.to_string(),
                reason,
            })?;

        // The collection carries the web config as its first element
        page.value
            .into_iter()
            .next()
            .ok_or_else(|| SweepError::Fetch {
                site: site_name.to_string(),
                reason: "configuration list came back empty".to_string(),
            })
    }

    /// Write back a site's full web configuration
    pub async fn update_site_config(
        &self,
        resource_group: &str,
        site_name: &str,
        config: &SiteConfigResource,
    ) -> Result<()> {
        let url = format!(
            "{}/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Web/sites/{}/config/web?api-version={}",
            self.endpoint, self.subscription, resource_group, site_name, API_VERSION
        );

        let resp = self
            .http
            .put(&url)
            .json(config)
            .send()
            .await
            .map_err(|e| SweepError::Update {
                site: site_name.to_string(),
                reason: request_error(&e),
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SweepError::Update {
                site: site_name.to_string(),
                reason: arm_error_message(status, &body),
            });
        }

        Ok(())
    }
}

/// Describe a transport-level request failure
fn request_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "request timed out".to_string()
    } else {
        err.to_string()
    }
}

/// Parse a successful response body, or describe the failure
async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> std::result::Result<T, String> {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();

    if !status.is_success() {
        return Err(arm_error_message(status, &body));
    }

    serde_json::from_str(&body).map_err(|e| format!("invalid response body: {}", e))
}

/// Prefer the ARM error payload's message, fall back to the raw body
fn arm_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        let message = value
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str());
        if let Some(message) = message {
            return format!("HTTP {}: {}", status, message);
        }
    }
    format!("HTTP {}: {}", status, body)
}
