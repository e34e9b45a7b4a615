//! Common test utilities for rulesweep integration tests

#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SUBSCRIPTION: &str = "sub-0000";

/// A mock ARM endpoint for driving the real binary
pub struct ArmFixture {
    pub server: MockServer,
}

impl ArmFixture {
    /// Start a fresh mock ARM endpoint
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Command for the real binary, wired to the mock endpoint
    // cargo_bin is deprecated upstream; its replacement is not stable yet
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("rulesweep").expect("Failed to find rulesweep binary");
        cmd.env("AZURE_SUBSCRIPTION_ID", SUBSCRIPTION)
            .env("AZURE_ACCESS_TOKEN", "integration-test-token")
            .env("AZURE_MANAGEMENT_URL", self.server.uri());
        cmd
    }

    /// Path of the subscription-wide site listing
    pub fn sites_path() -> String {
        format!(
            "/subscriptions/{}/providers/Microsoft.Web/sites",
            SUBSCRIPTION
        )
    }

    /// Path of one site's configuration read
    pub fn config_path(group: &str, site: &str) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Web/sites/{}/config",
            SUBSCRIPTION, group, site
        )
    }

    /// Path of one site's configuration write-back
    pub fn config_web_path(group: &str, site: &str) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Web/sites/{}/config/web",
            SUBSCRIPTION, group, site
        )
    }

    /// Mount a single-page listing of (name, resource group) sites
    pub async fn mount_sites(&self, sites: &[(&str, &str)]) {
        Mock::given(method("GET"))
            .and(path(Self::sites_path()))
            .respond_with(ResponseTemplate::new(200).set_body_json(site_list(sites)))
            .mount(&self.server)
            .await;
    }

    /// Mount one site's configuration read with the given restriction rules
    pub async fn mount_config(&self, group: &str, site: &str, rules: Value) {
        Mock::given(method("GET"))
            .and(path(Self::config_path(group, site)))
            .respond_with(ResponseTemplate::new(200).set_body_json(config_page(rules)))
            .mount(&self.server)
            .await;
    }
}

/// Listing body for (name, resource group) pairs
pub fn site_list(sites: &[(&str, &str)]) -> Value {
    let value: Vec<Value> = sites
        .iter()
        .map(|(name, group)| site(name, group))
        .collect();
    json!({ "value": value })
}

/// One listing entry
pub fn site(name: &str, group: &str) -> Value {
    json!({
        "id": format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Web/sites/{}",
            SUBSCRIPTION, group, name
        ),
        "name": name,
        "location": "westeurope",
        "properties": { "resourceGroup": group }
    })
}

/// One restriction rule entry, carrying an unmodeled field like real ones do
pub fn rule(name: &str, priority: i32, ip: &str) -> Value {
    json!({ "name": name, "priority": priority, "ipAddress": ip, "action": "Allow" })
}

/// Configuration collection wrapping the given rules plus unmodeled settings
pub fn config_page(rules: Value) -> Value {
    json!({
        "value": [
            {
                "name": "web",
                "properties": {
                    "linuxFxVersion": "DOCKER|nginx:latest",
                    "ipSecurityRestrictions": rules
                }
            }
        ]
    })
}
