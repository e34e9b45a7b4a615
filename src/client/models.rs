//! Wire types for the ARM web sites API
//!
//! Only the fields this tool acts on are modeled. Everything else is captured
//! through flattened maps so a fetched configuration can be written back
//! without losing settings the tool never looked at.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One page of the subscription-wide site listing
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteListPage {
    #[serde(default)]
    pub value: Vec<Site>,
    #[serde(default)]
    pub next_link: Option<String>,
}

/// A site entry as returned by the listing call
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub properties: Option<SiteProperties>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteProperties {
    #[serde(default)]
    pub resource_group: Option<String>,
}

/// Collection wrapper returned by the per-site configuration read
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfigPage {
    #[serde(default)]
    pub value: Vec<SiteConfigResource>,
}

/// A site's web configuration, envelope included
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfigResource {
    pub properties: SiteConfig,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The configuration body; only the IP restriction list is modeled
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_security_restrictions: Option<Vec<IpSecurityRestriction>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SiteConfig {
    /// The restriction list, empty when the site has none
    pub fn rules(&self) -> &[IpSecurityRestriction] {
        self.ip_security_restrictions.as_deref().unwrap_or_default()
    }
}

/// One named IP restriction rule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpSecurityRestriction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
