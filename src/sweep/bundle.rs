//! In-memory pairing of a site's identity with its fetched configuration

use crate::client::models::{Site, SiteConfigResource};

/// Identity of one discovered app service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRef {
    pub name: String,
    pub resource_group: String,
}

impl SiteRef {
    /// Build a reference from a listing entry, skipping incomplete ones
    pub fn from_site(site: Site) -> Option<Self> {
        let name = site.name?;
        let resource_group = site.properties?.resource_group?;
        Some(Self {
            name,
            resource_group,
        })
    }
}

/// A site together with its freshly fetched web configuration
#[derive(Debug, Clone)]
pub struct ConfigBundle {
    pub site: SiteRef,
    pub config: SiteConfigResource,
}

/// Result of sweeping configurations across all discovered sites
#[derive(Debug, Default)]
pub struct FetchReport {
    /// Configurations fetched successfully, in discovery order
    pub bundles: Vec<ConfigBundle>,
    /// Sites whose configuration could not be read
    pub failures: Vec<SiteFailure>,
}

/// One site that failed during fetch or update
#[derive(Debug, Clone)]
pub struct SiteFailure {
    pub site: String,
    pub reason: String,
}
