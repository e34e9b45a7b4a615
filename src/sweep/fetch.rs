//! Sequential configuration fetch across discovered sites

use crate::client::ArmClient;
use crate::error::SweepError;
use crate::progress::ProgressDisplay;
use crate::sweep::{ConfigBundle, FetchReport, SiteFailure, SiteRef};

/// Fetch the web configuration of every site, one call at a time
///
/// A failed read does not stop the sweep; the site is recorded in the
/// report's failure list and the remaining sites are still fetched.
pub async fn fetch(client: &ArmClient, sites: &[SiteRef]) -> FetchReport {
    let mut report = FetchReport::default();
    let progress = ProgressDisplay::new(sites.len() as u64);

    for site in sites {
        progress.update_site(&site.name);
        match client.get_site_config(&site.resource_group, &site.name).await {
            Ok(config) => report.bundles.push(ConfigBundle {
                site: site.clone(),
                config,
            }),
            Err(SweepError::Fetch { site, reason }) => {
                report.failures.push(SiteFailure { site, reason });
            }
            Err(other) => report.failures.push(SiteFailure {
                site: site.name.clone(),
                reason: other.to_string(),
            }),
        }
        progress.inc();
    }

    progress.finish();
    report
}
