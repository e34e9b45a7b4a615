//! Site discovery by name prefix

use crate::client::ArmClient;
use crate::client::models::Site;
use crate::error::Result;
use crate::sweep::SiteRef;

/// Find every app service whose name starts with `prefix`
///
/// The match is a literal byte-prefix comparison, case-sensitive, with no
/// wildcard semantics. Results keep the order the listing call yields.
pub async fn locate(client: &ArmClient, prefix: &str) -> Result<Vec<SiteRef>> {
    let sites = client.list_sites().await?;
    Ok(filter_by_prefix(sites, prefix))
}

fn filter_by_prefix(sites: Vec<Site>, prefix: &str) -> Vec<SiteRef> {
    sites
        .into_iter()
        .filter_map(SiteRef::from_site)
        .filter(|site| site.name.starts_with(prefix))
        .collect()
}
