//! Rewrite a named rule across fetched configurations

use crate::client::ArmClient;
use crate::client::models::SiteConfig;
use crate::error::SweepError;
use crate::sweep::ConfigBundle;

/// What happened to one site that had the rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    Updated { site: String },
    Failed { site: String, reason: String },
}

/// Rewrite every rule named `rule_name` and write changed configurations back
///
/// Each bundle gets at most one update call, carrying its full configuration
/// after all matching entries (duplicates included) were rewritten in place.
/// Bundles without a matching rule are left untouched and produce no call and
/// no outcome. A failed update is recorded and the sweep moves on.
pub async fn apply(
    client: &ArmClient,
    bundles: &mut [ConfigBundle],
    rule_name: &str,
    ip_address: &str,
    priority: i32,
) -> Vec<ApplyOutcome> {
    let mut outcomes = Vec::new();

    for bundle in bundles.iter_mut() {
        if rewrite_rules(&mut bundle.config.properties, rule_name, ip_address, priority) == 0 {
            continue;
        }

        let outcome = match client
            .update_site_config(&bundle.site.resource_group, &bundle.site.name, &bundle.config)
            .await
        {
            Ok(()) => ApplyOutcome::Updated {
                site: bundle.site.name.clone(),
            },
            Err(SweepError::Update { site, reason }) => ApplyOutcome::Failed { site, reason },
            Err(other) => ApplyOutcome::Failed {
                site: bundle.site.name.clone(),
                reason: other.to_string(),
            },
        };
        outcomes.push(outcome);
    }

    outcomes
}

/// Overwrite address and priority on every entry matching `rule_name`
///
/// Returns how many entries were rewritten. Entry order is never changed.
fn rewrite_rules(config: &mut SiteConfig, rule_name: &str, ip_address: &str, priority: i32) -> usize {
    let Some(rules) = config.ip_security_restrictions.as_mut() else {
        return 0;
    };

    let mut changed = 0;
    for rule in rules.iter_mut() {
        if rule.name.as_deref() == Some(rule_name) {
            rule.ip_address = Some(ip_address.to_string());
            rule.priority = Some(priority);
            changed += 1;
        }
    }
    changed
}
