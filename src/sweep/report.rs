//! Plain-text report of fetched IP restrictions

use crate::sweep::ConfigBundle;

/// Render one line per rule, grouped under each site's name
///
/// Sites without any restriction rules produce no output at all, not even
/// their header line.
pub fn render(bundles: &[ConfigBundle]) -> String {
    let mut out = String::new();

    for bundle in bundles {
        let rules = bundle.config.properties.rules();
        if rules.is_empty() {
            continue;
        }

        out.push_str(&format!("App service {}\n", bundle.site.name));
        for rule in rules {
            let name = rule.name.as_deref().unwrap_or("-");
            let priority = rule
                .priority
                .map_or_else(|| "-".to_string(), |p| p.to_string());
            let ip = rule.ip_address.as_deref().unwrap_or("-");
            out.push_str(&format!(
                "IP Restriction: name {}: priority {}: ip {}\n",
                name, priority, ip
            ));
        }
    }

    out
}
