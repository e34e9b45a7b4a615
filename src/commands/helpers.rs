//! Command helper utilities

use console::Style;

use crate::sweep::SiteFailure;

/// Print one styled failure line per site to stderr
pub fn print_failures(failures: &[SiteFailure]) {
    for failure in failures {
        eprintln!(
            "{} {}: {}",
            Style::new().red().bold().apply_to("✗"),
            failure.site,
            failure.reason
        );
    }
}

/// "app service" with the right plural for a count
pub fn site_label(count: usize) -> &'static str {
    if count == 1 { "app service" } else { "app services" }
}
