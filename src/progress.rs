//! Progress bar display for the fetch sweep

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display while fetching site configurations
pub struct ProgressDisplay {
    site_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total site count
    pub fn new(total_sites: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-");

        let site_pb = ProgressBar::new(total_sites);
        site_pb.set_style(style);

        Self { site_pb }
    }

    /// Update to show the site currently being fetched
    pub fn update_site(&self, site_name: &str) {
        self.site_pb.set_message(site_name.to_string());
    }

    /// Increment sweep progress
    pub fn inc(&self) {
        self.site_pb.inc(1);
    }

    /// Clear the bar so it never mixes with the report output
    pub fn finish(&self) {
        self.site_pb.finish_and_clear();
    }
}
