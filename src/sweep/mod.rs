//! The sweep pipeline: locate sites, fetch configurations, report or apply

pub mod apply;
pub mod bundle;
pub mod fetch;
pub mod locate;
pub mod report;

pub use apply::{ApplyOutcome, apply};
pub use bundle::{ConfigBundle, FetchReport, SiteFailure, SiteRef};
pub use fetch::fetch;
pub use locate::locate;
pub use report::render;
