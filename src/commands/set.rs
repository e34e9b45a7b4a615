//! Set command implementation
//!
//! Locates app services by prefix, rewrites the named rule in every fetched
//! configuration that carries it and writes those configurations back, one
//! update call per app service. Ends with a summary and a matching exit
//! status instead of aborting halfway through the fleet.

use console::Style;

use crate::cli::{ConnectionArgs, SetArgs};
use crate::client::ArmClient;
use crate::commands::{RunStatus, helpers};
use crate::config::Settings;
use crate::error::Result;
use crate::sweep::{self, ApplyOutcome};

/// Run set command
pub async fn run(connection: ConnectionArgs, args: SetArgs) -> Result<RunStatus> {
    let settings = Settings::resolve(connection)?;
    let client = ArmClient::new(&settings)?;

    let sites = sweep::locate(&client, &args.prefix).await?;
    let mut report = sweep::fetch(&client, &sites).await;
    helpers::print_failures(&report.failures);

    let outcomes = sweep::apply(
        &client,
        &mut report.bundles,
        &args.rule_name,
        &args.ip_address,
        args.priority,
    )
    .await;

    let mut updated = 0;
    let mut failed = report.failures.len();
    for outcome in &outcomes {
        match outcome {
            ApplyOutcome::Updated { site } => {
                updated += 1;
                println!("{} {}", Style::new().green().bold().apply_to("✓"), site);
            }
            ApplyOutcome::Failed { site, reason } => {
                failed += 1;
                eprintln!(
                    "{} {}: {}",
                    Style::new().red().bold().apply_to("✗"),
                    site,
                    reason
                );
            }
        }
    }

    let unmatched = report.bundles.len() - outcomes.len();
    println!(
        "Updated {} {} ({} failed, {} without rule '{}')",
        updated,
        helpers::site_label(updated),
        failed,
        unmatched,
        args.rule_name
    );

    if failed == 0 {
        Ok(RunStatus::Success)
    } else {
        Ok(RunStatus::Partial)
    }
}
