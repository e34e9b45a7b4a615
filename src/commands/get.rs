//! Get command implementation
//!
//! Locates app services by prefix, fetches each one's web configuration and
//! prints the IP restriction rules found there.

use crate::cli::{ConnectionArgs, GetArgs};
use crate::client::ArmClient;
use crate::commands::{RunStatus, helpers};
use crate::config::Settings;
use crate::error::Result;
use crate::sweep;

/// Run get command
pub async fn run(connection: ConnectionArgs, args: GetArgs) -> Result<RunStatus> {
    let settings = Settings::resolve(connection)?;
    let client = ArmClient::new(&settings)?;

    let sites = sweep::locate(&client, &args.prefix).await?;
    let report = sweep::fetch(&client, &sites).await;

    print!("{}", sweep::render(&report.bundles));

    helpers::print_failures(&report.failures);
    if report.failures.is_empty() {
        Ok(RunStatus::Success)
    } else {
        Ok(RunStatus::Partial)
    }
}
