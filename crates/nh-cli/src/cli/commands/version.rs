//! `nhsuite --check-version` - Show console release information.

use super::Context;
use crate::output;

pub async fn execute(ctx: &Context) {
    match nh_sync::inspect::check_version(&ctx.client).await {
        Ok(report) => println!("{report}"),
        Err(e) => output::failure(&format!("Error checking version: {e}")),
    }
}
