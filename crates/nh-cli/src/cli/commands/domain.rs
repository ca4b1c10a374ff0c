//! `nhsuite --check-domain` - List domains.

use super::Context;
use crate::output;

pub async fn execute(ctx: &Context) {
    match nh_sync::inspect::check_domain(&ctx.client).await {
        Ok(domains) => {
            for domain in &domains {
                println!("{domain}");
            }
        }
        Err(e) => output::failure(&format!("Error checking domain: {e}")),
    }
}
