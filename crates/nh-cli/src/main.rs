//! nhsuite - QRadar network hierarchy suite
//!
//! Export the network hierarchy to CSV, import it back, and inspect domains
//! and console version.

use anyhow::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    nh_cli::run().await
}
