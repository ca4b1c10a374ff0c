//! `nhsuite --export-file` - Write the network hierarchy to CSV.

use std::path::Path;

use nh_sync::SyncResult;

use super::Context;
use crate::output::{self, Level, Message};

pub async fn execute(ctx: &Context, path: &Path) {
    output::progress("Please wait... exporting data.");
    summarize(&nh_sync::export(&ctx.client, path).await).emit();
}

/// One line describing the export outcome; a header-only file counts as
/// nothing exported.
fn summarize(result: &SyncResult<usize>) -> Message {
    match result {
        Ok(1) => Message::new(Level::Warning, "No data exported."),
        Ok(lines) => Message::new(
            Level::Success,
            format!("{lines} lines exported successfully! (including col headers)"),
        ),
        Err(e) => Message::new(Level::Failure, format!("Error during export: {e}")),
    }
}
