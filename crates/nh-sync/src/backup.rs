//! Pre-import backup of the deployed hierarchy.

use crate::export::export_strict;
use crate::{HierarchySource, SyncError, SyncResult};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing::info;

/// Backup file for `host` taken at `at`:
/// `<dir>/backup-before-import-NH-<host>-<YYYYmmddHHMMSS>.csv`
#[must_use]
pub fn backup_path(dir: &Path, host: &str, at: DateTime<Local>) -> PathBuf {
    let host: String = host
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    dir.join(format!(
        "backup-before-import-NH-{host}-{}.csv",
        at.format("%Y%m%d%H%M%S")
    ))
}

/// Export the deployed hierarchy into a timestamped file under `dir`.
///
/// Any failure, including a failed fetch, is a [`SyncError::SafetyAbort`].
pub async fn backup_current_hierarchy<S: HierarchySource + ?Sized>(
    source: &S,
    dir: &Path,
) -> SyncResult<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|e| {
        SyncError::SafetyAbort(format!("cannot create backup directory {}: {e}", dir.display()))
    })?;

    let path = backup_path(dir, source.host(), Local::now());
    let lines = export_strict(source, &path)
        .await
        .map_err(|e| SyncError::SafetyAbort(e.to_string()))?;

    info!(path = %path.display(), lines, "current network hierarchy backed up");
    Ok(path)
}
