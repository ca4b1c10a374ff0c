//! Read-only diagnostic queries.

use crate::{HierarchySource, SyncResult};
use nh_core::{Domain, SystemInfo};
use tracing::error;

/// Fetch the domain list for display.
///
/// Each entry's `Display` renders
/// `Domain ID: <id>, Domain Name: <name>, Description: <description>`,
/// with domain 0 always shown as `DEFAULT_DOMAIN`.
pub async fn check_domain<S: HierarchySource + ?Sized>(source: &S) -> SyncResult<Vec<Domain>> {
    source.fetch_domains().await.map_err(|e| {
        error!(error = %e, "failed to fetch domains");
        e.into()
    })
}

/// Console identity and release information
#[derive(Debug, Clone)]
pub struct VersionReport {
    /// Host the information was read from
    pub host: String,
    /// Fields from `/api/system/about`
    pub info: SystemInfo,
}

impl std::fmt::Display for VersionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "QRadar System Information: {}", self.host)?;
        writeln!(f, "release_name: {}", self.info.release_name)?;
        writeln!(f, "build_version: {}", self.info.build_version)?;
        writeln!(f, "fips_enabled: {}", self.info.fips_enabled)?;
        write!(f, "external_version: {}", self.info.external_version)
    }
}

/// Fetch system metadata; a missing field is an error, not a default.
pub async fn check_version<S: HierarchySource + ?Sized>(source: &S) -> SyncResult<VersionReport> {
    let info = source.system_info().await.map_err(|e| {
        error!(error = %e, "failed to read system information");
        e
    })?;
    Ok(VersionReport {
        host: source.host().to_string(),
        info,
    })
}
