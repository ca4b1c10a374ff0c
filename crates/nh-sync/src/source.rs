//! The remote side of every pipeline.

use async_trait::async_trait;
use nh_client::QRadarClient;
use nh_core::{Domain, RemoteNetwork, Result, StagedNetwork, SystemInfo};
use serde_json::Value;

/// Read/write access to a network hierarchy
#[async_trait]
pub trait HierarchySource: Send + Sync {
    /// Host identity, used to name backups and in version output
    fn host(&self) -> &str;

    /// Fetch the full deployed hierarchy
    async fn fetch_networks(&self) -> Result<Vec<RemoteNetwork>>;

    /// Replace the staged hierarchy with `batch`, returning the raw response
    async fn stage_networks(&self, batch: &[StagedNetwork]) -> Result<Value>;

    /// Fetch the domain list
    async fn fetch_domains(&self) -> Result<Vec<Domain>>;

    /// Fetch system metadata
    async fn system_info(&self) -> Result<SystemInfo>;
}

#[async_trait]
impl HierarchySource for QRadarClient {
    fn host(&self) -> &str {
        QRadarClient::host(self)
    }

    async fn fetch_networks(&self) -> Result<Vec<RemoteNetwork>> {
        self.networks().list().await
    }

    async fn stage_networks(&self, batch: &[StagedNetwork]) -> Result<Value> {
        self.networks().stage(batch).await
    }

    async fn fetch_domains(&self) -> Result<Vec<Domain>> {
        self.domains().list().await
    }

    async fn system_info(&self) -> Result<SystemInfo> {
        self.system().about().await
    }
}
