//! In-memory [`HierarchySource`] for pipeline tests.

use crate::HierarchySource;
use async_trait::async_trait;
use nh_core::{Domain, NhError, RemoteNetwork, Result, StagedNetwork, SystemInfo};
use serde_json::Value;
use std::sync::Mutex;

pub struct FakeSource {
    pub networks: Vec<RemoteNetwork>,
    pub domains: Value,
    pub about: Value,
    pub stage_response: Value,
    pub fail_fetch: bool,
    pub staged: Mutex<Vec<Vec<StagedNetwork>>>,
}

impl Default for FakeSource {
    fn default() -> Self {
        Self {
            networks: Vec::new(),
            domains: Value::Array(Vec::new()),
            about: Value::Null,
            stage_response: serde_json::json!([{"id": 1}]),
            fail_fetch: false,
            staged: Mutex::new(Vec::new()),
        }
    }
}

impl FakeSource {
    pub fn with_networks(networks: Vec<RemoteNetwork>) -> Self {
        Self {
            networks,
            ..Self::default()
        }
    }

    /// Number of staged writes received
    pub fn put_calls(&self) -> usize {
        self.staged.lock().unwrap().len()
    }

    pub fn last_batch(&self) -> Option<Vec<StagedNetwork>> {
        self.staged.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl HierarchySource for FakeSource {
    fn host(&self) -> &str {
        "qradar.test"
    }

    async fn fetch_networks(&self) -> Result<Vec<RemoteNetwork>> {
        if self.fail_fetch {
            return Err(NhError::Connection("connection refused".into()));
        }
        Ok(self.networks.clone())
    }

    async fn stage_networks(&self, batch: &[StagedNetwork]) -> Result<Value> {
        self.staged.lock().unwrap().push(batch.to_vec());
        Ok(self.stage_response.clone())
    }

    async fn fetch_domains(&self) -> Result<Vec<Domain>> {
        match &self.domains {
            list @ Value::Array(_) => Ok(serde_json::from_value(list.clone())?),
            other => Err(NhError::UnexpectedFormat(other.to_string())),
        }
    }

    async fn system_info(&self) -> Result<SystemInfo> {
        SystemInfo::from_value(&self.about)
    }
}
