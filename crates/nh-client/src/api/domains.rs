//! Domain management endpoints.

use crate::QRadarClient;
use nh_core::{Domain, Result};

/// Domain management endpoints
pub struct DomainsApi<'a> {
    client: &'a QRadarClient,
}

impl<'a> DomainsApi<'a> {
    pub(crate) const fn new(client: &'a QRadarClient) -> Self {
        Self { client }
    }

    /// List every domain visible to the token
    pub async fn list(&self) -> Result<Vec<Domain>> {
        self.client
            .get_list("/api/config/domain_management/domains")
            .await
    }
}
