//! Network hierarchy endpoints.

use crate::QRadarClient;
use nh_core::{RemoteNetwork, Result, StagedNetwork};
use serde_json::Value;
use tracing::warn;

const NETWORKS_PATH: &str = "/api/config/network_hierarchy/networks";
const STAGED_NETWORKS_PATH: &str = "/api/config/network_hierarchy/staged_networks";

/// Network hierarchy endpoints
pub struct NetworksApi<'a> {
    client: &'a QRadarClient,
}

impl<'a> NetworksApi<'a> {
    pub(crate) const fn new(client: &'a QRadarClient) -> Self {
        Self { client }
    }

    /// Fetch the deployed hierarchy
    ///
    /// Anything but a JSON array is reported as
    /// [`NhError::UnexpectedFormat`](nh_core::NhError::UnexpectedFormat).
    /// Records are decoded one by one; an entry that is not an object is
    /// skipped with a warning.
    pub async fn list(&self) -> Result<Vec<RemoteNetwork>> {
        let records: Vec<Value> = self.client.get_list(NETWORKS_PATH).await?;
        Ok(records
            .into_iter()
            .filter_map(|record| match serde_json::from_value(record) {
                Ok(network) => Some(network),
                Err(e) => {
                    warn!(error = %e, "skipping malformed network record");
                    None
                }
            })
            .collect())
    }

    /// Replace the staged hierarchy with `networks`
    ///
    /// Returns the raw response body; the API answers with the accepted
    /// hierarchy on success.
    pub async fn stage(&self, networks: &[StagedNetwork]) -> Result<Value> {
        self.client.put(STAGED_NETWORKS_PATH, networks).await
    }
}

#[cfg(test)]
mod tests {
    use crate::QRadarClient;
    use nh_core::{NhError, StagedNetwork};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> QRadarClient {
        QRadarClient::builder("h", "t")
            .base_url(server.uri())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_networks() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/config/network_hierarchy/networks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "id": 1,
                    "group": "NetworkA",
                    "name": "dmz",
                    "cidr": "10.0.0.0/24",
                    "description": "",
                    "domain_id": 0,
                    "location": {"type": "Point", "coordinates": [2.35, 48.85]},
                    "country_code": "FR"
                },
                {"id": 2, "name": "lan", "cidr": "192.168.0.0/16", "domain_id": 0}
            ])))
            .mount(&server)
            .await;

        let networks = client(&server).networks().list().await.unwrap();
        assert_eq!(networks.len(), 2);
        assert_eq!(networks[0].location.as_ref().unwrap().coordinates, vec![2.35, 48.85]);
        assert!(networks[1].location.is_none());
    }

    #[tokio::test]
    async fn test_list_networks_keeps_good_records_next_to_bad_ones() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/config/network_hierarchy/networks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1, "name": "a", "domain_id": 0},
                {"id": 2, "location": {"type": "Point", "coordinates": null}},
                {"id": 3, "domain_id": "0"},
                null,
                "garbage"
            ])))
            .mount(&server)
            .await;

        let networks = client(&server).networks().list().await.unwrap();
        let ids: Vec<Option<i64>> = networks.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
        assert!(networks[1].location.is_none());
        assert_eq!(networks[2].domain_id, Some(0));
    }

    #[tokio::test]
    async fn test_list_networks_rejects_non_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/config/network_hierarchy/networks"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "nope"})),
            )
            .mount(&server)
            .await;

        let err = client(&server).networks().list().await.unwrap_err();
        assert!(matches!(err, NhError::UnexpectedFormat(_)));
    }

    #[tokio::test]
    async fn test_stage_sends_full_batch() {
        let server = MockServer::start().await;
        let mut net = StagedNetwork::new(7, "lab", 1);
        net.name = Some("lab-net".into());

        Mock::given(method("PUT"))
            .and(path("/api/config/network_hierarchy/staged_networks"))
            .and(body_json(serde_json::json!([
                {"id": 7, "description": "lab", "domain_id": 1, "name": "lab-net"}
            ])))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{"id": 7}])))
            .expect(1)
            .mount(&server)
            .await;

        let body = client(&server).networks().stage(&[net]).await.unwrap();
        assert!(body.is_array());
    }
}
