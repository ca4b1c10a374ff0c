//! System information endpoints.

use crate::QRadarClient;
use nh_core::{Result, SystemInfo};

/// System information endpoints
pub struct SystemApi<'a> {
    client: &'a QRadarClient,
}

impl<'a> SystemApi<'a> {
    pub(crate) const fn new(client: &'a QRadarClient) -> Self {
        Self { client }
    }

    /// Release and build information of the console
    pub async fn about(&self) -> Result<SystemInfo> {
        let body = self.client.get("/api/system/about").await?;
        SystemInfo::from_value(&body)
    }
}

#[cfg(test)]
mod tests {
    use crate::QRadarClient;
    use nh_core::NhError;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn serve(body: serde_json::Value) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/system/about"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_about() {
        let server = serve(serde_json::json!({
            "release_name": "7.5.0 UpdatePackage 6",
            "build_version": "2021.6.6.20230519190832",
            "fips_enabled": false,
            "external_version": "7.5.0"
        }))
        .await;
        let client = QRadarClient::builder("h", "t")
            .base_url(server.uri())
            .build()
            .unwrap();

        let info = client.system().about().await.unwrap();
        assert_eq!(info.build_version, "2021.6.6.20230519190832");
        assert_eq!(info.external_version, "7.5.0");
    }

    #[tokio::test]
    async fn test_about_missing_field() {
        let server = serve(serde_json::json!({"release_name": "7.5.0"})).await;
        let client = QRadarClient::builder("h", "t")
            .base_url(server.uri())
            .build()
            .unwrap();

        let err = client.system().about().await.unwrap_err();
        assert!(matches!(err, NhError::MissingField(_)));
    }
}
