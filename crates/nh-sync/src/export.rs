//! Remote hierarchy → CSV file.

use crate::{HierarchySource, SyncResult};
use nh_core::{transcode, RemoteNetwork, COLUMNS};
use std::path::Path;
use tracing::{error, info};

/// File name used when `--export-file` is given without a value
pub const DEFAULT_EXPORT_FILE: &str = "network_hierarchy.csv";

/// Export the deployed hierarchy to `destination`.
///
/// A failed fetch is logged and exported as an empty hierarchy. Returns the
/// number of lines written including the header, so `1` means nothing was
/// exported.
pub async fn export<S: HierarchySource + ?Sized>(
    source: &S,
    destination: &Path,
) -> SyncResult<usize> {
    let networks = match source.fetch_networks().await {
        Ok(networks) => networks,
        Err(e) => {
            error!(error = %e, "failed to fetch network hierarchy");
            Vec::new()
        }
    };
    write_csv(destination, &networks)
}

/// Like [`export`], but a failed fetch is returned instead of producing an
/// empty file.
pub async fn export_strict<S: HierarchySource + ?Sized>(
    source: &S,
    destination: &Path,
) -> SyncResult<usize> {
    let networks = source.fetch_networks().await?;
    write_csv(destination, &networks)
}

/// Write `networks` to `path` (created or truncated), header first.
pub fn write_csv(path: &Path, networks: &[RemoteNetwork]) -> SyncResult<usize> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(COLUMNS)?;
    for network in networks {
        writer.write_record(transcode::to_tabular_row(network).fields())?;
    }
    writer.flush().map_err(csv::Error::from)?;

    let lines = networks.len() + 1;
    info!(path = %path.display(), lines, "network hierarchy exported");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeSource;
    use crate::SyncError;
    use nh_core::RemoteLocation;
    use tempfile::TempDir;

    fn network(id: i64) -> RemoteNetwork {
        RemoteNetwork {
            id: Some(id),
            group: Some("NetworkA".into()),
            name: Some(format!("net-{id}")),
            cidr: Some(format!("10.{id}.0.0/16")),
            description: Some("Servers, rack 2".into()),
            domain_id: Some(0),
            location: Some(RemoteLocation {
                kind: "Point".into(),
                coordinates: vec![2.3522, 48.8566],
            }),
            country_code: Some("FR".into()),
        }
    }

    #[tokio::test]
    async fn test_export_writes_header_and_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nh.csv");
        let source = FakeSource::with_networks(vec![network(1), network(2)]);

        let lines = export(&source, &path).await.unwrap();
        assert_eq!(lines, 3);

        let content = std::fs::read_to_string(&path).unwrap();
        let rows: Vec<&str> = content.lines().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            "id,group,name,cidr,description,domain_id,location,country_code"
        );
        assert_eq!(
            rows[1],
            r#"1,NetworkA,net-1,10.1.0.0/16,"Servers, rack 2",0,"48.8566,2.3522",FR"#
        );
    }

    #[tokio::test]
    async fn test_export_empty_hierarchy_is_header_only() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nh.csv");

        let lines = export(&FakeSource::default(), &path).await.unwrap();
        assert_eq!(lines, 1);
        assert_eq!(std::fs::read_to_string(&path).unwrap().lines().count(), 1);
    }

    #[tokio::test]
    async fn test_export_swallows_fetch_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nh.csv");
        let source = FakeSource {
            fail_fetch: true,
            ..FakeSource::with_networks(vec![network(1)])
        };

        assert_eq!(export(&source, &path).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_export_strict_propagates_fetch_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nh.csv");
        let source = FakeSource {
            fail_fetch: true,
            ..FakeSource::default()
        };

        let err = export_strict(&source, &path).await.unwrap_err();
        assert!(matches!(err, SyncError::Remote(_)));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_export_fills_missing_fields_with_na() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nh.csv");
        let source = FakeSource::with_networks(vec![RemoteNetwork {
            id: Some(9),
            ..RemoteNetwork::default()
        }]);

        export(&source, &path).await.unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().nth(1), Some("9,N/A,N/A,N/A,N/A,N/A,N/A,N/A"));
    }

    #[tokio::test]
    async fn test_export_writes_rows_around_an_off_shape_record() {
        use nh_client::QRadarClient;
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/config/network_hierarchy/networks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1, "group": "G", "name": "a", "cidr": "10.0.0.0/8",
                 "description": "", "domain_id": 0},
                {"id": 2, "name": "b", "domain_id": "0",
                 "location": {"type": "Point", "coordinates": null}}
            ])))
            .mount(&server)
            .await;
        let client = QRadarClient::builder("qradar.test", "t")
            .base_url(server.uri())
            .build()
            .unwrap();

        let dir = TempDir::new().unwrap();
        let out = dir.path().join("nh.csv");
        assert_eq!(export(&client, &out).await.unwrap(), 3);

        let content = std::fs::read_to_string(&out).unwrap();
        let rows: Vec<&str> = content.lines().collect();
        assert_eq!(rows[1], "1,G,a,10.0.0.0/8,,0,N/A,N/A");
        assert_eq!(rows[2], "2,N/A,b,N/A,N/A,0,N/A,N/A");
    }

    #[tokio::test]
    async fn test_export_to_unwritable_path_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("nh.csv");

        let err = export(&FakeSource::default(), &path).await.unwrap_err();
        assert!(matches!(err, SyncError::Csv(_)));
    }
}
