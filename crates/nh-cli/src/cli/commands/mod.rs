//! Command implementations.

pub mod domain;
pub mod export;
pub mod import;
pub mod version;

use nh_client::{ClientConfig, QRadarClient};

/// Shared context for all commands.
pub struct Context {
    /// Operating configuration, read once at startup
    pub config: ClientConfig,

    /// Client for the configured console
    pub client: QRadarClient,
}

/// Context pointing at a mock console
#[cfg(test)]
pub(crate) fn test_context(server: &wiremock::MockServer, safety: bool) -> Context {
    let mut config = ClientConfig::new("qradar.test", "token");
    config.safety = safety;
    let client = QRadarClient::builder(&config.host, &config.token)
        .base_url(server.uri())
        .build()
        .unwrap();
    Context { config, client }
}
