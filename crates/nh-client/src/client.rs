//! Main QRadar API client implementation.

use crate::api::*;
use crate::config::{ClientConfig, TlsVerification, DEFAULT_ACCEPT, DEFAULT_API_VERSION, DEFAULT_TIMEOUT};
use nh_core::{NhError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Authentication header carrying the SEC token
const SEC_HEADER: &str = "SEC";

/// API version header
const VERSION_HEADER: &str = "Version";

/// User-Agent sent with every request
const USER_AGENT: &str = concat!("nhsuite/", env!("CARGO_PKG_VERSION"));

/// QRadar configuration API client
#[derive(Clone)]
pub struct QRadarClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    host: String,
    base_url: String,
}

impl QRadarClient {
    /// Build a client from the operating configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        QRadarClientBuilder::new(&config.host, &config.token)
            .api_version(&config.api_version)
            .accept(&config.accept)
            .tls(config.tls.clone())
            .timeout(config.timeout)
            .build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(host: impl Into<String>, token: impl Into<String>) -> QRadarClientBuilder {
        QRadarClientBuilder::new(host, token)
    }

    /// Console host this client talks to
    #[must_use]
    pub fn host(&self) -> &str {
        &self.inner.host
    }

    /// Access network hierarchy endpoints
    #[must_use]
    pub fn networks(&self) -> NetworksApi<'_> {
        NetworksApi::new(self)
    }

    /// Access domain management endpoints
    #[must_use]
    pub fn domains(&self) -> DomainsApi<'_> {
        DomainsApi::new(self)
    }

    /// Access system information endpoints
    #[must_use]
    pub fn system(&self) -> SystemApi<'_> {
        SystemApi::new(self)
    }

    /// Perform a GET request and return the raw JSON body
    pub(crate) async fn get(&self, path: &str) -> Result<Value> {
        let url = self.build_url(path);
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(&url)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// Perform a GET request that must return a JSON array of `T`
    pub(crate) async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        match self.get(path).await? {
            list @ Value::Array(_) => serde_json::from_value(list).map_err(NhError::Json),
            other => Err(NhError::UnexpectedFormat(other.to_string())),
        }
    }

    /// Perform a PUT request with a JSON body and return the raw JSON body
    pub(crate) async fn put<B: serde::Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        let url = self.build_url(path);
        debug!(url = %url, "PUT request");

        let response = self
            .inner
            .http
            .put(&url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.inner.base_url, path)
    }

    /// Handle an API response that returns JSON; an empty body reads as `null`
    async fn handle_response(&self, response: reqwest::Response) -> Result<Value> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await.map_err(transport_error)?;
            if body.trim().is_empty() {
                return Ok(Value::Null);
            }
            serde_json::from_str(&body).map_err(NhError::Json)
        } else {
            self.handle_error(status.as_u16(), response).await
        }
    }

    /// Convert an error response to an [`NhError`]
    async fn handle_error<T>(&self, status: u16, response: reqwest::Response) -> Result<T> {
        let body = response.text().await.unwrap_or_default();

        // QRadar puts the human-readable part in "message", "description" or "error"
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| {
                ["message", "description", "error"]
                    .iter()
                    .find_map(|key| v.get(key).and_then(Value::as_str).map(String::from))
            })
            .unwrap_or(body);

        match status {
            401 => Err(NhError::Unauthorized),
            404 => Err(NhError::NotFound { resource: message }),
            _ => {
                warn!(status, %message, "API returned an error");
                Err(NhError::Api {
                    code: status,
                    message,
                })
            }
        }
    }
}

fn transport_error(e: reqwest::Error) -> NhError {
    if e.is_timeout() {
        NhError::Timeout(e.to_string())
    } else if e.is_connect() {
        NhError::Connection(e.to_string())
    } else {
        NhError::Http(e.to_string())
    }
}

/// Builder for configuring a [`QRadarClient`]
pub struct QRadarClientBuilder {
    host: String,
    token: String,
    base_url: Option<String>,
    api_version: String,
    accept: String,
    tls: TlsVerification,
    timeout: Duration,
}

impl QRadarClientBuilder {
    /// Create a new builder for the given console host and SEC token
    #[must_use]
    pub fn new(host: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            token: token.into(),
            base_url: None,
            api_version: DEFAULT_API_VERSION.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            tls: TlsVerification::Off,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the base URL (defaults to `https://<host>`, useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the `Version` header
    #[must_use]
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set the `Accept` header
    #[must_use]
    pub fn accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = accept.into();
        self
    }

    /// Set the certificate verification policy
    #[must_use]
    pub fn tls(mut self, tls: TlsVerification) -> Self {
        self.tls = tls;
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<QRadarClient> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| format!("https://{}", self.host));
        let parsed = url::Url::parse(&base_url)
            .map_err(|e| NhError::Config(format!("invalid console address {base_url}: {e}")))?;
        let base_url = parsed.as_str().trim_end_matches('/').to_string();

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static("sec"), header_value(SEC_HEADER, &self.token)?);
        headers.insert(
            HeaderName::from_static("version"),
            header_value(VERSION_HEADER, &self.api_version)?,
        );
        headers.insert(ACCEPT, header_value("Accept", &self.accept)?);

        let mut http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .gzip(true);

        http = match &self.tls {
            TlsVerification::Off => http.danger_accept_invalid_certs(true),
            TlsVerification::CustomCa(path) => {
                let pem = std::fs::read(path).map_err(|e| {
                    NhError::Config(format!("cannot read CA bundle {}: {e}", path.display()))
                })?;
                let cert = reqwest::Certificate::from_pem(&pem).map_err(|e| {
                    NhError::Config(format!("invalid CA bundle {}: {e}", path.display()))
                })?;
                http.add_root_certificate(cert)
            }
        };

        let http = http
            .build()
            .map_err(|e| NhError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(QRadarClient {
            inner: Arc::new(ClientInner {
                http,
                host: self.host,
                base_url,
            }),
        })
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(value)
        .map_err(|_| NhError::Config(format!("{name} header contains invalid characters")))?;
    value.set_sensitive(name == SEC_HEADER);
    Ok(value)
}
