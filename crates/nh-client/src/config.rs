//! Operating configuration.
//!
//! Key names follow the legacy `config.txt` layout:
//!
//! ```json
//! {
//!   "ip_QRadar": "qradar.example.net",
//!   "auth": "00000000-0000-0000-0000-000000000000",
//!   "Version": "15.0",
//!   "Accept": "application/json",
//!   "verify_ssl": "True",
//!   "ssl_cert_path": "certs/qradar.pem",
//!   "safety": "on"
//! }
//! ```
//!
//! Files ending in `.toml` are read as TOML with the same keys.

use nh_core::{NhError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config.txt";

/// Default `Version` header
pub const DEFAULT_API_VERSION: &str = "15.0";

/// Default `Accept` header
pub const DEFAULT_ACCEPT: &str = "application/json";

/// Default directory for pre-import backups
pub const DEFAULT_BACKUP_DIR: &str = "safety";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How the server certificate is checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TlsVerification {
    /// Accept any certificate
    Off,
    /// Verify against the PEM bundle at this path
    CustomCa(PathBuf),
}

/// Settings read once at startup and shared read-only afterwards
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Console host name or address (`ip_QRadar`)
    pub host: String,

    /// SEC token (`auth`)
    pub token: String,

    /// `Version` header
    pub api_version: String,

    /// `Accept` header
    pub accept: String,

    /// Certificate verification policy
    pub tls: TlsVerification,

    /// Back up the remote hierarchy before every import
    pub safety: bool,

    /// Where backups are written
    pub backup_dir: PathBuf,

    /// Per-request timeout
    pub timeout: Duration,
}

/// Either a JSON/TOML boolean or a string such as `"True"` / `"off"`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Text(String),
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(rename = "ip_QRadar")]
    host: Option<String>,
    auth: Option<String>,
    #[serde(rename = "Version")]
    version: Option<String>,
    #[serde(rename = "Accept")]
    accept: Option<String>,
    verify_ssl: Option<Flag>,
    ssl_cert_path: Option<String>,
    safety: Option<Flag>,
    backup_dir: Option<PathBuf>,
    timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Create a configuration with defaults for everything but host and token
    #[must_use]
    pub fn new(host: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            token: token.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            tls: TlsVerification::Off,
            safety: true,
            backup_dir: PathBuf::from(DEFAULT_BACKUP_DIR),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Load the configuration file at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            NhError::Config(format!("cannot read {}: {e}", path.display()))
        })?;

        if path.extension().is_some_and(|ext| ext == "toml") {
            Self::from_toml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }

    /// Parse a JSON configuration document
    pub fn from_json_str(content: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(content)
            .map_err(|e| NhError::Config(format!("failed to decode JSON configuration: {e}")))?;
        Self::from_raw(raw)
    }

    /// Parse a TOML configuration document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)
            .map_err(|e| NhError::Config(format!("failed to decode TOML configuration: {e}")))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self> {
        let host = required(raw.host, "ip_QRadar")?;
        let token = required(raw.auth, "auth")?;

        let mut config = Self::new(host, token);
        if let Some(version) = raw.version {
            config.api_version = version;
        }
        if let Some(accept) = raw.accept {
            config.accept = accept;
        }
        config.tls = tls_policy(raw.verify_ssl.as_ref(), raw.ssl_cert_path.as_deref());
        config.safety = raw.safety.as_ref().map_or(true, safety_enabled);
        if let Some(dir) = raw.backup_dir {
            config.backup_dir = dir;
        }
        if let Some(secs) = raw.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

fn required(value: Option<String>, key: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(NhError::Config(format!("missing required key '{key}'"))),
    }
}

/// Any value other than `off` (case-insensitive) or `false` keeps the switch on.
fn safety_enabled(flag: &Flag) -> bool {
    match flag {
        Flag::Bool(b) => *b,
        Flag::Text(s) => !s.trim().eq_ignore_ascii_case("off"),
    }
}

/// Custom-CA verification needs both `verify_ssl` true and a usable
/// `ssl_cert_path`; everything else turns verification off.
fn tls_policy(verify: Option<&Flag>, cert_path: Option<&str>) -> TlsVerification {
    let wants_verify = match verify {
        Some(Flag::Bool(b)) => *b,
        Some(Flag::Text(s)) => s.trim().eq_ignore_ascii_case("true"),
        None => false,
    };
    let cert_path = cert_path
        .map(str::trim)
        .filter(|p| !p.is_empty() && *p != "None");

    match (wants_verify, cert_path) {
        (true, Some(path)) => TlsVerification::CustomCa(PathBuf::from(path)),
        (true, None) => {
            warn!("verify_ssl is set but ssl_cert_path is missing, TLS verification is off");
            TlsVerification::Off
        }
        (false, _) => TlsVerification::Off,
    }
}
