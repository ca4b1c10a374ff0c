//! Locating and loading the operating configuration.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use nh_client::{ClientConfig, DEFAULT_CONFIG_FILE};
use std::path::{Path, PathBuf};

/// Per-user configuration file, e.g. `~/.config/nhsuite/config.txt`.
pub fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("net", "zoldax", "nhsuite").map(|dirs| dirs.config_dir().join(DEFAULT_CONFIG_FILE))
}

/// Pick the configuration file.
///
/// An explicit path always wins. Otherwise `./config.txt` is used if present,
/// then the per-user file; when neither exists the local name is returned so
/// the error message points at it.
pub fn locate(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    if local.exists() {
        return local;
    }

    user_config_path()
        .filter(|path| path.exists())
        .unwrap_or(local)
}

/// Load the configuration, failing before any network call.
pub fn load(explicit: Option<&Path>) -> Result<ClientConfig> {
    let path = locate(explicit);
    ClientConfig::load(&path)
        .with_context(|| format!("cannot use configuration {}", path.display()))
}
