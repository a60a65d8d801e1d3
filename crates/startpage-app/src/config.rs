//! Config and store file locations.
//!
//! Config lives under the platform config directory, the store under the
//! platform data directory. A missing or invalid config file falls back to
//! defaults; the page must come up regardless.

use std::fs;
use std::path::PathBuf;

use log::{info, warn};
use startpage_types::config::StartpageConfig;

/// Location of the user config file, if a config directory exists.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("startpage").join("config.toml"))
}

/// Load the user config, falling back to defaults when absent or invalid.
pub fn load_config() -> StartpageConfig {
    let Some(path) = config_path() else {
        return StartpageConfig::default();
    };
    match fs::read_to_string(&path) {
        Ok(raw) => match StartpageConfig::from_toml_str(&raw) {
            Ok(cfg) => {
                info!("loaded config from {}", path.display());
                cfg
            }
            Err(e) => {
                warn!("invalid config {}: {e}; using defaults", path.display());
                StartpageConfig::default()
            }
        },
        Err(_) => StartpageConfig::default(),
    }
}

/// Where the key-value store lives: the configured override, or the
/// platform data directory.
pub fn store_path(config: &StartpageConfig) -> PathBuf {
    if let Some(ref path) = config.storage_path {
        return path.clone();
    }
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("startpage")
        .join("store.json")
}
