//! Startpage configuration.
//!
//! Loaded from a TOML file when present; every field has a default so a
//! missing or partial file is never an error.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A link baked into the page by configuration. Default links are rendered
/// before the user's custom links and are never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultLink {
    pub title: String,
    pub url: String,
}

/// Top-level startpage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StartpageConfig {
    /// Window / terminal title.
    pub window_title: String,
    /// Initially selected search engine key.
    pub default_engine: String,
    /// Override for the storage file location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<PathBuf>,
    /// Links shown before the user's custom links.
    pub default_links: Vec<DefaultLink>,
}

impl Default for StartpageConfig {
    fn default() -> Self {
        Self {
            window_title: "startpage".to_string(),
            default_engine: "google".to_string(),
            storage_path: None,
            default_links: vec![
                DefaultLink {
                    title: "GitHub".to_string(),
                    url: "https://github.com".to_string(),
                },
                DefaultLink {
                    title: "Wikipedia".to_string(),
                    url: "https://www.wikipedia.org".to_string(),
                },
                DefaultLink {
                    title: "YouTube".to_string(),
                    url: "https://www.youtube.com".to_string(),
                },
                DefaultLink {
                    title: "Mail".to_string(),
                    url: "https://mail.google.com".to_string(),
                },
            ],
        }
    }
}

impl StartpageConfig {
    /// Parse a config from TOML text. Missing fields fall back to defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
