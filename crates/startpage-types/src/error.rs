//! Error types for the startpage shell.

use std::io;

/// Errors produced by the startpage framework.
#[derive(Debug, thiserror::Error)]
pub enum StartpageError {
    #[error("display error: {0}")]
    Display(String),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("navigation error: {0}")]
    Nav(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, StartpageError>;
