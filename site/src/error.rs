//! Error type for content loading and document checks.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by [`crate::content`] and [`crate::audit`].
///
/// Rendering itself cannot fail.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML content: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to serialize content as TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("invalid JSON content: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported content format for {} (expected .toml or .json)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("invalid content: {0}")]
    InvalidContent(String),

    #[error("anchor #{id} resolves to {count} elements (expected exactly 1)")]
    UnresolvedAnchor { id: &'static str, count: usize },
}

pub type Result<T> = std::result::Result<T, SiteError>;
