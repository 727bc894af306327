//! Error types for the CLI

use std::path::PathBuf;

/// CLI Result type
pub type Result<T> = std::result::Result<T, Error>;

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    ParseInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Addon(#[from] addons_common::Error),
}

impl Error {
    pub fn read_input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::ReadInput {
            path: path.into(),
            source,
        }
    }

    pub fn parse_input(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Error::ParseInput {
            path: path.into(),
            source,
        }
    }
}
