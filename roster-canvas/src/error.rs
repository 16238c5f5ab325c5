//! Canvas layer error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid theme file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid theme JSON: {0}")]
    Json(#[source] serde_json::Error),

    #[error("invalid color {value:?} for theme field `{field}`")]
    InvalidColor { field: &'static str, value: String },

    #[error("no platform config directory available")]
    NoConfigDir,
}
