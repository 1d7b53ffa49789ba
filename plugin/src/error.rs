use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by plugin handlers.
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("failed to read dialog file {path}: {source}")]
    DialogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dialog file {path} contains no usable lines")]
    DialogEmpty { path: PathBuf },

    #[error("message bus error: {0}")]
    Bus(#[from] tokio_tungstenite::tungstenite::Error),
}
