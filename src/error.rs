//! Error types

use std::path::PathBuf;

/// Invalid simulation input. Always fatal to the current frame.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    #[error("invalid simulation input: negative delta ({0}s)")]
    NegativeDelta(f32),
    #[error("invalid simulation input: non-finite delta ({0})")]
    NonFiniteDelta(f32),
    #[error("invalid simulation input: unknown action '{0}'")]
    UnknownAction(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to access settings file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
