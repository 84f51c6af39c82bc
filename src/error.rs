// File: src/error.rs
//! Errors of the glue around the engine. The analysis operations
//! themselves are total and never produce these.
use std::path::PathBuf;

pub type Result<T, E = TajweedError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum TajweedError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Bincode(#[from] bincode::Error),

    #[error("Could not move archive into place at '{path}': {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}
