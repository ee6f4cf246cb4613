//! Error types for the level crate.

use std::path::PathBuf;

/// Errors that can occur while reading level input.
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    /// The input file could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON point file did not have the expected shape.
    #[error("invalid point file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for level results.
pub type LevelResult<T> = Result<T, LevelError>;
