use levelprint_store::StoreError;

use crate::diagnostics::Diagnostic;

/// Errors from register/detect operations.
#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    /// The level id is already registered. The store is left unchanged.
    #[error("level id {0} already exists")]
    DuplicateId(u32),

    /// The level id is not in the store.
    #[error("level id {0} not found")]
    UnknownId(u32),

    /// Strict policy rejected a degenerate fingerprint.
    #[error("degenerate input: {}", join(.0))]
    Degenerate(Vec<Diagnostic>),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Store operation failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

fn join(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenience alias for detector results.
pub type DetectResult<T> = Result<T, DetectError>;
