use levelprint_types::TypeError;

/// Errors from fingerprint store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The file length is not a whole number of records.
    #[error("corrupt store: {len} bytes is not a multiple of the {record_size}-byte record size ({trailing} trailing bytes)")]
    CorruptStore {
        len: usize,
        record_size: usize,
        trailing: usize,
    },

    /// The same level id appears in two records.
    #[error("corrupt store: duplicate record for level {id} at offset {offset}")]
    DuplicateRecord { id: u32, offset: usize },

    /// A fingerprint could not be decoded.
    #[error("invalid fingerprint: {0}")]
    Fingerprint(#[from] TypeError),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
