use std::sync::RwLock;

use crate::error::StoreResult;
use crate::store::Store;
use crate::traits::StoreBackend;

/// In-memory store backend.
///
/// Intended for tests and embedding. The store is held behind a `RwLock`
/// and cloned on load/save, matching the whole-store semantics of
/// [`FileStore`](crate::FileStore).
pub struct InMemoryStore {
    store: RwLock<Store>,
}

impl InMemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::with_store(Store::new())
    }

    /// Start from existing records.
    pub fn with_store(store: Store) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.store.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no records are held.
    pub fn is_empty(&self) -> bool {
        self.store.read().expect("lock poisoned").is_empty()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreBackend for InMemoryStore {
    fn load(&self) -> StoreResult<Store> {
        Ok(self.store.read().expect("lock poisoned").clone())
    }

    fn save(&self, store: &Store) -> StoreResult<()> {
        *self.store.write().expect("lock poisoned") = store.clone();
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStore")
            .field("record_count", &self.len())
            .finish()
    }
}
