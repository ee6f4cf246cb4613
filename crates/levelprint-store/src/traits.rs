use crate::error::{StoreError, StoreResult};
use crate::store::Store;

/// Whole-store persistence.
///
/// All implementations must satisfy these invariants:
/// - `load` returns the complete store or fails; it never returns a partial map.
/// - `save` replaces the complete store; there is no incremental append.
/// - All I/O errors are propagated, never silently ignored.
pub trait StoreBackend: Send + Sync {
    /// Load every record.
    ///
    /// A backend with nothing persisted yet returns an empty store.
    fn load(&self) -> StoreResult<Store>;

    /// Replace everything persisted with `store`.
    fn save(&self, store: &Store) -> StoreResult<()>;

    /// Run one load → mutate → save cycle.
    ///
    /// `f` sees the freshly loaded store. The store is saved only if `f`
    /// returns `Ok`; on `Err` nothing is written. Callers that share a
    /// backend across threads or processes wrap this call in their own lock.
    fn update<T, E, F>(&self, f: F) -> Result<T, E>
    where
        Self: Sized,
        F: FnOnce(&mut Store) -> Result<T, E>,
        E: From<StoreError>,
    {
        let mut store = self.load()?;
        let out = f(&mut store)?;
        self.save(&store)?;
        Ok(out)
    }
}
