//! Fingerprint storage for levelprint.
//!
//! A store maps caller-supplied level ids to fingerprints. On disk it is one
//! flat file of fixed-width records, repeated until end of file:
//!
//! ```text
//! [4 bytes: level id (big-endian u32)]
//! [1024 bytes: fingerprint (512 little-endian u16 counters)]
//! ```
//!
//! # Storage Backends
//!
//! All backends implement the [`StoreBackend`] trait:
//!
//! - [`FileStore`] -- the single backing file, replaced atomically on save
//! - [`InMemoryStore`] -- lock-guarded map for tests and embedding
//!
//! # Design Rules
//!
//! 1. Every operation loads the whole store; every write saves the whole store.
//! 2. A missing file is an empty store. A file that is not a whole number of
//!    records is corrupt and fails the load.
//! 3. Saves go to a temporary file in the same directory, then rename over
//!    the target.
//! 4. [`StoreBackend::update`] is the one place a load-mutate-save cycle
//!    happens. There is no cross-process locking: concurrent writers against
//!    one file can lose updates.

pub mod codec;
pub mod error;
pub mod file;
pub mod memory;
pub mod store;
pub mod traits;

pub use codec::{decode_store, encode_store, ID_SIZE, RECORD_SIZE};
pub use error::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::InMemoryStore;
pub use store::Store;
pub use traits::StoreBackend;
