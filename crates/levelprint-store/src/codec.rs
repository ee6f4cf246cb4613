use levelprint_types::{Fingerprint, FINGERPRINT_SIZE};

use crate::error::{StoreError, StoreResult};
use crate::store::Store;

/// Width of the big-endian level id prefix.
pub const ID_SIZE: usize = 4;

/// Width of one on-disk record.
pub const RECORD_SIZE: usize = ID_SIZE + FINGERPRINT_SIZE;

/// Serialize every record, ascending by id.
pub fn encode_store(store: &Store) -> Vec<u8> {
    let mut buf = Vec::with_capacity(store.len() * RECORD_SIZE);
    for id in store.ids() {
        if let Some(fp) = store.get(id) {
            buf.extend_from_slice(&id.to_be_bytes());
            buf.extend_from_slice(&fp.to_bytes());
        }
    }
    buf
}

/// Parse a whole store file.
///
/// The input must be an exact multiple of [`RECORD_SIZE`]; a trailing
/// partial record fails with [`StoreError::CorruptStore`] instead of being
/// dropped. Repeated ids fail with [`StoreError::DuplicateRecord`].
pub fn decode_store(data: &[u8]) -> StoreResult<Store> {
    let trailing = data.len() % RECORD_SIZE;
    if trailing != 0 {
        return Err(StoreError::CorruptStore {
            len: data.len(),
            record_size: RECORD_SIZE,
            trailing,
        });
    }

    let mut store = Store::new();
    for (n, record) in data.chunks_exact(RECORD_SIZE).enumerate() {
        let (id_bytes, fp_bytes) = record.split_at(ID_SIZE);
        let id = u32::from_be_bytes([id_bytes[0], id_bytes[1], id_bytes[2], id_bytes[3]]);
        let fp = Fingerprint::from_bytes(fp_bytes)?;
        if store.insert(id, fp).is_some() {
            return Err(StoreError::DuplicateRecord {
                id,
                offset: n * RECORD_SIZE,
            });
        }
    }
    Ok(store)
}
