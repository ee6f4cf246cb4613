use std::collections::HashMap;

use levelprint_types::Fingerprint;

/// In-memory mapping from level id to fingerprint.
///
/// Unordered in memory; [`encode_store`](crate::encode_store) writes records
/// in ascending id order. Inserting does not check for duplicates: the
/// register path does that before touching the map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Store {
    records: HashMap<u32, Fingerprint>,
}

impl Store {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.records.contains_key(&id)
    }

    pub fn get(&self, id: u32) -> Option<&Fingerprint> {
        self.records.get(&id)
    }

    /// Insert or replace a record, returning the previous fingerprint.
    pub fn insert(&mut self, id: u32, fingerprint: Fingerprint) -> Option<Fingerprint> {
        self.records.insert(id, fingerprint)
    }

    pub fn remove(&mut self, id: u32) -> Option<Fingerprint> {
        self.records.remove(&id)
    }

    /// All level ids, sorted ascending.
    pub fn ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.records.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Iterate records in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Fingerprint)> {
        self.records.iter().map(|(&id, fp)| (id, fp))
    }
}

impl FromIterator<(u32, Fingerprint)> for Store {
    fn from_iter<I: IntoIterator<Item = (u32, Fingerprint)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
