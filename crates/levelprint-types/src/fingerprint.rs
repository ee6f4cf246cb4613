use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::category::Category;
use crate::error::TypeError;

/// Number of object categories, one fingerprint segment each.
pub const TYPE_COUNT: usize = Category::ALL.len();

/// Histogram bins per category segment.
pub const BINS: usize = 128;

/// Width of one counter on disk.
pub const BYTES_PER_BIN: usize = 2;

/// Number of `u16` counters in a fingerprint.
pub const FINGERPRINT_SLOTS: usize = TYPE_COUNT * BINS;

/// Encoded size of a fingerprint in bytes.
pub const FINGERPRINT_SIZE: usize = FINGERPRINT_SLOTS * BYTES_PER_BIN;

/// Fixed-size histogram signature of a level's object layout.
///
/// Holds `TYPE_COUNT × BINS` unsigned 16-bit counters laid out
/// category-major (solid, hazard, other, none). The byte form is exactly
/// [`FINGERPRINT_SIZE`] bytes of little-endian counters.
///
/// Counters wrap on overflow. A bin receiving more than 65535 point pairs is
/// an accepted approximation.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint([u16; FINGERPRINT_SLOTS]);

impl Fingerprint {
    /// A fingerprint with every counter at zero.
    pub const fn zeroed() -> Self {
        Self([0u16; FINGERPRINT_SLOTS])
    }

    /// Build from counters in category-major order.
    pub fn from_counters(counters: [u16; FINGERPRINT_SLOTS]) -> Self {
        Self(counters)
    }

    /// Decode from exactly [`FINGERPRINT_SIZE`] little-endian bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TypeError> {
        if bytes.len() != FINGERPRINT_SIZE {
            return Err(TypeError::InvalidLength {
                expected: FINGERPRINT_SIZE,
                actual: bytes.len(),
            });
        }
        let mut counters = [0u16; FINGERPRINT_SLOTS];
        for (slot, chunk) in counters.iter_mut().zip(bytes.chunks_exact(BYTES_PER_BIN)) {
            *slot = u16::from_le_bytes([chunk[0], chunk[1]]);
        }
        Ok(Self(counters))
    }

    /// Encode as [`FINGERPRINT_SIZE`] little-endian bytes.
    pub fn to_bytes(&self) -> [u8; FINGERPRINT_SIZE] {
        let mut out = [0u8; FINGERPRINT_SIZE];
        for (chunk, value) in out.chunks_exact_mut(BYTES_PER_BIN).zip(self.0.iter()) {
            chunk.copy_from_slice(&value.to_le_bytes());
        }
        out
    }

    /// Hex encoding of the byte form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Parse the hex encoding produced by [`Fingerprint::to_hex`].
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// All counters in category-major order.
    pub fn counters(&self) -> &[u16; FINGERPRINT_SLOTS] {
        &self.0
    }

    /// The `BINS` counters belonging to one category.
    pub fn segment(&self, category: Category) -> &[u16] {
        let base = category.index() * BINS;
        &self.0[base..base + BINS]
    }

    /// Add one to a bin, wrapping on overflow.
    ///
    /// # Panics
    ///
    /// Panics if `bin >= BINS`.
    pub fn increment(&mut self, category: Category, bin: usize) {
        assert!(bin < BINS, "bin {bin} out of range");
        let slot = &mut self.0[category.index() * BINS + bin];
        *slot = slot.wrapping_add(1);
    }

    /// Number of bins with a nonzero count.
    pub fn nonzero_bins(&self) -> usize {
        self.0.iter().filter(|&&v| v != 0).count()
    }

    /// Sum of all counters.
    pub fn total(&self) -> u64 {
        self.0.iter().map(|&v| u64::from(v)).sum()
    }

    /// Sum of the counters of one category.
    pub fn segment_total(&self, category: Category) -> u64 {
        self.segment(category).iter().map(|&v| u64::from(v)).sum()
    }

    /// Returns `true` if every counter is zero.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&v| v == 0)
    }
}

impl Default for Fingerprint {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fingerprint")
            .field("nonzero_bins", &self.nonzero_bins())
            .field("total", &self.total())
            .finish()
    }
}

impl Serialize for Fingerprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Fingerprint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn layout_constants() {
        assert_eq!(TYPE_COUNT, 4);
        assert_eq!(FINGERPRINT_SLOTS, 512);
        assert_eq!(FINGERPRINT_SIZE, 1024);
    }

    #[test]
    fn byte_layout_is_little_endian_category_major() {
        let mut fp = Fingerprint::zeroed();
        fp.increment(Category::Hazard, 3);
        fp.increment(Category::Hazard, 3);
        let bytes = fp.to_bytes();
        let offset = (BINS + 3) * BYTES_PER_BIN;
        assert_eq!(&bytes[offset..offset + 2], &[2, 0]);
        assert_eq!(bytes.iter().map(|&b| b as u32).sum::<u32>(), 2);
    }

    #[test]
    fn from_bytes_rejects_wrong_length() {
        let err = Fingerprint::from_bytes(&[0u8; 1023]).unwrap_err();
        assert_eq!(
            err,
            TypeError::InvalidLength {
                expected: 1024,
                actual: 1023
            }
        );
        assert!(Fingerprint::from_bytes(&[0u8; 1025]).is_err());
    }

    #[test]
    fn increment_wraps_silently() {
        let mut counters = [0u16; FINGERPRINT_SLOTS];
        counters[0] = u16::MAX;
        let mut fp = Fingerprint::from_counters(counters);
        fp.increment(Category::Solid, 0);
        assert_eq!(fp.counters()[0], 0);
    }

    #[test]
    fn segment_views() {
        let mut fp = Fingerprint::zeroed();
        fp.increment(Category::None, BINS - 1);
        assert_eq!(fp.segment(Category::None)[BINS - 1], 1);
        assert_eq!(fp.segment_total(Category::None), 1);
        assert_eq!(fp.segment_total(Category::Solid), 0);
        assert_eq!(fp.nonzero_bins(), 1);
        assert!(!fp.is_empty());
        assert!(Fingerprint::default().is_empty());
    }

    #[test]
    fn serde_as_hex() {
        let mut fp = Fingerprint::zeroed();
        fp.increment(Category::Other, 10);
        let json = serde_json::to_string(&fp).unwrap();
        assert_eq!(json.len(), FINGERPRINT_SIZE * 2 + 2);
        let back: Fingerprint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fp);
    }

    #[test]
    fn from_hex_rejects_garbage() {
        assert!(matches!(
            Fingerprint::from_hex("zz"),
            Err(TypeError::InvalidHex(_))
        ));
        assert!(matches!(
            Fingerprint::from_hex("00ff"),
            Err(TypeError::InvalidLength { .. })
        ));
    }

    proptest! {
        #[test]
        fn bytes_preserve_counters(values in proptest::collection::vec(any::<u16>(), FINGERPRINT_SLOTS)) {
            let mut counters = [0u16; FINGERPRINT_SLOTS];
            counters.copy_from_slice(&values);
            let fp = Fingerprint::from_counters(counters);
            let bytes = fp.to_bytes();
            prop_assert_eq!(bytes.len(), FINGERPRINT_SIZE);
            prop_assert_eq!(Fingerprint::from_bytes(&bytes).unwrap(), fp);
        }
    }
}
