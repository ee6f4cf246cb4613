//! Canonical, seeded sampling of a category bucket.
//!
//! Pairwise distances are quadratic in the bucket size, so large buckets are
//! thinned before histogramming. The procedure is fixed so fingerprints are
//! reproducible bit for bit:
//!
//! 1. seed = `(category_index + 1) * (len + 1)` in wrapping `u32` arithmetic
//! 2. Fisher-Yates shuffle of `0..len` driven by [`XorShift32`]
//! 3. keep every `step`-th shuffled index, `step = max(1, len / SAMPLES)`

use crate::builder::SAMPLES;

/// Marsaglia xorshift32 generator (shifts 13, 17, 5).
#[derive(Clone, Debug)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut s = self.state;
        s ^= s << 13;
        s ^= s >> 17;
        s ^= s << 5;
        self.state = s;
        s
    }

    /// Next draw scaled into `[0, 1]` (both ends inclusive).
    pub fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }
}

/// Seed for a bucket of `len` points in segment `category_index`.
pub fn bucket_seed(category_index: usize, len: usize) -> u32 {
    (category_index as u32)
        .wrapping_add(1)
        .wrapping_mul((len as u32).wrapping_add(1))
}

/// Stride between kept positions of the shuffled index sequence.
pub fn sample_step(len: usize) -> usize {
    (len / SAMPLES).max(1)
}

/// Indices into a bucket of `len` points that take part in histogramming.
pub fn sample_indices(category_index: usize, len: usize) -> Vec<usize> {
    let mut rng = XorShift32::new(bucket_seed(category_index, len));
    let mut indices: Vec<usize> = (0..len).collect();
    for i in (1..len).rev() {
        let j = ((rng.next_unit() * (i + 1) as f64) as usize).min(i);
        indices.swap(i, j);
    }

    let step = sample_step(len);
    indices
        .into_iter()
        .enumerate()
        .filter(|(pos, _)| pos % step == 0)
        .map(|(_, idx)| idx)
        .collect()
}
