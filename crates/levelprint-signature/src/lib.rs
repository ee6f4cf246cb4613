//! Fingerprint construction and matching for levelprint.
//!
//! A fingerprint summarizes how the objects of each category are spread out
//! relative to one another. For every category bucket the builder takes the
//! pairwise distances between (a bounded sample of) its points, scales them
//! by the bucket's largest distance, and counts them into a fixed histogram.
//!
//! # Pipeline
//!
//! 1. [`normalize`] -- subtract the centroid (translation invariance)
//! 2. [`build_fingerprint`] -- bucket, sample, histogram (scale invariance)
//! 3. [`similarity`] / [`rank_matches`] -- cosine similarity against candidates
//!
//! Sampling is seeded and deterministic (see [`sampler`]), so the same input
//! always produces the same fingerprint.

pub mod builder;
pub mod normalize;
pub mod sampler;
pub mod similarity;

pub use builder::{build_fingerprint, SAMPLES};
pub use normalize::{centroid, normalize};
pub use similarity::{rank_matches, similarity, DEFAULT_THRESHOLD};
