//! Register and detect near-duplicate levels.
//!
//! The [`Detector`] ties the pipeline together: it fingerprints a level's
//! classified points, checks the result for signs of bad input, and either
//! adds it to the store or ranks it against everything already stored.
//!
//! # Key Types
//!
//! - [`Detector`] -- register/detect façade over any [`StoreBackend`]
//! - [`Detection`] -- ranked matches plus the query's diagnostics
//! - [`DetectorConfig`] -- store path, default threshold, degenerate-input policy
//! - [`Diagnostic`] -- non-fatal findings about a fingerprint's input
//! - [`DetectError`] -- duplicate ids, strict-mode rejections, store failures
//!
//! [`StoreBackend`]: levelprint_store::StoreBackend

pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod error;

pub use config::{DegeneratePolicy, DetectorConfig};
pub use detector::{Detection, Detector};
pub use diagnostics::{diagnose, Diagnostic};
pub use error::{DetectError, DetectResult};
