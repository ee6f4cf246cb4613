use std::fmt;
use std::path::{Path, PathBuf};

use levelprint_signature::DEFAULT_THRESHOLD;
use serde::{Deserialize, Serialize};

use crate::error::{DetectError, DetectResult};

/// What to do when a fingerprint's input looks degenerate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegeneratePolicy {
    /// Log a warning and carry on.
    #[default]
    Lenient,
    /// Fail the operation before the store is touched.
    Strict,
}

impl fmt::Display for DegeneratePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => write!(f, "lenient"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

/// Configuration for a [`Detector`](crate::Detector).
///
/// Every field is optional in TOML form; missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Backing file of the fingerprint store.
    pub store_path: PathBuf,
    /// Minimum similarity for a stored level to be reported.
    pub threshold: f64,
    /// Handling of degenerate input.
    pub policy: DegeneratePolicy,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("fingerprints.bin"),
            threshold: DEFAULT_THRESHOLD,
            policy: DegeneratePolicy::default(),
        }
    }
}

impl DetectorConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> DetectResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| DetectError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: &Path) -> DetectResult<Self> {
        let body = std::fs::read_to_string(path)
            .map_err(|e| DetectError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&body)
    }

    /// Check that the threshold is a usable similarity score.
    pub fn validate(&self) -> DetectResult<()> {
        validate_threshold(self.threshold)
    }
}

pub(crate) fn validate_threshold(threshold: f64) -> DetectResult<()> {
    if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
        return Err(DetectError::Config(format!(
            "threshold must be within [0, 1], got {threshold}"
        )));
    }
    Ok(())
}
