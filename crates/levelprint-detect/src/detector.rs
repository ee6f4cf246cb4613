//! Register/detect façade over a fingerprint store.

use levelprint_signature::{build_fingerprint, normalize, rank_matches};
use levelprint_store::{FileStore, Store, StoreBackend};
use levelprint_types::{ClassifiedPoint, Fingerprint, Match};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{validate_threshold, DegeneratePolicy, DetectorConfig};
use crate::diagnostics::{diagnose, Diagnostic};
use crate::error::{DetectError, DetectResult};

/// Outcome of a detection: ranked matches plus any diagnostics raised
/// against the query.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Detection {
    pub matches: Vec<Match>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Fingerprints levels, registers them, and finds near-duplicates.
///
/// Every store access goes through [`StoreBackend::update`] or
/// [`StoreBackend::load`], so callers needing cross-process exclusion only
/// have to wrap the detector's calls.
pub struct Detector<S: StoreBackend> {
    backend: S,
    config: DetectorConfig,
}

impl Detector<FileStore> {
    /// A detector over the file named by `config.store_path`.
    pub fn open(config: DetectorConfig) -> DetectResult<Self> {
        let backend = FileStore::new(config.store_path.clone());
        Self::new(backend, config)
    }
}

impl<S: StoreBackend> Detector<S> {
    /// Create a detector over `backend` after validating `config`.
    pub fn new(backend: S, config: DetectorConfig) -> DetectResult<Self> {
        config.validate()?;
        Ok(Self { backend, config })
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Normalize and fingerprint a point set without touching the store.
    pub fn fingerprint(&self, points: &[ClassifiedPoint]) -> (Fingerprint, Vec<Diagnostic>) {
        let fp = build_fingerprint(&normalize(points));
        let diagnostics = diagnose(points, &fp);
        debug!(
            points = points.len(),
            nonzero_bins = fp.nonzero_bins(),
            "fingerprint built"
        );
        (fp, diagnostics)
    }

    /// Fingerprint a level and add it to the store.
    ///
    /// Fails with [`DetectError::DuplicateId`] if `level_id` is already
    /// stored. Diagnostics are returned (and logged) but only abort the
    /// registration under [`DegeneratePolicy::Strict`]. The store is written
    /// only on success.
    pub fn register(
        &self,
        level_id: u32,
        points: &[ClassifiedPoint],
    ) -> DetectResult<Vec<Diagnostic>> {
        let (fp, diagnostics) = self.fingerprint(points);

        self.backend.update(|store| {
            if store.contains(level_id) {
                return Err(DetectError::DuplicateId(level_id));
            }
            self.apply_policy("register", &diagnostics)?;
            store.insert(level_id, fp);
            Ok(())
        })?;

        info!(level_id, points = points.len(), "level registered");
        Ok(diagnostics)
    }

    /// Rank stored levels against a point set at the configured threshold.
    pub fn detect(&self, points: &[ClassifiedPoint]) -> DetectResult<Detection> {
        self.detect_with_threshold(points, self.config.threshold)
    }

    /// Rank stored levels against a point set, best first.
    ///
    /// Under [`DegeneratePolicy::Lenient`] the query's diagnostics come back
    /// alongside the matches; under `Strict` they abort the call.
    pub fn detect_with_threshold(
        &self,
        points: &[ClassifiedPoint],
        threshold: f64,
    ) -> DetectResult<Detection> {
        validate_threshold(threshold)?;
        let (fp, diagnostics) = self.fingerprint(points);
        self.apply_policy("detect", &diagnostics)?;

        let store = self.backend.load()?;
        if store.is_empty() {
            debug!("store is empty; nothing to match");
            return Ok(Detection {
                matches: Vec::new(),
                diagnostics,
            });
        }

        let matches = rank_matches(&fp, store.iter(), threshold);
        debug!(
            candidates = store.len(),
            matches = matches.len(),
            threshold,
            "detection complete"
        );
        Ok(Detection {
            matches,
            diagnostics,
        })
    }

    /// Delete a registered level, returning its fingerprint.
    pub fn remove(&self, level_id: u32) -> DetectResult<Fingerprint> {
        let fp = self.backend.update(|store| {
            store
                .remove(level_id)
                .ok_or(DetectError::UnknownId(level_id))
        })?;
        info!(level_id, "level removed");
        Ok(fp)
    }

    /// Snapshot of every stored record.
    pub fn records(&self) -> DetectResult<Store> {
        Ok(self.backend.load()?)
    }

    fn apply_policy(&self, operation: &str, diagnostics: &[Diagnostic]) -> DetectResult<()> {
        if diagnostics.is_empty() {
            return Ok(());
        }
        match self.config.policy {
            DegeneratePolicy::Lenient => {
                for diagnostic in diagnostics {
                    warn!(operation, "{diagnostic}");
                }
                Ok(())
            }
            DegeneratePolicy::Strict => Err(DetectError::Degenerate(diagnostics.to_vec())),
        }
    }
}

impl<S: StoreBackend> std::fmt::Debug for Detector<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Detector")
            .field("threshold", &self.config.threshold)
            .field("policy", &self.config.policy)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use levelprint_store::{InMemoryStore, StoreError};
    use levelprint_types::Category;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn detector() -> Detector<InMemoryStore> {
        Detector::new(InMemoryStore::new(), DetectorConfig::default()).unwrap()
    }

    fn strict_detector() -> Detector<InMemoryStore> {
        let config = DetectorConfig {
            policy: DegeneratePolicy::Strict,
            ..Default::default()
        };
        Detector::new(InMemoryStore::new(), config).unwrap()
    }

    fn solid(x: f64, y: f64) -> ClassifiedPoint {
        ClassifiedPoint::new(Category::Solid, x, y)
    }

    /// 50 blocks rising along a straight slope.
    fn slope_level() -> Vec<ClassifiedPoint> {
        (0..50).map(|i| solid(i as f64 * 30.0, i as f64 * 15.0)).collect()
    }

    /// 50 blocks in steps of five.
    fn staircase_level() -> Vec<ClassifiedPoint> {
        (0..50)
            .map(|i| solid(i as f64 * 30.0, (i / 5) as f64 * 90.0))
            .collect()
    }

    /// Two tight 5x5 clusters far apart.
    fn twin_cluster_level() -> Vec<ClassifiedPoint> {
        (0..50)
            .map(|i| {
                let offset = if i < 25 { 0.0 } else { 900.0 };
                solid((i % 5) as f64 * 4.0 + offset, ((i / 5) % 5) as f64 * 4.0)
            })
            .collect()
    }

    fn register_three(d: &Detector<InMemoryStore>) {
        d.register(101, &slope_level()).unwrap();
        d.register(102, &staircase_level()).unwrap();
        d.register(103, &twin_cluster_level()).unwrap();
    }

    // -----------------------------------------------------------------------
    // Register
    // -----------------------------------------------------------------------

    #[test]
    fn register_stores_fingerprint() {
        let d = detector();
        let diagnostics = d.register(7, &slope_level()).unwrap();
        assert!(diagnostics.is_empty());

        let records = d.records().unwrap();
        assert_eq!(records.ids(), vec![7]);
        let (expected, _) = d.fingerprint(&slope_level());
        assert_eq!(records.get(7), Some(&expected));
    }

    #[test]
    fn duplicate_register_fails_and_leaves_store_unchanged() {
        let d = detector();
        d.register(101, &slope_level()).unwrap();
        let after_first = d.records().unwrap();

        let err = d.register(101, &staircase_level()).unwrap_err();
        assert!(matches!(err, DetectError::DuplicateId(101)));
        assert_eq!(d.records().unwrap(), after_first);
    }

    #[test]
    fn lenient_register_accepts_degenerate_input() {
        let d = detector();
        let diagnostics = d.register(1, &[solid(0.0, 0.0)]).unwrap();
        assert_eq!(diagnostics, vec![Diagnostic::TooFewPoints { count: 1 }]);
        assert!(d.records().unwrap().get(1).unwrap().is_empty());

        let one_each = [solid(0.0, 0.0), ClassifiedPoint::new(Category::Hazard, 9.0, 9.0)];
        let diagnostics = d.register(2, &one_each).unwrap();
        assert_eq!(diagnostics, vec![Diagnostic::EmptyFingerprint { points: 2 }]);
    }

    #[test]
    fn strict_register_rejects_degenerate_input() {
        let d = strict_detector();
        let err = d.register(1, &[]).unwrap_err();
        assert!(matches!(err, DetectError::Degenerate(ref v) if v.len() == 1));
        assert!(d.records().unwrap().is_empty());
    }

    #[test]
    fn strict_register_reports_duplicate_first() {
        let d = strict_detector();
        d.register(1, &slope_level()).unwrap();
        assert!(matches!(
            d.register(1, &[]),
            Err(DetectError::DuplicateId(1))
        ));
    }

    // -----------------------------------------------------------------------
    // Detect
    // -----------------------------------------------------------------------

    #[test]
    fn detect_on_empty_store_is_empty() {
        let d = detector();
        assert!(d.detect(&slope_level()).unwrap().matches.is_empty());
        assert!(d.detect(&[]).unwrap().matches.is_empty());
        assert!(d.detect_with_threshold(&slope_level(), 0.0).unwrap().matches.is_empty());
    }

    #[test]
    fn identical_level_ranks_first() {
        let d = detector();
        register_three(&d);

        let matches = d.detect(&slope_level()).unwrap().matches;
        assert!(!matches.is_empty());
        assert_eq!(matches[0].id, 101);
        assert!(matches[0].score >= 0.999);
        for m in &matches[1..] {
            assert!(m.score <= matches[0].score);
        }
    }

    #[test]
    fn translated_copy_still_matches() {
        let d = detector();
        register_three(&d);

        let moved: Vec<_> = slope_level()
            .iter()
            .map(|p| solid(p.x + 4_000.0, p.y - 120.0))
            .collect();
        let matches = d.detect(&moved).unwrap().matches;
        assert_eq!(matches[0].id, 101);
        assert!(matches[0].score >= 0.999);
    }

    #[test]
    fn jittered_copy_still_matches() {
        let d = detector();
        register_three(&d);

        let mut rng = StdRng::seed_from_u64(0x1e7e1);
        let jittered: Vec<_> = slope_level()
            .iter()
            .map(|p| solid(p.x + rng.gen_range(-1.0..=1.0), p.y + rng.gen_range(-1.0..=1.0)))
            .collect();

        let matches = d.detect(&jittered).unwrap().matches;
        assert!(!matches.is_empty());
        assert_eq!(matches[0].id, 101);
        assert!(matches[0].score >= 0.85);
    }

    #[test]
    fn random_cloud_matches_nothing() {
        let d = detector();
        register_three(&d);

        let mut rng = StdRng::seed_from_u64(42);
        let cloud: Vec<_> = (0..50)
            .map(|_| solid(rng.gen_range(0.0..1000.0), rng.gen_range(0.0..1000.0)))
            .collect();
        assert!(d.detect(&cloud).unwrap().matches.is_empty());
    }

    #[test]
    fn threshold_zero_returns_everything_sorted() {
        let d = detector();
        register_three(&d);

        let matches = d.detect_with_threshold(&staircase_level(), 0.0).unwrap().matches;
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].id, 102);
        assert!(matches.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn invalid_threshold_is_rejected() {
        let d = detector();
        assert!(matches!(
            d.detect_with_threshold(&slope_level(), 2.0),
            Err(DetectError::Config(_))
        ));
    }

    #[test]
    fn lenient_detect_returns_diagnostics() {
        let d = detector();
        register_three(&d);

        let detection = d.detect(&[solid(1.0, 1.0)]).unwrap();
        assert_eq!(
            detection.diagnostics,
            vec![Diagnostic::TooFewPoints { count: 1 }]
        );

        let empty_store = detector();
        let detection = empty_store.detect(&[solid(1.0, 1.0)]).unwrap();
        assert!(detection.matches.is_empty());
        assert_eq!(
            detection.diagnostics,
            vec![Diagnostic::TooFewPoints { count: 1 }]
        );

        assert!(d.detect(&slope_level()).unwrap().diagnostics.is_empty());
    }

    #[test]
    fn strict_detect_rejects_degenerate_input() {
        let d = strict_detector();
        assert!(matches!(
            d.detect(&[solid(1.0, 1.0)]),
            Err(DetectError::Degenerate(_))
        ));
    }

    #[test]
    fn empty_query_matches_only_empty_fingerprints() {
        let d = detector();
        d.register(1, &[]).unwrap();
        d.register(2, &slope_level()).unwrap();
        let detection = d.detect(&[]).unwrap();
        assert_eq!(detection.matches, vec![Match::new(1, 1.0)]);
        assert_eq!(detection.diagnostics.len(), 1);
    }

    // -----------------------------------------------------------------------
    // Remove / config / file backend
    // -----------------------------------------------------------------------

    #[test]
    fn remove_deletes_record() {
        let d = detector();
        register_three(&d);
        d.remove(102).unwrap();
        assert_eq!(d.records().unwrap().ids(), vec![101, 103]);
        assert!(matches!(d.remove(102), Err(DetectError::UnknownId(102))));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = DetectorConfig {
            threshold: -1.0,
            ..Default::default()
        };
        assert!(Detector::new(InMemoryStore::new(), config).is_err());
    }

    #[test]
    fn file_backed_register_and_detect() {
        let dir = tempfile::tempdir().unwrap();
        let config = DetectorConfig {
            store_path: dir.path().join("fingerprints.bin"),
            ..Default::default()
        };

        let d = Detector::open(config.clone()).unwrap();
        d.register(101, &slope_level()).unwrap();
        d.register(102, &staircase_level()).unwrap();

        // A fresh detector sees what the first one persisted.
        let reopened = Detector::open(config).unwrap();
        let matches = reopened.detect(&slope_level()).unwrap().matches;
        assert_eq!(matches[0].id, 101);
        assert!(matches!(
            reopened.register(102, &slope_level()),
            Err(DetectError::DuplicateId(102))
        ));
    }

    #[test]
    fn corrupt_store_file_fails_detect() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fingerprints.bin");
        let d = Detector::open(DetectorConfig {
            store_path: path.clone(),
            ..Default::default()
        })
        .unwrap();
        d.register(101, &slope_level()).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        std::fs::write(&path, &bytes[..bytes.len() - 10]).unwrap();

        assert!(matches!(
            d.detect(&slope_level()),
            Err(DetectError::Store(StoreError::CorruptStore { .. }))
        ));
        assert!(matches!(
            d.register(102, &staircase_level()),
            Err(DetectError::Store(StoreError::CorruptStore { .. }))
        ));
    }
}
