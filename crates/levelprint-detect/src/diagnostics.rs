use std::fmt;

use levelprint_types::{ClassifiedPoint, Fingerprint};
use serde::Serialize;

/// A non-fatal finding about the input of a fingerprint.
///
/// Both usually mean the level parser produced nothing useful.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Fewer than two points, so no pair distances exist.
    TooFewPoints { count: usize },
    /// Enough points, but every histogram bin is zero.
    EmptyFingerprint { points: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPoints { count } => {
                write!(f, "only {count} objects; fingerprint may be empty due to parsing issues")
            }
            Self::EmptyFingerprint { points } => write!(
                f,
                "fingerprint of {points} objects has no nonzero bins; check object extraction"
            ),
        }
    }
}

/// Inspect a point set and its fingerprint.
///
/// The empty-fingerprint check only runs when at least two points exist;
/// with fewer, an empty fingerprint is already explained.
pub fn diagnose(points: &[ClassifiedPoint], fingerprint: &Fingerprint) -> Vec<Diagnostic> {
    if points.len() < 2 {
        return vec![Diagnostic::TooFewPoints {
            count: points.len(),
        }];
    }
    if fingerprint.nonzero_bins() == 0 {
        return vec![Diagnostic::EmptyFingerprint {
            points: points.len(),
        }];
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use levelprint_types::Category;

    fn p(category: Category, x: f64) -> ClassifiedPoint {
        ClassifiedPoint::new(category, x, 0.0)
    }

    #[test]
    fn too_few_points() {
        assert_eq!(
            diagnose(&[], &Fingerprint::zeroed()),
            vec![Diagnostic::TooFewPoints { count: 0 }]
        );
        assert_eq!(
            diagnose(&[p(Category::Solid, 1.0)], &Fingerprint::zeroed()),
            vec![Diagnostic::TooFewPoints { count: 1 }]
        );
    }

    #[test]
    fn empty_fingerprint_with_enough_points() {
        let points = [p(Category::Solid, 0.0), p(Category::Hazard, 5.0)];
        assert_eq!(
            diagnose(&points, &Fingerprint::zeroed()),
            vec![Diagnostic::EmptyFingerprint { points: 2 }]
        );
    }

    #[test]
    fn healthy_input_has_no_diagnostics() {
        let points = [p(Category::Solid, 0.0), p(Category::Solid, 5.0)];
        let mut fp = Fingerprint::zeroed();
        fp.increment(Category::Solid, 127);
        assert!(diagnose(&points, &fp).is_empty());
    }
}
