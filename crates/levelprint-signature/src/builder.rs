use levelprint_types::{Category, ClassifiedPoint, Fingerprint, BINS, TYPE_COUNT};
use tracing::debug;

use crate::sampler::sample_indices;

/// Target number of sampled points per category bucket.
pub const SAMPLES: usize = 4096;

/// Build the distance-distribution fingerprint of a point set.
///
/// Points are bucketed by category. Each bucket with at least two points
/// contributes a histogram of its pairwise distances, scaled by the largest
/// sampled distance of that bucket, into its own `BINS`-wide segment. Buckets
/// with fewer than two points leave their segment at zero.
///
/// Callers normally pass the output of [`normalize`](crate::normalize);
/// distances are translation invariant either way.
pub fn build_fingerprint(points: &[ClassifiedPoint]) -> Fingerprint {
    let mut buckets: [Vec<(f64, f64)>; TYPE_COUNT] = Default::default();
    for p in points {
        buckets[p.category.index()].push((p.x, p.y));
    }

    let mut fp = Fingerprint::zeroed();
    for category in Category::ALL {
        let bucket = &buckets[category.index()];
        if bucket.len() < 2 {
            continue;
        }

        let sampled: Vec<(f64, f64)> = sample_indices(category.index(), bucket.len())
            .into_iter()
            .map(|i| bucket[i])
            .collect();

        let mut max_dist_sq = 0.0f64;
        for_each_pair(&sampled, |d| {
            if d > max_dist_sq {
                max_dist_sq = d;
            }
        });
        if max_dist_sq == 0.0 {
            max_dist_sq = 1.0;
        }

        for_each_pair(&sampled, |d| {
            let norm = (d / max_dist_sq).sqrt();
            let bin = ((norm * BINS as f64).floor() as usize).min(BINS - 1);
            fp.increment(category, bin);
        });

        debug!(
            category = %category,
            points = bucket.len(),
            sampled = sampled.len(),
            "histogrammed bucket"
        );
    }
    fp
}

/// Visit the squared distance of every unordered pair.
fn for_each_pair(points: &[(f64, f64)], mut f: impl FnMut(f64)) {
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            let dx = a.0 - b.0;
            let dy = a.1 - b.1;
            f(dx * dx + dy * dy);
        }
    }
}
