use std::cmp::Ordering;

use levelprint_types::{Fingerprint, Match};

/// Default score a stored level must reach to count as a match.
pub const DEFAULT_THRESHOLD: f64 = 0.85;

/// Cosine similarity of two fingerprints, in `[0, 1]`.
///
/// Two all-zero fingerprints are identical (`1.0`); exactly one all-zero
/// fingerprint is unrelated to anything (`0.0`).
pub fn similarity(a: &Fingerprint, b: &Fingerprint) -> f64 {
    let mut dot: u64 = 0;
    let mut na: u64 = 0;
    let mut nb: u64 = 0;
    for (&va, &vb) in a.counters().iter().zip(b.counters().iter()) {
        let (va, vb) = (u64::from(va), u64::from(vb));
        dot += va * vb;
        na += va * va;
        nb += vb * vb;
    }

    match (na, nb) {
        (0, 0) => 1.0,
        (0, _) | (_, 0) => 0.0,
        _ => (dot as f64 / (na as f64 * nb as f64).sqrt()).min(1.0),
    }
}

/// Score `query` against every candidate and keep those at or above
/// `threshold`, best first. Equal scores are ordered by ascending id.
pub fn rank_matches<'a, I>(query: &Fingerprint, candidates: I, threshold: f64) -> Vec<Match>
where
    I: IntoIterator<Item = (u32, &'a Fingerprint)>,
{
    let mut matches: Vec<Match> = candidates
        .into_iter()
        .map(|(id, fp)| Match::new(id, similarity(query, fp)))
        .filter(|m| m.score >= threshold)
        .collect();

    matches.sort_by(|a, b| match b.score.total_cmp(&a.score) {
        Ordering::Equal => a.id.cmp(&b.id),
        other => other,
    });
    matches
}
