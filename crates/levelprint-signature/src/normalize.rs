use levelprint_types::ClassifiedPoint;

/// Arithmetic mean of all point positions, or `None` for an empty set.
pub fn centroid(points: &[ClassifiedPoint]) -> Option<(f64, f64)> {
    if points.is_empty() {
        return None;
    }
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    let n = points.len() as f64;
    Some((sx / n, sy / n))
}

/// Translate a point set so its centroid sits at the origin.
///
/// Categories and ordering are preserved. An empty input yields an empty
/// output rather than dividing by zero.
pub fn normalize(points: &[ClassifiedPoint]) -> Vec<ClassifiedPoint> {
    match centroid(points) {
        Some((cx, cy)) => points.iter().map(|p| p.shifted(cx, cy)).collect(),
        None => Vec::new(),
    }
}
