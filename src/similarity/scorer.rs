//! Pairwise and room-level similarity scores.

use super::features::{FEATURE_MAX, FEATURE_MIN, NEUTRAL_VALUE};

/// Span of the feature value domain, per dimension.
const DOMAIN_SPAN: f64 = FEATURE_MAX - FEATURE_MIN;

/// Similarity between two feature vectors, in [0, 1].
///
/// Vectors of different lengths score `0.0`. NaN entries are substituted
/// with the neutral midpoint before scoring. The Euclidean distance is
/// normalized by the theoretical maximum `sqrt(len * 9²)` (every feature in
/// [1, 10]) and converted to a similarity via `1 - distance / max`.
///
/// Two zero-length vectors score `1.0` (zero maximum distance).
pub fn pair_score(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let max_distance = (a.len() as f64 * DOMAIN_SPAN * DOMAIN_SPAN).sqrt();
    if max_distance == 0.0 {
        return 1.0;
    }

    let distance = a
        .iter()
        .zip(b)
        .map(|(&x, &y)| {
            let x = if x.is_nan() { NEUTRAL_VALUE } else { x };
            let y = if y.is_nan() { NEUTRAL_VALUE } else { y };
            (x - y) * (x - y)
        })
        .sum::<f64>()
        .sqrt();

    (1.0 - distance / max_distance).clamp(0.0, 1.0)
}

/// Similarity of a candidate to a room's current occupants.
///
/// The arithmetic mean of [`pair_score`] against each occupant. An empty
/// room scores exactly `0.5` (neutral).
pub fn room_score(members: &[Vec<f64>], candidate: &[f64]) -> f64 {
    if members.is_empty() {
        return 0.5;
    }

    let total: f64 = members.iter().map(|m| pair_score(m, candidate)).sum();
    total / members.len() as f64
}
