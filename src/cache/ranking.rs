//! Threshold filtering and ranking of scored candidates.

use std::cmp::Ordering;

use super::types::ScoredCandidate;

/// Filters `candidates` by `threshold` and returns the best `top_k`, ordered
/// by descending score.
///
/// The threshold boundary is inclusive: a candidate scoring exactly
/// `threshold` is a hit. The sort is stable, so equal scores keep their
/// scan-encounter order; since key enumeration order is itself unstable, ties
/// are effectively unordered, which is harmless for the hit/miss contract.
pub(crate) fn filter_and_rank(
    mut candidates: Vec<ScoredCandidate>,
    threshold: f32,
    top_k: usize,
) -> Vec<ScoredCandidate> {
    candidates.retain(|c| c.score >= threshold);

    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    candidates.truncate(top_k);
    candidates
}
