//! Compatibility ranking: classifier probabilities → ordered top-k
//! recommendation list.

use crate::model::vocabulary::CareerSet;
use crate::models::recommendation::RecommendationEntry;

/// At most this many recommendations per request.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Entries at or below this probability are dropped. Strictly greater-than:
/// exactly 1% does not qualify.
pub const MIN_PROBABILITY: f64 = 0.01;

/// Ranks the career classes for one probability distribution.
///
/// Class indices are sorted by probability descending with ties broken by
/// ascending index, so the ordering is fully deterministic. The threshold
/// filter applies inside the top-5 window only: a 6th-ranked class above 1%
/// is never considered. Callers must validate the distribution against the
/// career set first (`classifier::validate_distribution`).
pub fn rank(probabilities: &[f64], careers: &CareerSet) -> Vec<RecommendationEntry> {
    let mut order: Vec<usize> = (0..probabilities.len()).collect();
    order.sort_by(|&a, &b| probabilities[b].total_cmp(&probabilities[a]).then(a.cmp(&b)));

    order
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .filter(|&idx| probabilities[idx] > MIN_PROBABILITY)
        .map(|idx| RecommendationEntry {
            career: careers.name(idx).unwrap_or_default().to_string(),
            compatibility: to_percentage(probabilities[idx]),
            career_id: idx,
        })
        .collect()
}

/// Probability → percentage rounded to 2 decimal places.
fn to_percentage(probability: f64) -> f64 {
    (probability * 100.0 * 100.0).round() / 100.0
}
