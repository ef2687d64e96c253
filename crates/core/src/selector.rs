use itertools::Itertools;

use crate::evaluator::FlaggedCase;

/// Orders flagged cases by ascending recall and keeps at most `limit`.
/// The sort is stable, so ties keep discovery order.
pub fn select_worst(flagged: &[FlaggedCase], limit: usize) -> Vec<FlaggedCase> {
    flagged
        .iter()
        .sorted_by(|a, b| a.scores.recall.total_cmp(&b.scores.recall))
        .take(limit)
        .cloned()
        .collect()
}
