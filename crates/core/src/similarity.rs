use serde::{Deserialize, Serialize};

use crate::tokens::TokenSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlapScores {
    pub precision: f64,
    pub recall: f64,
    pub fscore: f64,
}

/// Set-overlap precision, recall and F-score of `predicted` against
/// `reference`. Empty denominators score zero.
pub fn overlap_scores(reference: &TokenSet, predicted: &TokenSet) -> OverlapScores {
    let common = reference.intersection_len(predicted) as f64;
    let precision = if predicted.is_empty() {
        0.0
    } else {
        common / predicted.len() as f64
    };
    let recall = if reference.is_empty() {
        0.0
    } else {
        common / reference.len() as f64
    };
    let fscore = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };
    OverlapScores {
        precision,
        recall,
        fscore,
    }
}
