use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::EvaluatorConfig;
use crate::pairing::{pair_count, pair_indices};
use crate::selector::select_worst;
use crate::similarity::{overlap_scores, OverlapScores};
use crate::tokens::TokenSet;

/// One evaluated pair whose recall fell below the review threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct FlaggedCase {
    pub reference_index: usize,
    pub predicted_index: usize,
    pub scores: OverlapScores,
    pub reference_text: String,
    pub predicted_text: String,
}

/// Per-pair metric sequences in pairing order plus the flagged cases in
/// discovery order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    pub precision: Vec<f64>,
    pub recall: Vec<f64>,
    pub fscore: Vec<f64>,
    pub flagged: Vec<FlaggedCase>,
}

impl Evaluation {
    pub fn pairs(&self) -> usize {
        self.recall.len()
    }

    pub fn worst_cases(&self, limit: usize) -> Vec<FlaggedCase> {
        select_worst(&self.flagged, limit)
    }

    pub fn averages(&self) -> Averages {
        Averages {
            precision: mean(&self.precision),
            recall: mean(&self.recall),
            fscore: mean(&self.fscore),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Averages {
    pub precision: f64,
    pub recall: f64,
    pub fscore: f64,
}

/// Arithmetic mean; an empty slice averages to zero.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Scores each reference row against its paired predicted row. Cells are
/// tokenized CSV values (see [`TokenSet::from_cell`]). `config` must have
/// passed [`EvaluatorConfig::validate`].
pub fn evaluate<R, P>(reference: &[R], predicted: &[P], config: &EvaluatorConfig) -> Evaluation
where
    R: AsRef<str>,
    P: AsRef<str>,
{
    let expected = pair_count(
        reference.len(),
        predicted.len(),
        config.reference_step,
        config.predicted_step,
    );
    let reference_rows = reference.len().div_ceil(config.reference_step);
    if expected < reference_rows {
        warn!(
            reference_rows,
            paired = expected,
            predicted_rows = predicted.len(),
            "predicted table too short; trailing reference rows are not evaluated"
        );
    }

    let mut evaluation = Evaluation {
        precision: Vec::with_capacity(expected),
        recall: Vec::with_capacity(expected),
        fscore: Vec::with_capacity(expected),
        flagged: Vec::new(),
    };
    for (ref_idx, pred_idx) in pair_indices(
        reference.len(),
        predicted.len(),
        config.reference_step,
        config.predicted_step,
    ) {
        let (Some(reference_cell), Some(predicted_cell)) =
            (reference.get(ref_idx), predicted.get(pred_idx))
        else {
            continue;
        };
        let reference_cell = reference_cell.as_ref();
        let predicted_cell = predicted_cell.as_ref();
        let scores = overlap_scores(
            &TokenSet::from_cell(reference_cell),
            &TokenSet::from_cell(predicted_cell),
        );
        evaluation.precision.push(scores.precision);
        evaluation.recall.push(scores.recall);
        evaluation.fscore.push(scores.fscore);

        if scores.recall < config.recall_threshold {
            debug!(
                reference_index = ref_idx,
                predicted_index = pred_idx,
                recall = scores.recall,
                "flagged low-recall pair"
            );
            evaluation.flagged.push(FlaggedCase {
                reference_index: ref_idx,
                predicted_index: pred_idx,
                scores,
                reference_text: reference_cell.to_string(),
                predicted_text: predicted_cell.to_string(),
            });
        }
    }
    evaluation
}
