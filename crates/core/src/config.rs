use serde::{Deserialize, Serialize};

use crate::error::{EvalError, Result};

pub const DEFAULT_TOKEN_COLUMN: &str = "Relevant_Documents_Tokenized";
pub const DEFAULT_REFERENCE_STEP: usize = 1;
pub const DEFAULT_PREDICTED_STEP: usize = 4;
pub const DEFAULT_RECALL_THRESHOLD: f64 = 0.7;
pub const DEFAULT_WORST_CASE_LIMIT: usize = 40;

pub const DEFAULT_SOURCE_COLUMN: &str = "Relevant Documents";
pub const DEFAULT_TEXT_COLUMN: &str = "Reference Text";
pub const DEFAULT_SCORE_COLUMN: &str = "Score";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    pub token_column: String,
    pub reference_step: usize,
    /// Rows the predicted table advances per reference row.
    pub predicted_step: usize,
    /// Pairs with recall strictly below this are flagged for review.
    pub recall_threshold: f64,
    pub worst_case_limit: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            token_column: DEFAULT_TOKEN_COLUMN.to_string(),
            reference_step: DEFAULT_REFERENCE_STEP,
            predicted_step: DEFAULT_PREDICTED_STEP,
            recall_threshold: DEFAULT_RECALL_THRESHOLD,
            worst_case_limit: DEFAULT_WORST_CASE_LIMIT,
        }
    }
}

impl EvaluatorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.reference_step == 0 || self.predicted_step == 0 {
            return Err(EvalError::InvalidConfig(
                "pairing steps must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.recall_threshold) {
            return Err(EvalError::InvalidConfig(format!(
                "recall threshold {} outside [0, 1]",
                self.recall_threshold
            )));
        }
        if self.token_column.is_empty() {
            return Err(EvalError::InvalidConfig(
                "token column name is empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    pub source_column: String,
    pub text_column: String,
    pub score_column: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            source_column: DEFAULT_SOURCE_COLUMN.to_string(),
            text_column: DEFAULT_TEXT_COLUMN.to_string(),
            score_column: DEFAULT_SCORE_COLUMN.to_string(),
        }
    }
}

impl ExtractConfig {
    pub fn validate(&self) -> Result<()> {
        if self.text_column == self.score_column {
            return Err(EvalError::InvalidConfig(format!(
                "text and score columns share the name {:?}",
                self.text_column
            )));
        }
        Ok(())
    }
}
