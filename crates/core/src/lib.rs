mod config;
mod error;
mod evaluator;
mod extract;
mod pairing;
mod pipeline;
mod report;
mod selector;
mod similarity;
mod table;
mod tokens;

pub use config::{
    EvaluatorConfig, ExtractConfig, DEFAULT_PREDICTED_STEP, DEFAULT_RECALL_THRESHOLD,
    DEFAULT_REFERENCE_STEP, DEFAULT_SCORE_COLUMN, DEFAULT_SOURCE_COLUMN, DEFAULT_TEXT_COLUMN,
    DEFAULT_TOKEN_COLUMN, DEFAULT_WORST_CASE_LIMIT,
};
pub use error::{EvalError, Result};
pub use evaluator::{evaluate, mean, Averages, Evaluation, FlaggedCase};
pub use extract::{augment_table, parse_document, ExtractStats, ParsedDocument};
pub use pairing::{pair_count, pair_indices};
pub use pipeline::{evaluate_files, extract_file};
pub use report::{
    read_worst_cases, write_worst_cases, EvaluationReport, WorstCaseRow, WORST_CASE_COLUMNS,
};
pub use selector::select_worst;
pub use similarity::{overlap_scores, OverlapScores};
pub use table::Table;
pub use tokens::TokenSet;
