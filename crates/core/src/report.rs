use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::evaluator::{Averages, FlaggedCase};

pub const WORST_CASE_COLUMNS: [&str; 7] = [
    "Test Index",
    "Result Index",
    "Recall",
    "Precision",
    "F-score",
    "Test Text",
    "Predicted Text",
];

/// One row of the persisted worst-case table. Field order is column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorstCaseRow {
    #[serde(rename = "Test Index")]
    pub test_index: usize,
    #[serde(rename = "Result Index")]
    pub result_index: usize,
    #[serde(rename = "Recall")]
    pub recall: f64,
    #[serde(rename = "Precision")]
    pub precision: f64,
    #[serde(rename = "F-score")]
    pub fscore: f64,
    #[serde(rename = "Test Text")]
    pub test_text: String,
    #[serde(rename = "Predicted Text")]
    pub predicted_text: String,
}

impl From<&FlaggedCase> for WorstCaseRow {
    fn from(case: &FlaggedCase) -> Self {
        Self {
            test_index: case.reference_index,
            result_index: case.predicted_index,
            recall: case.scores.recall,
            precision: case.scores.precision,
            fscore: case.scores.fscore,
            test_text: case.reference_text.clone(),
            predicted_text: case.predicted_text.clone(),
        }
    }
}

/// Writes the worst-case table. The header row is written even when there
/// are no cases.
pub fn write_worst_cases(path: &Path, cases: &[FlaggedCase]) -> Result<()> {
    let file = fs::File::create(path)?;
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    writer.write_record(WORST_CASE_COLUMNS)?;
    for case in cases {
        writer.serialize(WorstCaseRow::from(case))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn read_worst_cases(path: &Path) -> Result<Vec<WorstCaseRow>> {
    let file = fs::File::open(path)?;
    let mut reader = ReaderBuilder::new().from_reader(file);
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

/// Outcome of one evaluation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub averages: Averages,
    pub pairs_evaluated: usize,
    pub flagged: usize,
    pub worst_cases_written: usize,
}
