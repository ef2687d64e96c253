use std::path::Path;

use tracing::info;

use crate::config::{EvaluatorConfig, ExtractConfig};
use crate::error::Result;
use crate::evaluator::evaluate;
use crate::extract::{augment_table, ExtractStats};
use crate::report::{write_worst_cases, EvaluationReport};
use crate::table::Table;

/// Loads both tables, scores every pair, writes the worst cases to `output`
/// and returns the run summary. Any load or write failure aborts the run.
pub fn evaluate_files(
    reference_path: &Path,
    predicted_path: &Path,
    output: &Path,
    config: &EvaluatorConfig,
) -> Result<EvaluationReport> {
    config.validate()?;
    let column = config.token_column.as_str();
    let reference = Table::load_csv(reference_path, &[column])?;
    let predicted = Table::load_csv(predicted_path, &[column])?;
    info!(
        reference_rows = reference.len(),
        predicted_rows = predicted.len(),
        "loaded evaluation tables"
    );

    let evaluation = evaluate(
        &reference.column(column).unwrap_or_default(),
        &predicted.column(column).unwrap_or_default(),
        config,
    );
    let worst = evaluation.worst_cases(config.worst_case_limit);
    write_worst_cases(output, &worst)?;
    info!(
        pairs = evaluation.pairs(),
        flagged = evaluation.flagged.len(),
        written = worst.len(),
        output = %output.display(),
        "wrote worst cases"
    );

    Ok(EvaluationReport {
        averages: evaluation.averages(),
        pairs_evaluated: evaluation.pairs(),
        flagged: evaluation.flagged.len(),
        worst_cases_written: worst.len(),
    })
}

/// Parses the document column of `input` and writes the augmented table to
/// `output`.
pub fn extract_file(input: &Path, output: &Path, config: &ExtractConfig) -> Result<ExtractStats> {
    let mut table = Table::load_csv(input, &[config.source_column.as_str()])?;
    let stats = augment_table(&mut table, config)?;
    table.save_csv(output)?;
    info!(
        rows = stats.rows,
        with_text = stats.with_text,
        with_score = stats.with_score,
        output = %output.display(),
        "wrote extracted documents"
    );
    Ok(stats)
}
