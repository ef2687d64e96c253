use std::fs;
use std::path::Path;

use releval_core::{
    evaluate_files, extract_file, read_worst_cases, EvalError, EvaluatorConfig, ExtractConfig,
    Table, WORST_CASE_COLUMNS,
};
use tempfile::tempdir;

fn write_token_table(path: &Path, cells: &[&str]) {
    let mut out = String::from("query,Relevant_Documents_Tokenized\n");
    for (idx, cell) in cells.iter().enumerate() {
        out.push_str(&format!("q{idx},\"{}\"\n", cell.replace('"', "\"\"")));
    }
    fs::write(path, out).unwrap();
}

#[test]
fn evaluate_writes_sorted_worst_cases_and_returns_averages() {
    let dir = tempdir().unwrap();
    let reference = dir.path().join("test.csv");
    let predicted = dir.path().join("result.csv");
    let output = dir.path().join("worst.csv");

    write_token_table(
        &reference,
        &["['a', 'b']", "['c', 'd']", "['e', 'f', 'g', 'h']"],
    );
    // Only rows 0, 4 and 8 of the predictions are paired.
    write_token_table(
        &predicted,
        &[
            "['a', 'b']",
            "['x']",
            "['x']",
            "['x']",
            "['z']",
            "['x']",
            "['x']",
            "['x']",
            "['e', 'f', 'q']",
        ],
    );

    let report = evaluate_files(&reference, &predicted, &output, &EvaluatorConfig::default())
        .unwrap();
    assert_eq!(report.pairs_evaluated, 3);
    assert_eq!(report.flagged, 2);
    assert_eq!(report.worst_cases_written, 2);
    assert!((report.averages.recall - 0.5).abs() < 1e-12);
    let expected_precision = (1.0 + 0.0 + 2.0 / 3.0) / 3.0;
    assert!((report.averages.precision - expected_precision).abs() < 1e-12);

    let rows = read_worst_cases(&output).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!((rows[0].test_index, rows[0].result_index), (1, 4));
    assert_eq!(rows[0].recall, 0.0);
    assert_eq!((rows[1].test_index, rows[1].result_index), (2, 8));
    assert_eq!(rows[1].recall, 0.5);
    assert_eq!(rows[1].test_text, "['e', 'f', 'g', 'h']");
    assert_eq!(rows[1].predicted_text, "['e', 'f', 'q']");

    let reloaded = Table::load_csv(&output, &WORST_CASE_COLUMNS).unwrap();
    assert_eq!(reloaded.headers(), WORST_CASE_COLUMNS);
    assert_eq!(reloaded.len(), 2);
}

#[test]
fn worst_case_table_is_capped() {
    let dir = tempdir().unwrap();
    let reference = dir.path().join("test.csv");
    let predicted = dir.path().join("result.csv");
    let output = dir.path().join("worst.csv");

    let reference_cells: Vec<&str> = vec!["['a', 'b']"; 50];
    let predicted_cells: Vec<&str> = vec!["['b', 'c']"; 200];
    write_token_table(&reference, &reference_cells);
    write_token_table(&predicted, &predicted_cells);

    let report = evaluate_files(&reference, &predicted, &output, &EvaluatorConfig::default())
        .unwrap();
    assert_eq!(report.pairs_evaluated, 50);
    assert_eq!(report.flagged, 50);
    assert_eq!(report.worst_cases_written, 40);

    let rows = read_worst_cases(&output).unwrap();
    assert_eq!(rows.len(), 40);
    // Equal recall everywhere, so discovery order survives the sort.
    let indices: Vec<usize> = rows.iter().map(|r| r.test_index).collect();
    assert_eq!(indices, (0..40).collect::<Vec<_>>());
}

#[test]
fn empty_inputs_average_to_zero() {
    let dir = tempdir().unwrap();
    let reference = dir.path().join("test.csv");
    let predicted = dir.path().join("result.csv");
    let output = dir.path().join("worst.csv");
    write_token_table(&reference, &[]);
    write_token_table(&predicted, &["['a']"]);

    let report = evaluate_files(&reference, &predicted, &output, &EvaluatorConfig::default())
        .unwrap();
    assert_eq!(report.pairs_evaluated, 0);
    assert_eq!(report.averages.precision, 0.0);
    assert_eq!(report.averages.recall, 0.0);
    assert_eq!(report.averages.fscore, 0.0);
    assert!(read_worst_cases(&output).unwrap().is_empty());
}

#[test]
fn configurable_step_changes_pairing() {
    let dir = tempdir().unwrap();
    let reference = dir.path().join("test.csv");
    let predicted = dir.path().join("result.csv");
    let output = dir.path().join("worst.csv");
    write_token_table(&reference, &["a", "b"]);
    write_token_table(&predicted, &["a", "b"]);

    let config = EvaluatorConfig {
        predicted_step: 1,
        ..Default::default()
    };
    let report = evaluate_files(&reference, &predicted, &output, &config).unwrap();
    assert_eq!(report.pairs_evaluated, 2);
    assert_eq!(report.averages.fscore, 1.0);
    assert_eq!(report.flagged, 0);
}

#[test]
fn missing_token_column_aborts_before_writing() {
    let dir = tempdir().unwrap();
    let reference = dir.path().join("test.csv");
    let predicted = dir.path().join("result.csv");
    let output = dir.path().join("worst.csv");
    fs::write(&reference, "query,text\nq0,hello\n").unwrap();
    write_token_table(&predicted, &["['a']"]);

    let err = evaluate_files(&reference, &predicted, &output, &EvaluatorConfig::default())
        .unwrap_err();
    assert!(matches!(err, EvalError::MissingColumn { .. }));
    assert!(!output.exists());
}

#[test]
fn missing_input_file_propagates_io_error() {
    let dir = tempdir().unwrap();
    let err = evaluate_files(
        &dir.path().join("absent.csv"),
        &dir.path().join("absent_too.csv"),
        &dir.path().join("worst.csv"),
        &EvaluatorConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, EvalError::Io(_)));
}

#[test]
fn extract_augments_input_table() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("results.csv");
    let output = dir.path().join("parsed.csv");
    fs::write(
        &input,
        "Question,Relevant Documents\n\
         q1,\"[(Document(page_content='Điều 1. Phạm vi', metadata={'page': 3}), 0.4123)]\"\n\
         q2,\"Document(page_content='hello world', 0.87)\"\n\
         q3,no match here\n",
    )
    .unwrap();

    let stats = extract_file(&input, &output, &ExtractConfig::default()).unwrap();
    assert_eq!(stats.rows, 3);
    assert_eq!(stats.with_text, 2);
    assert_eq!(stats.with_score, 1);

    let table = Table::load_csv(&output, &["Reference Text", "Score"]).unwrap();
    assert_eq!(
        table.headers(),
        ["Question", "Relevant Documents", "Reference Text", "Score"]
    );
    assert_eq!(table.cell(0, "Reference Text"), Some("Điều 1. Phạm vi"));
    // The list wrapper adds a trailing `]`, so the anchored score pattern fails.
    assert_eq!(table.cell(0, "Score"), Some(""));
    assert_eq!(table.cell(1, "Reference Text"), Some("hello world"));
    assert_eq!(table.cell(1, "Score"), Some("0.87"));
    assert_eq!(table.cell(2, "Reference Text"), Some(""));
    assert_eq!(table.cell(2, "Score"), Some(""));
}
