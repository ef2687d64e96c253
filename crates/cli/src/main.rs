mod cli;
mod config;
mod logging;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use releval_core::{evaluate_files, extract_file, EvaluationReport, ExtractStats};

use crate::cli::{Cli, Command, DEFAULT_CONFIG};
use crate::config::{load_config, resolve_evaluate_config, resolve_extract_config};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose || logging::env_flag());
    let explicit = cli.config.is_some();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let file_config = load_config(&config_path, explicit)?;

    match cli.command {
        Command::Evaluate {
            reference,
            predicted,
            out,
            args,
            json_out,
        } => {
            let resolved = resolve_evaluate_config(&args, &file_config.evaluate)?;
            tracing::debug!(?resolved, "resolved evaluation config");
            let report = evaluate_files(&reference, &predicted, &out, &resolved)
                .with_context(|| {
                    format!(
                        "evaluation of {} against {} failed",
                        predicted.display(),
                        reference.display()
                    )
                })?;
            print_evaluation_summary(&out, &report);
            if let Some(path) = json_out {
                write_json(&path, &report)?;
            }
        }
        Command::Extract { input, out, args } => {
            let resolved = resolve_extract_config(&args, &file_config.extract)?;
            let stats = extract_file(&input, &out, &resolved)
                .with_context(|| format!("failed to extract documents from {}", input.display()))?;
            print_extract_summary(&out, &stats);
        }
    }
    Ok(())
}

fn print_evaluation_summary(out: &Path, report: &EvaluationReport) {
    println!("[releval] Pairs evaluated: {}", report.pairs_evaluated);
    println!("[releval] Avg precision:   {:.4}", report.averages.precision);
    println!("[releval] Avg recall:      {:.4}", report.averages.recall);
    println!("[releval] Avg F-score:     {:.4}", report.averages.fscore);
    println!(
        "[releval] Flagged:         {} ({} written to {})",
        report.flagged,
        report.worst_cases_written,
        out.display()
    );
}

fn print_extract_summary(out: &Path, stats: &ExtractStats) {
    println!("[releval] Rows:            {}", stats.rows);
    println!(
        "[releval] With text:       {}{}",
        stats.with_text,
        missing_note(stats.rows, stats.with_text)
    );
    println!(
        "[releval] With score:      {}{}",
        stats.with_score,
        missing_note(stats.rows, stats.with_score)
    );
    println!("[releval] Written:         {}", out.display());
}

fn missing_note(total: usize, found: usize) -> String {
    if total == 0 || found >= total {
        String::new()
    } else {
        format!(" ({} rows left empty)", total - found)
    }
}

fn write_json(path: &Path, report: &EvaluationReport) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)
        .with_context(|| format!("failed to write summary {}", path.display()))?;
    writer.flush()?;
    Ok(())
}
