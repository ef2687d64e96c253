use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use releval_core::{EvaluatorConfig, ExtractConfig};
use serde::Deserialize;

use crate::cli::{EvaluateArgs, ExtractArgs};

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub evaluate: EvaluateDefaults,
    #[serde(default)]
    pub extract: ExtractDefaults,
}

#[derive(Debug, Default, Deserialize)]
pub struct EvaluateDefaults {
    pub token_column: Option<String>,
    pub reference_step: Option<usize>,
    pub predicted_step: Option<usize>,
    pub recall_threshold: Option<f64>,
    pub worst_case_limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExtractDefaults {
    pub source_column: Option<String>,
    pub text_column: Option<String>,
    pub score_column: Option<String>,
}

/// Reads the TOML config. A missing file at the default location means
/// "no overrides"; an explicitly requested file must exist.
pub fn load_config(path: &Path, explicit: bool) -> Result<AppConfig> {
    if !path.exists() {
        if explicit {
            return Err(anyhow!("config file {} not found", path.display()));
        }
        return Ok(AppConfig::default());
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&contents).map_err(|e| anyhow!("invalid config: {e}"))
}

pub fn resolve_evaluate_config(
    cli: &EvaluateArgs,
    defaults: &EvaluateDefaults,
) -> Result<EvaluatorConfig> {
    let base = EvaluatorConfig::default();
    let resolved = EvaluatorConfig {
        token_column: cli
            .token_column
            .clone()
            .or_else(|| defaults.token_column.clone())
            .unwrap_or(base.token_column),
        reference_step: cli
            .reference_step
            .or(defaults.reference_step)
            .unwrap_or(base.reference_step),
        predicted_step: cli
            .predicted_step
            .or(defaults.predicted_step)
            .unwrap_or(base.predicted_step),
        recall_threshold: cli
            .threshold
            .or(defaults.recall_threshold)
            .unwrap_or(base.recall_threshold),
        worst_case_limit: cli
            .limit
            .or(defaults.worst_case_limit)
            .unwrap_or(base.worst_case_limit),
    };
    resolved.validate()?;
    Ok(resolved)
}

pub fn resolve_extract_config(
    cli: &ExtractArgs,
    defaults: &ExtractDefaults,
) -> Result<ExtractConfig> {
    let base = ExtractConfig::default();
    let resolved = ExtractConfig {
        source_column: cli
            .source_column
            .clone()
            .or_else(|| defaults.source_column.clone())
            .unwrap_or(base.source_column),
        text_column: cli
            .text_column
            .clone()
            .or_else(|| defaults.text_column.clone())
            .unwrap_or(base.text_column),
        score_column: cli
            .score_column
            .clone()
            .or_else(|| defaults.score_column.clone())
            .unwrap_or(base.score_column),
    };
    resolved.validate()?;
    Ok(resolved)
}
