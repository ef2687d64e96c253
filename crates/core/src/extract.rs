use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ExtractConfig;
use crate::error::Result;
use crate::table::Table;

static TEXT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"page_content='(.+?)'").expect("valid regex"));
static SCORE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r", ([\d.]+)\)$").expect("valid regex"));

/// Text body and relevance score pulled out of a serialized retrieval hit
/// such as `Document(page_content='...', metadata={...}), 0.87)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedDocument {
    pub text: Option<String>,
    pub score: Option<f64>,
}

pub fn parse_document(raw: &str) -> ParsedDocument {
    let text = TEXT_RE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());
    let score = SCORE_RE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok());
    ParsedDocument { text, score }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub rows: usize,
    pub with_text: usize,
    pub with_score: usize,
}

/// Parses every cell of the source column and appends the text and score
/// columns. Absent values are written as empty cells.
pub fn augment_table(table: &mut Table, config: &ExtractConfig) -> Result<ExtractStats> {
    config.validate()?;
    table.require_columns("input table", &[config.source_column.as_str()])?;
    let parsed: Vec<ParsedDocument> = table
        .column(&config.source_column)
        .unwrap_or_default()
        .into_iter()
        .map(parse_document)
        .collect();
    let mut stats = ExtractStats {
        rows: parsed.len(),
        ..Default::default()
    };
    let mut texts = Vec::with_capacity(parsed.len());
    let mut scores = Vec::with_capacity(parsed.len());
    for doc in parsed {
        if doc.text.is_some() {
            stats.with_text += 1;
        }
        if doc.score.is_some() {
            stats.with_score += 1;
        }
        texts.push(doc.text.unwrap_or_default());
        scores.push(doc.score.map(|s| s.to_string()).unwrap_or_default());
    }
    table.set_column(&config.text_column, texts)?;
    table.set_column(&config.score_column, scores)?;
    Ok(stats)
}
