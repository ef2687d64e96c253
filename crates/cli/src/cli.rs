use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

pub const DEFAULT_CONFIG: &str = "releval.toml";

#[derive(Parser, Debug)]
#[command(
    name = "releval",
    version,
    about = "Token-overlap evaluation of retrieval results"
)]
pub struct Cli {
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score predicted documents against the reference set.
    Evaluate {
        reference: PathBuf,
        predicted: PathBuf,
        #[arg(long, default_value = "worst_cases.csv")]
        out: PathBuf,
        #[command(flatten)]
        args: EvaluateArgs,
        #[arg(long = "json-out")]
        json_out: Option<PathBuf>,
    },
    /// Split serialized retrieval hits into text and score columns.
    Extract {
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[command(flatten)]
        args: ExtractArgs,
    },
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct EvaluateArgs {
    #[arg(long = "token-column")]
    pub token_column: Option<String>,
    #[arg(long = "reference-step")]
    pub reference_step: Option<usize>,
    #[arg(long = "predicted-step")]
    pub predicted_step: Option<usize>,
    #[arg(long)]
    pub threshold: Option<f64>,
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct ExtractArgs {
    #[arg(long = "source-column")]
    pub source_column: Option<String>,
    #[arg(long = "text-column")]
    pub text_column: Option<String>,
    #[arg(long = "score-column")]
    pub score_column: Option<String>,
}
