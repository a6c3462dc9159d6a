use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Scores the semantic similarity between two lists of sentences.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub compare: CompareArgs,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the models that can be loaded by name.
    Models,
}

#[derive(Args, Debug, Default, Clone)]
pub struct CompareArgs {
    /// Model name or local directory with an exported ONNX model.
    #[arg(short, long)]
    pub model: Option<String>,

    /// Sentence of list A (repeatable).
    #[arg(short = 'a', long = "source", conflicts_with = "source_file")]
    pub source: Vec<String>,

    /// Sentence of list B (repeatable).
    #[arg(short = 'b', long = "target", conflicts_with = "target_file")]
    pub target: Vec<String>,

    /// File with list A, one sentence per line.
    #[arg(long)]
    pub source_file: Option<PathBuf>,

    /// File with list B, one sentence per line.
    #[arg(long)]
    pub target_file: Option<PathBuf>,

    /// JSON config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    #[arg(long)]
    pub batch_size: Option<usize>,

    #[arg(long)]
    pub max_length: Option<usize>,

    /// Show model download progress.
    #[arg(long)]
    pub show_progress: bool,

    /// Report every sentence of list A, not only the first.
    #[arg(long)]
    pub all: bool,

    /// Sort reported pairs by descending score.
    #[arg(long)]
    pub rank: bool,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}
