use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mediascore",
    version,
    about = "Media-buy proposal scoring and weighting CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding mediascore.toml
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score an answer file
    Score(ScoreCommand),
    /// Show resolved weights for a category
    Weights(WeightsCommand),
    /// List the evaluation criteria
    Criteria(CriteriaCommand),
    /// Show a saved proposal's active or selected version
    Show(ShowCommand),
    /// Benchmark statistics over saved proposals
    Benchmark(BenchmarkCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    pub answers: PathBuf,
    /// Overrides the category in the answer file
    #[arg(long)]
    pub category: Option<String>,
    /// Defaults to the configured report format
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Exit with code 1 when the total falls below this score
    #[arg(long)]
    pub min_score: Option<f64>,
    /// Mark a criterion as not considered
    #[arg(long = "exclude", value_name = "CRITERION")]
    pub exclude: Vec<String>,
    /// Append the scored version to this proposal store
    #[arg(long, value_name = "STORE")]
    pub save: Option<PathBuf>,
}

#[derive(Args)]
pub struct WeightsCommand {
    pub category: String,
    #[arg(long = "exclude", value_name = "CRITERION")]
    pub exclude: Vec<String>,
}

#[derive(Args)]
pub struct CriteriaCommand {
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Args)]
pub struct ShowCommand {
    pub store: PathBuf,
    pub id: String,
    /// Show this version number instead of the active one
    #[arg(long, value_name = "VERSION")]
    pub select: Option<usize>,
    /// Make the selected version the active one in the store
    #[arg(long, requires = "select")]
    pub activate: bool,
    /// List every version instead of rendering one
    #[arg(long, conflicts_with_all = ["select", "format"])]
    pub history: bool,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct BenchmarkCommand {
    pub proposals: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Csv,
    Brief,
}
