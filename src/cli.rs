use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;
use crate::ranking::DEFAULT_TOP_N;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Global counters over the whole snapshot.
    Stats(StatsArgs),
    /// Mean rating per category.
    Averages(AveragesArgs),
    /// Rating distribution over the fixed ranges.
    Histogram(HistogramArgs),
    /// Sorted book listing, optionally limited to one category.
    Books(BooksArgs),
    /// The highest-ranked books across all categories.
    Top(TopArgs),
    /// Every derived view bundled into one report.
    Report(ReportArgs),
    /// Category names in snapshot order.
    Categories(CategoriesArgs),
    /// Emit the built-in demo snapshot.
    Sample(SampleArgs),
}

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Input path for the catalog snapshot JSON (default: stdin).
    #[arg(long)]
    pub input: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct AveragesArgs {
    /// Input path for the catalog snapshot JSON (default: stdin).
    #[arg(long)]
    pub input: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct HistogramArgs {
    /// Input path for the catalog snapshot JSON (default: stdin).
    #[arg(long)]
    pub input: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct BooksArgs {
    /// Input path for the catalog snapshot JSON (default: stdin).
    #[arg(long)]
    pub input: Option<String>,

    /// Category to list, or `all` for every category.
    #[arg(long, default_value = "all")]
    pub category: String,

    /// Output format.
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct TopArgs {
    /// Input path for the catalog snapshot JSON (default: stdin).
    #[arg(long)]
    pub input: Option<String>,

    /// Maximum number of ranked books.
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    pub limit: usize,

    /// Output format.
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Input path for the catalog snapshot JSON (default: stdin).
    #[arg(long)]
    pub input: Option<String>,

    /// Output file path (default: stdout).
    #[arg(long)]
    pub out: Option<String>,

    /// Overwrite `--out` if it already exists.
    #[arg(long)]
    pub force: bool,

    /// Output format.
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct CategoriesArgs {
    /// Input path for the catalog snapshot JSON (default: stdin).
    #[arg(long)]
    pub input: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct SampleArgs {
    /// Output format.
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,
}
