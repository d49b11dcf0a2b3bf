use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use feature_extractor::DisplayRange;

use crate::io::SourceFormat;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the config file (price_analyzer.toml); falls back to $PRICE_ANALYZER_CONFIG
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the price series comes from.
#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Path to a CSV or JSON file of daily OHLCV rows
    #[arg(short, long)]
    pub input: PathBuf,

    /// Input encoding; inferred from the file extension when omitted
    #[arg(long, value_enum)]
    pub format: Option<SourceFormat>,

    /// Label reported alongside the results
    #[arg(long, default_value = "Uploaded Stock")]
    pub symbol: String,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the summary metrics of a series
    Metrics {
        #[command(flatten)]
        input: InputArgs,

        /// Fail instead of printing NaN/Infinity values
        #[arg(long)]
        strict: bool,
    },

    /// Print the chart overlays (MA20, MA50, volume MA10) of a series
    Overlays {
        #[command(flatten)]
        input: InputArgs,

        /// Visible window: 1M, 3M, 6M, 1Y or ALL (defaults to the configured range)
        #[arg(short, long)]
        range: Option<DisplayRange>,
    },

    /// Print metrics and overlays together
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        /// Visible window: 1M, 3M, 6M, 1Y or ALL (defaults to the configured range)
        #[arg(short, long)]
        range: Option<DisplayRange>,

        /// Fail instead of printing NaN/Infinity values
        #[arg(long)]
        strict: bool,
    },
}
