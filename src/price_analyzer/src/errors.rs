use std::path::PathBuf;

use feature_extractor::SeriesError;
use snafu::{Backtrace, Snafu};
use thiserror::Error;

/// Errors raised while turning a file into a [`PriceSeries`](feature_extractor::PriceSeries).
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum LoadError {
    /// The input file could not be opened.
    #[snafu(display("Failed to open {}: {source}", path.display()))]
    Open {
        path: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },

    /// A CSV row could not be decoded into a price record.
    #[snafu(display("Failed to decode CSV in {}: {source}", path.display()))]
    Csv {
        path: PathBuf,
        source: csv::Error,
        backtrace: Backtrace,
    },

    /// The JSON document is not an array of price records.
    #[snafu(display("Failed to decode JSON in {}: {source}", path.display()))]
    Json {
        path: PathBuf,
        source: serde_json::Error,
        backtrace: Backtrace,
    },

    /// No format was given and the file extension is not recognised.
    #[snafu(display(
        "Cannot infer the format of {}; pass --format csv or --format json",
        path.display()
    ))]
    UnsupportedFormat { path: PathBuf, backtrace: Backtrace },

    /// The records decode fine but do not form a valid series.
    #[snafu(display("Invalid price series in {}: {source}", path.display()))]
    InvalidSeries {
        path: PathBuf,
        source: SeriesError,
        backtrace: Backtrace,
    },
}

/// Errors raised while turning computed features into output.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The `reject` policy is active and some metrics are NaN or infinite.
    #[error("metrics contain non-finite values: {}", .fields.join(", "))]
    NonFiniteMetrics { fields: Vec<&'static str> },

    #[error("failed to serialize report")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write report")]
    Io(#[from] std::io::Error),
}
