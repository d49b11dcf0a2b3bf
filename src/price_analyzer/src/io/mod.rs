//! Loading price series from local files.
//!
//! This module defines the [`SeriesSource`] trait, the seam where any data
//! source (a spreadsheet export, a JSON dump, a market-data client) hands a
//! [`PriceSeries`] to the feature extractor. File-backed implementations live
//! in [`csv_file`] and [`json_file`]; [`source_for`] picks one at runtime.
//!
//! # Example
//!
//! ```rust
//! use feature_extractor::{PricePoint, PriceSeries};
//! use price_analyzer::errors::LoadError;
//! use price_analyzer::io::SeriesSource;
//!
//! struct Fixture(Vec<PricePoint>);
//!
//! impl SeriesSource for Fixture {
//!     fn load(&self) -> Result<PriceSeries, LoadError> {
//!         // A real source would map SeriesError into LoadError::InvalidSeries.
//!         Ok(PriceSeries::new("FIXTURE", self.0.clone()).expect("fixture is valid"))
//!     }
//! }
//! ```

pub mod csv_file;
pub mod json_file;
pub mod record;

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use feature_extractor::PriceSeries;
use thiserror::Error;

use crate::errors::{LoadError, UnsupportedFormatSnafu};

pub use csv_file::CsvSource;
pub use json_file::JsonSource;

/// Anything that can produce a validated [`PriceSeries`].
pub trait SeriesSource {
    fn load(&self) -> Result<PriceSeries, LoadError>;
}

/// On-disk encodings the loaders understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SourceFormat {
    /// Header row `Date,Open,High,Low,Close,Volume`, one row per day.
    Csv,
    /// Array of `{date, open, high, low, close, volume}` objects.
    Json,
}

impl SourceFormat {
    /// Guesses the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        ext.parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown source format '{0}', expected csv or json")]
pub struct ParseSourceFormatError(pub String);

impl FromStr for SourceFormat {
    type Err = ParseSourceFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(SourceFormat::Csv),
            "json" => Ok(SourceFormat::Json),
            _ => Err(ParseSourceFormatError(s.to_string())),
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Csv => f.write_str("csv"),
            SourceFormat::Json => f.write_str("json"),
        }
    }
}

/// Picks the loader for `path`, using `format` when given and the file
/// extension otherwise.
pub fn source_for(
    path: impl Into<PathBuf>,
    format: Option<SourceFormat>,
    symbol: impl Into<String>,
) -> Result<Box<dyn SeriesSource>, LoadError> {
    let path = path.into();
    let Some(format) = format.or_else(|| SourceFormat::from_path(&path)) else {
        return UnsupportedFormatSnafu { path }.fail();
    };

    let source: Box<dyn SeriesSource> = match format {
        SourceFormat::Csv => Box::new(CsvSource::new(path, symbol)),
        SourceFormat::Json => Box::new(JsonSource::new(path, symbol)),
    };
    Ok(source)
}
