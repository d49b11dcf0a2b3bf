//! Loads daily OHLCV files and reports their features.
//!
//! The library half of the `price-analyzer` binary: file loaders behind the
//! [`io::SeriesSource`] trait, TOML configuration, and the JSON reports built
//! from [`feature_extractor`] output.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod errors;
pub mod io;
pub mod report;
