use std::{fs::File, path::PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use feature_extractor::{PricePoint, PriceSeries};
use snafu::ResultExt;
use tracing::info;

use super::{SeriesSource, record::PriceRecord};
use crate::errors::{CsvSnafu, InvalidSeriesSnafu, LoadError, OpenSnafu};

/// Reads a headered CSV file with one row per trading day.
///
/// Header names match case-insensitively and rows may appear in any date
/// order; they are sorted before validation.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    symbol: String,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>, symbol: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            symbol: symbol.into(),
        }
    }
}

impl SeriesSource for CsvSource {
    fn load(&self) -> Result<PriceSeries, LoadError> {
        let file = File::open(&self.path).context(OpenSnafu { path: &self.path })?;
        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(file);
        let headers: StringRecord = reader
            .headers()
            .context(CsvSnafu { path: &self.path })?
            .iter()
            .map(str::to_lowercase)
            .collect();
        reader.set_headers(headers);

        let points = reader
            .deserialize::<PriceRecord>()
            .map(|row| row.map(PricePoint::from))
            .collect::<Result<Vec<_>, _>>()
            .context(CsvSnafu { path: &self.path })?;

        let series = PriceSeries::from_unordered(self.symbol.clone(), points)
            .context(InvalidSeriesSnafu { path: &self.path })?;
        info!(
            path = %self.path.display(),
            symbol = %self.symbol,
            points = series.len(),
            "loaded CSV price series"
        );
        Ok(series)
    }
}
