use std::{fs::File, io::BufReader, path::PathBuf};

use feature_extractor::{PricePoint, PriceSeries};
use snafu::ResultExt;
use tracing::info;

use super::{SeriesSource, record::PriceRecord};
use crate::errors::{InvalidSeriesSnafu, JsonSnafu, LoadError, OpenSnafu};

/// Reads a JSON array of daily records.
#[derive(Debug, Clone)]
pub struct JsonSource {
    path: PathBuf,
    symbol: String,
}

impl JsonSource {
    pub fn new(path: impl Into<PathBuf>, symbol: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            symbol: symbol.into(),
        }
    }
}

impl SeriesSource for JsonSource {
    fn load(&self) -> Result<PriceSeries, LoadError> {
        let file = File::open(&self.path).context(OpenSnafu { path: &self.path })?;
        let records: Vec<PriceRecord> = serde_json::from_reader(BufReader::new(file))
            .context(JsonSnafu { path: &self.path })?;

        let points = records.into_iter().map(PricePoint::from).collect();
        let series = PriceSeries::from_unordered(self.symbol.clone(), points)
            .context(InvalidSeriesSnafu { path: &self.path })?;
        info!(
            path = %self.path.display(),
            symbol = %self.symbol,
            points = series.len(),
            "loaded JSON price series"
        );
        Ok(series)
    }
}
