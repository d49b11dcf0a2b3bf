//! Canonical in-memory representation of one trading day (OHLCV).
//!
//! Every data source (file loader, market-data client, test fixture) hands the
//! feature extractor values of this shape.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single daily OHLCV record.
///
/// `close` is the canonical price used by every derived metric; the other
/// prices are carried through untouched so overlays can be drawn next to the
/// raw candle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading day, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,

    /// Opening price.
    pub open: f64,

    /// Highest price of the day.
    pub high: f64,

    /// Lowest price of the day.
    pub low: f64,

    /// Closing price.
    pub close: f64,

    /// Volume traded during the day.
    pub volume: f64,
}

impl PricePoint {
    pub const fn new(
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Returns the name and value of the first field that is negative or not
    /// finite, in `open, high, low, close, volume` order.
    pub(crate) fn first_invalid_field(&self) -> Option<(&'static str, f64)> {
        [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
            ("volume", self.volume),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite() || *value < 0.0)
    }
}
