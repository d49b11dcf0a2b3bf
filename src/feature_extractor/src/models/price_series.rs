//! A validated, date-ordered sequence of daily bars for one instrument.

use std::cmp::Ordering;

use serde::Serialize;

use crate::{errors::SeriesError, models::price_point::PricePoint};

/// A complete daily history for a single instrument.
///
/// Invariants, enforced on construction:
/// - at least one point;
/// - dates strictly ascending (no duplicates);
/// - every price and volume finite and non-negative.
///
/// Zero closes and zero volumes are accepted. The metrics derived from them
/// are non-finite, which is the documented behavior of
/// [`compute_metrics`](crate::compute_metrics).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    symbol: String,
    points: Vec<PricePoint>,
}

#[allow(clippy::len_without_is_empty)]
impl PriceSeries {
    /// Builds a series from points that are already in ascending date order.
    pub fn new(symbol: impl Into<String>, points: Vec<PricePoint>) -> Result<Self, SeriesError> {
        validate(&points)?;
        Ok(Self {
            symbol: symbol.into(),
            points,
        })
    }

    /// Builds a series from points in any order, e.g. a newest-first feed.
    ///
    /// Points are sorted by date before validation, so only duplicates and
    /// invalid values can still fail.
    pub fn from_unordered(
        symbol: impl Into<String>,
        mut points: Vec<PricePoint>,
    ) -> Result<Self, SeriesError> {
        points.sort_by_key(|p| p.date);
        Self::new(symbol, points)
    }

    /// Display label of the instrument (e.g. "AAPL" or "Uploaded Stock").
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Number of trading days, always at least one.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn first(&self) -> &PricePoint {
        &self.points[0]
    }

    pub fn last(&self) -> &PricePoint {
        &self.points[self.points.len() - 1]
    }

    pub fn closes(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.close)
    }

    pub fn volumes(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.volume)
    }
}

fn validate(points: &[PricePoint]) -> Result<(), SeriesError> {
    if points.is_empty() {
        return Err(SeriesError::Empty);
    }

    for (index, point) in points.iter().enumerate() {
        if let Some((field, value)) = point.first_invalid_field() {
            return Err(SeriesError::InvalidValue {
                index,
                field,
                value,
            });
        }

        if index == 0 {
            continue;
        }
        match points[index - 1].date.cmp(&point.date) {
            Ordering::Less => {}
            Ordering::Equal => {
                return Err(SeriesError::DuplicateDate {
                    index,
                    date: point.date,
                });
            }
            Ordering::Greater => {
                return Err(SeriesError::OutOfOrder {
                    index,
                    date: point.date,
                });
            }
        }
    }

    Ok(())
}
