use chrono::NaiveDate;
use thiserror::Error;

/// Reasons a sequence of [`PricePoint`](crate::PricePoint)s cannot form a
/// [`PriceSeries`](crate::PriceSeries).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    /// A series needs at least one point.
    #[error("price series is empty")]
    Empty,

    /// Two points share the same trading day.
    #[error("duplicate date {date} at index {index}")]
    DuplicateDate { index: usize, date: NaiveDate },

    /// A point is dated before its predecessor.
    #[error("date {date} at index {index} is earlier than the previous point")]
    OutOfOrder { index: usize, date: NaiveDate },

    /// A price or volume is negative, NaN or infinite.
    #[error("invalid {field} value {value} at index {index}")]
    InvalidValue {
        index: usize,
        field: &'static str,
        value: f64,
    },
}
