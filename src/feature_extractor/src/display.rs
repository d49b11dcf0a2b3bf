//! Chart display windows.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown display range '{0}', expected one of 1M, 3M, 6M, 1Y, ALL")]
pub struct ParseDisplayRangeError(pub String);

/// How many trailing trading days a chart shows.
///
/// The window is applied after overlays are computed over the full series,
/// so the first visible moving-average values still include older history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DisplayRange {
    /// Last 30 points.
    #[default]
    OneMonth,
    /// Last 90 points.
    ThreeMonths,
    /// Last 180 points.
    SixMonths,
    /// Last 365 points.
    OneYear,
    /// Every point.
    All,
}

impl DisplayRange {
    pub const ALL_RANGES: [DisplayRange; 5] = [
        DisplayRange::OneMonth,
        DisplayRange::ThreeMonths,
        DisplayRange::SixMonths,
        DisplayRange::OneYear,
        DisplayRange::All,
    ];

    /// Maximum number of visible points, `None` for [`DisplayRange::All`].
    pub const fn max_points(self) -> Option<usize> {
        match self {
            DisplayRange::OneMonth => Some(30),
            DisplayRange::ThreeMonths => Some(90),
            DisplayRange::SixMonths => Some(180),
            DisplayRange::OneYear => Some(365),
            DisplayRange::All => None,
        }
    }

    /// The trailing part of `items` this range shows.
    pub fn slice<T>(self, items: &[T]) -> &[T] {
        match self.max_points() {
            Some(n) => &items[items.len().saturating_sub(n)..],
            None => items,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            DisplayRange::OneMonth => "1M",
            DisplayRange::ThreeMonths => "3M",
            DisplayRange::SixMonths => "6M",
            DisplayRange::OneYear => "1Y",
            DisplayRange::All => "ALL",
        }
    }
}

impl fmt::Display for DisplayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DisplayRange {
    type Err = ParseDisplayRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "1M" => Ok(DisplayRange::OneMonth),
            "3M" => Ok(DisplayRange::ThreeMonths),
            "6M" => Ok(DisplayRange::SixMonths),
            "1Y" => Ok(DisplayRange::OneYear),
            "ALL" => Ok(DisplayRange::All),
            _ => Err(ParseDisplayRangeError(s.to_string())),
        }
    }
}

impl TryFrom<String> for DisplayRange {
    type Error = ParseDisplayRangeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DisplayRange> for String {
    fn from(range: DisplayRange) -> Self {
        range.label().to_string()
    }
}
