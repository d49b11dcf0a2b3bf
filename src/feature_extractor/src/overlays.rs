//! Per-point moving averages for chart overlays.
//!
//! Every overlay value at index `i` is computed from points `0..=i` only.
//! Before a window is full the value is `None` (serialized as `null`), never
//! zero, since zero is a legitimate average.

use serde::Serialize;
use tracing::debug;

use crate::{
    display::DisplayRange,
    models::{price_point::PricePoint, price_series::PriceSeries},
    window::{RollingMean, period},
};

pub const CLOSE_SHORT_WINDOW: usize = 20;
pub const CLOSE_LONG_WINDOW: usize = 50;
pub const VOLUME_WINDOW: usize = 10;

/// A price point together with the overlay values at its position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverlayPoint {
    #[serde(flatten)]
    pub point: PricePoint,
    /// 20-day trailing mean of `close`.
    pub ma20: Option<f64>,
    /// 50-day trailing mean of `close`.
    pub ma50: Option<f64>,
    /// 10-day trailing mean of `volume`.
    #[serde(rename = "volumeMA")]
    pub volume_ma10: Option<f64>,
}

/// Overlays aligned index-for-index with the series they were computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OverlaySeries {
    points: Vec<OverlayPoint>,
}

impl OverlaySeries {
    pub fn points(&self) -> &[OverlayPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The trailing window shown for `range`.
    ///
    /// Values keep the history that precedes the window, because they were
    /// computed over the whole series before truncation.
    pub fn visible(&self, range: DisplayRange) -> &[OverlayPoint] {
        range.slice(&self.points)
    }
}

/// Computes the 20/50-day close averages and the 10-day volume average for
/// every point of `series`.
///
/// Runs in O(n · w) for the fixed window lengths w ≤ 50.
pub fn compute_overlays(series: &PriceSeries) -> OverlaySeries {
    let mut close_short = RollingMean::new(period(CLOSE_SHORT_WINDOW));
    let mut close_long = RollingMean::new(period(CLOSE_LONG_WINDOW));
    let mut volume = RollingMean::new(period(VOLUME_WINDOW));

    let points: Vec<OverlayPoint> = series
        .points()
        .iter()
        .map(|&point| OverlayPoint {
            point,
            ma20: close_short.push(point.close),
            ma50: close_long.push(point.close),
            volume_ma10: volume.push(point.volume),
        })
        .collect();

    debug!(
        symbol = series.symbol(),
        points = points.len(),
        "computed chart overlays"
    );

    OverlaySeries { points }
}
