//! Summary statistics of a whole price series.
//!
//! The summary is consumed as text: [`MetricsSummary::formatted`] renders it
//! with the fixed field names and two-decimal precision that the downstream
//! prompt template interpolates.
//!
//! Known quirk: an unavailable moving average is reported as `0` here, while
//! the overlay path ([`compute_overlays`](crate::compute_overlays)) reports it
//! as absent. The prompt text reads a literal `0.00` differently from a
//! missing field, so the two are deliberately not unified.

use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    format::format_fixed,
    models::price_series::PriceSeries,
    window::{mean, tail},
};

pub const SHORT_MA_PERIOD: usize = 20;
pub const LONG_MA_PERIOD: usize = 50;
pub const RECENT_VOLUME_WINDOW: usize = 5;

/// Look-back periods averaged into [`MetricsSummary::momentum`].
pub const MOMENTUM_PERIODS: [usize; 4] = [1, 5, 10, 20];

const SUPPORT_PERCENTILE: usize = 20;
const RESISTANCE_PERCENTILE: usize = 80;

/// Decimal places of every numeric field in [`FormattedMetrics`].
pub const DECIMALS: usize = 2;

/// Raw statistics derived from a [`PriceSeries`].
///
/// Percentages are expressed in percent (`24.0` means +24%).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsSummary {
    /// Change from the first to the last close, in percent.
    pub price_change_pct: f64,
    /// Last close.
    pub current_price: f64,
    /// Mean of the last 20 closes, `0.0` if the series is shorter.
    pub ma20: f64,
    /// Mean of the last 50 closes, `0.0` if the series is shorter.
    pub ma50: f64,
    /// Mean volume over the whole series.
    pub average_volume: f64,
    /// Mean volume over the last five days (fewer if the series is shorter).
    pub recent_volume_avg: f64,
    /// Deviation of `recent_volume_avg` from `average_volume`, in percent.
    pub recent_volume_change_pct: f64,
    /// Sum of the 1/5/10/20-day percent returns divided by four.
    ///
    /// Periods without enough history add nothing to the sum but still count
    /// in the divisor, which understates momentum on short series.
    pub momentum: f64,
    /// Population standard deviation of daily returns, in percent.
    pub volatility: f64,
    /// Close at the 20th percentile (floor index, no interpolation).
    pub support: f64,
    /// Close at the 80th percentile (floor index, no interpolation).
    pub resistance: f64,
    pub days_analyzed: usize,
}

impl MetricsSummary {
    /// Contract names of the fields holding NaN or an infinity.
    pub fn non_finite_fields(&self) -> Vec<&'static str> {
        [
            ("priceChange", self.price_change_pct),
            ("currentPrice", self.current_price),
            ("ma20", self.ma20),
            ("ma50", self.ma50),
            ("averageVolume", self.average_volume),
            ("recentVolumeAvg", self.recent_volume_avg),
            ("recentVolumeChange", self.recent_volume_change_pct),
            ("momentum", self.momentum),
            ("volatility", self.volatility),
            ("support", self.support),
            ("resistance", self.resistance),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_finite())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn is_finite(&self) -> bool {
        self.non_finite_fields().is_empty()
    }

    /// Renders the summary in its external textual form.
    pub fn formatted(&self) -> FormattedMetrics {
        FormattedMetrics {
            price_change: format_fixed(self.price_change_pct, DECIMALS),
            current_price: format_fixed(self.current_price, DECIMALS),
            ma20: format_fixed(self.ma20, DECIMALS),
            ma50: format_fixed(self.ma50, DECIMALS),
            average_volume: format_fixed(self.average_volume, DECIMALS),
            recent_volume_avg: format_fixed(self.recent_volume_avg, DECIMALS),
            recent_volume_change: format_fixed(self.recent_volume_change_pct, DECIMALS),
            momentum: format_fixed(self.momentum, DECIMALS),
            volatility: format_fixed(self.volatility, DECIMALS),
            support: format_fixed(self.support, DECIMALS),
            resistance: format_fixed(self.resistance, DECIMALS),
            days_analyzed: self.days_analyzed,
        }
    }
}

/// [`MetricsSummary`] as text, with the serialized field names the prompt
/// template depends on. Renaming or dropping a field breaks that template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedMetrics {
    pub price_change: String,
    pub current_price: String,
    pub ma20: String,
    pub ma50: String,
    pub average_volume: String,
    pub recent_volume_avg: String,
    pub recent_volume_change: String,
    pub momentum: String,
    pub volatility: String,
    pub support: String,
    pub resistance: String,
    pub days_analyzed: usize,
}

/// Computes the summary statistics of `series`.
///
/// Never fails. Degenerate inputs produce non-finite fields: a single point
/// has no daily returns (NaN volatility), an all-zero volume history divides
/// by zero in the volume change, and a zero close divides by zero in the
/// returns. Those fields are logged at `warn` level and listed by
/// [`MetricsSummary::non_finite_fields`].
pub fn compute_metrics(series: &PriceSeries) -> MetricsSummary {
    let closes: Vec<f64> = series.closes().collect();
    let volumes: Vec<f64> = series.volumes().collect();

    let current_price = series.last().close;
    let average_volume = mean(&volumes);
    let recent_volume_avg = mean(tail(&volumes, RECENT_VOLUME_WINDOW));
    let (support, resistance) = support_resistance(&closes);

    let summary = MetricsSummary {
        price_change_pct: percent_change(series.first().close, current_price),
        current_price,
        ma20: trailing_close_mean(&closes, SHORT_MA_PERIOD),
        ma50: trailing_close_mean(&closes, LONG_MA_PERIOD),
        average_volume,
        recent_volume_avg,
        recent_volume_change_pct: percent_change(average_volume, recent_volume_avg),
        momentum: momentum(&closes),
        volatility: volatility(&closes),
        support,
        resistance,
        days_analyzed: series.len(),
    };

    let non_finite = summary.non_finite_fields();
    if !non_finite.is_empty() {
        warn!(
            symbol = series.symbol(),
            fields = ?non_finite,
            "metrics contain non-finite values"
        );
    }
    debug!(
        symbol = series.symbol(),
        days = summary.days_analyzed,
        "computed series metrics"
    );

    summary
}

fn percent_change(from: f64, to: f64) -> f64 {
    (to - from) / from * 100.0
}

/// `0.0` is a sentinel for "not enough history", see the module docs.
fn trailing_close_mean(closes: &[f64], period: usize) -> f64 {
    if closes.len() < period {
        return 0.0;
    }
    mean(tail(closes, period))
}

/// A period contributes only if the close `period` days before the last one
/// exists, i.e. the series is longer than the period.
fn momentum(closes: &[f64]) -> f64 {
    let last = closes.len() - 1;
    let total: f64 = MOMENTUM_PERIODS
        .iter()
        .filter(|&&period| period <= last)
        .map(|&period| percent_change(closes[last - period], closes[last]))
        .sum();
    total / MOMENTUM_PERIODS.len() as f64
}

fn volatility(closes: &[f64]) -> f64 {
    let returns: Vec<f64> = closes.windows(2).map(|w| (w[1] - w[0]) / w[0]).collect();
    let mean_return = mean(&returns);
    let variance = returns
        .iter()
        .map(|r| (r - mean_return).powi(2))
        .sum::<f64>()
        / returns.len() as f64;
    variance.sqrt() * 100.0
}

fn support_resistance(closes: &[f64]) -> (f64, f64) {
    let mut sorted = closes.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    (
        sorted[percentile_index(n, SUPPORT_PERCENTILE)],
        sorted[percentile_index(n, RESISTANCE_PERCENTILE)],
    )
}

/// `floor(len * percentile / 100)`, always a valid index for `len >= 1` and
/// `percentile < 100`.
fn percentile_index(len: usize, percentile: usize) -> usize {
    len * percentile / 100
}
