//! JSON documents printed by the command-line front end.

use std::io::Write;

use feature_extractor::{
    DisplayRange, FormattedMetrics, MetricsSummary, OverlayPoint, OverlaySeries, PriceSeries,
};
use serde::Serialize;
use tracing::warn;

use crate::{config::NonFinitePolicy, errors::ReportError};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsReport<'a> {
    pub symbol: &'a str,
    pub metrics: FormattedMetrics,
    /// Fields rendered as `NaN` / `Infinity`, omitted when empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub non_finite: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayReport<'a> {
    pub symbol: &'a str,
    pub range: DisplayRange,
    /// Length of the full series the overlays were computed on.
    pub total_points: usize,
    pub points: &'a [OverlayPoint],
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport<'a> {
    #[serde(flatten)]
    pub metrics: MetricsReport<'a>,
    pub overlays: OverlayReport<'a>,
}

impl<'a> MetricsReport<'a> {
    pub fn new(series: &'a PriceSeries, summary: &MetricsSummary) -> Self {
        Self {
            symbol: series.symbol(),
            metrics: summary.formatted(),
            non_finite: summary.non_finite_fields(),
        }
    }
}

impl<'a> OverlayReport<'a> {
    pub fn new(series: &'a PriceSeries, overlays: &'a OverlaySeries, range: DisplayRange) -> Self {
        Self {
            symbol: series.symbol(),
            range,
            total_points: overlays.len(),
            points: overlays.visible(range),
        }
    }
}

/// Applies `policy` to a computed summary.
pub fn check_policy(summary: &MetricsSummary, policy: NonFinitePolicy) -> Result<(), ReportError> {
    let fields = summary.non_finite_fields();
    if fields.is_empty() {
        return Ok(());
    }
    match policy {
        NonFinitePolicy::Report => Ok(()),
        NonFinitePolicy::Reject => {
            warn!(?fields, "rejecting metrics with non-finite values");
            Err(ReportError::NonFiniteMetrics { fields })
        }
    }
}

/// Writes `value` as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(mut out: W, value: &T) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
