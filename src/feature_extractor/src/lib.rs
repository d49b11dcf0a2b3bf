//! Feature extraction for daily OHLCV price series.
//!
//! The crate turns a [`PriceSeries`] into two independent outputs:
//!
//! - a [`MetricsSummary`] (price change, moving averages, volume trend,
//!   momentum, volatility, support/resistance) meant to be rendered as text
//!   for a narrative generator, see [`compute_metrics`];
//! - an [`OverlaySeries`] of causal moving averages aligned with the input,
//!   meant for chart overlays, see [`compute_overlays`].
//!
//! Everything here is pure and synchronous. Degenerate inputs never panic;
//! they yield non-finite numbers that callers can inspect through
//! [`MetricsSummary::non_finite_fields`].
//!
//! ```
//! use chrono::NaiveDate;
//! use feature_extractor::{PricePoint, PriceSeries, compute_metrics, compute_overlays};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let points = (0..25)
//!     .map(|i| {
//!         let close = 100.0 + i as f64;
//!         PricePoint::new(start + chrono::Days::new(i), close, close, close, close, 1000.0)
//!     })
//!     .collect();
//! let series = PriceSeries::new("DEMO", points).unwrap();
//!
//! let metrics = compute_metrics(&series);
//! assert_eq!(metrics.ma20, 114.5);
//!
//! let overlays = compute_overlays(&series);
//! assert_eq!(overlays.len(), series.len());
//! assert!(overlays.points()[18].ma20.is_none());
//! ```

pub mod display;
pub mod errors;
pub mod format;
pub mod metrics;
pub mod models;
pub mod overlays;
pub mod window;

pub use display::DisplayRange;
pub use errors::SeriesError;
pub use metrics::{FormattedMetrics, MetricsSummary, compute_metrics};
pub use models::{price_point::PricePoint, price_series::PriceSeries};
pub use overlays::{OverlayPoint, OverlaySeries, compute_overlays};
