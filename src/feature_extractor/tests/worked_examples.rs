use chrono::{Days, NaiveDate};
use feature_extractor::{DisplayRange, PricePoint, PriceSeries, compute_metrics, compute_overlays};

fn daily(closes: impl IntoIterator<Item = f64>, volume: f64) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
    let points = closes
        .into_iter()
        .enumerate()
        .map(|(i, c)| PricePoint::new(start + Days::new(i as u64), c, c, c, c, volume))
        .collect();
    PriceSeries::new("Uploaded Stock", points).unwrap()
}

#[test]
fn linear_climb_over_25_days() {
    let series = daily((100..125).map(f64::from), 1000.0);
    let metrics = compute_metrics(&series);

    assert!((metrics.price_change_pct - 24.0).abs() < 1e-9);
    assert_eq!(metrics.ma20, 114.5);
    assert_eq!(metrics.support, 105.0);
    assert_eq!(metrics.resistance, 120.0);
    assert_eq!(metrics.average_volume, 1000.0);
    assert_eq!(metrics.recent_volume_change_pct, 0.0);

    let text = metrics.formatted();
    assert_eq!(text.price_change, "24.00");
    assert_eq!(text.ma20, "114.50");
    assert_eq!(text.ma50, "0.00");
    assert_eq!(text.days_analyzed, 25);

    // the metrics sentinel is 0, the overlay for the same window is absent
    let overlays = compute_overlays(&series);
    assert!(overlays.points().iter().all(|p| p.ma50.is_none()));
}

#[test]
fn price_step_after_30_days() {
    let closes = std::iter::repeat_n(100.0, 30).chain(std::iter::repeat_n(200.0, 30));
    let series = daily(closes, 10.0);
    let overlays = compute_overlays(&series);

    assert_eq!(overlays.points()[49].ma50, Some(140.0));
    assert_eq!(overlays.points()[58].ma20, Some(200.0));

    let metrics = compute_metrics(&series);
    assert_eq!(metrics.support, 100.0);
    assert_eq!(metrics.resistance, 200.0);
    assert_eq!(metrics.ma50, 160.0);
}

#[test]
fn single_day_upload() {
    let series = daily([57.25], 300.0);
    let metrics = compute_metrics(&series);

    assert_eq!(metrics.price_change_pct, 0.0);
    assert_eq!(metrics.support, 57.25);
    assert_eq!(metrics.resistance, 57.25);
    assert!(metrics.volatility.is_nan());
    assert_eq!(metrics.formatted().volatility, "NaN");

    let overlays = compute_overlays(&series);
    assert_eq!(overlays.visible(DisplayRange::OneMonth).len(), 1);
    assert_eq!(overlays.points()[0].ma20, None);
}

#[test]
fn all_zero_volume_is_reported_not_hidden() {
    let series = daily([10.0, 11.0, 12.0], 0.0);
    let metrics = compute_metrics(&series);

    assert_eq!(metrics.average_volume, 0.0);
    assert!(metrics.recent_volume_change_pct.is_nan());
    assert!(!metrics.is_finite());
    assert_eq!(metrics.non_finite_fields(), vec!["recentVolumeChange"]);
}
