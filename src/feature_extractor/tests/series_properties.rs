use chrono::{Days, NaiveDate};
use feature_extractor::{
    DisplayRange, MetricsSummary, OverlaySeries, PricePoint, PriceSeries, compute_metrics,
    compute_overlays,
};
use proptest::prelude::*;

fn build(closes: &[f64], volumes: &[f64]) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let points = closes
        .iter()
        .zip(volumes)
        .enumerate()
        .map(|(i, (&close, &volume))| {
            PricePoint::new(
                start + Days::new(i as u64),
                close,
                close * 1.01,
                close * 0.99,
                close,
                volume,
            )
        })
        .collect();
    PriceSeries::new("PROP", points).unwrap()
}

fn series_strategy() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (1usize..160).prop_flat_map(|len| {
        (
            proptest::collection::vec(1.0f64..500.0, len),
            proptest::collection::vec(0.0f64..1.0e7, len),
        )
    })
}

#[test]
fn outputs_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PriceSeries>();
    assert_send_sync::<MetricsSummary>();
    assert_send_sync::<OverlaySeries>();
}

#[test]
fn increasing_closes_order_the_moving_averages() {
    let closes: Vec<f64> = (0..80).map(|i| 10.0 + 0.75 * i as f64).collect();
    let series = build(&closes, &vec![500.0; closes.len()]);

    let overlays = compute_overlays(&series);
    let last = overlays.points().last().unwrap();
    let ma20 = last.ma20.unwrap();
    let ma50 = last.ma50.unwrap();
    assert!(ma50 <= ma20, "ma50 {ma50} > ma20 {ma20}");
    assert!(ma20 <= last.point.close);

    let metrics = compute_metrics(&series);
    assert!(metrics.ma50 <= metrics.ma20);
    assert!(metrics.ma20 <= metrics.current_price);
}

#[test]
fn metrics_and_overlays_agree_on_the_last_point() {
    let closes: Vec<f64> = (0..120).map(|i| 50.0 + ((i * 7) % 13) as f64).collect();
    let series = build(&closes, &vec![1.0; closes.len()]);

    let metrics = compute_metrics(&series);
    let overlays = compute_overlays(&series);
    let last = overlays.points().last().unwrap();

    assert!((metrics.ma20 - last.ma20.unwrap()).abs() < 1e-9);
    assert!((metrics.ma50 - last.ma50.unwrap()).abs() < 1e-9);
}

#[test]
fn calls_are_idempotent() {
    let closes: Vec<f64> = (0..40).map(|i| 20.0 + (i % 5) as f64).collect();
    let series = build(&closes, &vec![3.0; closes.len()]);

    assert_eq!(compute_metrics(&series), compute_metrics(&series));
    assert_eq!(compute_overlays(&series), compute_overlays(&series));
}

proptest! {
    #[test]
    fn overlays_never_look_ahead((closes, volumes) in series_strategy(), cut in 1usize..160) {
        let full = build(&closes, &volumes);
        let cut = cut.min(closes.len());
        let prefix = build(&closes[..cut], &volumes[..cut]);

        let full_overlays = compute_overlays(&full);
        let prefix_overlays = compute_overlays(&prefix);

        prop_assert_eq!(prefix_overlays.points(), &full_overlays.points()[..cut]);
    }

    #[test]
    fn support_never_exceeds_resistance((closes, volumes) in series_strategy()) {
        let metrics = compute_metrics(&build(&closes, &volumes));
        prop_assert!(metrics.support <= metrics.resistance);
        let min = closes.iter().copied().fold(f64::INFINITY, f64::min);
        let max = closes.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(metrics.support >= min && metrics.resistance <= max);
    }

    #[test]
    fn overlays_are_aligned_and_windowed((closes, volumes) in series_strategy()) {
        let overlays = compute_overlays(&build(&closes, &volumes));
        prop_assert_eq!(overlays.len(), closes.len());

        for (i, p) in overlays.points().iter().enumerate() {
            prop_assert_eq!(p.ma20.is_some(), i >= 19);
            prop_assert_eq!(p.ma50.is_some(), i >= 49);
            prop_assert_eq!(p.volume_ma10.is_some(), i >= 9);
            if let Some(ma20) = p.ma20 {
                let naive = closes[i - 19..=i].iter().sum::<f64>() / 20.0;
                prop_assert!((ma20 - naive).abs() <= 1e-9 * naive.abs().max(1.0));
            }
        }
    }

    #[test]
    fn visible_window_is_the_tail((closes, volumes) in series_strategy()) {
        let overlays = compute_overlays(&build(&closes, &volumes));
        for range in DisplayRange::ALL_RANGES {
            let visible = overlays.visible(range);
            let expected = range.max_points().map_or(closes.len(), |n| n.min(closes.len()));
            prop_assert_eq!(visible.len(), expected);
            prop_assert_eq!(visible, &overlays.points()[closes.len() - expected..]);
        }
    }

    #[test]
    fn only_single_points_have_undefined_volatility((closes, volumes) in series_strategy()) {
        let metrics = compute_metrics(&build(&closes, &volumes));
        prop_assert!(metrics.momentum.is_finite());
        prop_assert!(metrics.volatility.is_nan() == (closes.len() == 1));
    }
}
