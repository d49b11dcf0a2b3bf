//! Fixed-decimal rendering for values that end up in prompt text.

/// Renders `value` with exactly `decimals` fractional digits.
///
/// Non-finite values keep their textual names (`NaN`, `Infinity`,
/// `-Infinity`) instead of Rust's `inf`, and negative zero prints as zero.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // -0.0 == 0.0, this folds the sign away
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.decimals$}")
}
