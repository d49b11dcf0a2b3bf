//! Trailing-window arithmetic shared by the metrics and overlay paths.

use std::{collections::VecDeque, num::NonZeroUsize};

/// Unwraps a window length at compile time.
pub(crate) const fn period(n: usize) -> NonZeroUsize {
    match NonZeroUsize::new(n) {
        Some(p) => p,
        None => panic!("window period must be non-zero"),
    }
}

/// Streaming simple moving average over the last `period` values.
///
/// Each [`push`](RollingMean::push) sums the buffered values afresh, so a
/// result always equals [`mean`] of the trailing `period` values exactly.
#[derive(Debug, Clone)]
pub struct RollingMean {
    period: NonZeroUsize,
    window: VecDeque<f64>,
}

impl RollingMean {
    pub fn new(period: NonZeroUsize) -> Self {
        Self {
            period,
            window: VecDeque::with_capacity(period.get() + 1),
        }
    }

    /// Feeds the next value and returns the mean of the trailing window, or
    /// `None` while fewer than `period` values have been seen.
    pub fn push(&mut self, value: f64) -> Option<f64> {
        self.window.push_back(value);
        if self.window.len() > self.period.get() {
            self.window.pop_front();
        }

        (self.window.len() == self.period.get())
            .then(|| self.window.iter().sum::<f64>() / self.period.get() as f64)
    }
}

/// Mean of `values`; NaN for an empty slice.
pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// The last `n` elements of `values`, or all of them if there are fewer.
pub(crate) fn tail(values: &[f64], n: usize) -> &[f64] {
    &values[values.len().saturating_sub(n)..]
}
