//! Summary statistics over terminal values.

use crate::{McError, McResult};

/// Mean and 5th/95th percentiles of a run's terminal unemployment values.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SummaryStatistics {
    pub mean: f64,
    pub p5:   f64,
    pub p95:  f64,
}

impl SummaryStatistics {
    /// Compute all three statistics from `values` in one pass over a sorted
    /// copy.
    ///
    /// Returns [`McError::InvalidTrialCount`] for an empty slice rather than
    /// NaN statistics.
    pub fn from_values(values: &[f64]) -> McResult<Self> {
        if values.is_empty() {
            return Err(McError::InvalidTrialCount(0));
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        Ok(Self {
            mean: mean(values),
            p5:   percentile(&sorted, 5.0),
            p95:  percentile(&sorted, 95.0),
        })
    }
}

/// Arithmetic mean.  NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Percentile `q` (0–100) of an ascending-sorted slice, interpolating
/// linearly between the two closest ranks.
///
/// The rank is `h = (n - 1) * q / 100`; the result is
/// `sorted[⌊h⌋] + (h - ⌊h⌋) * (sorted[⌊h⌋ + 1] - sorted[⌊h⌋])`.
/// `q` outside `[0, 100]` is clamped.  NaN for an empty slice.
pub fn percentile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    let h = (n - 1) as f64 * q.clamp(0.0, 100.0) / 100.0;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    let frac = h - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}
