//! Statistical Features Computation
//!
//! Per-column helpers operate on one axis. NaN in any input value
//! propagates to the result; empty input yields NaN for the moments.

use crate::window::{self, Sample};
use serde::{Deserialize, Serialize};

/// Arithmetic mean
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median (mean of the two middle values for even lengths)
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() || values.iter().any(|v| v.is_nan()) {
        return f64::NAN;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Population variance (divisor N)
pub fn variance(values: &[f64]) -> f64 {
    let mu = mean(values);
    let m2: f64 = values.iter().map(|&v| (v - mu) * (v - mu)).sum();
    m2 / values.len() as f64
}

/// Population standard deviation (divisor N)
pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Minimum value
pub fn min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, |acc, v| {
        if acc.is_nan() || v.is_nan() {
            f64::NAN
        } else {
            acc.min(v)
        }
    })
}

/// Maximum value
pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, |acc, v| {
        if acc.is_nan() || v.is_nan() {
            f64::NAN
        } else {
            acc.max(v)
        }
    })
}

/// Adjacent pairs with strictly opposite signs.
///
/// A zero on either side never counts, the product must be negative.
pub fn zero_crossings(values: &[f64]) -> usize {
    values.windows(2).filter(|pair| pair[0] * pair[1] < 0.0).count()
}

/// Euclidean norm of an (x, y, z) triple
pub fn magnitude(v: [f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

/// Per-axis statistics of one window, each triple in (x, y, z) order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisStatistics {
    pub mean: [f64; 3],
    pub median: [f64; 3],
    pub std_dev: [f64; 3],
    pub variance: [f64; 3],
    pub min: [f64; 3],
    pub max: [f64; 3],
    pub zero_crossings: [usize; 3],
}

impl AxisStatistics {
    /// Compute every per-axis statistic over the window
    pub fn compute(window: &[Sample]) -> Self {
        let cols = window::columns(window);

        Self {
            mean: cols.each_ref().map(|c| mean(c)),
            median: cols.each_ref().map(|c| median(c)),
            std_dev: cols.each_ref().map(|c| std_dev(c)),
            variance: cols.each_ref().map(|c| variance(c)),
            min: cols.each_ref().map(|c| min(c)),
            max: cols.each_ref().map(|c| max(c)),
            zero_crossings: cols.each_ref().map(|c| zero_crossings(c)),
        }
    }

    pub fn mean_magnitude(&self) -> f64 {
        magnitude(self.mean)
    }

    pub fn median_magnitude(&self) -> f64 {
        magnitude(self.median)
    }

    pub fn std_magnitude(&self) -> f64 {
        magnitude(self.std_dev)
    }

    /// Not part of the default feature vector
    pub fn variance_magnitude(&self) -> f64 {
        magnitude(self.variance)
    }
}
