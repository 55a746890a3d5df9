//! Equal-width Histogram and First-bin Entropy

use serde::{Deserialize, Serialize};

/// Default number of histogram bins
pub const DEFAULT_BINS: usize = 10;

/// Equal-width histogram over the range of its input.
///
/// Bins are half-open `[lo, hi)` except the last, which is closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// Bin edges, `counts.len() + 1` of them
    pub edges: Vec<f64>,
    /// Values per bin
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width bins.
    ///
    /// A constant input widens the range to `(v - 0.5, v + 0.5)`. Returns
    /// `None` for empty input, zero bins, or a non-finite range.
    pub fn compute(values: &[f64], bins: usize) -> Option<Self> {
        if values.is_empty() || bins == 0 {
            return None;
        }

        let (mut first, mut last) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if values.iter().any(|v| v.is_nan()) || !first.is_finite() || !last.is_finite() {
            return None;
        }
        if first == last {
            first -= 0.5;
            last += 0.5;
        }

        let step = (last - first) / bins as f64;
        let mut edges: Vec<f64> = (0..bins).map(|i| first + i as f64 * step).collect();
        edges.push(last);

        let norm = bins as f64 / (last - first);
        let mut counts = vec![0usize; bins];
        for &v in values {
            let mut idx = (((v - first) * norm) as usize).min(bins - 1);
            // Rounding in the scaled index can land one bin off the edges
            if idx > 0 && v < edges[idx] {
                idx -= 1;
            } else if idx + 1 < bins && v >= edges[idx + 1] {
                idx += 1;
            }
            counts[idx] += 1;
        }

        Some(Self { edges, counts })
    }

    /// Number of bins
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Count of the lowest bin
    pub fn first_count(&self) -> usize {
        self.counts.first().copied().unwrap_or(0)
    }
}

/// `count * log10(count)`, NaN for a zero count
pub fn first_bin_entropy(count: usize) -> f64 {
    let c = count as f64;
    c * c.log10()
}
