//! Accelerometer Window Access

use crate::error::FeatureError;
use serde::{Deserialize, Serialize};

/// One (x, y, z) accelerometer reading
pub type Sample = [f64; 3];

/// Accelerometer axis, in vector order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in the order features are emitted
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Column index within a sample
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Lowercase name used in feature labels
    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// Copy one axis out of the window
pub fn column(window: &[Sample], axis: Axis) -> Vec<f64> {
    let idx = axis.index();
    window.iter().map(|s| s[idx]).collect()
}

/// Copy all three axes out of the window
pub fn columns(window: &[Sample]) -> [Vec<f64>; 3] {
    Axis::ALL.map(|axis| column(window, axis))
}

/// Every value of the window, row by row
pub fn flatten(window: &[Sample]) -> Vec<f64> {
    window.iter().flat_map(|s| s.iter().copied()).collect()
}

/// Build samples from a row-major N×3 slice
pub fn samples_from_flat(values: &[f64]) -> Result<Vec<Sample>, FeatureError> {
    if values.len() % 3 != 0 {
        return Err(FeatureError::RaggedWindow(values.len()));
    }
    Ok(values
        .chunks_exact(3)
        .map(|row| [row[0], row[1], row[2]])
        .collect())
}
