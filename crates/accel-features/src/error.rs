//! Feature Extraction Error Types

use thiserror::Error;

/// Errors during feature extraction
#[derive(Debug, Clone, Error)]
pub enum FeatureError {
    /// Window holds no samples at all
    #[error("Window is empty")]
    EmptyWindow,

    /// Window too short for adjacent-pair features
    #[error("Window has {actual} samples, at least {required} required")]
    InsufficientSamples { required: usize, actual: usize },

    /// First histogram bin is empty, log10(0) is undefined
    #[error("First histogram bin is empty over {bins} bins")]
    DegenerateHistogram { bins: usize },

    /// Flat input not a whole number of (x, y, z) rows
    #[error("Flat window of {0} values is not a multiple of 3")]
    RaggedWindow(usize),

    /// Configuration rejected at construction
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Binary encoding or decoding failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<postcard::Error> for FeatureError {
    fn from(err: postcard::Error) -> Self {
        FeatureError::Serialization(err.to_string())
    }
}
