//! Feature extraction configuration

use crate::error::FeatureError;
use crate::fft::FftFlattening;
use crate::histogram::DEFAULT_BINS;
use serde::{Deserialize, Serialize};

/// Default FFT length per column
pub const DEFAULT_FFT_LENGTH: usize = 5;

/// Handling of windows with fewer than two samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortWindowPolicy {
    /// Fail with `InsufficientSamples`
    #[default]
    Reject,
    /// Accept a single sample and report zero crossings as 0
    ZeroCrossingsAsZero,
}

/// Handling of an empty first histogram bin
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyBinPolicy {
    /// Fail with `DegenerateHistogram`
    Reject,
    /// Emit this value in place of the entropy
    Sentinel(f64),
    /// Emit 0.0, the limit of c * log10(c) as c -> 0
    #[default]
    Zero,
}

/// Feature extraction configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Points per column fed to the DFT (truncate or zero-pad)
    pub fft_length: usize,

    /// Real-valued form of each complex bin
    pub fft_flattening: FftFlattening,

    /// Equal-width bins for the entropy histogram
    pub histogram_bins: usize,

    pub short_window: ShortWindowPolicy,

    pub empty_first_bin: EmptyBinPolicy,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            fft_length: DEFAULT_FFT_LENGTH,
            fft_flattening: FftFlattening::RealPart,
            histogram_bins: DEFAULT_BINS,
            short_window: ShortWindowPolicy::Reject,
            empty_first_bin: EmptyBinPolicy::Zero,
        }
    }
}

impl FeatureConfig {
    /// Fail on every degenerate input instead of substituting values
    pub fn strict() -> Self {
        Self {
            short_window: ShortWindowPolicy::Reject,
            empty_first_bin: EmptyBinPolicy::Reject,
            ..Default::default()
        }
    }

    /// Keep both real and imaginary parts of each bin
    pub fn complex_spectrum() -> Self {
        Self {
            fft_flattening: FftFlattening::RealImaginary,
            ..Default::default()
        }
    }

    /// Check parameters before planning
    pub fn validate(&self) -> Result<(), FeatureError> {
        if self.fft_length == 0 {
            return Err(FeatureError::InvalidConfig(
                "fft_length must be at least 1".into(),
            ));
        }
        if self.histogram_bins == 0 {
            return Err(FeatureError::InvalidConfig(
                "histogram_bins must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
