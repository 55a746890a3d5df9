//! Feature Vector Assembly
//!
//! Layout for the default configuration (31 values):
//!
//! | index  | feature                                   |
//! |--------|-------------------------------------------|
//! | 0..3   | mean x, y, z                              |
//! | 3..6   | median x, y, z                            |
//! | 6..9   | population std dev x, y, z                |
//! | 9      | mean magnitude                            |
//! | 10     | median magnitude                          |
//! | 11     | std dev magnitude                         |
//! | 12..15 | zero crossings x, y, z                    |
//! | 15..18 | min x, y, z                               |
//! | 18..21 | max x, y, z                               |
//! | 21..30 | one-sided DFT, bin-major, real part       |
//! | 30     | first-bin histogram entropy               |

use crate::config::{EmptyBinPolicy, FeatureConfig, ShortWindowPolicy};
use crate::error::FeatureError;
use crate::fft::FftAnalyzer;
use crate::histogram::{first_bin_entropy, Histogram};
use crate::statistics::AxisStatistics;
use crate::window::{self, Axis, Sample};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Minimum samples for adjacent-pair features
pub const MIN_SAMPLES: usize = 2;

/// Feature values preceding the frequency block
const TIME_DOMAIN_FEATURES: usize = 3 + 3 + 3 + 1 + 1 + 1 + 3 + 3 + 3;

/// Feature vector for a downstream classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Feature values in fixed positional order
    pub values: Vec<f64>,
}

impl FeatureVector {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Compact binary encoding for storage
    pub fn to_bytes(&self) -> Result<Vec<u8>, FeatureError> {
        Ok(postcard::to_allocvec(self)?)
    }

    /// Decode a vector written by [`FeatureVector::to_bytes`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FeatureError> {
        Ok(postcard::from_bytes(bytes)?)
    }
}

/// Feature extractor over accelerometer windows.
///
/// Holds only immutable configuration and a planned FFT, so one extractor
/// can serve many threads at once.
#[derive(Debug)]
pub struct FeatureExtractor {
    config: FeatureConfig,
    /// FFT analyzer
    fft_analyzer: FftAnalyzer,
    /// Output length
    dimension: usize,
}

impl FeatureExtractor {
    /// Create a new feature extractor
    pub fn new(config: FeatureConfig) -> Result<Self, FeatureError> {
        config.validate()?;
        let extractor = Self::planned(config);

        debug!(
            "Feature extractor ready: dimension={}, fft_length={}, flattening={:?}",
            extractor.dimension, extractor.config.fft_length, extractor.config.fft_flattening
        );
        Ok(extractor)
    }

    /// Plan the FFT for an already validated config
    fn planned(config: FeatureConfig) -> Self {
        let fft_analyzer = FftAnalyzer::new(config.fft_length, config.fft_flattening);
        let dimension = TIME_DOMAIN_FEATURES + fft_analyzer.output_len(Axis::ALL.len()) + 1;
        Self {
            config,
            fft_analyzer,
            dimension,
        }
    }

    pub fn config(&self) -> &FeatureConfig {
        &self.config
    }

    /// Length of every vector this extractor produces
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Label of each position in the vector
    pub fn feature_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.dimension);
        for stat in ["mean", "median", "std"] {
            names.extend(Axis::ALL.iter().map(|a| format!("{}_{}", stat, a.name())));
        }
        names.push("mean_magnitude".into());
        names.push("median_magnitude".into());
        names.push("std_magnitude".into());
        for stat in ["zero_crossings", "min", "max"] {
            names.extend(Axis::ALL.iter().map(|a| format!("{}_{}", stat, a.name())));
        }

        let components = self.fft_analyzer.flattening().component_names();
        for bin in 0..self.fft_analyzer.bins() {
            for axis in Axis::ALL {
                for part in components {
                    names.push(format!("fft_bin{}_{}_{}", bin, axis.name(), part));
                }
            }
        }
        names.push("first_bin_entropy".into());
        names
    }

    /// Extract features from one window of (x, y, z) samples
    pub fn extract(&self, window: &[Sample]) -> Result<FeatureVector, FeatureError> {
        self.check_length(window.len())?;

        let stats = AxisStatistics::compute(window);
        trace!(?stats, "Per-axis statistics");

        let mut values = Vec::with_capacity(self.dimension);
        values.extend_from_slice(&stats.mean);
        values.extend_from_slice(&stats.median);
        values.extend_from_slice(&stats.std_dev);
        values.push(stats.mean_magnitude());
        values.push(stats.median_magnitude());
        values.push(stats.std_magnitude());
        values.extend(stats.zero_crossings.iter().map(|&c| c as f64));
        values.extend_from_slice(&stats.min);
        values.extend_from_slice(&stats.max);

        let columns = window::columns(window);
        values.extend(self.fft_analyzer.analyze(&columns));

        values.push(self.entropy(window)?);

        debug!(
            "Extracted features: samples={}, dimension={}",
            window.len(),
            values.len()
        );
        debug_assert_eq!(values.len(), self.dimension);

        Ok(FeatureVector { values })
    }

    /// Extract one vector per window, failing on the first bad window
    pub fn extract_batch<I, W>(&self, windows: I) -> Result<Vec<FeatureVector>, FeatureError>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<[Sample]>,
    {
        windows
            .into_iter()
            .map(|w| self.extract(w.as_ref()))
            .collect()
    }

    fn check_length(&self, len: usize) -> Result<(), FeatureError> {
        if len == 0 {
            return Err(FeatureError::EmptyWindow);
        }
        if len < MIN_SAMPLES && self.config.short_window == ShortWindowPolicy::Reject {
            return Err(FeatureError::InsufficientSamples {
                required: MIN_SAMPLES,
                actual: len,
            });
        }
        Ok(())
    }

    fn entropy(&self, window: &[Sample]) -> Result<f64, FeatureError> {
        let flat = window::flatten(window);
        let bins = self.config.histogram_bins;

        let Some(hist) = Histogram::compute(&flat, bins) else {
            // Non-finite samples, nothing sensible to bin
            return Ok(f64::NAN);
        };

        match (hist.first_count(), self.config.empty_first_bin) {
            (0, EmptyBinPolicy::Reject) => Err(FeatureError::DegenerateHistogram { bins }),
            (0, EmptyBinPolicy::Sentinel(value)) => {
                warn!("Empty first histogram bin, using sentinel {}", value);
                Ok(value)
            }
            (0, EmptyBinPolicy::Zero) => {
                warn!("Empty first histogram bin, using 0");
                Ok(0.0)
            }
            (count, _) => Ok(first_bin_entropy(count)),
        }
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::planned(FeatureConfig::default())
    }
}
