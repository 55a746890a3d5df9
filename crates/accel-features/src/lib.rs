//! Accelerometer Feature Engine
//!
//! Turns a window of tri-axial accelerometer samples into a fixed-length
//! feature vector of per-axis statistics, their magnitudes, a short
//! one-sided spectrum and a histogram entropy term.
//!
//! ```
//! use accel_features::FeatureExtractor;
//!
//! let extractor = FeatureExtractor::default();
//! let window = [[0.1, 9.8, 0.3], [-0.2, 9.7, 0.1], [0.3, 9.9, -0.2]];
//! let features = extractor.extract(&window).unwrap();
//! assert_eq!(features.len(), extractor.dimension());
//! ```

mod config;
mod error;
mod features;
mod fft;
mod histogram;
pub mod statistics;
pub mod window;

pub use config::{EmptyBinPolicy, FeatureConfig, ShortWindowPolicy};
pub use error::FeatureError;
pub use features::{FeatureExtractor, FeatureVector, MIN_SAMPLES};
pub use fft::{FftAnalyzer, FftFlattening};
pub use histogram::{first_bin_entropy, Histogram};
pub use statistics::AxisStatistics;
pub use window::{Axis, Sample};
