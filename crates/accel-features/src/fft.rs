//! FFT-based Frequency Features

use rustfft::{num_complex::Complex, Fft, FftPlanner};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// How each complex one-sided bin becomes real values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FftFlattening {
    /// Real part only, imaginary part discarded
    #[default]
    RealPart,
    /// Real part followed by imaginary part
    RealImaginary,
    /// Modulus of the bin
    Magnitude,
}

impl FftFlattening {
    /// Real values produced per bin
    pub fn components(self) -> usize {
        match self {
            FftFlattening::RealPart | FftFlattening::Magnitude => 1,
            FftFlattening::RealImaginary => 2,
        }
    }

    /// Label suffixes for each component
    pub fn component_names(self) -> &'static [&'static str] {
        match self {
            FftFlattening::RealPart => &["re"],
            FftFlattening::RealImaginary => &["re", "im"],
            FftFlattening::Magnitude => &["mag"],
        }
    }

    fn push(self, bin: Complex<f64>, out: &mut Vec<f64>) {
        match self {
            FftFlattening::RealPart => out.push(bin.re),
            FftFlattening::RealImaginary => {
                out.push(bin.re);
                out.push(bin.im);
            }
            FftFlattening::Magnitude => out.push(bin.norm()),
        }
    }
}

/// Fixed-length one-sided DFT over window columns.
///
/// Columns longer than the transform length are truncated, shorter ones
/// zero-padded, so the bin count never depends on the window size.
pub struct FftAnalyzer {
    /// Planned forward transform, shareable across threads
    fft: Arc<dyn Fft<f64>>,
    /// Transform length
    length: usize,
    /// Real-valued convention
    flattening: FftFlattening,
}

impl fmt::Debug for FftAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FftAnalyzer")
            .field("length", &self.length)
            .field("flattening", &self.flattening)
            .finish()
    }
}

impl FftAnalyzer {
    /// Plan a forward transform of `length` points (must be non-zero)
    pub fn new(length: usize, flattening: FftFlattening) -> Self {
        let mut planner = FftPlanner::new();
        Self {
            fft: planner.plan_fft_forward(length),
            length,
            flattening,
        }
    }

    /// Transform length
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of one-sided bins per column
    pub fn bins(&self) -> usize {
        self.length / 2 + 1
    }

    pub fn flattening(&self) -> FftFlattening {
        self.flattening
    }

    /// Real values emitted for `columns` columns
    pub fn output_len(&self, columns: usize) -> usize {
        self.bins() * columns * self.flattening.components()
    }

    /// One-sided spectrum of a single column
    pub fn spectrum(&self, signal: &[f64]) -> Vec<Complex<f64>> {
        let mut buffer: Vec<Complex<f64>> = signal
            .iter()
            .take(self.length)
            .map(|&v| Complex::new(v, 0.0))
            .collect();
        buffer.resize(self.length, Complex::new(0.0, 0.0));

        self.fft.process(&mut buffer);

        buffer.truncate(self.bins());
        buffer
    }

    /// Flattened spectra of several columns.
    ///
    /// Bin-major: for each bin, every column in order, each contributing
    /// the components of the flattening convention.
    pub fn analyze(&self, columns: &[Vec<f64>]) -> Vec<f64> {
        let spectra: Vec<Vec<Complex<f64>>> =
            columns.iter().map(|c| self.spectrum(c)).collect();

        let mut out = Vec::with_capacity(self.output_len(columns.len()));
        for bin in 0..self.bins() {
            for spectrum in &spectra {
                self.flattening.push(spectrum[bin], &mut out);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn cot(x: f64) -> f64 {
        x.cos() / x.sin()
    }

    #[test]
    fn test_ramp_spectrum() {
        let analyzer = FftAnalyzer::new(5, FftFlattening::RealImaginary);
        let spectrum = analyzer.spectrum(&[1.0, 2.0, 3.0, 4.0, 5.0]);

        assert_eq!(spectrum.len(), 3);
        assert!((spectrum[0].re - 15.0).abs() < 1e-9);
        assert!(spectrum[0].im.abs() < 1e-9);
        for k in 1..3 {
            assert!((spectrum[k].re + 2.5).abs() < 1e-9);
            assert!((spectrum[k].im - 2.5 * cot(PI * k as f64 / 5.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_truncates_long_columns() {
        let analyzer = FftAnalyzer::new(5, FftFlattening::RealPart);
        let short = analyzer.spectrum(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let long = analyzer.spectrum(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0, -100.0]);
        for (a, b) in short.iter().zip(&long) {
            assert!((a - b).norm() < 1e-12);
        }
    }

    #[test]
    fn test_zero_pads_short_columns() {
        let analyzer = FftAnalyzer::new(5, FftFlattening::RealPart);
        let spectrum = analyzer.spectrum(&[2.0, 2.0]);
        assert_eq!(spectrum.len(), 3);
        assert!((spectrum[0].re - 4.0).abs() < 1e-12);
        // 2 + 2*cos(2π/5)
        let expected = 2.0 + 2.0 * (2.0 * PI / 5.0).cos();
        assert!((spectrum[1].re - expected).abs() < 1e-9);
    }

    #[test]
    fn test_analyze_is_bin_major() {
        let analyzer = FftAnalyzer::new(5, FftFlattening::RealPart);
        let columns = vec![vec![1.0; 5], vec![2.0; 5], vec![3.0; 5]];
        let out = analyzer.analyze(&columns);

        assert_eq!(out.len(), analyzer.output_len(3));
        assert_eq!(out.len(), 9);
        // DC bins of x, y, z come first
        assert!((out[0] - 5.0).abs() < 1e-9);
        assert!((out[1] - 10.0).abs() < 1e-9);
        assert!((out[2] - 15.0).abs() < 1e-9);
        for v in &out[3..] {
            assert!(v.abs() < 1e-9);
        }
    }

    #[test]
    fn test_flattening_widths() {
        let columns = vec![vec![1.0, -1.0, 1.0, -1.0, 1.0]; 3];
        for flattening in [
            FftFlattening::RealPart,
            FftFlattening::RealImaginary,
            FftFlattening::Magnitude,
        ] {
            let analyzer = FftAnalyzer::new(5, flattening);
            let out = analyzer.analyze(&columns);
            assert_eq!(out.len(), 3 * 3 * flattening.components());
        }

        let analyzer = FftAnalyzer::new(5, FftFlattening::Magnitude);
        assert!(analyzer.analyze(&columns).iter().all(|v| *v >= 0.0));
    }
}
