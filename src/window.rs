//! Window functions for spectral analysis.
//!
//! The transform never applies a window itself; callers weight the samples
//! first and divide amplitudes by the window's amplitude correction factor.

use core::f64::consts::PI;

use crate::common::FftError;
use crate::math;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Window {
    /// No weighting, every coefficient is 1.
    Rectangular,
    /// Periodic Hann (Hanning) window, `0.5 - 0.5·cos(2π·i/N)`.
    #[default]
    Hann,
}

impl Window {
    /// Fills `data` with the window coefficients, N = `data.len()`.
    pub fn fill(&self, data: &mut [f64]) {
        let size = data.len() as f64;
        for (i, w) in data.iter_mut().enumerate() {
            *w = match self {
                Window::Rectangular => 1.0,
                Window::Hann => 0.5 - 0.5 * math::cos(2.0 * PI * (i as f64) / size),
            };
        }
    }
}

/// Multiplies `samples` by `weights` elementwise.
pub fn apply(weights: &[f64], samples: &mut [f64]) -> Result<(), FftError> {
    if weights.len() != samples.len() {
        return Err(FftError::SizeMismatch);
    }
    for (s, w) in samples.iter_mut().zip(weights) {
        *s *= w;
    }
    Ok(())
}

/// Amplitude correction factor: the mean window coefficient.
///
/// Divide windowed amplitudes by this to recover the unwindowed level.
/// An empty window corrects nothing and yields 1.
pub fn amplitude_correction(weights: &[f64]) -> f64 {
    if weights.is_empty() {
        return 1.0;
    }
    weights.iter().sum::<f64>() / weights.len() as f64
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
