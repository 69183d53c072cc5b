//! Reading amplitudes off the forward coefficients.
//!
//! The forward transform yields Cn coefficients (scaled by 1/N). A real tone
//! of amplitude A splits into two bins of magnitude A/2, at k and N - k, so
//! the one-sided amplitude is twice the magnitude. DC (bin 0) and Nyquist
//! (bin N/2) have no mirror bin and keep their magnitude as is. That gain
//! stays here, outside the transform, and the normalization stays on the
//! forward leg.

use crate::common::FftError;
use crate::math;

/// Modulus of one coefficient.
pub fn magnitude(re: f64, im: f64) -> f64 {
    math::hypot(re, im)
}

/// One-sided amplitude of bin `k` in an `n`-point spectrum.
///
/// `2·|X|` for `0 < k < n/2`, plain `|X|` at DC and Nyquist.
pub fn amplitude(k: usize, n: usize, re: f64, im: f64) -> f64 {
    let mag = magnitude(re, im);
    if k == 0 || 2 * k == n { mag } else { 2.0 * mag }
}

/// Amplitude of a windowed bin, divided by the window's correction factor.
pub fn corrected_amplitude(k: usize, n: usize, re: f64, im: f64, acf: f64) -> f64 {
    amplitude(k, n, re, im) / acf
}

/// Index of the strongest bin in `0..=N/2`, or `None` for an empty spectrum.
pub fn peak_bin(re: &[f64], im: &[f64]) -> Result<Option<usize>, FftError> {
    if re.len() != im.len() {
        return Err(FftError::SizeMismatch);
    }
    if re.is_empty() {
        return Ok(None);
    }

    let upper = re.len() / 2;
    let mut best = 0;
    let mut best_mag = magnitude(re[0], im[0]);
    for k in 1..=upper {
        let mag = magnitude(re[k], im[k]);
        if mag > best_mag {
            best = k;
            best_mag = mag;
        }
    }
    Ok(Some(best))
}

#[cfg(test)]
#[path = "spectrum_tests.rs"]
mod tests;
