// src/fft.rs

use num_complex::Complex64;

use crate::butterfly::{SplitBuffer, radix_2_dit_core};
use crate::common::{Direction, FftError, FftProcess};
use crate::tables::{
    bitrev_len, check_size, precompute_bitrev, precompute_sintbl, sintbl_len,
};

/// Power-of-two FFT driven by a quarter-wave-extended sine table and a
/// bit-reversal table.
///
/// The engine only reads the tables after construction, so one instance can
/// be shared between threads working on different buffers.
#[derive(Debug, Clone, Copy)]
pub struct TableFft<'a> {
    sintbl: &'a [f64],
    bitrev: &'a [usize],
    n: usize,
}

impl<'a> TableFft<'a> {
    /// Fills the caller's storage with the tables for size `n`.
    ///
    /// `sintbl` needs at least [`sintbl_len`]`(n)` entries and `bitrev` at
    /// least `n`.
    pub fn new(
        sintbl: &'a mut [f64],
        bitrev: &'a mut [usize],
        n: usize,
    ) -> Result<Self, FftError> {
        check_size(n)?;
        if sintbl.len() < sintbl_len(n) || bitrev.len() < bitrev_len(n) {
            return Err(FftError::BufferTooSmall);
        }

        precompute_sintbl(sintbl, n);
        precompute_bitrev(bitrev, n);
        fft_debug!(n, sintbl_len = sintbl_len(n), "built fft tables");

        Ok(Self::from_parts(sintbl, bitrev, n))
    }

    /// Wraps tables that are already populated for `n`.
    pub(crate) fn from_parts(sintbl: &'a [f64], bitrev: &'a [usize], n: usize) -> Self {
        Self {
            sintbl: &sintbl[..sintbl_len(n)],
            bitrev: &bitrev[..bitrev_len(n)],
            n,
        }
    }

    /// Transform size N.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn sintbl(&self) -> &'a [f64] {
        self.sintbl
    }

    pub fn bitrev(&self) -> &'a [usize] {
        self.bitrev
    }

    /// Transforms `x` (real part) and `y` (imaginary part) in place.
    pub fn process(&self, x: &mut [f64], y: &mut [f64], direction: Direction) -> Result<(), FftError> {
        if x.len() != self.n || y.len() != self.n {
            return Err(FftError::SizeMismatch);
        }
        fft_trace!(n = self.n, ?direction, "split transform");

        let mut buffer = SplitBuffer { re: x, im: y };
        if direction.is_inverse() {
            radix_2_dit_core::<_, true>(&mut buffer, self.sintbl, self.bitrev);
        } else {
            radix_2_dit_core::<_, false>(&mut buffer, self.sintbl, self.bitrev);
        }
        Ok(())
    }

    pub fn forward(&self, x: &mut [f64], y: &mut [f64]) -> Result<(), FftError> {
        self.process(x, y, Direction::Forward)
    }

    pub fn inverse(&self, x: &mut [f64], y: &mut [f64]) -> Result<(), FftError> {
        self.process(x, y, Direction::Inverse)
    }

    /// Same transform over an interleaved complex buffer.
    pub fn process_complex(&self, buffer: &mut [Complex64], direction: Direction) -> Result<(), FftError> {
        if buffer.len() != self.n {
            return Err(FftError::SizeMismatch);
        }
        fft_trace!(n = self.n, ?direction, "complex transform");

        if direction.is_inverse() {
            radix_2_dit_core::<_, true>(buffer, self.sintbl, self.bitrev);
        } else {
            radix_2_dit_core::<_, false>(buffer, self.sintbl, self.bitrev);
        }
        Ok(())
    }
}

impl FftProcess<Complex64> for TableFft<'_> {
    fn process(&self, buffer: &mut [Complex64], direction: Direction) -> Result<(), FftError> {
        self.process_complex(buffer, direction)
    }
}

#[cfg(test)]
#[path = "fft_tests.rs"]
mod tests;
