// src/tables.rs

use core::f64::consts::PI;

use crate::common::FftError;
use crate::math;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[cfg(feature = "alloc")]
use crate::fft::TableFft;

/// Number of samples per full sine period in the lookup table.
///
/// Equal to `n` for every size that has an integral quarter period. Sizes 1
/// and 2 borrow the period-4 table so `cos(0)` still sits at offset 1.
pub(crate) const fn table_period(n: usize) -> usize {
    if n < 4 { 4 } else { n }
}

/// Length of the sine table for a transform of size `n`: one full period
/// plus a quarter period, so cosine reads as sine shifted by `period / 4`.
pub const fn sintbl_len(n: usize) -> usize {
    let period = table_period(n);
    period + period / 4
}

/// Length of the bit-reversal table for a transform of size `n`.
pub const fn bitrev_len(n: usize) -> usize {
    n
}

pub(crate) fn check_size(n: usize) -> Result<(), FftError> {
    if n.is_power_of_two() {
        Ok(())
    } else {
        Err(FftError::NotPowerOfTwo)
    }
}

/// Fills `sintbl[i] = sin(2π·i / period)` for the first `sintbl_len(n)` entries.
pub(crate) fn precompute_sintbl(sintbl: &mut [f64], n: usize) {
    let period = table_period(n) as f64;
    for (i, entry) in sintbl[..sintbl_len(n)].iter_mut().enumerate() {
        *entry = math::sin(2.0 * PI * (i as f64) / period);
    }
}

/// Fills the bit-reversal table.
///
/// The accumulator `j` always holds the reversal of `i`. Stepping to the
/// next index propagates a carry from the top bit downwards: clear set bits
/// while the probe is covered, then set the first clear one.
pub(crate) fn precompute_bitrev(bitrev: &mut [usize], n: usize) {
    let half = n >> 1;
    let mut j = 0;
    for i in 0..n {
        bitrev[i] = j;
        // j is all ones after the last index; the probe would run down to 0.
        if i + 1 == n {
            break;
        }
        let mut k = half;
        while k <= j {
            j -= k;
            k >>= 1;
        }
        j += k;
    }
}

/// Owned sine and bit-reversal tables for one transform size.
///
/// Build once, then hand out [`TableFft`] engines that borrow them.
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, PartialEq)]
pub struct FftTables {
    sintbl: Vec<f64>,
    bitrev: Vec<usize>,
    n: usize,
}

#[cfg(feature = "alloc")]
impl FftTables {
    pub fn new(n: usize) -> Result<Self, FftError> {
        check_size(n)?;

        let mut sintbl = alloc::vec![0.0; sintbl_len(n)];
        let mut bitrev = alloc::vec![0; bitrev_len(n)];
        precompute_sintbl(&mut sintbl, n);
        precompute_bitrev(&mut bitrev, n);

        fft_debug!(n, sintbl_len = sintbl.len(), "built owned fft tables");
        Ok(Self { sintbl, bitrev, n })
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn sintbl(&self) -> &[f64] {
        &self.sintbl
    }

    pub fn bitrev(&self) -> &[usize] {
        &self.bitrev
    }

    /// An engine that borrows these tables.
    pub fn engine(&self) -> TableFft<'_> {
        TableFft::from_parts(&self.sintbl, &self.bitrev, self.n)
    }
}

#[cfg(test)]
#[path = "tables_tests.rs"]
mod tests;
