// src/butterfly.rs

use num_complex::Complex64;

use crate::tables::table_period;

/// Random access to a sequence of complex samples, whatever its layout.
pub(crate) trait SampleBuffer {
    fn len(&self) -> usize;
    fn get(&self, i: usize) -> Complex64;
    fn set(&mut self, i: usize, value: Complex64);
    fn swap(&mut self, i: usize, j: usize);
    fn unscale(&mut self, divisor: f64);
}

/// Real and imaginary parts held in two separate slices.
pub(crate) struct SplitBuffer<'a> {
    pub re: &'a mut [f64],
    pub im: &'a mut [f64],
}

impl SampleBuffer for SplitBuffer<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.re.len()
    }

    #[inline]
    fn get(&self, i: usize) -> Complex64 {
        Complex64::new(self.re[i], self.im[i])
    }

    #[inline]
    fn set(&mut self, i: usize, value: Complex64) {
        self.re[i] = value.re;
        self.im[i] = value.im;
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.re.swap(i, j);
        self.im.swap(i, j);
    }

    fn unscale(&mut self, divisor: f64) {
        for v in self.re.iter_mut() {
            *v /= divisor;
        }
        for v in self.im.iter_mut() {
            *v /= divisor;
        }
    }
}

impl SampleBuffer for [Complex64] {
    #[inline]
    fn len(&self) -> usize {
        <[Complex64]>::len(self)
    }

    #[inline]
    fn get(&self, i: usize) -> Complex64 {
        self[i]
    }

    #[inline]
    fn set(&mut self, i: usize, value: Complex64) {
        self[i] = value;
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        <[Complex64]>::swap(self, i, j);
    }

    fn unscale(&mut self, divisor: f64) {
        for v in self.iter_mut() {
            *v = v.unscale(divisor);
        }
    }
}

/// In-place radix-2 decimation-in-time transform.
///
/// `sintbl` and `bitrev` must have been built for `buffer.len()`. The forward
/// pass divides every sample by N; the inverse pass leaves the scale alone.
pub(crate) fn radix_2_dit_core<B, const INVERSE: bool>(
    buffer: &mut B,
    sintbl: &[f64],
    bitrev: &[usize],
) where
    B: SampleBuffer + ?Sized,
{
    let n = buffer.len();

    // 1. Bit-reverse. The i < j guard swaps each pair exactly once.
    for i in 0..n {
        let j = bitrev[i];
        if i < j {
            buffer.swap(i, j);
        }
    }

    // 2. Butterfly
    let period = table_period(n);
    let quarter = period / 4;
    let mut k = 1;

    while k < n {
        let k2 = k << 1;
        let d = period / k2;
        let mut h = 0;

        for j in 0..k {
            let c = sintbl[h + quarter];
            let s = if INVERSE { -sintbl[h] } else { sintbl[h] };
            // (x + iy)(c - is) = (c·x + s·y) + i(c·y - s·x)
            let w = Complex64::new(c, -s);

            for i in (j..n).step_by(k2) {
                let ik = i + k;
                // Both ends are read before either is written.
                let a = buffer.get(i);
                let t = buffer.get(ik) * w;
                buffer.set(ik, a - t);
                buffer.set(i, a + t);
            }
            h += d;
        }
        k = k2;
    }

    // 3. Forward-only normalization (Cn coefficients)
    if !INVERSE {
        buffer.unscale(n as f64);
    }
}

#[cfg(test)]
#[path = "butterfly_tests.rs"]
mod tests;
