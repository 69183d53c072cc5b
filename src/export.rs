//! Comma-delimited dump of a forward/inverse run, one line per sample index.

use std::io::Write;
use std::vec::Vec;

use num_complex::Complex64;

use crate::common::FftError;

/// Everything known about one sample index after a forward/inverse run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogRecord {
    pub index: usize,
    /// Window-weighted input sample.
    pub windowed: Complex64,
    /// Forward coefficient.
    pub spectrum: Complex64,
    /// Inverse of the forward coefficients.
    pub reconstructed: Complex64,
    /// Window weight at this index.
    pub weight: f64,
}

/// Zips the four stages of a run into records.
///
/// Every complex stage is given as `(re, im)` slices; all must share the
/// length of `weights`.
pub fn records(
    windowed: (&[f64], &[f64]),
    spectrum: (&[f64], &[f64]),
    reconstructed: (&[f64], &[f64]),
    weights: &[f64],
) -> Result<Vec<LogRecord>, FftError> {
    let n = weights.len();
    for (re, im) in [windowed, spectrum, reconstructed] {
        if re.len() != n || im.len() != n {
            return Err(FftError::SizeMismatch);
        }
    }

    Ok((0..n)
        .map(|i| LogRecord {
            index: i,
            windowed: Complex64::new(windowed.0[i], windowed.1[i]),
            spectrum: Complex64::new(spectrum.0[i], spectrum.1[i]),
            reconstructed: Complex64::new(reconstructed.0[i], reconstructed.1[i]),
            weight: weights[i],
        })
        .collect())
}

/// Writes `i,xw,yw,,i,X,Y,,i,xr,yr,,i,w` lines, six fractional digits each.
pub fn write_log<W: Write>(mut writer: W, records: &[LogRecord]) -> std::io::Result<()> {
    for r in records {
        let i = r.index;
        writeln!(
            writer,
            "{i},{:.6},{:.6},,{i},{:.6},{:.6},,{i},{:.6},{:.6},,{i},{:.6}",
            r.windowed.re,
            r.windowed.im,
            r.spectrum.re,
            r.spectrum.im,
            r.reconstructed.re,
            r.reconstructed.im,
            r.weight,
        )?;
    }
    writer.flush()
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
