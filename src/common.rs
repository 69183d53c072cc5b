// src/common.rs

use core::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FftError {
    /// Signal buffers don't match the transform size (or each other).
    SizeMismatch,
    /// Transform size is zero or not a power of two.
    NotPowerOfTwo,
    /// Caller-provided table storage is shorter than the table needs.
    BufferTooSmall,
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::SizeMismatch => write!(f, "Data buffer size does not match FFT size"),
            FftError::NotPowerOfTwo => write!(f, "Size must be a power of 2"),
            FftError::BufferTooSmall => write!(f, "Table buffers are too small"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Transform direction.
///
/// The forward leg divides by N; the inverse leg does not scale, so
/// `Inverse` after `Forward` gives back the input.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Direction {
    #[default]
    Forward,
    Inverse,
}

impl Direction {
    pub const fn is_inverse(self) -> bool {
        matches!(self, Direction::Inverse)
    }
}

pub trait FftProcess<T> {
    fn process(&self, buffer: &mut [T], direction: Direction) -> Result<(), FftError>;
}

#[cfg(test)]
#[path = "common_tests.rs"]
mod tests;
