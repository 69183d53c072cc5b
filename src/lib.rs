#![no_std]

// Tests and the `std` feature link the standard library;
// everything else builds on bare `core`.
#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

#[macro_use]
mod log;
mod math;

pub mod common;
pub mod tables;
mod butterfly;
pub mod fft;
pub mod window;
pub mod spectrum;
#[cfg(feature = "std")]
pub mod export;

pub use crate::common::{Direction, FftError, FftProcess};
pub use crate::fft::TableFft;
#[cfg(feature = "alloc")]
pub use crate::tables::FftTables;
pub use crate::window::Window;
