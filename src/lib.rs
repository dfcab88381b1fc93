#![no_std]

#[cfg(test)]
extern crate std;

pub mod maths;

pub use maths::versed;
pub use maths::versed::{cos, havercos, kernel_cos, kernel_sin, rem_pio2, sin};

#[cfg(test)]
mod reference_values;
