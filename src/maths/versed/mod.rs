//! Versed-cosine family and the trig machinery underneath it.
//!
//! Algorithms follow the fdlibm lineage: Cody–Waite reduction for moderate
//! arguments, Payne–Hanek reduction over 24-bit digits of 2/pi for huge ones,
//! and minimax kernels on |x| <= pi/4. Everything is no_std and
//! allocation-free; scratch space lives on the stack.

#![allow(clippy::excessive_precision)]
#![allow(clippy::unusual_byte_groupings)]

mod havercos;
mod kernels;
mod limbs;
mod rem_pio2;
mod rem_pio2_large;
mod scaling;
mod trig;
pub mod words;

pub use havercos::havercos;
pub use kernels::{kernel_cos, kernel_sin};
pub use rem_pio2::rem_pio2;
pub use trig::{cos, sin};

use words::high_word;

// ========= bit helpers =========

#[inline(always)]
fn f64_from_bits(u: u64) -> f64 {
    f64::from_bits(u)
}
#[inline(always)]
fn f64_to_bits(x: f64) -> u64 {
    x.to_bits()
}

/// High word of |x|: sign cleared, exponent and top 20 mantissa bits left.
#[inline(always)]
fn abs_high_word(x: f64) -> u32 {
    high_word(x) & 0x7fff_ffff
}

#[inline(always)]
fn fabs(x: f64) -> f64 {
    f64_from_bits(f64_to_bits(x) & 0x7fff_ffff_ffff_ffff)
}

/// Biased exponent field taken from a high word.
#[inline(always)]
fn exponent_of_high(hx: u32) -> i32 {
    ((hx >> 20) & 0x7ff) as i32
}

#[inline(always)]
fn is_nan_or_inf_high(ix: u32) -> bool {
    ix >= 0x7ff0_0000
}
