//! sin and cos over the whole f64 range.
//!
//! Implements:
//! - `cos`, `sin`: reduce with `rem_pio2`, then pick the kernel and sign
//!   from the quadrant `n & 3`.
//!
//! |x| <= pi/4 skips reduction; NaN and infinities give NaN.

use super::kernels::{kernel_cos, kernel_sin};
use super::rem_pio2::rem_pio2;
use super::{abs_high_word, is_nan_or_inf_high};

#[inline(always)]
pub fn cos(x: f64) -> f64 {
    let ix = abs_high_word(x);
    if ix <= 0x3fe9_21fb {
        // |x| < 2^-27: 1 - x^2/2 rounds to 1
        if ix < 0x3e40_0000 {
            return 1.0;
        }
        return kernel_cos(x, 0.0);
    }
    if is_nan_or_inf_high(ix) {
        return f64::NAN;
    }

    let (n, y0, y1) = rem_pio2(x);
    match n & 3 {
        0 => kernel_cos(y0, y1),
        1 => -kernel_sin(y0, y1),
        2 => -kernel_cos(y0, y1),
        _ => kernel_sin(y0, y1),
    }
}

#[inline(always)]
pub fn sin(x: f64) -> f64 {
    let ix = abs_high_word(x);
    if ix <= 0x3fe9_21fb {
        // |x| < 2^-26: x - x^3/6 rounds to x
        if ix < 0x3e50_0000 {
            return x;
        }
        return kernel_sin(x, 0.0);
    }
    if is_nan_or_inf_high(ix) {
        return f64::NAN;
    }

    let (n, y0, y1) = rem_pio2(x);
    match n & 3 {
        0 => kernel_sin(y0, y1),
        1 => kernel_cos(y0, y1),
        2 => -kernel_sin(y0, y1),
        _ => -kernel_cos(y0, y1),
    }
}
