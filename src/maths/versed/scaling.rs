//! Power-of-two scaling and floor without libm.

use super::{f64_from_bits, f64_to_bits};

const TWO54: f64 = f64::from_bits(0x4350_0000_0000_0000);
const TWOM54: f64 = f64::from_bits(0x3c90_0000_0000_0000);
const EXP_MASK: u64 = 0x7ff;
const KEEP_SIGN_MANT: u64 = 0x800f_ffff_ffff_ffff;

#[inline(always)]
fn exp_field(u: u64) -> i32 {
    ((u >> 52) & EXP_MASK) as i32
}

/// x * 2^n, exact whenever the result is a normal number.
#[inline(always)]
pub(super) fn scalbn(mut x: f64, n: i32) -> f64 {
    let mut u = f64_to_bits(x);
    let mut e = exp_field(u);
    if e == 0x7ff {
        return x;
    }
    if e == 0 {
        if x == 0.0 {
            return x;
        }
        x *= TWO54;
        u = f64_to_bits(x);
        e = exp_field(u) - 54;
    }
    let ne = e.saturating_add(n);
    if ne >= 0x7ff {
        return if x.is_sign_negative() {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    if ne > 0 {
        return f64_from_bits((u & KEEP_SIGN_MANT) | ((ne as u64) << 52));
    }
    if ne <= -54 {
        return 0.0 * x;
    }
    // subnormal result: build 2^54 too large, then scale down once
    f64_from_bits((u & KEEP_SIGN_MANT) | (((ne + 54) as u64) << 52)) * TWOM54
}

#[inline(always)]
pub(super) fn floor(x: f64) -> f64 {
    let u = f64_to_bits(x);
    let negative = (u >> 63) != 0;
    let e = exp_field(u);
    if e == 0x7ff {
        return x;
    }
    let j0 = e - 1023;
    if j0 < 0 {
        // |x| < 1
        return if negative && (u << 1) != 0 { -1.0 } else { 0.0 * x };
    }
    if j0 >= 52 {
        return x;
    }
    let frac = (1u64 << (52 - j0)) - 1;
    if u & frac == 0 {
        return x;
    }
    let mut t = u & !frac;
    if negative {
        t = t.wrapping_add(1u64 << (52 - j0));
    }
    f64_from_bits(t)
}
