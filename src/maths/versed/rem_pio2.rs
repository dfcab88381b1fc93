//! Argument reduction modulo pi/2 for the whole f64 range.
//!
//! - |x| <= pi/4: nothing to do.
//! - |x| <= 9pi/4: one subtraction of k*pi/2, k = 1..4, except right next to
//!   a multiple of pi/2 where cancellation needs the full cascade.
//! - |x| < 2^20 * pi/2: Cody–Waite with up to three pi/2 splits.
//! - beyond: Payne–Hanek over 24-bit digits of 2/pi.

use super::limbs::TWO24;
use super::rem_pio2_large::rem_pio2_large;
use super::scaling::floor;
use super::words::{from_words, high_word, low_word};
use super::{abs_high_word, exponent_of_high, fabs, is_nan_or_inf_high};

const INVPIO2: f64 = f64::from_bits(0x3fe4_5f30_6dc9_c883); // 53 bits of 2/pi

// pi/2 = PIO2_1 + PIO2_1T, each PIO2_k has 33 leading bits so n*PIO2_k is
// exact for |n| < 2^20.
const PIO2_1: f64 = f64::from_bits(0x3ff9_21fb_5440_0000); // 1.57079632673412561417e+00
const PIO2_1T: f64 = f64::from_bits(0x3dd0_b461_1a62_6331); // 6.07710050650619224932e-11
const PIO2_2: f64 = f64::from_bits(0x3dd0_b461_1a60_0000); // 6.07710050630396597660e-11
const PIO2_2T: f64 = f64::from_bits(0x3ba3_198a_2e03_7073); // 2.02226624879595063154e-21
const PIO2_3: f64 = f64::from_bits(0x3ba3_198a_2e00_0000); // 2.02226624871116645580e-21
const PIO2_3T: f64 = f64::from_bits(0x397b_839a_2520_49c1); // 8.47842766036889956997e-32

/// Splits `x` into `n` and `hi + lo` with `x = n*pi/2 + hi + lo`,
/// `|hi| <= ~pi/4`. Only `n & 3` is meaningful for huge `x`.
/// NaN and infinities give `(0, NaN, NaN)`.
pub fn rem_pio2(x: f64) -> (i32, f64, f64) {
    let ix = abs_high_word(x);
    let k = |m: i32| if x > 0.0 { m } else { -m };

    if ix <= 0x3fe9_21fb {
        return (0, x, 0.0);
    }
    // |x| ~<= 5pi/4
    if ix <= 0x400f_6a7a {
        if ix & 0xf_ffff == 0x9_21fb {
            // |x| ~= pi/2 or 2pi/2
            return rem_pio2_medium(x, ix);
        }
        return if ix <= 0x4002_d97c {
            near_multiple(x, k(1))
        } else {
            near_multiple(x, k(2))
        };
    }
    // |x| ~<= 9pi/4
    if ix <= 0x401c_463b {
        if ix <= 0x4015_fdbc {
            if ix == 0x4012_d97c {
                return rem_pio2_medium(x, ix);
            }
            return near_multiple(x, k(3));
        }
        if ix == 0x4019_21fb {
            return rem_pio2_medium(x, ix);
        }
        return near_multiple(x, k(4));
    }
    // |x| < 2^20 * pi/2
    if ix < 0x4139_21fb {
        return rem_pio2_medium(x, ix);
    }
    if is_nan_or_inf_high(ix) {
        return (0, f64::NAN, f64::NAN);
    }

    // scale |x| into [2^23, 2^24) and cut it into 24-bit digits
    let e0 = ((ix >> 20) as i32) - 1046;
    let mut z = from_words((ix as i32 - (e0 << 20)) as u32, low_word(x));
    let mut tx = [0.0f64; 3];
    for t in tx.iter_mut().take(2) {
        *t = (z as i32) as f64;
        z = (z - *t) * TWO24;
    }
    tx[2] = z;
    let mut nx = 3;
    while nx > 1 && tx[nx - 1] == 0.0 {
        nx -= 1;
    }

    let (n, hi, lo) = rem_pio2_large(&tx, nx, e0);
    if x < 0.0 { (-n, -hi, -lo) } else { (n, hi, lo) }
}

/// x - n*pi/2 for a known small `n` with the sign already applied.
#[inline(always)]
fn near_multiple(x: f64, n: i32) -> (i32, f64, f64) {
    let fnn = n as f64;
    let z = x - fnn * PIO2_1;
    let t = fnn * PIO2_1T;
    let hi = z - t;
    let lo = (z - hi) - t;
    (n, hi, lo)
}

/// Cody–Waite reduction; `ix` is the high word of |x|. Works on |x| and
/// reapplies the sign, so the result is odd in `x` bit for bit.
#[inline(always)]
fn rem_pio2_medium(x: f64, ix: u32) -> (i32, f64, f64) {
    let ax = fabs(x);
    let fnn = floor(ax * INVPIO2 + 0.5);
    let n = fnn as i32;
    let mut r = ax - fnn * PIO2_1;
    let mut w = fnn * PIO2_1T;
    let mut hi = r - w;

    let j = (ix >> 20) as i32;
    if j - exponent_of_high(high_word(hi)) > 16 {
        // lost more than 16 bits: second split
        let t = r;
        w = fnn * PIO2_2;
        r = t - w;
        w = fnn * PIO2_2T - ((t - r) - w);
        hi = r - w;
        if j - exponent_of_high(high_word(hi)) > 49 {
            // and a third, covers every double below 2^20 * pi/2
            let t = r;
            w = fnn * PIO2_3;
            r = t - w;
            w = fnn * PIO2_3T - ((t - r) - w);
            hi = r - w;
        }
    }
    let lo = (r - hi) - w;
    if x < 0.0 { (-n, -hi, -lo) } else { (n, hi, lo) }
}
