//! Fixed-point limb arithmetic for Payne–Hanek reduction.
//!
//! A number is held as base-2^24 digits, least significant first. Products of
//! two digits are below 2^48, so a column of at most three of them sums
//! exactly in an f64; carries are then pushed up into the limbs explicitly.

pub(super) const LIMB_CAP: usize = 20;

pub(super) const TWO24: f64 = 1.67772160000000000000e+07; // 2^24
pub(super) const TWON24: f64 = 5.96046447753906250000e-08; // 2^-24

const DIGIT: i32 = 0x100_0000;

/// Column `i` of `x * f`, where `x[0..=jx]` are the digits of the input
/// (most significant first) and `f` the aligned digits of 2/pi.
#[inline(always)]
pub(super) fn mul_column(x: &[f64; 3], f: &[f64; LIMB_CAP], jx: usize, i: usize) -> f64 {
    let mut acc = 0.0;
    for (j, &xj) in x.iter().enumerate().take(jx + 1) {
        acc += xj * f[jx + i - j];
    }
    acc
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct Limbs {
    d: [i32; LIMB_CAP],
}

impl Limbs {
    /// Splits product columns `q[0..=top]` (`q[0]` most significant) into
    /// 24-bit limbs `d[0..top]`, carrying upward. Returns the limbs and the
    /// most significant column with all carries absorbed.
    #[inline(always)]
    pub(super) fn distill(q: &[f64; LIMB_CAP], top: usize) -> (Self, f64) {
        let mut d = [0i32; LIMB_CAP];
        let mut z = q[top];
        for (i, limb) in d.iter_mut().enumerate().take(top) {
            let carry = ((TWON24 * z) as i32) as f64;
            *limb = (z - TWO24 * carry) as i32;
            z = q[top - 1 - i] + carry;
        }
        (Self { d }, z)
    }

    #[inline(always)]
    pub(super) fn get(&self, i: usize) -> i32 {
        self.d[i]
    }

    #[inline(always)]
    pub(super) fn set(&mut self, i: usize, v: i32) {
        self.d[i] = v;
    }

    /// Replaces `d[0..len]` by `2^(24 len) - d`. Returns false when the
    /// value was zero (nothing to borrow).
    #[inline(always)]
    pub(super) fn complement(&mut self, len: usize) -> bool {
        let mut borrowed = false;
        for limb in self.d.iter_mut().take(len) {
            if borrowed {
                *limb = DIGIT - 1 - *limb;
            } else if *limb != 0 {
                borrowed = true;
                *limb = DIGIT - *limb;
            }
        }
        borrowed
    }

    /// Clears the `bits` integer bits sitting on top of limb `len - 1`.
    #[inline(always)]
    pub(super) fn mask_top(&mut self, len: usize, bits: i32) {
        self.d[len - 1] &= (1 << (24 - bits)) - 1;
    }

    #[inline(always)]
    pub(super) fn any_nonzero(&self, from: usize, to: usize) -> bool {
        self.d[from..to].iter().any(|&v| v != 0)
    }

    /// Number of zero limbs directly below `d[from]`, counting at least one
    /// and never running past `d[0]`.
    // Capped at `from`: an all-zero window grows by `from` limbs per round.
    #[inline(always)]
    pub(super) fn zero_run_below(&self, from: usize) -> usize {
        let mut k = 1;
        while k < from && self.d[from - k] == 0 {
            k += 1;
        }
        k
    }

    /// Limbs `d[0..=top]` as f64 columns, `d[top]` weighted by `2^q0`.
    #[inline(always)]
    pub(super) fn to_columns(&self, top: usize, scale: f64) -> [f64; LIMB_CAP] {
        let mut out = [0.0f64; LIMB_CAP];
        let mut w = scale;
        for i in (0..=top).rev() {
            out[i] = w * (self.d[i] as f64);
            w *= TWON24;
        }
        out
    }
}
