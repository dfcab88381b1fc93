//! havercos(x) = (1 + cos(x)) / 2.
//!
//! The cosine goes through the shared reducer in rem_pio2.rs, so the result
//! keeps double accuracy for every finite input, huge ones included. The
//! final `(1 + c) / 2` cannot leave [0, 1] because |c| <= 1.

use super::trig::cos;

/// Half-value versed cosine. NaN for NaN and infinite inputs.
#[inline(always)]
pub fn havercos(x: f64) -> f64 {
    (1.0 + cos(x)) / 2.0
}
