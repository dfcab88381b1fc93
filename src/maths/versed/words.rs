//! Splitting an f64 into its two 32-bit words and joining them back.
//!
//! The words are read through the native byte layout, so the position of the
//! high and low halves depends on the target. That choice is made once, at
//! compile time, in [`WORD_ORDER`].

/// Index of each 32-bit half inside the native-order `[u32; 2]` view of an f64.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordOrder {
    pub high: usize,
    pub low: usize,
}

pub const WORD_ORDER: WordOrder = if cfg!(target_endian = "little") {
    WordOrder { high: 1, low: 0 }
} else {
    WordOrder { high: 0, low: 1 }
};

#[inline(always)]
fn native_words(x: f64) -> [u32; 2] {
    let b = x.to_ne_bytes();
    [
        u32::from_ne_bytes([b[0], b[1], b[2], b[3]]),
        u32::from_ne_bytes([b[4], b[5], b[6], b[7]]),
    ]
}

/// Returns `(high, low)`: sign/exponent/top mantissa word first.
#[inline(always)]
pub fn to_words(x: f64) -> (u32, u32) {
    let w = native_words(x);
    (w[WORD_ORDER.high], w[WORD_ORDER.low])
}

#[inline(always)]
pub fn high_word(x: f64) -> u32 {
    native_words(x)[WORD_ORDER.high]
}

#[inline(always)]
pub fn low_word(x: f64) -> u32 {
    native_words(x)[WORD_ORDER.low]
}

/// Builds the f64 whose high and low words are `high` and `low`.
#[inline(always)]
pub fn from_words(high: u32, low: u32) -> f64 {
    let mut w = [0u32; 2];
    w[WORD_ORDER.high] = high;
    w[WORD_ORDER.low] = low;
    let h = w[0].to_ne_bytes();
    let l = w[1].to_ne_bytes();
    f64::from_ne_bytes([h[0], h[1], h[2], h[3], l[0], l[1], l[2], l[3]])
}
