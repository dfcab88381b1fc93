//! Payne–Hanek reduction of huge arguments modulo pi/2.
//!
//! The input arrives as up to three 24-bit digits `tx` with
//! `x = sum tx[j] * 2^(e0 - 24 j)`. Only the window of 2/pi digits that can
//! influence the fraction of `x * 2/pi` is multiplied in; bits above it only
//! add multiples of 8 to the quadrant and bits below it are negligible unless
//! the fraction cancels, in which case the window is widened.

use super::limbs::{LIMB_CAP, Limbs, TWO24, TWON24, mul_column};
use super::scaling::{floor, scalbn};

/// 2/pi in 24-bit digits, most significant first (1584 bits).
const TWO_OVER_PI: [u32; 66] = [
    0xa2f983, 0x6e4e44, 0x1529fc, 0x2757d1, 0xf534dd, 0xc0db62, 0x95993c, 0x439041, 0xfe5163,
    0xabdebb, 0xc561b7, 0x246e3a, 0x424dd2, 0xe00649, 0x2eea09, 0xd1921c, 0xfe1deb, 0x1cb129,
    0xa73ee8, 0x8235f5, 0x2ebb44, 0x84e99c, 0x7026b4, 0x5f7e41, 0x3991d6, 0x398353, 0x39f49c,
    0x845f8b, 0xbdf928, 0x3b1ff8, 0x97ffde, 0x05980f, 0xef2f11, 0x8b5a0a, 0x6d1f6d, 0x367ecf,
    0x27cb09, 0xb74f46, 0x3f669e, 0x5fea2d, 0x7527ba, 0xc7ebe5, 0xf17b3d, 0x0739f7, 0x8a5292,
    0xea6bfb, 0x5fb11f, 0x8d5d08, 0x560330, 0x46fc7b, 0x6babf0, 0xcfbc20, 0x9af436, 0x1da9e3,
    0x91615e, 0xe61b08, 0x659985, 0x5f14a0, 0x68408d, 0xffd880, 0x4d7327, 0x310606, 0x1556ca,
    0x73a8c9, 0x60e27b, 0xc08c6b,
];

/// pi/2 cut into 24-bit pieces, each exactly representable.
const PIO2_CHUNKS: [f64; 8] = [
    1.57079625129699707031e+00, // 0x3FF921FB40000000
    7.54978941586159635335e-08, // 0x3E74442D00000000
    5.39030252995776476554e-15, // 0x3CF8469880000000
    3.28200341580791294123e-22, // 0x3B78CC5160000000
    1.27065575308067607349e-29, // 0x39F01B8380000000
    1.22933308981111328932e-36, // 0x387A252040000000
    2.73370053816464559624e-44, // 0x36E3822280000000
    2.16741683877804819444e-51, // 0x3569F31D00000000
];

/// Product columns computed up front (53-bit result needs four).
const JK: usize = 4;
/// Highest pi/2 chunk used when turning the fraction back into radians.
const JP: usize = 4;

/// Reduces `x` given as digits `tx[0..nx]` at binary exponent `e0`.
/// Returns `(n & 7, hi, lo)` with `x - n*pi/2 ~ hi + lo`.
///
/// When the fraction cancels over every limb the window is widened by the
/// length of the zero run. Widening stops once the limb buffers or the 2/pi
/// table run out; the result is then less accurate but still finite.
pub(super) fn rem_pio2_large(tx: &[f64; 3], nx: usize, e0: i32) -> (i32, f64, f64) {
    let jx = nx - 1;
    let jv = core::cmp::max((e0 - 3) / 24, 0);
    let mut q0 = e0 - 24 * (jv + 1);
    let jv = jv as usize;

    // f[i] = TWO_OVER_PI[jv - jx + i], zero before the binary point
    let mut f = [0.0f64; LIMB_CAP];
    for (i, fi) in f.iter_mut().enumerate().take(jx + JK + 1) {
        *fi = match (jv + i).checked_sub(jx) {
            Some(j) => TWO_OVER_PI[j] as f64,
            None => 0.0,
        };
    }

    let mut q = [0.0f64; LIMB_CAP];
    for (i, qi) in q.iter_mut().enumerate().take(JK + 1) {
        *qi = mul_column(tx, &f, jx, i);
    }

    let mut jz = JK;
    let (mut iq, mut z, n, ih) = loop {
        let (mut iq, mut z) = Limbs::distill(&q, jz);

        // integer part mod 8 is the quadrant
        z = scalbn(z, q0);
        z -= 8.0 * floor(z * 0.125);
        let mut n = z as i32;
        z -= n as f64;

        // ih: 0 fraction < 1/2, 1 fraction >= 1/2 (from limbs), 2 same from z
        let mut ih = 0;
        if q0 > 0 {
            let top = iq.get(jz - 1);
            let int_bits = top >> (24 - q0);
            n += int_bits;
            iq.set(jz - 1, top - (int_bits << (24 - q0)));
            ih = iq.get(jz - 1) >> (23 - q0);
        } else if q0 == 0 {
            ih = iq.get(jz - 1) >> 23;
        } else if z >= 0.5 {
            ih = 2;
        }

        if ih > 0 {
            n += 1;
            let borrowed = iq.complement(jz);
            if q0 > 0 {
                iq.mask_top(jz, q0);
            }
            if ih == 2 {
                z = 1.0 - z;
                if borrowed {
                    z -= scalbn(1.0, q0);
                }
            }
        }

        if z == 0.0 && !iq.any_nonzero(JK, jz) {
            let k = iq.zero_run_below(JK);
            if jx + jz + k + 1 < LIMB_CAP && jv + jz + k < TWO_OVER_PI.len() {
                for i in jz + 1..=jz + k {
                    f[jx + i] = TWO_OVER_PI[jv + i] as f64;
                    q[i] = mul_column(tx, &f, jx, i);
                }
                jz += k;
                continue;
            }
        }
        break (iq, z, n, ih);
    };

    // drop zero limbs off the bottom, or store the leftover of z
    if z == 0.0 {
        jz -= 1;
        q0 -= 24;
        while jz > 0 && iq.get(jz) == 0 {
            jz -= 1;
            q0 -= 24;
        }
    } else {
        z = scalbn(z, -q0);
        if z >= TWO24 {
            let carry = ((TWON24 * z) as i32) as f64;
            iq.set(jz, (z - TWO24 * carry) as i32);
            jz += 1;
            q0 += 24;
            iq.set(jz, carry as i32);
        } else {
            iq.set(jz, z as i32);
        }
    }

    let fraction = iq.to_columns(jz, scalbn(1.0, q0));

    // fq[jz - i] = sum_k PIO2_CHUNKS[k] * fraction[i + k]
    let mut fq = [0.0f64; LIMB_CAP];
    for i in (0..=jz).rev() {
        let mut acc = 0.0;
        for k in 0..=JP.min(jz - i) {
            acc += PIO2_CHUNKS[k] * fraction[i + k];
        }
        fq[jz - i] = acc;
    }

    let mut hi = 0.0;
    for &v in fq[..=jz].iter().rev() {
        hi += v;
    }
    let mut lo = fq[0] - hi;
    for &v in &fq[1..=jz] {
        lo += v;
    }
    if ih != 0 {
        hi = -hi;
        lo = -lo;
    }
    (n & 7, hi, lo)
}
