// crates/sigcurve-core/src/signal/bitpack.rs

use crate::error::{CurveError, Result};
use crate::validate::INDEX_BITS;

/// `2^bits - 1`, valid for the full `0..=64` range.
#[inline]
pub fn low_mask(bits: u32) -> u64 {
    if bits >= INDEX_BITS {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

/// Write the low `out.len()` bits of `value` into `out`, MSB-first.
///
/// `out[0]` receives bit `out.len() - 1` of `value` and the last slot receives
/// bit 0. Higher bits of `value` are dropped.
pub fn low_bits_msb_first(value: u64, out: &mut [bool]) {
    let n = out.len();
    debug_assert!(n <= INDEX_BITS as usize);
    for (p, slot) in out.iter_mut().enumerate() {
        let shift = n - 1 - p;
        *slot = (value >> shift) & 1 == 1;
    }
}

/// Gray code to plain binary, in place: `out[k] = in[k] ^ out[k-1]`.
pub fn gray_to_binary(bits: &mut [bool]) {
    for k in 1..bits.len() {
        bits[k] ^= bits[k - 1];
    }
}

/// Pack an MSB-first bit sequence into a `u64`.
///
/// The first bit becomes the most significant bit of a `bits.len()`-bit
/// number; sequences shorter than 64 are zero-extended on the left, so
/// `[true, false]` packs to `2`.
pub fn pack_msb_first(bits: &[bool]) -> Result<u64> {
    if bits.len() > INDEX_BITS as usize {
        return Err(CurveError::Range {
            dims: 1,
            bits: bits.len() as u32,
            total: bits.len() as u64,
        });
    }
    let mut acc: u64 = 0;
    for &b in bits {
        acc = (acc << 1) | (b as u64);
    }
    Ok(acc)
}
