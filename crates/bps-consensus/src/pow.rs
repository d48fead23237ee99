use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::hash::Hash256;

const COMPACT_SIGN_BIT: u32 = 0x0080_0000;
const COMPACT_MANTISSA_MASK: u32 = 0x007f_ffff;

/// A compact `bits` value expanded to its full-width target.
///
/// `negative` and `overflow` mirror the flags of the reference decoder: the
/// mantissa is never zero when either is set, and `value` is meaningless
/// when `overflow` is set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompactTarget {
    pub value: BigUint,
    pub negative: bool,
    pub overflow: bool,
}

pub fn decode_compact(bits: u32) -> CompactTarget {
    let size = bits >> 24;
    let mut word = bits & COMPACT_MANTISSA_MASK;
    let value = if size <= 3 {
        word >>= 8 * (3 - size);
        BigUint::from(word)
    } else {
        BigUint::from(word) << (8 * (size - 3)) as usize
    };
    let negative = word != 0 && (bits & COMPACT_SIGN_BIT) != 0;
    let overflow = word != 0
        && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32));
    CompactTarget {
        value,
        negative,
        overflow,
    }
}

/// Inverse of [`decode_compact`] for non-negative targets.
pub fn encode_compact(target: &BigUint) -> u32 {
    let mut size = target.bits().div_ceil(8) as u32;
    let mut compact = if size <= 3 {
        let low = target.to_u64().unwrap_or(0);
        (low << (8 * (3 - size))) as u32
    } else {
        let shifted: BigUint = target >> (8 * (size - 3)) as usize;
        shifted.to_u32().unwrap_or(0)
    };
    if compact & COMPACT_SIGN_BIT != 0 {
        compact >>= 8;
        size += 1;
    }
    compact | (size << 24)
}

pub fn hash_to_biguint(h: &Hash256) -> BigUint {
    BigUint::from_bytes_le(h)
}

/// Whether `hash` satisfies the target encoded in `bits`, given a network
/// ceiling. Targets that decode negative, zero, overflowing or above the
/// ceiling never pass.
pub fn meets_target(hash: &Hash256, bits: u32, ceiling: &Hash256) -> bool {
    let target = decode_compact(bits);
    if target.negative || target.overflow || target.value.is_zero() {
        return false;
    }
    if target.value > hash_to_biguint(ceiling) {
        return false;
    }
    hash_to_biguint(hash) <= target.value
}

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    fn verify_meets_target_zero_bits_rejects() {
        let hash: [u8; 32] = kani::any();
        let ceiling: [u8; 32] = kani::any();
        assert!(!meets_target(&hash, 0, &ceiling));
    }
}
