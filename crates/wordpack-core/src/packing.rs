//! Bit-level encoding of logical fields into a single word.
//!
//! Layout of the 64-bit pair encodings:
//!
//! ```text
//! 63                32 31                 0
//! ┌───────────────────┬───────────────────┐
//! │  second (32 bits) │  first (32 bits)  │
//! └───────────────────┴───────────────────┘
//! ```
//!
//! Float fields are stored as their IEEE-754 bit pattern (`f32::to_bits`),
//! integer fields as their two's-complement pattern. Both directions are
//! pure bit reinterpretation, so every input (NaN payloads, ±∞, ±0)
//! round-trips exactly.
//!
//! The 32-bit quad encoding stores four bytes big-endian: byte 0 in bits
//! `[24, 32)`, byte 3 in bits `[0, 8)`.

use std::fmt;
use std::hash::Hash;
use std::ops::Add;

#[doc(hidden)]
pub mod sealed {
    /// Closes the set of [`Packed`](super::Packed) implementors.
    pub trait Sealed {}
}

/// A value whose whole state is one primitive word.
///
/// Implemented only by the value types of this crate. The word accessors
/// exist for packed containers; host code should go through the named
/// field accessors of each type.
pub trait Packed: Copy + sealed::Sealed {
    /// The primitive word holding the encoded fields.
    type Word: Copy + Eq + Hash + Default + fmt::Debug + Send + Sync + 'static;

    /// Size of the encoded word in bytes.
    const SIZE_BYTES: usize;

    /// Size of the encoded word in bits.
    const SIZE_BITS: u32;

    #[doc(hidden)]
    fn to_word(self) -> Self::Word;

    #[doc(hidden)]
    fn from_word(word: Self::Word) -> Self;
}

/// A packed value with an additive identity.
///
/// Summation over packed containers folds with `+` starting from
/// [`Additive::ZERO`].
pub trait Additive: Packed + Add<Output = Self> {
    /// The additive identity.
    const ZERO: Self;
}

const LOW_HALF: u64 = 0xFFFF_FFFF;

/// Concatenate two 32-bit patterns: `first` low, `second` high.
#[inline]
pub(crate) const fn pack_pair(first: u32, second: u32) -> u64 {
    (first as u64) | ((second as u64) << 32)
}

/// Bits `[0, 32)` of a pair word.
#[inline]
pub(crate) const fn first_half(word: u64) -> u32 {
    (word & LOW_HALF) as u32
}

/// Bits `[32, 64)` of a pair word.
#[inline]
pub(crate) const fn second_half(word: u64) -> u32 {
    (word >> 32) as u32
}

#[inline]
pub(crate) const fn pack_f32_pair(first: f32, second: f32) -> u64 {
    pack_pair(first.to_bits(), second.to_bits())
}

#[inline]
pub(crate) const fn unpack_first_f32(word: u64) -> f32 {
    f32::from_bits(first_half(word))
}

#[inline]
pub(crate) const fn unpack_second_f32(word: u64) -> f32 {
    f32::from_bits(second_half(word))
}

#[inline]
pub(crate) const fn pack_i32_pair(first: i32, second: i32) -> u64 {
    pack_pair(first as u32, second as u32)
}

#[inline]
pub(crate) const fn unpack_first_i32(word: u64) -> i32 {
    first_half(word) as i32
}

#[inline]
pub(crate) const fn unpack_second_i32(word: u64) -> i32 {
    second_half(word) as i32
}

/// Pack four bytes, `bytes[0]` in the most significant position.
#[inline]
pub(crate) const fn pack_quad(bytes: [u8; 4]) -> u32 {
    ((bytes[0] as u32) << 24)
        | ((bytes[1] as u32) << 16)
        | ((bytes[2] as u32) << 8)
        | (bytes[3] as u32)
}

/// Extract byte `index` (0..=3) of a quad word.
#[inline]
pub(crate) const fn unpack_quad(word: u32, index: usize) -> u8 {
    ((word >> (24 - 8 * index as u32)) & 0xFF) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn halves_do_not_overlap() {
        let word = pack_pair(0xDEAD_BEEF, 0x0123_4567);
        assert_eq!(word, 0x0123_4567_DEAD_BEEF);
        assert_eq!(first_half(word), 0xDEAD_BEEF);
        assert_eq!(second_half(word), 0x0123_4567);
    }

    #[test]
    fn signed_zero_kept_distinct() {
        let pos = pack_f32_pair(0.0, 0.0);
        let neg = pack_f32_pair(-0.0, 0.0);
        assert_ne!(pos, neg);
        assert!(unpack_first_f32(neg).is_sign_negative());
    }

    #[test]
    fn negative_ints_do_not_bleed_into_high_half() {
        let word = pack_i32_pair(-1, 7);
        assert_eq!(unpack_first_i32(word), -1);
        assert_eq!(unpack_second_i32(word), 7);
    }

    #[test]
    fn quad_byte_order() {
        let word = pack_quad([0x11, 0x22, 0x33, 0x44]);
        assert_eq!(word, 0x1122_3344);
        assert_eq!(unpack_quad(word, 0), 0x11);
        assert_eq!(unpack_quad(word, 3), 0x44);
    }

    proptest! {
        #[test]
        fn f32_pair_bit_exact(a in any::<u32>(), b in any::<u32>()) {
            let word = pack_f32_pair(f32::from_bits(a), f32::from_bits(b));
            prop_assert_eq!(unpack_first_f32(word).to_bits(), a);
            prop_assert_eq!(unpack_second_f32(word).to_bits(), b);
        }

        #[test]
        fn i32_pair_exact(a in any::<i32>(), b in any::<i32>()) {
            let word = pack_i32_pair(a, b);
            prop_assert_eq!(unpack_first_i32(word), a);
            prop_assert_eq!(unpack_second_i32(word), b);
        }

        #[test]
        fn quad_exact(bytes in any::<[u8; 4]>()) {
            let word = pack_quad(bytes);
            for (i, &byte) in bytes.iter().enumerate() {
                prop_assert_eq!(unpack_quad(word, i), byte);
            }
        }
    }
}
