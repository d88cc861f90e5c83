//! Flag set types, one per word width.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// Iterator over the indices of set bits, lowest first.
#[derive(Clone, Debug)]
pub struct SetBits {
    bits: u64,
}

impl Iterator for SetBits {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.bits == 0 {
            return None;
        }
        let bit = self.bits.trailing_zeros();
        self.bits &= self.bits - 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for SetBits {}

macro_rules! flag_set {
    ($(#[$doc:meta])* $name:ident, $word:ty) => {
        $(#[$doc])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
        pub struct $name($word);

        impl $name {
            /// Size of the word in bytes.
            pub const SIZE_BYTES: usize = std::mem::size_of::<$word>();
            /// Size of the word in bits; also the number of flags.
            pub const SIZE_BITS: u32 = <$word>::BITS;
            /// No flags set.
            pub const EMPTY: Self = Self(0);
            /// Every flag set.
            pub const ALL: Self = Self(<$word>::MAX);

            /// Wrap a raw mask.
            #[inline]
            pub const fn from_bits(bits: $word) -> Self {
                Self(bits)
            }

            /// The set containing only flag `bit`, or `None` if `bit` is
            /// outside the word.
            pub const fn single(bit: u32) -> Option<Self> {
                if bit >= Self::SIZE_BITS {
                    return None;
                }
                Some(Self(1 << bit))
            }

            /// The raw mask.
            #[inline]
            pub const fn bits(self) -> $word {
                self.0
            }

            /// True if every flag in `other` is set in `self`.
            #[inline]
            pub const fn has_all(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            /// True if at least one flag in `other` is set in `self`.
            #[inline]
            pub const fn has_any(self, other: Self) -> bool {
                self.0 & other.0 != 0
            }

            /// Copy with the flags of `other` set.
            #[inline]
            pub const fn adding(self, other: Self) -> Self {
                Self(self.0 | other.0)
            }

            /// Copy with the flags of `other` cleared.
            #[inline]
            pub const fn removing(self, other: Self) -> Self {
                Self(self.0 & !other.0)
            }

            /// Copy with the flags of `other` inverted.
            #[inline]
            pub const fn toggling(self, other: Self) -> Self {
                Self(self.0 ^ other.0)
            }

            /// Flags set in either operand.
            #[inline]
            pub const fn union(self, other: Self) -> Self {
                self.adding(other)
            }

            /// Flags set in both operands.
            #[inline]
            pub const fn intersection(self, other: Self) -> Self {
                Self(self.0 & other.0)
            }

            /// Every flag inverted.
            #[inline]
            pub const fn complement(self) -> Self {
                Self(!self.0)
            }

            /// True if no flag is set.
            #[inline]
            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// Number of set flags.
            #[inline]
            pub const fn count(self) -> u32 {
                self.0.count_ones()
            }

            /// State of flag `bit`, or `None` if `bit` is outside the word.
            pub const fn get(self, bit: u32) -> Option<bool> {
                if bit >= Self::SIZE_BITS {
                    return None;
                }
                Some(self.0 >> bit & 1 == 1)
            }

            /// Copy with flag `bit` set or cleared, or `None` if `bit` is
            /// outside the word.
            pub const fn with(self, bit: u32, on: bool) -> Option<Self> {
                match Self::single(bit) {
                    Some(flag) if on => Some(self.adding(flag)),
                    Some(flag) => Some(self.removing(flag)),
                    None => None,
                }
            }

            /// Indices of the set flags, lowest first.
            pub fn iter(self) -> SetBits {
                SetBits {
                    bits: self.0 as u64,
                }
            }
        }

        impl BitOr for $name {
            type Output = Self;
            fn bitor(self, rhs: Self) -> Self {
                self.union(rhs)
            }
        }

        impl BitAnd for $name {
            type Output = Self;
            fn bitand(self, rhs: Self) -> Self {
                self.intersection(rhs)
            }
        }

        impl BitXor for $name {
            type Output = Self;
            fn bitxor(self, rhs: Self) -> Self {
                self.toggling(rhs)
            }
        }

        impl Not for $name {
            type Output = Self;
            fn not(self) -> Self {
                self.complement()
            }
        }

        impl From<$word> for $name {
            fn from(bits: $word) -> Self {
                Self(bits)
            }
        }

        impl From<$name> for $word {
            fn from(flags: $name) -> Self {
                flags.0
            }
        }

        impl IntoIterator for $name {
            type Item = u32;
            type IntoIter = SetBits;

            fn into_iter(self) -> SetBits {
                self.iter()
            }
        }

        impl FromIterator<u32> for $name {
            /// Collect bit indices into a set. Indices outside the word are
            /// ignored.
            fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
                iter.into_iter()
                    .filter_map(Self::single)
                    .fold(Self::EMPTY, Self::adding)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    concat!(stringify!($name), "({:#0width$b})"),
                    self.0,
                    width = Self::SIZE_BITS as usize + 2
                )
            }
        }

        impl fmt::Binary for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Binary::fmt(&self.0, f)
            }
        }
    };
}

flag_set!(
    /// Up to 8 flags in a `u8`.
    Flags8,
    u8
);
flag_set!(
    /// Up to 16 flags in a `u16`.
    Flags16,
    u16
);
flag_set!(
    /// Up to 32 flags in a `u32`.
    Flags32,
    u32
);
flag_set!(
    /// Up to 64 flags in a `u64`.
    Flags64,
    u64
);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sizes() {
        assert_eq!(Flags8::SIZE_BYTES, 1);
        assert_eq!(Flags16::SIZE_BITS, 16);
        assert_eq!(Flags32::SIZE_BYTES, 4);
        assert_eq!(Flags64::SIZE_BITS, 64);
        assert_eq!(std::mem::size_of::<Flags64>(), 8);
    }

    #[test]
    fn single_and_get() {
        let f = Flags16::single(15).unwrap();
        assert_eq!(f.bits(), 0x8000);
        assert_eq!(f.get(15), Some(true));
        assert_eq!(f.get(0), Some(false));
        assert_eq!(f.get(16), None);
        assert_eq!(Flags16::single(16), None);
    }

    #[test]
    fn with_sets_and_clears() {
        let f = Flags32::EMPTY.with(3, true).unwrap();
        assert_eq!(f.bits(), 0b1000);
        assert_eq!(f.with(3, false), Some(Flags32::EMPTY));
        assert_eq!(f.with(40, true), None);
    }

    #[test]
    fn has_all_of_empty_is_true() {
        assert!(Flags8::EMPTY.has_all(Flags8::EMPTY));
        assert!(!Flags8::ALL.has_any(Flags8::EMPTY));
    }

    #[test]
    fn iterate_set_bits() {
        let f = Flags64::from_bits((1 << 63) | 0b101);
        assert_eq!(f.iter().collect::<Vec<_>>(), vec![0, 2, 63]);
        assert_eq!(f.iter().len(), 3);
        assert_eq!([0u32, 2, 63, 99].into_iter().collect::<Flags64>(), f);
    }

    #[test]
    fn debug_shows_full_width() {
        assert_eq!(format!("{:?}", Flags8::from_bits(0b101)), "Flags8(0b00000101)");
    }

    fn arb_flags() -> impl Strategy<Value = Flags32> {
        any::<u32>().prop_map(Flags32::from_bits)
    }

    proptest! {
        #[test]
        fn union_commutative(a in arb_flags(), b in arb_flags()) {
            prop_assert_eq!(a | b, b | a);
        }

        #[test]
        fn intersection_associative(a in arb_flags(), b in arb_flags(), c in arb_flags()) {
            prop_assert_eq!((a & b) & c, a & (b & c));
        }

        #[test]
        fn de_morgan(a in arb_flags(), b in arb_flags()) {
            prop_assert_eq!(!(a | b), !a & !b);
        }

        #[test]
        fn adding_then_has_all(a in arb_flags(), b in arb_flags()) {
            prop_assert!(a.adding(b).has_all(b));
        }

        #[test]
        fn removing_then_has_none(a in arb_flags(), b in arb_flags()) {
            prop_assert!(!a.removing(b).has_any(b));
        }

        #[test]
        fn toggle_involution(a in arb_flags(), b in arb_flags()) {
            prop_assert_eq!(a.toggling(b).toggling(b), a);
        }

        #[test]
        fn count_matches_iter(a in arb_flags()) {
            prop_assert_eq!(a.count() as usize, a.iter().count());
        }
    }
}
