//! RGBA color packed into a `u32`.

use std::fmt;

use crate::error::ValueError;
use crate::packing::{pack_quad, sealed, unpack_quad, Packed};
use crate::scalar::lerp;

/// An 8-bit-per-channel RGBA color stored as one 32-bit word.
///
/// Channel layout, most significant byte first: `r`, `g`, `b`, `a`. The
/// word therefore reads as `0xRRGGBBAA`.
///
/// # Examples
///
/// ```
/// use wordpack_core::Color;
///
/// let c = Color::from_rgba(0x12, 0x34, 0x56, 0xFF);
/// assert_eq!(c.g(), 0x34);
/// assert_eq!(c.to_string(), "#123456FF");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(u32);

impl Color {
    /// Fully transparent black, the zero word.
    pub const TRANSPARENT: Self = Self::from_rgba(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::from_rgb(255, 0, 0);
    /// Opaque green.
    pub const GREEN: Self = Self::from_rgb(0, 255, 0);
    /// Opaque blue.
    pub const BLUE: Self = Self::from_rgb(0, 0, 255);

    /// Number of channels.
    pub const COMPONENTS: usize = 4;

    /// Encode four channels.
    #[inline]
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(pack_quad([r, g, b, a]))
    }

    /// Encode an opaque color.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(r, g, b, 255)
    }

    /// Red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        unpack_quad(self.0, 0)
    }

    /// Green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        unpack_quad(self.0, 1)
    }

    /// Blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        unpack_quad(self.0, 2)
    }

    /// Alpha channel.
    #[inline]
    pub const fn a(self) -> u8 {
        unpack_quad(self.0, 3)
    }

    /// Channel by index: 0 = r, 1 = g, 2 = b, 3 = a.
    pub fn get(self, index: usize) -> Result<u8, ValueError> {
        if index >= Self::COMPONENTS {
            return Err(ValueError::ComponentOutOfBounds {
                index,
                len: Self::COMPONENTS,
            });
        }
        Ok(unpack_quad(self.0, index))
    }

    /// Copy with the alpha channel replaced.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::from_rgba(self.r(), self.g(), self.b(), a)
    }

    /// Per-channel interpolation toward `other`, rounded to the nearest
    /// integer and clamped to `0..=255`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let channel = |i: usize| {
            let from = unpack_quad(self.0, i) as f32;
            let to = unpack_quad(other.0, i) as f32;
            lerp(from, to, t).round().clamp(0.0, 255.0) as u8
        };
        Self(pack_quad([channel(0), channel(1), channel(2), channel(3)]))
    }

    /// `[r, g, b, a]`.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), self.a()]
    }
}

impl sealed::Sealed for Color {}

impl Packed for Color {
    type Word = u32;
    const SIZE_BYTES: usize = 4;
    const SIZE_BITS: u32 = 32;

    #[inline]
    fn to_word(self) -> u32 {
        self.0
    }

    #[inline]
    fn from_word(word: u32) -> Self {
        Self(word)
    }
}

impl From<[u8; 4]> for Color {
    fn from(rgba: [u8; 4]) -> Self {
        Self(pack_quad(rgba))
    }
}

impl From<Color> for [u8; 4] {
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Color")
            .field("r", &self.r())
            .field("g", &self.g())
            .field("b", &self.b())
            .field("a", &self.a())
            .finish()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r(), self.g(), self.b(), self.a())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn channels_in_order() {
        let c = Color::from_rgba(1, 2, 3, 4);
        assert_eq!(c.to_array(), [1, 2, 3, 4]);
        assert_eq!(c.get(0), Ok(1));
        assert_eq!(c.get(3), Ok(4));
        assert_eq!(
            c.get(4),
            Err(ValueError::ComponentOutOfBounds { index: 4, len: 4 })
        );
    }

    #[test]
    fn zero_word_is_transparent() {
        assert_eq!(Color::default(), Color::TRANSPARENT);
        assert_eq!(Color::TRANSPARENT.to_word(), 0);
        assert_eq!(Color::RED.to_word(), 0xFF00_00FF);
    }

    #[test]
    fn lerp_midpoint_rounds() {
        let mid = Color::BLACK.lerp(Color::WHITE, 0.5);
        assert_eq!(mid, Color::from_rgba(128, 128, 128, 255));
    }

    #[test]
    fn lerp_clamps_extrapolation() {
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 2.0), Color::WHITE);
        assert_eq!(Color::WHITE.lerp(Color::BLACK, 2.0), Color::BLACK);
    }

    #[test]
    fn with_alpha_keeps_rgb() {
        assert_eq!(Color::RED.with_alpha(0x80).to_string(), "#FF000080");
    }

    proptest! {
        #[test]
        fn encoding_exact(rgba in any::<[u8; 4]>()) {
            let c = Color::from(rgba);
            prop_assert_eq!(<[u8; 4]>::from(c), rgba);
            prop_assert_eq!(Color::from_word(c.to_word()), c);
        }

        #[test]
        fn lerp_endpoints(a in any::<[u8; 4]>(), b in any::<[u8; 4]>()) {
            let (a, b) = (Color::from(a), Color::from(b));
            prop_assert_eq!(a.lerp(b, 0.0), a);
            prop_assert_eq!(a.lerp(b, 1.0), b);
        }
    }
}
