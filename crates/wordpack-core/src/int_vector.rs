//! Two-component integer (lattice) vector packed into a `u64`.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::ValueError;
use crate::packing::{
    pack_i32_pair, sealed, unpack_first_i32, unpack_second_i32, Additive, Packed,
};
use crate::vector::Vector2;

/// A 2D vector of `i32` stored as one 64-bit word.
///
/// `x` occupies bits `[0, 32)` and `y` bits `[32, 64)` as two's-complement
/// patterns. Arithmetic wraps on overflow like the underlying machine
/// words; products that need the full range (`dot`, `cross`,
/// `length_squared`) widen to `i128`, where every result is exact.
///
/// # Examples
///
/// ```
/// use wordpack_core::IntVector2;
///
/// let a = IntVector2::new(2, -3);
/// assert_eq!(a + IntVector2::ONE, IntVector2::new(3, -2));
/// assert_eq!(a.manhattan_length(), 5);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IntVector2(u64);

impl IntVector2 {
    /// `(0, 0)`.
    pub const ZERO: Self = Self::new(0, 0);
    /// `(1, 1)`.
    pub const ONE: Self = Self::new(1, 1);
    /// `(1, 0)`.
    pub const UNIT_X: Self = Self::new(1, 0);
    /// `(0, 1)`.
    pub const UNIT_Y: Self = Self::new(0, 1);

    /// Number of components.
    pub const COMPONENTS: usize = 2;

    /// Encode `(x, y)`.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self(pack_i32_pair(x, y))
    }

    /// A vector with both components set to `v`.
    #[inline]
    pub const fn splat(v: i32) -> Self {
        Self::new(v, v)
    }

    /// The x component.
    #[inline]
    pub const fn x(self) -> i32 {
        unpack_first_i32(self.0)
    }

    /// The y component.
    #[inline]
    pub const fn y(self) -> i32 {
        unpack_second_i32(self.0)
    }

    /// Component by index: 0 is x, 1 is y.
    pub fn get(self, index: usize) -> Result<i32, ValueError> {
        match index {
            0 => Ok(self.x()),
            1 => Ok(self.y()),
            _ => Err(ValueError::ComponentOutOfBounds {
                index,
                len: Self::COMPONENTS,
            }),
        }
    }

    /// Copy with x replaced.
    #[inline]
    pub const fn with_x(self, x: i32) -> Self {
        Self::new(x, self.y())
    }

    /// Copy with y replaced.
    #[inline]
    pub const fn with_y(self, y: i32) -> Self {
        Self::new(self.x(), y)
    }

    /// Dot product, widened to `i128`.
    ///
    /// Two `i32` products each fit in `i64`, but their sum reaches `2^63`
    /// for `i32::MIN` components.
    pub fn dot(self, other: Self) -> i128 {
        self.x() as i128 * other.x() as i128 + self.y() as i128 * other.y() as i128
    }

    /// Z component of the 3D cross product, widened to `i128`.
    pub fn cross(self, other: Self) -> i128 {
        self.x() as i128 * other.y() as i128 - self.y() as i128 * other.x() as i128
    }

    /// Squared Euclidean length, widened to `i128`.
    pub fn length_squared(self) -> i128 {
        self.dot(self)
    }

    /// Euclidean length.
    pub fn length(self) -> f32 {
        (self.length_squared() as f64).sqrt() as f32
    }

    /// `|x| + |y|`, widened to `i64`.
    pub fn manhattan_length(self) -> i64 {
        (self.x() as i64).abs() + (self.y() as i64).abs()
    }

    /// Componentwise minimum.
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x().min(other.x()), self.y().min(other.y()))
    }

    /// Componentwise maximum.
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x().max(other.x()), self.y().max(other.y()))
    }

    /// Componentwise absolute value; `i32::MIN` wraps to itself.
    pub fn abs(self) -> Self {
        Self::new(self.x().wrapping_abs(), self.y().wrapping_abs())
    }

    /// Convert to a float vector.
    pub fn to_vector(self) -> Vector2 {
        Vector2::new(self.x() as f32, self.y() as f32)
    }

    /// `[x, y]`.
    pub const fn to_array(self) -> [i32; 2] {
        [self.x(), self.y()]
    }
}

impl sealed::Sealed for IntVector2 {}

impl Packed for IntVector2 {
    type Word = u64;
    const SIZE_BYTES: usize = 8;
    const SIZE_BITS: u32 = 64;

    #[inline]
    fn to_word(self) -> u64 {
        self.0
    }

    #[inline]
    fn from_word(word: u64) -> Self {
        Self(word)
    }
}

impl Additive for IntVector2 {
    const ZERO: Self = IntVector2::ZERO;
}

impl Add for IntVector2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x().wrapping_add(rhs.x()), self.y().wrapping_add(rhs.y()))
    }
}

impl Sub for IntVector2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x().wrapping_sub(rhs.x()), self.y().wrapping_sub(rhs.y()))
    }
}

impl Mul for IntVector2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x().wrapping_mul(rhs.x()), self.y().wrapping_mul(rhs.y()))
    }
}

impl Mul<i32> for IntVector2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x().wrapping_mul(rhs), self.y().wrapping_mul(rhs))
    }
}

/// Componentwise truncating division.
///
/// # Panics
///
/// Panics if either component of `rhs` is zero.
impl Div for IntVector2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x().wrapping_div(rhs.x()), self.y().wrapping_div(rhs.y()))
    }
}

/// Truncating division by a scalar.
///
/// # Panics
///
/// Panics if `rhs` is zero.
impl Div<i32> for IntVector2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: i32) -> Self {
        Self::new(self.x().wrapping_div(rhs), self.y().wrapping_div(rhs))
    }
}

impl Neg for IntVector2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(self.x().wrapping_neg(), self.y().wrapping_neg())
    }
}

impl Sum for IntVector2 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a IntVector2> for IntVector2 {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<(i32, i32)> for IntVector2 {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i32; 2]> for IntVector2 {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<IntVector2> for (i32, i32) {
    fn from(v: IntVector2) -> Self {
        (v.x(), v.y())
    }
}

impl From<IntVector2> for Vector2 {
    fn from(v: IntVector2) -> Self {
        v.to_vector()
    }
}

impl fmt::Debug for IntVector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntVector2")
            .field("x", &self.x())
            .field("y", &self.y())
            .finish()
    }
}

impl fmt::Display for IntVector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}
