//! Two-component float vector packed into a `u64`.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::config::Tolerance;
use crate::error::ValueError;
use crate::int_vector::IntVector2;
use crate::packing::{
    pack_f32_pair, sealed, unpack_first_f32, unpack_second_f32, Additive, Packed,
};
use crate::scalar::{approximately_equals, lerp};

/// A 2D vector of `f32` stored as one 64-bit word.
///
/// `x` occupies bits `[0, 32)` and `y` bits `[32, 64)`, each as its raw
/// IEEE-754 pattern. Equality and hashing compare the word, so `-0.0` and
/// `0.0` components differ and a NaN equals itself only with an identical
/// payload. Use [`approximately_equals`](Vector2::approximately_equals) for
/// numeric comparison.
///
/// Values are immutable; every operator returns a freshly encoded vector.
///
/// # Examples
///
/// ```
/// use wordpack_core::Vector2;
///
/// let v = Vector2::new(3.0, 4.0);
/// assert_eq!(v.length(), 5.0);
/// assert_eq!(v + Vector2::ONE, Vector2::new(4.0, 5.0));
/// assert_eq!(std::mem::size_of::<Vector2>(), 8);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector2(u64);

impl Vector2 {
    /// `(0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// `(1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0);
    /// `(1, 0)`.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);
    /// `(0, 1)`.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Number of components.
    pub const COMPONENTS: usize = 2;

    /// Encode `(x, y)`.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self(pack_f32_pair(x, y))
    }

    /// A vector with both components set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    /// The x component.
    #[inline]
    pub const fn x(self) -> f32 {
        unpack_first_f32(self.0)
    }

    /// The y component.
    #[inline]
    pub const fn y(self) -> f32 {
        unpack_second_f32(self.0)
    }

    /// Component by index: 0 is x, 1 is y.
    pub fn get(self, index: usize) -> Result<f32, ValueError> {
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
    pub const fn with_x(self, x: f32) -> Self {
        Self::new(x, self.y())
    }

    /// Copy with y replaced.
    #[inline]
    pub const fn with_y(self, y: f32) -> Self {
        Self::new(self.x(), y)
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x() * other.x() + self.y() * other.y()
    }

    /// Z component of the 3D cross product of `(x, y, 0)` vectors.
    #[inline]
    pub fn cross(self, other: Self) -> f32 {
        self.x() * other.y() - self.y() * other.x()
    }

    /// Squared Euclidean length.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f32 {
        self.x().hypot(self.y())
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// Squared Euclidean distance to `other`.
    pub fn distance_squared(self, other: Self) -> f32 {
        (self - other).length_squared()
    }

    /// Unit vector in the same direction.
    ///
    /// Saturates to [`Vector2::ZERO`] when the length is below the default
    /// zero threshold (`1e-5`) rather than dividing by it.
    pub fn normalized(self) -> Self {
        self.normalized_with(&Tolerance::default())
    }

    /// [`normalized`](Vector2::normalized) with an explicit threshold.
    pub fn normalized_with(self, tolerance: &Tolerance) -> Self {
        let len = self.length();
        if len < tolerance.zero_threshold {
            return Self::ZERO;
        }
        self / len
    }

    /// Interpolate componentwise: `self + (other - self) * t`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(lerp(self.x(), other.x(), t), lerp(self.y(), other.y(), t))
    }

    /// Componentwise minimum.
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x().min(other.x()), self.y().min(other.y()))
    }

    /// Componentwise maximum.
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x().max(other.x()), self.y().max(other.y()))
    }

    /// Componentwise absolute value.
    pub fn abs(self) -> Self {
        Self::new(self.x().abs(), self.y().abs())
    }

    /// Angle from the positive x axis, in radians, in `[-π, π]`.
    pub fn angle(self) -> f32 {
        self.y().atan2(self.x())
    }

    /// Rotate counter-clockwise by `radians`.
    pub fn rotated(self, radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(
            self.x() * cos - self.y() * sin,
            self.x() * sin + self.y() * cos,
        )
    }

    /// Componentwise relative comparison, see
    /// [`approximately_equals`](crate::approximately_equals).
    pub fn approximately_equals(self, other: Self, epsilon: f32) -> bool {
        approximately_equals(self.x(), other.x(), epsilon)
            && approximately_equals(self.y(), other.y(), epsilon)
    }

    /// [`approximately_equals`](Vector2::approximately_equals) using a
    /// [`Tolerance`].
    pub fn approximately_equals_with(self, other: Self, tolerance: &Tolerance) -> bool {
        self.approximately_equals(other, tolerance.epsilon)
    }

    /// Whether both components are finite.
    pub fn is_finite(self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }

    /// Truncate both components toward zero, saturating at the `i32` range.
    /// NaN maps to 0.
    pub fn to_int_vector(self) -> IntVector2 {
        IntVector2::new(self.x() as i32, self.y() as i32)
    }

    /// `[x, y]`.
    pub const fn to_array(self) -> [f32; 2] {
        [self.x(), self.y()]
    }
}

impl sealed::Sealed for Vector2 {}

impl Packed for Vector2 {
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

impl Additive for Vector2 {
    const ZERO: Self = Vector2::ZERO;
}

impl Add for Vector2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x() + rhs.x(), self.y() + rhs.y())
    }
}

impl Sub for Vector2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x() - rhs.x(), self.y() - rhs.y())
    }
}

/// Componentwise (Hadamard) product.
impl Mul for Vector2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x() * rhs.x(), self.y() * rhs.y())
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x() * rhs, self.y() * rhs)
    }
}

impl Mul<Vector2> for f32 {
    type Output = Vector2;
    #[inline]
    fn mul(self, rhs: Vector2) -> Vector2 {
        rhs * self
    }
}

/// Componentwise quotient.
impl Div for Vector2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x() / rhs.x(), self.y() / rhs.y())
    }
}

impl Div<f32> for Vector2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x() / rhs, self.y() / rhs)
    }
}

impl Neg for Vector2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x(), -self.y())
    }
}

impl Sum for Vector2 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Vector2> for Vector2 {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for (f32, f32) {
    fn from(v: Vector2) -> Self {
        (v.x(), v.y())
    }
}

impl From<Vector2> for [f32; 2] {
    fn from(v: Vector2) -> Self {
        v.to_array()
    }
}

impl fmt::Debug for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector2")
            .field("x", &self.x())
            .field("y", &self.y())
            .finish()
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}
