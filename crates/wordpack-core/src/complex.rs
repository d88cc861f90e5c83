//! Complex number packed into a `u64`.
//!
//! Transcendental functions use the standard identities:
//!
//! - `exp(a + bi) = e^a (cos b + i sin b)`
//! - `ln(z) = ln|z| + i arg(z)`
//! - `z^w = exp(w ln z)`
//! - `sin(a + bi) = sin a cosh b + i cos a sinh b`
//! - `cos(a + bi) = cos a cosh b - i sin a sinh b`
//! - `sinh(a + bi) = sinh a cos b + i cosh a sin b`
//! - `cosh(a + bi) = cosh a cos b + i sinh a sin b`

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::config::Tolerance;
use crate::error::ValueError;
use crate::packing::{
    pack_f32_pair, sealed, unpack_first_f32, unpack_second_f32, Additive, Packed,
};
use crate::scalar::approximately_equals;

/// A complex number with `f32` parts stored as one 64-bit word.
///
/// The real part occupies bits `[0, 32)` and the imaginary part bits
/// `[32, 64)`. Equality is bitwise, as for [`Vector2`](crate::Vector2).
///
/// # Examples
///
/// ```
/// use wordpack_core::Complex;
///
/// let i = Complex::I;
/// assert_eq!(i * i, Complex::new(-1.0, 0.0));
/// assert_eq!(Complex::ZERO.pow(Complex::ZERO), Complex::ONE);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Complex(u64);

impl Complex {
    /// `0 + 0i`.
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// `1 + 0i`.
    pub const ONE: Self = Self::new(1.0, 0.0);
    /// `0 + 1i`.
    pub const I: Self = Self::new(0.0, 1.0);

    /// Number of components.
    pub const COMPONENTS: usize = 2;

    /// Encode `re + im·i`.
    #[inline]
    pub const fn new(re: f32, im: f32) -> Self {
        Self(pack_f32_pair(re, im))
    }

    /// A purely real number.
    #[inline]
    pub const fn from_real(re: f32) -> Self {
        Self::new(re, 0.0)
    }

    /// `r (cos θ + i sin θ)`.
    pub fn from_polar(r: f32, theta: f32) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(r * cos, r * sin)
    }

    /// Real part.
    #[inline]
    pub const fn re(self) -> f32 {
        unpack_first_f32(self.0)
    }

    /// Imaginary part.
    #[inline]
    pub const fn im(self) -> f32 {
        unpack_second_f32(self.0)
    }

    /// Component by index: 0 is the real part, 1 the imaginary part.
    pub fn get(self, index: usize) -> Result<f32, ValueError> {
        match index {
            0 => Ok(self.re()),
            1 => Ok(self.im()),
            _ => Err(ValueError::ComponentOutOfBounds {
                index,
                len: Self::COMPONENTS,
            }),
        }
    }

    /// Whether both parts are numerically zero (`-0.0` counts).
    #[inline]
    pub fn is_zero(self) -> bool {
        self.re() == 0.0 && self.im() == 0.0
    }

    /// Complex conjugate.
    pub fn conjugate(self) -> Self {
        Self::new(self.re(), -self.im())
    }

    /// Modulus `|z|`.
    pub fn abs(self) -> f32 {
        self.re().hypot(self.im())
    }

    /// Squared modulus.
    pub fn abs_squared(self) -> f32 {
        self.re() * self.re() + self.im() * self.im()
    }

    /// Argument (phase angle) in `[-π, π]`.
    pub fn arg(self) -> f32 {
        self.im().atan2(self.re())
    }

    /// `1 / z`.
    pub fn reciprocal(self) -> Self {
        Self::ONE / self
    }

    /// `e^z`.
    pub fn exp(self) -> Self {
        Self::from_polar(self.re().exp(), self.im())
    }

    /// Principal natural logarithm.
    pub fn ln(self) -> Self {
        Self::new(self.abs().ln(), self.arg())
    }

    /// Principal square root.
    pub fn sqrt(self) -> Self {
        Self::from_polar(self.abs().sqrt(), self.arg() / 2.0)
    }

    /// `self^exponent` via `exp(exponent · ln self)`.
    ///
    /// An exact-zero exponent yields [`Complex::ONE`] for every base, and an
    /// exact-zero base with a nonzero exponent yields [`Complex::ZERO`], so
    /// `0^0` and `0^w` never produce NaN.
    pub fn pow(self, exponent: Self) -> Self {
        if exponent.is_zero() {
            return Self::ONE;
        }
        if self.is_zero() {
            return Self::ZERO;
        }
        (exponent * self.ln()).exp()
    }

    /// `self^exponent` for a real exponent, computed in polar form. Same
    /// zero rules as [`pow`](Complex::pow).
    pub fn powf(self, exponent: f32) -> Self {
        if exponent == 0.0 {
            return Self::ONE;
        }
        if self.is_zero() {
            return Self::ZERO;
        }
        Self::from_polar(self.abs().powf(exponent), self.arg() * exponent)
    }

    /// Complex sine.
    pub fn sin(self) -> Self {
        let (a, b) = (self.re(), self.im());
        Self::new(a.sin() * b.cosh(), a.cos() * b.sinh())
    }

    /// Complex cosine.
    pub fn cos(self) -> Self {
        let (a, b) = (self.re(), self.im());
        Self::new(a.cos() * b.cosh(), -(a.sin() * b.sinh()))
    }

    /// Complex tangent.
    pub fn tan(self) -> Self {
        self.sin() / self.cos()
    }

    /// Complex hyperbolic sine.
    pub fn sinh(self) -> Self {
        let (a, b) = (self.re(), self.im());
        Self::new(a.sinh() * b.cos(), a.cosh() * b.sin())
    }

    /// Complex hyperbolic cosine.
    pub fn cosh(self) -> Self {
        let (a, b) = (self.re(), self.im());
        Self::new(a.cosh() * b.cos(), a.sinh() * b.sin())
    }

    /// Complex hyperbolic tangent.
    pub fn tanh(self) -> Self {
        self.sinh() / self.cosh()
    }

    /// Partwise relative comparison.
    pub fn approximately_equals(self, other: Self, epsilon: f32) -> bool {
        approximately_equals(self.re(), other.re(), epsilon)
            && approximately_equals(self.im(), other.im(), epsilon)
    }

    /// [`approximately_equals`](Complex::approximately_equals) using a
    /// [`Tolerance`].
    pub fn approximately_equals_with(self, other: Self, tolerance: &Tolerance) -> bool {
        self.approximately_equals(other, tolerance.epsilon)
    }
}

impl sealed::Sealed for Complex {}

impl Packed for Complex {
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

impl Additive for Complex {
    const ZERO: Self = Complex::ZERO;
}

impl Add for Complex {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.re() + rhs.re(), self.im() + rhs.im())
    }
}

impl Sub for Complex {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re() - rhs.re(), self.im() - rhs.im())
    }
}

impl Mul for Complex {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let (a, b, c, d) = (self.re(), self.im(), rhs.re(), rhs.im());
        Self::new(a * c - b * d, a * d + b * c)
    }
}

impl Mul<f32> for Complex {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.re() * rhs, self.im() * rhs)
    }
}

impl Div for Complex {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        let (a, b, c, d) = (self.re(), self.im(), rhs.re(), rhs.im());
        let denom = c * c + d * d;
        Self::new((a * c + b * d) / denom, (b * c - a * d) / denom)
    }
}

impl Div<f32> for Complex {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.re() / rhs, self.im() / rhs)
    }
}

impl Neg for Complex {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.re(), -self.im())
    }
}

impl Sum for Complex {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Complex> for Complex {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<f32> for Complex {
    fn from(re: f32) -> Self {
        Self::from_real(re)
    }
}

impl From<(f32, f32)> for Complex {
    fn from((re, im): (f32, f32)) -> Self {
        Self::new(re, im)
    }
}

impl fmt::Debug for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Complex")
            .field("re", &self.re())
            .field("im", &self.im())
            .finish()
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let im = self.im();
        if im.is_sign_negative() {
            write!(f, "{} - {}i", self.re(), -im)
        } else {
            write!(f, "{} + {}i", self.re(), im)
        }
    }
}
