//! Deterministic arrays shared by test suites.
//!
//! - [`diagonal`]: `[(0, 0), (1, 1), ..]` as floats.
//! - [`int_diagonal`]: the same with integer components.
//! - [`gray_ramp`]: opaque grays from black toward white.

use wordpack_array::{ColorArray, IntVector2Array, Vector2Array};
use wordpack_core::{Color, IntVector2, Vector2};

/// Element `i` is `(i, i)`.
pub fn diagonal(n: usize) -> Vector2Array {
    Vector2Array::from_fn(n, |i| Vector2::splat(i as f32))
}

/// Element `i` is `(i, i)` with `i32` components.
pub fn int_diagonal(n: usize) -> IntVector2Array {
    IntVector2Array::from_fn(n, |i| IntVector2::splat(i as i32))
}

/// `n` opaque grays evenly spaced from black to white inclusive.
pub fn gray_ramp(n: usize) -> ColorArray {
    let steps = n.saturating_sub(1).max(1) as f32;
    ColorArray::from_fn(n, |i| Color::BLACK.lerp(Color::WHITE, i as f32 / steps))
}
