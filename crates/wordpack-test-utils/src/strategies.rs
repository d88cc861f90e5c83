//! Proptest strategies for packed values and arrays.

use proptest::collection::vec;
use proptest::prelude::*;
use wordpack_array::{ComplexArray, IntVector2Array, Vector2Array};
use wordpack_core::{Color, Complex, IntVector2, Vector2};

/// Edge-case floats that must survive packing bit for bit.
pub fn special_f32() -> impl Strategy<Value = f32> {
    prop_oneof![
        Just(0.0),
        Just(-0.0),
        Just(f32::INFINITY),
        Just(f32::NEG_INFINITY),
        Just(f32::NAN),
        Just(f32::from_bits(0x7FC0_0001)),
        Just(f32::from_bits(0xFFFF_FFFF)),
        Just(f32::MIN_POSITIVE),
        Just(f32::from_bits(1)),
        Just(f32::MAX),
        Just(f32::MIN),
    ]
}

/// Any bit pattern, reinterpreted as `f32`.
pub fn arb_f32_bits() -> impl Strategy<Value = f32> {
    any::<u32>().prop_map(f32::from_bits)
}

/// Arbitrary floats with the special values weighted in.
pub fn arb_f32() -> impl Strategy<Value = f32> {
    prop_oneof![1 => special_f32(), 3 => arb_f32_bits()]
}

/// Finite floats in a range where sums stay exact enough to compare.
pub fn arb_small_f32() -> impl Strategy<Value = f32> {
    -1000.0f32..1000.0
}

pub fn arb_vector2() -> impl Strategy<Value = Vector2> {
    (arb_f32(), arb_f32()).prop_map(|(x, y)| Vector2::new(x, y))
}

pub fn arb_small_vector2() -> impl Strategy<Value = Vector2> {
    (arb_small_f32(), arb_small_f32()).prop_map(|(x, y)| Vector2::new(x, y))
}

pub fn arb_int_vector2() -> impl Strategy<Value = IntVector2> {
    any::<(i32, i32)>().prop_map(IntVector2::from)
}

pub fn arb_complex() -> impl Strategy<Value = Complex> {
    (arb_f32(), arb_f32()).prop_map(|(re, im)| Complex::new(re, im))
}

pub fn arb_color() -> impl Strategy<Value = Color> {
    any::<[u8; 4]>().prop_map(Color::from)
}

/// Arrays of up to `max_len` arbitrary vectors, special floats included.
pub fn arb_vector2_array(max_len: usize) -> impl Strategy<Value = Vector2Array> {
    vec(arb_vector2(), 0..=max_len).prop_map(Vector2Array::from)
}

pub fn arb_int_vector2_array(max_len: usize) -> impl Strategy<Value = IntVector2Array> {
    vec(arb_int_vector2(), 0..=max_len).prop_map(IntVector2Array::from)
}

pub fn arb_complex_array(max_len: usize) -> impl Strategy<Value = ComplexArray> {
    vec(arb_complex(), 0..=max_len).prop_map(ComplexArray::from)
}
