//! End-to-end behaviour of packed arrays on small hand-checked inputs.

use wordpack_array::{ArrayError, ComplexArray, IntVector2Array, Vector2Array};
use wordpack_core::{Complex, IntVector2, Vector2};
use wordpack_test_utils::fixtures::{diagonal, gray_ramp, int_diagonal};

// ── Construction and access ─────────────────────────────────────

#[test]
fn generated_diagonal_get_and_sum() {
    let a = Vector2Array::from_fn(3, |i| Vector2::new(i as f32, i as f32));
    assert_eq!(a.get(1), Ok(Vector2::new(1.0, 1.0)));
    assert_eq!(a.sum(), Vector2::new(3.0, 3.0));
}

#[test]
fn set_then_index_of() {
    let mut a = Vector2Array::from_elem(4, Vector2::ZERO);
    a.set(2, Vector2::new(5.0, 9.0)).unwrap();
    assert_eq!(a.index_of(Vector2::new(5.0, 9.0)), Some(2));
    assert_eq!(a.index_of(Vector2::new(1.0, 1.0)), None);
}

#[test]
fn buffer_size_is_len_times_word() {
    assert_eq!(diagonal(10).size_bytes(), 80);
    assert_eq!(gray_ramp(10).size_bytes(), 40);
    assert_eq!(IntVector2Array::new(0).size_bytes(), 0);
}

// ── Reordering and gathering ────────────────────────────────────

#[test]
fn reverse_three() {
    let mut a = diagonal(3);
    a.reverse();
    assert_eq!(
        a.to_vec(),
        vec![Vector2::splat(2.0), Vector2::splat(1.0), Vector2::splat(0.0)]
    );
}

#[test]
fn slice_array_permutes() {
    let a = diagonal(3);
    let p = a.slice_array(&[2, 0, 1]).unwrap();
    assert_eq!(
        p.to_vec(),
        vec![Vector2::splat(2.0), Vector2::splat(0.0), Vector2::splat(1.0)]
    );
}

#[test]
fn take_zero_and_all() {
    for n in [0, 1, 7] {
        let a = int_diagonal(n);
        assert!(a.take(0).is_empty());
        assert_eq!(a.take(n), a.to_vec());
    }
}

#[test]
fn sort_then_search() {
    let a = IntVector2Array::from([
        IntVector2::new(3, -1),
        IntVector2::new(-2, 4),
        IntVector2::new(0, 0),
    ]);
    let by_x = a.sorted_by_key(IntVector2::x);
    assert_eq!(by_x.first(), Some(&IntVector2::new(-2, 4)));
    let sorted = IntVector2Array::from(by_x);
    assert_eq!(sorted.index_of(IntVector2::new(3, -1)), Some(2));
}

// ── Complex values in arrays ────────────────────────────────────

#[test]
fn complex_zero_power() {
    assert_eq!(Complex::ZERO.pow(Complex::ZERO), Complex::ONE);
    assert_eq!(Complex::ZERO.pow(Complex::new(2.0, 0.5)), Complex::ZERO);
}

#[test]
fn complex_array_products() {
    let roots = ComplexArray::from_fn(4, |k| {
        Complex::from_polar(1.0, std::f32::consts::FRAC_PI_2 * k as f32)
    });
    let product = roots.fold(Complex::ONE, |acc, z| acc * z);
    // i^0 * i^1 * i^2 * i^3 = i^6 = -1
    assert!((product - Complex::new(-1.0, 0.0)).abs() < 1e-5);
    assert!(roots.sum().abs() < 1e-5);
}

// ── Failure leaves state untouched ──────────────────────────────

#[test]
fn failed_operations_do_not_mutate() {
    let mut a = int_diagonal(4);
    let snapshot = a.clone();
    assert!(a.set(4, IntVector2::ONE).is_err());
    assert!(a.fill_range(IntVector2::ONE, 3..9).is_err());
    assert!(a.reverse_range(1..5).is_err());
    assert!(a.copy_within(0..3, 2).is_err());
    let mut small = IntVector2Array::new(2);
    assert_eq!(
        a.copy_into(&mut small, 0, ..),
        Err(ArrayError::DestinationTooSmall {
            required: 4,
            available: 2
        })
    );
    assert_eq!(a, snapshot);
    assert_eq!(small, IntVector2Array::new(2));
}

#[test]
fn error_messages_carry_context() {
    let a = int_diagonal(2);
    let err = a.get(5).unwrap_err();
    assert_eq!(err.to_string(), "index 5 out of bounds for length 2");
}
