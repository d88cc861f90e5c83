//! Folds over the decoded elements.

use std::iter::Sum;

use indexmap::IndexSet;
use wordpack_core::{Additive, Packed};

use crate::array::PackedArray;

impl<T: Packed> PackedArray<T> {
    /// Fold the elements with `f`, starting from `init`.
    pub fn fold<A>(&self, init: A, f: impl FnMut(A, T) -> A) -> A {
        self.iter().fold(init, f)
    }

    /// Sum of `projection` applied to every element, accumulated in `S`.
    ///
    /// ```
    /// use wordpack_array::IntVector2Array;
    /// use wordpack_core::IntVector2;
    ///
    /// let a = IntVector2Array::from_fn(3, |i| IntVector2::splat(i as i32 * 1_000_000));
    /// let total: i128 = a.sum_of(|v| v.dot(v));
    /// assert_eq!(total, 10_000_000_000_000);
    /// ```
    pub fn sum_of<S: Sum<S>>(&self, projection: impl FnMut(T) -> S) -> S {
        self.iter().map(projection).sum()
    }

    /// The distinct elements in first-occurrence order. Duplicates are
    /// detected by encoded word.
    pub fn distinct(&self) -> Vec<T> {
        let unique: IndexSet<T::Word> = self.words().iter().copied().collect();
        unique.into_iter().map(T::from_word).collect()
    }
}

impl<T: Additive> PackedArray<T> {
    /// Componentwise sum, folding with `+` from [`Additive::ZERO`].
    ///
    /// An empty array sums to zero.
    pub fn sum(&self) -> T {
        self.fold(T::ZERO, |acc, v| acc + v)
    }
}
