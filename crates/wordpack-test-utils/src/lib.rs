//! Test utilities for wordpack development.
//!
//! - [`strategies`]: proptest strategies for packed values and arrays,
//!   including raw bit-pattern floats (NaN payloads, ±∞, ±0, subnormals).
//! - [`fixtures`]: small deterministic arrays used across test suites.
//! - [`assert_same_words`]: multiset comparison of two packed sequences.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;

use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;
use wordpack_core::Packed;

/// Occurrence count of each distinct value, in first-occurrence order.
///
/// Values are keyed by their own `Eq`/`Hash`, which for packed types is the
/// encoded word.
pub fn word_counts<T>(values: impl IntoIterator<Item = T>) -> IndexMap<T, usize>
where
    T: Packed + Eq + Hash,
{
    let mut counts = IndexMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
}

/// Assert that `left` and `right` hold the same multiset of encoded words,
/// ignoring order.
///
/// # Panics
///
/// Panics with both count tables when the multisets differ.
#[track_caller]
pub fn assert_same_words<T>(left: impl IntoIterator<Item = T>, right: impl IntoIterator<Item = T>)
where
    T: Packed + Eq + Hash + Debug,
{
    let left = word_counts(left);
    let right = word_counts(right);
    let same = left.len() == right.len()
        && left.iter().all(|(v, n)| right.get(v) == Some(n));
    assert!(same, "multisets differ:\n  left: {left:?}\n right: {right:?}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordpack_core::{IntVector2, Vector2};

    #[test]
    fn counts_by_word() {
        let counts = word_counts([Vector2::ZERO, Vector2::new(-0.0, 0.0), Vector2::ZERO]);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[&Vector2::ZERO], 2);
    }

    #[test]
    fn same_words_ignores_order() {
        assert_same_words(
            [IntVector2::ONE, IntVector2::ZERO, IntVector2::ONE],
            [IntVector2::ONE, IntVector2::ONE, IntVector2::ZERO],
        );
    }

    #[test]
    #[should_panic(expected = "multisets differ")]
    fn same_words_detects_multiplicity() {
        assert_same_words(
            [IntVector2::ONE, IntVector2::ZERO],
            [IntVector2::ONE, IntVector2::ONE],
        );
    }
}
