//! Reversal, shuffling, and sorted copies.

use std::cmp::Ordering;
use std::ops::RangeBounds;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::trace;
use wordpack_core::Packed;

use crate::array::PackedArray;
use crate::error::ArrayError;
use crate::range::resolve;

impl<T: Packed> PackedArray<T> {
    /// Reverse the element order in place.
    pub fn reverse(&mut self) {
        self.words_mut().reverse();
    }

    /// Reverse the elements of `range` in place, leaving the rest alone.
    pub fn reverse_range(&mut self, range: impl RangeBounds<usize>) -> Result<(), ArrayError> {
        let range = resolve(range, self.len())?;
        self.words_mut()[range].reverse();
        Ok(())
    }

    /// The elements in reverse order.
    pub fn reversed(&self) -> Vec<T> {
        self.words().iter().rev().map(|&w| T::from_word(w)).collect()
    }

    /// A new array with the elements in reverse order.
    pub fn reversed_array(&self) -> Self {
        let mut copy = self.clone();
        copy.reverse();
        copy
    }

    /// Fisher-Yates shuffle in place.
    ///
    /// Walks from the last index down to 1, swapping each position with a
    /// uniformly chosen index at or below it. Every permutation is equally
    /// likely given a uniform `rng`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        trace!(len = self.len(), "shuffling packed array");
        let words = self.words_mut();
        for i in (1..words.len()).rev() {
            let j = rng.random_range(0..=i);
            words.swap(i, j);
        }
    }

    /// [`shuffle`](PackedArray::shuffle) with a ChaCha8 generator seeded
    /// from `seed`. The permutation depends only on `seed` and the length.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        self.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
    }

    /// The elements sorted ascending by `key`. Stable; the array is not
    /// modified.
    ///
    /// Each element is decoded and projected exactly once. Keys that do not
    /// compare with themselves (a NaN key) sort after every other key and
    /// keep their original relative order.
    pub fn sorted_by_key<K: PartialOrd>(&self, key: impl FnMut(T) -> K) -> Vec<T> {
        self.sorted_keyed(key, false)
    }

    /// The elements sorted descending by `key`. Stable: equal keys keep
    /// their original relative order. Unordered keys still sort last.
    pub fn sorted_by_key_descending<K: PartialOrd>(
        &self,
        key: impl FnMut(T) -> K,
    ) -> Vec<T> {
        self.sorted_keyed(key, true)
    }

    fn sorted_keyed<K: PartialOrd>(
        &self,
        mut key: impl FnMut(T) -> K,
        descending: bool,
    ) -> Vec<T> {
        let mut keyed: Vec<(bool, K, T)> = self
            .iter()
            .map(|v| {
                let k = key(v);
                (k.partial_cmp(&k).is_none(), k, v)
            })
            .collect();
        keyed.sort_by(|(a_unordered, a, _), (b_unordered, b, _)| {
            match (*a_unordered, *b_unordered) {
                (false, false) => {
                    let ord = a.partial_cmp(b).unwrap_or(Ordering::Equal);
                    if descending {
                        ord.reverse()
                    } else {
                        ord
                    }
                }
                (false, true) => Ordering::Less,
                (true, false) => Ordering::Greater,
                (true, true) => Ordering::Equal,
            }
        });
        keyed.into_iter().map(|(_, _, v)| v).collect()
    }

    /// The elements sorted by `compare`. Stable.
    pub fn sorted_with(&self, compare: impl FnMut(&T, &T) -> Ordering) -> Vec<T> {
        let mut values = self.to_vec();
        values.sort_by(compare);
        values
    }
}
