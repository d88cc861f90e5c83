//! Membership and predicate search.
//!
//! Value search compares encoded words, not decoded fields. Predicate
//! search decodes each element once and hands it to the predicate.
//! Throwing variants return [`ArrayError`]; the `*_or_none` and `find*`
//! variants return `Option`.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wordpack_core::Packed;

use crate::array::PackedArray;
use crate::error::ArrayError;

impl<T: Packed> PackedArray<T> {
    /// Whether some element has the same encoded word as `value`.
    pub fn contains(&self, value: T) -> bool {
        let word = value.to_word();
        self.words().contains(&word)
    }

    /// Whether every value of `values` is present.
    pub fn contains_all(&self, values: impl IntoIterator<Item = T>) -> bool {
        values.into_iter().all(|v| self.contains(v))
    }

    /// Index of the first element whose word equals `value`'s, or `None`.
    pub fn index_of(&self, value: T) -> Option<usize> {
        let word = value.to_word();
        self.words().iter().position(|&w| w == word)
    }

    /// Index of the last element whose word equals `value`'s, or `None`.
    pub fn last_index_of(&self, value: T) -> Option<usize> {
        let word = value.to_word();
        self.words().iter().rposition(|&w| w == word)
    }

    /// Index of the first element satisfying `predicate`.
    pub fn index_of_first(&self, mut predicate: impl FnMut(T) -> bool) -> Option<usize> {
        self.words()
            .iter()
            .position(|&w| predicate(T::from_word(w)))
    }

    /// Index of the last element satisfying `predicate`.
    pub fn index_of_last(&self, mut predicate: impl FnMut(T) -> bool) -> Option<usize> {
        self.words()
            .iter()
            .rposition(|&w| predicate(T::from_word(w)))
    }

    /// The first element, or [`ArrayError::Empty`].
    pub fn first(&self) -> Result<T, ArrayError> {
        self.first_or_none().ok_or(ArrayError::Empty)
    }

    /// The first element, or `None` if empty.
    pub fn first_or_none(&self) -> Option<T> {
        self.words().first().map(|&w| T::from_word(w))
    }

    /// The last element, or [`ArrayError::Empty`].
    pub fn last(&self) -> Result<T, ArrayError> {
        self.last_or_none().ok_or(ArrayError::Empty)
    }

    /// The last element, or `None` if empty.
    pub fn last_or_none(&self) -> Option<T> {
        self.words().last().map(|&w| T::from_word(w))
    }

    /// The first element satisfying `predicate`, scanning forward, or
    /// [`ArrayError::NoMatchingElement`].
    pub fn first_by(&self, predicate: impl FnMut(T) -> bool) -> Result<T, ArrayError> {
        self.find(predicate).ok_or(ArrayError::NoMatchingElement)
    }

    /// The first element satisfying `predicate`, or `None`.
    pub fn find(&self, predicate: impl FnMut(T) -> bool) -> Option<T> {
        self.index_of_first(predicate)
            .map(|i| T::from_word(self.words()[i]))
    }

    /// The last element satisfying `predicate`, scanning backward, or
    /// [`ArrayError::NoMatchingElement`].
    pub fn last_by(&self, predicate: impl FnMut(T) -> bool) -> Result<T, ArrayError> {
        self.find_last(predicate).ok_or(ArrayError::NoMatchingElement)
    }

    /// The last element satisfying `predicate`, or `None`.
    pub fn find_last(&self, predicate: impl FnMut(T) -> bool) -> Option<T> {
        self.index_of_last(predicate)
            .map(|i| T::from_word(self.words()[i]))
    }

    /// The only element.
    ///
    /// Fails with [`ArrayError::Empty`] on an empty array and
    /// [`ArrayError::MoreThanOneMatch`] when there are several.
    pub fn single(&self) -> Result<T, ArrayError> {
        match self.words() {
            [] => Err(ArrayError::Empty),
            [w] => Ok(T::from_word(*w)),
            _ => Err(ArrayError::MoreThanOneMatch),
        }
    }

    /// The only element, or `None` if there are zero or several.
    pub fn single_or_none(&self) -> Option<T> {
        self.single().ok()
    }

    /// The only element satisfying `predicate`.
    ///
    /// Scans the whole array. Fails with [`ArrayError::NoMatchingElement`]
    /// or [`ArrayError::MoreThanOneMatch`].
    pub fn single_by(&self, mut predicate: impl FnMut(T) -> bool) -> Result<T, ArrayError> {
        let mut found = None;
        for value in self.iter() {
            if predicate(value) {
                if found.is_some() {
                    return Err(ArrayError::MoreThanOneMatch);
                }
                found = Some(value);
            }
        }
        found.ok_or(ArrayError::NoMatchingElement)
    }

    /// The only element satisfying `predicate`, or `None` if zero or several
    /// match.
    pub fn single_by_or_none(&self, predicate: impl FnMut(T) -> bool) -> Option<T> {
        self.single_by(predicate).ok()
    }

    /// A uniformly chosen element, or [`ArrayError::Empty`].
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<T, ArrayError> {
        self.random_or_none(rng).ok_or(ArrayError::Empty)
    }

    /// A uniformly chosen element, or `None` if empty.
    pub fn random_or_none<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let i = rng.random_range(0..self.len());
        Some(T::from_word(self.words()[i]))
    }

    /// [`random`](PackedArray::random) driven by a ChaCha8 generator seeded
    /// with `seed`; the same seed and contents give the same choice.
    pub fn random_seeded(&self, seed: u64) -> Result<T, ArrayError> {
        self.random(&mut ChaCha8Rng::seed_from_u64(seed))
    }
}
