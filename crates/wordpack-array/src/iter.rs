//! Unboxed cursors over packed arrays.
//!
//! Both cursors hold the word buffer and a single index. Each step decodes
//! one word; nothing is materialized ahead of the cursor. A cursor is
//! finite and forward-only: to restart, take a new one from the array.

use std::iter::FusedIterator;

use wordpack_core::Packed;

use crate::error::ArrayError;

/// Borrowing cursor returned by [`PackedArray::iter`](crate::PackedArray::iter).
pub struct Iter<'a, T: Packed> {
    words: &'a [T::Word],
    index: usize,
}

impl<'a, T: Packed> Iter<'a, T> {
    pub(crate) fn new(words: &'a [T::Word]) -> Self {
        Self { words, index: 0 }
    }

    /// Whether another element is available.
    pub fn has_next(&self) -> bool {
        self.index < self.words.len()
    }

    /// Decode the next element, failing with [`ArrayError::Exhausted`] once
    /// every element has been produced.
    pub fn try_next(&mut self) -> Result<T, ArrayError> {
        self.next().ok_or(ArrayError::Exhausted)
    }
}

impl<T: Packed> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            words: self.words,
            index: self.index,
        }
    }
}

impl<T: Packed> Iterator for Iter<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let word = *self.words.get(self.index)?;
        self.index += 1;
        Some(T::from_word(word))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.words.len() - self.index;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<T> {
        self.index = self.index.saturating_add(n).min(self.words.len());
        self.next()
    }
}

impl<T: Packed> ExactSizeIterator for Iter<'_, T> {}

impl<T: Packed> FusedIterator for Iter<'_, T> {}

/// Owning cursor returned by `PackedArray::into_iter`.
pub struct IntoIter<T: Packed> {
    words: Box<[T::Word]>,
    index: usize,
}

impl<T: Packed> IntoIter<T> {
    pub(crate) fn new(words: Box<[T::Word]>) -> Self {
        Self { words, index: 0 }
    }

    /// Whether another element is available.
    pub fn has_next(&self) -> bool {
        self.index < self.words.len()
    }

    /// Decode the next element, failing with [`ArrayError::Exhausted`] once
    /// every element has been produced.
    pub fn try_next(&mut self) -> Result<T, ArrayError> {
        self.next().ok_or(ArrayError::Exhausted)
    }
}

impl<T: Packed> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let word = *self.words.get(self.index)?;
        self.index += 1;
        Some(T::from_word(word))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.words.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<T: Packed> ExactSizeIterator for IntoIter<T> {}

impl<T: Packed> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use crate::PackedArray;
    use crate::error::ArrayError;
    use wordpack_core::IntVector2;

    #[test]
    fn yields_in_order_then_exhausts() {
        let a = PackedArray::from_fn(3, |i| IntVector2::splat(i as i32));
        let mut it = a.iter();
        assert_eq!(it.len(), 3);
        assert_eq!(it.try_next(), Ok(IntVector2::splat(0)));
        assert_eq!(it.try_next(), Ok(IntVector2::splat(1)));
        assert!(it.has_next());
        assert_eq!(it.try_next(), Ok(IntVector2::splat(2)));
        assert!(!it.has_next());
        assert_eq!(it.try_next(), Err(ArrayError::Exhausted));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn new_cursor_restarts() {
        let a = PackedArray::from_fn(2, |i| IntVector2::splat(i as i32));
        let first: Vec<_> = a.iter().collect();
        let second: Vec<_> = a.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn nth_skips_without_overrun() {
        let a = PackedArray::from_fn(5, |i| IntVector2::splat(i as i32));
        let mut it = a.iter();
        assert_eq!(it.nth(3), Some(IntVector2::splat(3)));
        assert_eq!(it.nth(10), None);
        assert_eq!(it.len(), 0);
    }

    #[test]
    fn owning_cursor() {
        let a = PackedArray::from_fn(2, |i| IntVector2::splat(i as i32));
        let mut it = a.into_iter();
        assert_eq!(it.len(), 2);
        assert_eq!(it.try_next(), Ok(IntVector2::ZERO));
        assert_eq!(it.try_next(), Ok(IntVector2::ONE));
        assert_eq!(it.try_next(), Err(ArrayError::Exhausted));
    }

    #[test]
    fn empty_array_cursor() {
        let a = PackedArray::<IntVector2>::new(0);
        assert_eq!(a.iter().try_next(), Err(ArrayError::Exhausted));
    }
}
