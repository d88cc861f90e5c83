//! Extraction and copying.
//!
//! Every operation here materializes its result. Counts past the end clamp
//! to the length; explicit ranges and index lists are validated up front
//! and fail without side effects.

use std::ops::RangeBounds;

use tracing::trace;
use wordpack_core::Packed;

use crate::array::PackedArray;
use crate::error::ArrayError;
use crate::range::{check_index, resolve};

fn decode<T: Packed>(words: &[T::Word]) -> Vec<T> {
    words.iter().map(|&w| T::from_word(w)).collect()
}

impl<T: Packed> PackedArray<T> {
    /// The elements in `range`, in order.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Result<Vec<T>, ArrayError> {
        let range = resolve(range, self.len())?;
        Ok(decode(&self.words()[range]))
    }

    /// The elements at `indices`, in the order given. Indices may repeat.
    pub fn slice_indices(&self, indices: &[usize]) -> Result<Vec<T>, ArrayError> {
        Ok(self.slice_array(indices)?.to_vec())
    }

    /// A new array gathering the elements at `indices`, in the order given.
    ///
    /// Every index is checked before anything is copied.
    pub fn slice_array(&self, indices: &[usize]) -> Result<Self, ArrayError> {
        for &i in indices {
            check_index(i, self.len())?;
        }
        let words = self.words();
        Ok(Self::from_words(indices.iter().map(|&i| words[i]).collect()))
    }

    /// A new array holding the elements in `range`.
    pub fn slice_array_range(&self, range: impl RangeBounds<usize>) -> Result<Self, ArrayError> {
        let range = resolve(range, self.len())?;
        Ok(Self::from_words(self.words()[range].into()))
    }

    /// The first `n` elements, or all of them if `n >= len`.
    pub fn take(&self, n: usize) -> Vec<T> {
        decode(&self.words()[..n.min(self.len())])
    }

    /// The last `n` elements in original order, or all of them if
    /// `n >= len`.
    pub fn take_last(&self, n: usize) -> Vec<T> {
        decode(&self.words()[self.len().saturating_sub(n)..])
    }

    /// Every element after the first `n`.
    pub fn drop(&self, n: usize) -> Vec<T> {
        decode(&self.words()[n.min(self.len())..])
    }

    /// Every element before the last `n`.
    pub fn drop_last(&self, n: usize) -> Vec<T> {
        decode(&self.words()[..self.len().saturating_sub(n)])
    }

    /// The longest prefix whose elements all satisfy `predicate`.
    pub fn take_while(&self, mut predicate: impl FnMut(T) -> bool) -> Vec<T> {
        self.iter().take_while(|&v| predicate(v)).collect()
    }

    /// The longest suffix whose elements all satisfy `predicate`, in
    /// original order.
    pub fn take_last_while(&self, predicate: impl FnMut(T) -> bool) -> Vec<T> {
        decode(&self.words()[self.suffix_start(predicate)..])
    }

    /// Everything after the longest prefix satisfying `predicate`.
    pub fn drop_while(&self, mut predicate: impl FnMut(T) -> bool) -> Vec<T> {
        self.iter().skip_while(|&v| predicate(v)).collect()
    }

    /// Everything before the longest suffix satisfying `predicate`.
    pub fn drop_last_while(&self, predicate: impl FnMut(T) -> bool) -> Vec<T> {
        decode(&self.words()[..self.suffix_start(predicate)])
    }

    fn suffix_start(&self, mut predicate: impl FnMut(T) -> bool) -> usize {
        self.index_of_last(|v| !predicate(v)).map_or(0, |i| i + 1)
    }

    /// An independent copy with the same length and contents.
    pub fn copy_of(&self) -> Self {
        self.clone()
    }

    /// A copy of length `new_size`: truncated, or zero-padded at the end.
    pub fn copy_of_resized(&self, new_size: usize) -> Self {
        trace!(from = self.len(), to = new_size, "resizing packed array copy");
        let keep = new_size.min(self.len());
        let mut words = Vec::with_capacity(new_size);
        words.extend_from_slice(&self.words()[..keep]);
        words.resize(new_size, T::Word::default());
        Self::from_words(words.into_boxed_slice())
    }

    /// A new array holding a copy of `range`.
    pub fn copy_of_range(&self, range: impl RangeBounds<usize>) -> Result<Self, ArrayError> {
        self.slice_array_range(range)
    }

    /// Copy the elements of `range` into `dest` starting at `dest_offset`.
    ///
    /// Fails with [`ArrayError::DestinationTooSmall`] if the copied run does
    /// not fit; `dest` is untouched on failure.
    pub fn copy_into(
        &self,
        dest: &mut Self,
        dest_offset: usize,
        range: impl RangeBounds<usize>,
    ) -> Result<(), ArrayError> {
        let range = resolve(range, self.len())?;
        let count = range.len();
        let required = dest_offset.saturating_add(count);
        if required > dest.len() {
            return Err(ArrayError::DestinationTooSmall {
                required,
                available: dest.len(),
            });
        }
        trace!(count, dest_offset, "copying packed words");
        dest.words_mut()[dest_offset..required].copy_from_slice(&self.words()[range]);
        Ok(())
    }

    /// Copy the elements of `range` to position `dest` within this array.
    /// Overlapping source and destination are handled.
    pub fn copy_within(
        &mut self,
        range: impl RangeBounds<usize>,
        dest: usize,
    ) -> Result<(), ArrayError> {
        let len = self.len();
        let range = resolve(range, len)?;
        let required = dest.saturating_add(range.len());
        if required > len {
            return Err(ArrayError::DestinationTooSmall {
                required,
                available: len,
            });
        }
        self.words_mut().copy_within(range, dest);
        Ok(())
    }
}
