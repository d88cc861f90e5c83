//! The [`PackedArray`] type: construction, indexed access, and structural
//! composition.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Range, RangeBounds};

use tracing::{debug, trace};
use wordpack_core::Packed;

use crate::error::ArrayError;
use crate::iter::{IntoIter, Iter};
use crate::range::{check_index, resolve};

/// A fixed-length, mutable sequence of packed values.
///
/// Storage is one boxed slice of `T::Word`. The length is fixed at
/// construction; "resizing" is only available as a copy into a new array
/// ([`copy_of_resized`](PackedArray::copy_of_resized),
/// [`plus`](PackedArray::plus)).
///
/// Read operations that return a sequence (`slice`, `take`, `to_vec`, ...)
/// always materialize an independent copy. No view shares the buffer.
///
/// # Examples
///
/// ```
/// use wordpack_array::Vector2Array;
/// use wordpack_core::Vector2;
///
/// let mut a = Vector2Array::from_fn(3, |i| Vector2::splat(i as f32));
/// assert_eq!(a.get(1), Ok(Vector2::ONE));
/// assert_eq!(a.sum(), Vector2::new(3.0, 3.0));
///
/// a.set(2, Vector2::new(5.0, 9.0)).unwrap();
/// assert_eq!(a.index_of(Vector2::new(5.0, 9.0)), Some(2));
/// assert_eq!(a.size_bytes(), 24);
/// ```
pub struct PackedArray<T: Packed> {
    words: Box<[T::Word]>,
}

impl<T: Packed> PackedArray<T> {
    /// A zero-filled array of `size` elements.
    ///
    /// The zero word decodes to the zero value of every packed type
    /// (`(0, 0)`, `0 + 0i`, transparent black).
    pub fn new(size: usize) -> Self {
        Self::from_words(vec![T::Word::default(); size].into_boxed_slice())
    }

    /// An array of `size` copies of `value`.
    pub fn from_elem(size: usize, value: T) -> Self {
        Self::from_words(vec![value.to_word(); size].into_boxed_slice())
    }

    /// An array whose element `i` is `generator(i)`.
    ///
    /// The generator runs exactly once per index, in ascending order,
    /// before the array is returned.
    pub fn from_fn(size: usize, mut generator: impl FnMut(usize) -> T) -> Self {
        let words: Box<[T::Word]> = (0..size).map(|i| generator(i).to_word()).collect();
        Self::from_words(words)
    }

    /// Like [`from_fn`](PackedArray::from_fn) with a fallible generator.
    ///
    /// The first error aborts construction and is returned as-is; no
    /// partially filled array is observable.
    pub fn try_from_fn<E>(
        size: usize,
        mut generator: impl FnMut(usize) -> Result<T, E>,
    ) -> Result<Self, E> {
        let mut words = Vec::with_capacity(size);
        for i in 0..size {
            match generator(i) {
                Ok(value) => words.push(value.to_word()),
                Err(e) => {
                    debug!(index = i, size, "generator failed; array discarded");
                    return Err(e);
                }
            }
        }
        Ok(Self::from_words(words.into_boxed_slice()))
    }

    /// Copy a slice of values into a new array.
    pub fn from_slice(values: &[T]) -> Self {
        values.iter().copied().collect()
    }

    pub(crate) fn from_words(words: Box<[T::Word]>) -> Self {
        Self { words }
    }

    pub(crate) fn words(&self) -> &[T::Word] {
        &self.words
    }

    pub(crate) fn words_mut(&mut self) -> &mut [T::Word] {
        &mut self.words
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the array has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The valid index range `0..len`.
    pub fn indices(&self) -> Range<usize> {
        0..self.len()
    }

    /// Index of the last element, or `None` if empty.
    pub fn last_index(&self) -> Option<usize> {
        self.len().checked_sub(1)
    }

    /// Bytes occupied by the element buffer: `len * T::SIZE_BYTES`.
    pub fn size_bytes(&self) -> usize {
        self.len() * T::SIZE_BYTES
    }

    /// Decode the element at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<T, ArrayError> {
        check_index(index, self.len())?;
        Ok(T::from_word(self.words[index]))
    }

    /// Decode the element at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get_or_none(&self, index: usize) -> Option<T> {
        self.words.get(index).map(|&w| T::from_word(w))
    }

    /// Encode `value` into position `index`.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        check_index(index, self.len())?;
        self.words[index] = value.to_word();
        Ok(())
    }

    /// Overwrite every element with `value`.
    pub fn fill(&mut self, value: T) {
        self.words.fill(value.to_word());
    }

    /// Overwrite the elements in `range` with `value`.
    pub fn fill_range(
        &mut self,
        value: T,
        range: impl RangeBounds<usize>,
    ) -> Result<(), ArrayError> {
        let range = resolve(range, self.len())?;
        self.words[range].fill(value.to_word());
        Ok(())
    }

    /// A cursor over the decoded elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.words)
    }

    /// Decode every element into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// A new array with `value` appended.
    pub fn plus(&self, value: T) -> Self {
        self.concat_words(std::iter::once(value.to_word()), 1)
    }

    /// A new array with `values` appended.
    pub fn plus_slice(&self, values: &[T]) -> Self {
        self.concat_words(values.iter().map(|v| v.to_word()), values.len())
    }

    /// A new array with every value of `values` appended.
    pub fn plus_iter(&self, values: impl IntoIterator<Item = T>) -> Self {
        let tail: Vec<T::Word> = values.into_iter().map(Packed::to_word).collect();
        let n = tail.len();
        self.concat_words(tail, n)
    }

    /// A new array holding `self` followed by `other`.
    pub fn plus_array(&self, other: &Self) -> Self {
        self.concat_words(other.words.iter().copied(), other.len())
    }

    fn concat_words(&self, tail: impl IntoIterator<Item = T::Word>, tail_len: usize) -> Self {
        let total = self.len() + tail_len;
        trace!(head = self.len(), tail = tail_len, "concatenating packed arrays");
        let mut words = Vec::with_capacity(total);
        words.extend_from_slice(&self.words);
        words.extend(tail);
        debug_assert_eq!(words.len(), total);
        Self::from_words(words.into_boxed_slice())
    }

    /// A new array of another packed type, mapping each element.
    pub fn map_array<U: Packed>(&self, mut f: impl FnMut(T) -> U) -> PackedArray<U> {
        PackedArray::from_words(self.iter().map(|v| f(v).to_word()).collect())
    }

    /// Whether both arrays hold the same words in the same order.
    pub fn content_equals(&self, other: &Self) -> bool {
        self.words == other.words
    }
}

impl<T: Packed> Clone for PackedArray<T> {
    fn clone(&self) -> Self {
        Self::from_words(self.words.clone())
    }
}

impl<T: Packed> Default for PackedArray<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T: Packed> PartialEq for PackedArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.content_equals(other)
    }
}

impl<T: Packed> Eq for PackedArray<T> {}

impl<T: Packed> Hash for PackedArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.words.hash(state);
    }
}

impl<T: Packed> FromIterator<T> for PackedArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_words(iter.into_iter().map(Packed::to_word).collect())
    }
}

impl<T: Packed> From<Vec<T>> for PackedArray<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Packed> From<&[T]> for PackedArray<T> {
    fn from(values: &[T]) -> Self {
        Self::from_slice(values)
    }
}

impl<T: Packed, const N: usize> From<[T; N]> for PackedArray<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Packed> From<PackedArray<T>> for Vec<T> {
    fn from(array: PackedArray<T>) -> Self {
        array.into_iter().collect()
    }
}

impl<'a, T: Packed> IntoIterator for &'a PackedArray<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: Packed> IntoIterator for PackedArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.words)
    }
}

impl<T: Packed + fmt::Debug> fmt::Debug for PackedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// `[a, b, c]` using each element's `Display`.
impl<T: Packed + fmt::Display> fmt::Display for PackedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use wordpack_core::{Color, IntVector2, Vector2};

    #[test]
    fn new_is_zero_filled() {
        let a = PackedArray::<Vector2>::new(4);
        assert_eq!(a.len(), 4);
        assert!(a.iter().all(|v| v == Vector2::ZERO));
        let c = PackedArray::<Color>::new(2);
        assert_eq!(c.get(1), Ok(Color::TRANSPARENT));
    }

    #[test]
    fn generator_runs_once_per_index_ascending() {
        let mut seen = Vec::new();
        let a = PackedArray::from_fn(4, |i| {
            seen.push(i);
            IntVector2::splat(i as i32)
        });
        assert_eq!(seen, vec![0, 1, 2, 3]);
        assert_eq!(a.get(3), Ok(IntVector2::splat(3)));
    }

    #[test]
    fn failing_generator_aborts() {
        let mut calls = 0;
        let result = PackedArray::<Vector2>::try_from_fn(10, |i| {
            calls += 1;
            if i == 3 {
                Err("boom")
            } else {
                Ok(Vector2::ONE)
            }
        });
        assert_eq!(result, Err("boom"));
        assert_eq!(calls, 4);
    }

    #[test]
    fn get_and_set_bounds() {
        let mut a = PackedArray::<Vector2>::new(2);
        assert_eq!(
            a.get(2),
            Err(ArrayError::IndexOutOfBounds { index: 2, len: 2 })
        );
        assert_eq!(
            a.set(5, Vector2::ONE),
            Err(ArrayError::IndexOutOfBounds { index: 5, len: 2 })
        );
        assert_eq!(a.get_or_none(2), None);
        a.set(1, Vector2::new(5.0, 9.0)).unwrap();
        assert_eq!(a.get(1), Ok(Vector2::new(5.0, 9.0)));
    }

    #[test]
    fn introspection() {
        let a = PackedArray::<Color>::new(3);
        assert_eq!(a.indices(), 0..3);
        assert_eq!(a.last_index(), Some(2));
        assert_eq!(a.size_bytes(), 12);
        assert_eq!(PackedArray::<Color>::new(0).last_index(), None);
    }

    #[test]
    fn fill_range_validates_first() {
        let mut a = PackedArray::<IntVector2>::new(4);
        assert!(a.fill_range(IntVector2::ONE, 2..9).is_err());
        assert!(a.iter().all(|v| v == IntVector2::ZERO));
        a.fill_range(IntVector2::ONE, 1..3).unwrap();
        assert_eq!(
            a.to_vec(),
            vec![IntVector2::ZERO, IntVector2::ONE, IntVector2::ONE, IntVector2::ZERO]
        );
        a.fill(IntVector2::UNIT_X);
        assert!(a.iter().all(|v| v == IntVector2::UNIT_X));
    }

    #[test]
    fn plus_variants_concatenate() {
        let a = PackedArray::from([IntVector2::ZERO, IntVector2::ONE]);
        let b = a.plus(IntVector2::UNIT_X);
        assert_eq!(b.len(), 3);
        assert_eq!(a.len(), 2);
        assert_eq!(b.get(2), Ok(IntVector2::UNIT_X));

        let c = a.plus_slice(&[IntVector2::UNIT_Y, IntVector2::UNIT_Y]);
        assert_eq!(c.len(), 4);
        let d = a.plus_iter((0..3).map(IntVector2::splat));
        assert_eq!(d.len(), 5);
        assert_eq!(d.get(4), Ok(IntVector2::splat(2)));
        let e = a.plus_array(&a);
        assert_eq!(e.to_vec(), [a.to_vec(), a.to_vec()].concat());
    }

    #[test]
    fn map_array_changes_type() {
        let ints = PackedArray::from_fn(3, |i| IntVector2::new(i as i32, -(i as i32)));
        let floats: PackedArray<Vector2> = ints.map_array(IntVector2::to_vector);
        assert_eq!(floats.get(2), Ok(Vector2::new(2.0, -2.0)));
    }

    #[test]
    fn equality_and_hash_follow_words() {
        let a = PackedArray::from([Vector2::new(0.0, 1.0)]);
        let b = PackedArray::from([Vector2::new(-0.0, 1.0)]);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        let set: HashSet<_> = [a.clone(), a.clone(), b].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn display_and_debug() {
        let a = PackedArray::from([IntVector2::ZERO, IntVector2::new(1, 2)]);
        assert_eq!(a.to_string(), "[(0, 0), (1, 2)]");
        assert_eq!(
            format!("{a:?}"),
            "[IntVector2 { x: 0, y: 0 }, IntVector2 { x: 1, y: 2 }]"
        );
        assert_eq!(PackedArray::<IntVector2>::new(0).to_string(), "[]");
    }

    #[test]
    fn vec_round_trip() {
        let values = vec![Vector2::ONE, Vector2::UNIT_Y];
        let a = PackedArray::from(values.clone());
        assert_eq!(Vec::from(a), values);
    }
}
