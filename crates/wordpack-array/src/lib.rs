//! Fixed-length arrays of packed values.
//!
//! A [`PackedArray<T>`] holds `len` values of a packed type `T` in one
//! contiguous buffer of `T`'s primitive word, so `n` elements occupy exactly
//! `n * T::SIZE_BYTES` bytes. Values are decoded on the way out and encoded
//! on the way in; the buffer never holds decoded state.
//!
//! # Architecture
//!
//! ```text
//! PackedArray<T>
//! ├── Box<[T::Word]>        fixed length, exclusively owned
//! ├── array.rs              construction, indexed access, fill, concat
//! ├── search.rs             membership / predicate search by encoded word
//! ├── slice.rs              take/drop, slicing, copies (always materialized)
//! ├── reorder.rs            reverse, Fisher-Yates shuffle, sorted copies
//! ├── reduce.rs             sum, sum_of, fold, distinct
//! └── iter.rs               Iter / IntoIter single-index cursors
//! ```
//!
//! # Equality
//!
//! Search operations (`contains`, `index_of`, ...) and array equality compare
//! encoded words. Two floats that are numerically equal but differ in bits
//! (`0.0` vs `-0.0`) are distinct elements; a NaN matches another NaN only
//! with the same payload.
//!
//! # Failure
//!
//! Fallible operations return [`ArrayError`] and validate every index and
//! range before touching the buffer, so a failed call leaves the array
//! unmodified. Errors raised by caller-supplied closures are the caller's.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod error;
pub mod iter;
mod range;
mod reduce;
mod reorder;
mod search;
mod slice;

pub use array::PackedArray;
pub use error::ArrayError;
pub use iter::{IntoIter, Iter};

use wordpack_core::{Color, Complex, IntVector2, Vector2};

/// Packed array of [`Vector2`], one `u64` per element.
pub type Vector2Array = PackedArray<Vector2>;

/// Packed array of [`IntVector2`], one `u64` per element.
pub type IntVector2Array = PackedArray<IntVector2>;

/// Packed array of [`Complex`], one `u64` per element.
pub type ComplexArray = PackedArray<Complex>;

/// Packed array of [`Color`], one `u32` per element.
pub type ColorArray = PackedArray<Color>;
