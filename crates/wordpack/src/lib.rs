//! Wordpack: numeric values packed into single machine words, and arrays
//! that store them as flat primitive buffers.
//!
//! This is the facade crate that re-exports the public API of every
//! wordpack sub-crate. For most users, adding `wordpack` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use wordpack::prelude::*;
//!
//! // Three vectors on the diagonal, stored as three u64 words.
//! let mut points = Vector2Array::from_fn(3, |i| Vector2::splat(i as f32));
//! assert_eq!(points.size_bytes(), 24);
//! assert_eq!(points.sum(), Vector2::new(3.0, 3.0));
//!
//! points.reverse();
//! assert_eq!(points.first(), Ok(Vector2::new(2.0, 2.0)));
//!
//! // Gather by index into a new array.
//! let picked = points.slice_array(&[2, 0]).unwrap();
//! assert_eq!(picked.to_string(), "[(0, 0), (2, 2)]");
//!
//! // Flags and colors are single words too.
//! let flags = Flags8::from_bits(0b101);
//! assert!(flags.has_all(Flags8::single(2).unwrap()));
//! assert_eq!(Color::RED.with_alpha(0).to_string(), "#FF000000");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`values`] | `wordpack-core` | `Vector2`, `IntVector2`, `Complex`, `Color`, `Tolerance` |
//! | [`flags`] | `wordpack-flags` | `Flags8` through `Flags64` |
//! | [`array`] | `wordpack-array` | `PackedArray` and its cursors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Packed value types and scalar helpers (`wordpack-core`).
///
/// Every type here implements [`values::Packed`], which fixes its word type
/// and publishes `SIZE_BYTES` / `SIZE_BITS`.
pub use wordpack_core as values;

/// Bit-flag sets over `u8` through `u64` (`wordpack-flags`).
pub use wordpack_flags as flags;

/// Fixed-length packed arrays (`wordpack-array`).
///
/// [`array::PackedArray`] is generic over the packed value types; the
/// aliases [`array::Vector2Array`], [`array::ColorArray`] and friends name
/// the common instantiations.
pub use wordpack_array as array;

/// Common imports for typical wordpack usage.
///
/// ```rust
/// use wordpack::prelude::*;
/// ```
pub mod prelude {
    // Values
    pub use wordpack_core::{Additive, Color, Complex, IntVector2, Packed, Tolerance, Vector2};

    // Flags
    pub use wordpack_flags::{Flags16, Flags32, Flags64, Flags8};

    // Arrays
    pub use wordpack_array::{
        ColorArray, ComplexArray, IntVector2Array, PackedArray, Vector2Array,
    };

    // Errors
    pub use wordpack_array::ArrayError;
    pub use wordpack_core::ValueError;
}
