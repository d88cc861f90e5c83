//! Packed numeric values for the wordpack library.
//!
//! This is the leaf crate with zero internal dependencies. Every value type
//! here stores its entire state in one primitive word and decodes its
//! logical fields on access:
//!
//! | Type | Word | Fields |
//! |------|------|--------|
//! | [`Vector2`] | `u64` | two `f32` (x, y) |
//! | [`Complex`] | `u64` | two `f32` (re, im) |
//! | [`IntVector2`] | `u64` | two `i32` (x, y) |
//! | [`Color`] | `u32` | four `u8` (r, g, b, a) |
//!
//! The [`Packed`] trait ties each type to its word and publishes the
//! `SIZE_BYTES` / `SIZE_BITS` footprint constants. It is sealed: the set of
//! packable types is closed, which is what lets `wordpack-array` store
//! elements as bare words.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod color;
pub mod complex;
pub mod config;
pub mod error;
pub mod int_vector;
pub mod packing;
pub mod scalar;
pub mod vector;

pub use color::Color;
pub use complex::Complex;
pub use config::Tolerance;
pub use error::ValueError;
pub use int_vector::IntVector2;
pub use packing::{Additive, Packed};
pub use scalar::{approximately_equals, lerp};
pub use vector::Vector2;
