//! Fixed-width bit-flag sets.
//!
//! [`Flags8`], [`Flags16`], [`Flags32`], and [`Flags64`] wrap a single
//! unsigned word and treat each bit as a flag. Unlike the packed numeric
//! values in `wordpack-core`, the raw bits are the public interface here:
//! a flag set *is* its mask.
//!
//! ```
//! use wordpack_flags::Flags8;
//!
//! let read = Flags8::from_bits(0b001);
//! let write = Flags8::from_bits(0b010);
//! let rw = read | write;
//! assert!(rw.has_all(read));
//! assert!(!rw.has_any(Flags8::from_bits(0b100)));
//! assert_eq!(rw.toggling(read), write);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod set;

pub use set::{Flags16, Flags32, Flags64, Flags8, SetBits};
