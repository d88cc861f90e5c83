//! Packed array error types.

use std::error::Error;
use std::fmt;

/// Errors from packed array operations.
///
/// Every variant is reported before the array is mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// An element index outside `[0, len)`.
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Length of the array.
        len: usize,
    },
    /// A well-formed range that extends past the end of the array.
    RangeOutOfBounds {
        /// Resolved inclusive start.
        start: usize,
        /// Resolved exclusive end.
        end: usize,
        /// Length of the array.
        len: usize,
    },
    /// A range whose start lies after its end.
    InvalidRange {
        /// Resolved inclusive start.
        start: usize,
        /// Resolved exclusive end.
        end: usize,
    },
    /// A bulk copy whose target region does not fit in the destination.
    DestinationTooSmall {
        /// Destination length needed for the copy.
        required: usize,
        /// Actual destination length.
        available: usize,
    },
    /// The operation needs at least one element.
    Empty,
    /// No element satisfied the predicate.
    NoMatchingElement,
    /// More than one element satisfied a predicate that must match once.
    MoreThanOneMatch,
    /// An iteration cursor was advanced past its last element.
    Exhausted,
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::RangeOutOfBounds { start, end, len } => {
                write!(f, "range {start}..{end} out of bounds for length {len}")
            }
            Self::InvalidRange { start, end } => {
                write!(f, "invalid range: start {start} > end {end}")
            }
            Self::DestinationTooSmall {
                required,
                available,
            } => {
                write!(
                    f,
                    "destination too small: requires length {required}, has {available}"
                )
            }
            Self::Empty => write!(f, "array is empty"),
            Self::NoMatchingElement => write!(f, "no element matches the predicate"),
            Self::MoreThanOneMatch => write!(f, "more than one element matches"),
            Self::Exhausted => write!(f, "iterator exhausted"),
        }
    }
}

impl Error for ArrayError {}
