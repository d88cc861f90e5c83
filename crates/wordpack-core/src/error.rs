//! Error types for packed value operations.

use std::error::Error;
use std::fmt;

/// Errors from packed value accessors and configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueError {
    /// A component index outside the value's field range, e.g. `get(2)`
    /// on a two-field vector.
    ComponentOutOfBounds {
        /// The requested component index.
        index: usize,
        /// Number of components the value has.
        len: usize,
    },
    /// A [`Tolerance`](crate::Tolerance) was constructed with an unusable
    /// parameter.
    InvalidTolerance {
        /// What was wrong with it.
        reason: String,
    },
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ComponentOutOfBounds { index, len } => {
                write!(f, "component index {index} out of bounds for {len} components")
            }
            Self::InvalidTolerance { reason } => write!(f, "invalid tolerance: {reason}"),
        }
    }
}

impl Error for ValueError {}
