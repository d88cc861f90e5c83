//! Range validation shared by ranged operations.

use std::ops::{Bound, Range, RangeBounds};

use crate::error::ArrayError;

/// Resolve `range` against an array of length `len`.
///
/// `start > end` is [`ArrayError::InvalidRange`]; `end > len` is
/// [`ArrayError::RangeOutOfBounds`].
pub(crate) fn resolve(
    range: impl RangeBounds<usize>,
    len: usize,
) -> Result<Range<usize>, ArrayError> {
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e.saturating_add(1),
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };
    if start > end {
        return Err(ArrayError::InvalidRange { start, end });
    }
    if end > len {
        return Err(ArrayError::RangeOutOfBounds { start, end, len });
    }
    Ok(start..end)
}

/// Check a single element index.
#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), ArrayError> {
    if index >= len {
        return Err(ArrayError::IndexOutOfBounds { index, len });
    }
    Ok(())
}
