//! Conversion of Rust range types into the inclusive spans the trees work with.
//!
//! The trees themselves address elements by inclusive `left..=right` spans.
//! Anything implementing [`RangeBounds<usize>`] can be turned into such a span
//! with [`locate_span`], which is what the `segment_*` methods of
//! [`crate::SumTree`] use.

use std::ops::{Bound, RangeBounds};

use crate::error::{Result, SegmentTreeError};

/// An inclusive, non-empty span of logical indices.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Number of elements covered.
    pub fn width(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Resolves `range` against a tree of length `len`.
///
/// Returns `Ok(None)` for an empty range whose bounds still lie in `0..=len`,
/// such as `3..3` or `len..`. Returns an error if the range reaches past `len`,
/// or if its start is after its end.
pub fn locate_span<R: RangeBounds<usize>>(range: &R, len: usize) -> Result<Option<Span>> {
    // both bounds are kept half-open here: `start..end`
    let start = match range.start_bound() {
        Bound::Included(&x) => Some(x),
        Bound::Excluded(&x) => x.checked_add(1),
        Bound::Unbounded => Some(0),
    };
    let end = match range.end_bound() {
        Bound::Included(&x) => x.checked_add(1),
        Bound::Excluded(&x) => Some(x),
        Bound::Unbounded => Some(len),
    };

    match (start, end) {
        (Some(start), Some(end)) if start <= end && end <= len => {
            if start == end {
                Ok(None)
            } else {
                Ok(Some(Span {
                    start,
                    end: end - 1,
                }))
            }
        }
        (start, end) => {
            let start = start.unwrap_or(usize::MAX);
            let end = end.map_or(usize::MAX, |end| end.saturating_sub(1));
            log::trace!("rejected range {start}..={end} for length {len}");
            Err(SegmentTreeError::IndexOutOfRange { start, end, len })
        }
    }
}
