//! Errors reported by the trees.
//!
//! Only the public entry points check their arguments. Once a call has been
//! accepted, the recursive walks underneath it cannot fail.

use std::{error::Error, fmt::Display};

/// The error type of every fallible tree operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentTreeError {
    /// The inclusive span `start..=end` does not fit in a tree of length `len`.
    /// This covers an index past the end, `start > end`, and any access to an
    /// empty tree. Point operations report `start == end == index`.
    IndexOutOfRange {
        start: usize,
        end: usize,
        len: usize,
    },
}

/// Result type used throughout the crate.
pub type Result<O, E = SegmentTreeError> = std::result::Result<O, E>;

impl Display for SegmentTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            SegmentTreeError::IndexOutOfRange { start, end, len } if start == end => {
                write!(f, "index {start} is out of range for tree of length {len}")
            }
            SegmentTreeError::IndexOutOfRange { start, end, len } => {
                write!(
                    f,
                    "range {start}..={end} is out of range for tree of length {len}"
                )
            }
        }
    }
}

impl Error for SegmentTreeError {}

impl SegmentTreeError {
    pub(crate) fn out_of_range(start: usize, end: usize, len: usize) -> Self {
        SegmentTreeError::IndexOutOfRange { start, end, len }
    }
}

/// Checks that `index` names an element of a tree of length `len`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        log::trace!("rejected index {index} for length {len}");
        Err(SegmentTreeError::out_of_range(index, index, len))
    }
}

/// Checks that `start..=end` is a non-empty span of a tree of length `len`.
pub(crate) fn check_span(start: usize, end: usize, len: usize) -> Result<()> {
    if start <= end && end < len {
        Ok(())
    } else {
        log::trace!("rejected span {start}..={end} for length {len}");
        Err(SegmentTreeError::out_of_range(start, end, len))
    }
}
