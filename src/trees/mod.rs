//! The tree types, and the [`SumTree`] trait they share.
//!
//! Both trees lay out an implicit binary tree over a flat buffer, the way a
//! binary heap does: the node at index `idx` covering the logical span
//! `left..=right` has its children at `2*idx + 1` (covering `left..=mid`) and
//! `2*idx + 2` (covering `mid+1..=right`), where `mid = (left + right) / 2`.
//! The root is node `0` and covers the whole array.
//!
//! * [`SegmentTree`] assigns ranges eagerly, touching every node that
//!   intersects the assigned range.
//! * [`LazySegmentTree`] defers range assignments to the nodes below the ones
//!   it touches, so that range assignment is `O(log n)` as well.

use std::ops::{Add, RangeBounds};

use crate::error::Result;
use crate::locators::locate_span;

pub mod lazy;
pub mod segment_tree;

pub use lazy::LazySegmentTree;
pub use segment_tree::SegmentTree;

/// Values that can be stored in the trees.
///
/// `Default::default()` must be the additive identity, i.e. `0`.
/// The trees only ever combine values with `+`.
pub trait Summable: Copy + Default + Add<Output = Self> {}

impl<T: Copy + Default + Add<Output = T>> Summable for T {}

/// The operations common to both trees.
///
/// All spans are inclusive on both ends, and must satisfy
/// `left <= right < self.size()`. Anything else, including any call on an empty
/// tree, is reported as [`crate::SegmentTreeError::IndexOutOfRange`] before
/// anything is modified.
pub trait SumTree<T: Summable> {
    /// The number of logical elements. Fixed at construction.
    fn size(&self) -> usize;

    /// Sets the element at `index` to `value`.
    /// O(log n)
    fn update(&mut self, index: usize, value: T) -> Result<()>;

    /// Returns the sum of the elements in `left..=right`.
    /// O(log n)
    fn query(&self, left: usize, right: usize) -> Result<T>;

    /// Sets every element in `start..=end` to `value`.
    fn update_range(&mut self, start: usize, end: usize, value: T) -> Result<()>;

    /// Returns the element at `index`.
    fn get(&self, index: usize) -> Result<T> {
        self.query(index, index)
    }

    /// Returns the sum of the elements in `range`.
    /// An empty range in bounds sums to `T::default()`.
    ///
    ///```
    /// use sumtree::{SegmentTree, SumTree};
    ///
    /// let tree: SegmentTree<i32> = vec![5, 9, 2, 3, 4, 1].into();
    /// assert_eq!(tree.segment_sum(1..5), Ok(18));
    /// assert_eq!(tree.segment_sum(..), Ok(24));
    /// assert_eq!(tree.segment_sum(2..2), Ok(0));
    /// assert!(tree.segment_sum(0..7).is_err());
    ///```
    fn segment_sum<R: RangeBounds<usize>>(&self, range: R) -> Result<T> {
        match locate_span(&range, self.size())? {
            Some(span) => self.query(span.start, span.end),
            None => Ok(T::default()),
        }
    }

    /// Sets every element in `range` to `value`.
    /// An empty range in bounds leaves the tree untouched.
    fn assign_segment<R: RangeBounds<usize>>(&mut self, range: R, value: T) -> Result<()> {
        match locate_span(&range, self.size())? {
            Some(span) => self.update_range(span.start, span.end, value),
            None => Ok(()),
        }
    }
}

#[inline]
pub(crate) fn left_child(idx: usize) -> usize {
    2 * idx + 1
}

#[inline]
pub(crate) fn right_child(idx: usize) -> usize {
    2 * idx + 2
}

#[inline]
pub(crate) fn midpoint(left: usize, right: usize) -> usize {
    left + (right - left) / 2
}

/// The size of the node buffer for `len` logical elements.
/// Four slots per element is enough for the deepest layout the recursive
/// halving can produce.
#[inline]
pub(crate) fn node_capacity(len: usize) -> usize {
    4 * len
}

/// `value` added to itself `count` times, by doubling.
/// O(log count)
pub(crate) fn repeat_sum<T: Summable>(value: T, mut count: usize) -> T {
    let mut result = T::default();
    let mut power = value;
    while count > 0 {
        if count & 1 == 1 {
            result = result + power;
        }
        count >>= 1;
        if count > 0 {
            power = power + power;
        }
    }
    result
}
