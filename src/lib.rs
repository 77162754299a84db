//! Segment trees of sums over a fixed-length array.
//!
//! A segment tree keeps, next to an array of `n` numbers, the sums of a hierarchy
//! of sub-ranges of that array, arranged as a binary tree over a flat buffer.
//! That makes it possible to:
//! * Query the sum of any range of the array in `O(log n)` time.
//! * Set a single element in `O(log n)` time.
//! * Set every element of a range to a common value.
//!
//! Two trees are provided, with the same interface, the [`SumTree`] trait:
//! * [`SegmentTree`], which assigns ranges eagerly, in `O(k + log n)` time for
//!   a range of `k` elements. Its node buffer can be inspected with [`SegmentTree::nodes`].
//! * [`LazySegmentTree`], which assigns ranges lazily, in `O(log n)` time.
//!
//! The length of a tree is fixed when it is built. Indices are checked on every
//! call, and a call with a bad index fails with [`SegmentTreeError`] without
//! changing anything.
//!
//!```
//! use sumtree::{SegmentTree, SumTree};
//!
//! let mut tree: SegmentTree = (1..=10).collect();
//! assert_eq!(tree.query(0, 9), Ok(55));
//!
//! tree.update_range(0, 4, 0).unwrap();
//! assert_eq!(tree.segment_sum(..5), Ok(0));
//! assert_eq!(tree.segment_sum(5..), Ok(40));
//!
//! assert!(tree.query(3, 10).is_err());
//!```

pub mod error;
pub mod locators;
pub mod trees;

pub use error::{Result, SegmentTreeError};
pub use locators::Span;
pub use trees::*;
