//! Segment tree with lazy range assignment. See [`LazySegmentTree`].

use std::iter::FromIterator;

use super::{
    left_child, midpoint, node_capacity, repeat_sum, right_child, Summable, SumTree,
};
use crate::error::{check_index, check_span, Result};

/// A segment tree of sums that defers range assignments.
///
/// It has the same interface and the same results as [`crate::SegmentTree`],
/// but [`SumTree::update_range`] is `O(log n)`: an assignment that covers a
/// whole node is recorded on that node, and only pushed to the node's children
/// when a later update has to go below it.
///
/// A node with a pending assignment of `v` holds `v * width` as its sum, where
/// `width` is the number of elements it covers. The sums of its descendants
/// are stale until the assignment is pushed down.
///
/// The elements are not stored separately; [`LazySegmentTree::values`] reads
/// them out of the tree.
///
///```
/// use sumtree::{LazySegmentTree, SumTree};
///
/// let mut tree: LazySegmentTree<i32> = vec![5, 9, 2, 3, 4, 1].into();
/// tree.update_range(0, 3, 10).unwrap();
/// assert_eq!(tree.query(2, 4), Ok(24));
/// assert_eq!(tree.values(), vec![10, 10, 10, 10, 4, 1]);
/// # tree.assert_correctness();
///```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct LazySegmentTree<T = i64> {
    nodes: Vec<T>,
    /// `Some(v)` on an internal node: every element below it is `v`,
    /// and its children haven't been told yet. Always `None` on leaves.
    pending: Vec<Option<T>>,
    len: usize,
}

impl<T> LazySegmentTree<T> {
    /// Creates a new empty tree. Every operation on it reports an out of range error.
    pub fn new() -> Self {
        LazySegmentTree {
            nodes: vec![],
            pending: vec![],
            len: 0,
        }
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Default for LazySegmentTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Summable> LazySegmentTree<T> {
    /// Builds a tree over `values`.
    /// O(n)
    pub fn from_slice(values: &[T]) -> Self {
        let len = values.len();
        let mut tree = LazySegmentTree {
            nodes: vec![T::default(); node_capacity(len)],
            pending: vec![None; node_capacity(len)],
            len,
        };
        if len > 0 {
            tree.build(values, 0, 0, len - 1);
        }
        log::debug!("built lazy segment tree over {len} elements");
        tree
    }

    fn build(&mut self, values: &[T], idx: usize, left: usize, right: usize) {
        if left == right {
            self.nodes[idx] = values[left];
            return;
        }

        let mid = midpoint(left, right);
        self.build(values, left_child(idx), left, mid);
        self.build(values, right_child(idx), mid + 1, right);
        self.rebuild(idx);
    }

    /// The elements, in order.
    /// O(n)
    pub fn values(&self) -> Vec<T> {
        let mut res = Vec::with_capacity(self.len);
        if !self.is_empty() {
            self.collect_values(0, 0, self.len - 1, &mut res);
        }
        res
    }

    fn collect_values(&self, idx: usize, left: usize, right: usize, res: &mut Vec<T>) {
        if left == right {
            res.push(self.nodes[idx]);
        } else if let Some(value) = self.pending[idx] {
            res.extend(std::iter::repeat(value).take(right - left + 1));
        } else {
            let mid = midpoint(left, right);
            self.collect_values(left_child(idx), left, mid, res);
            self.collect_values(right_child(idx), mid + 1, right, res);
        }
    }

    #[inline]
    fn rebuild(&mut self, idx: usize) {
        self.nodes[idx] = self.nodes[left_child(idx)] + self.nodes[right_child(idx)];
    }

    /// Sets every element under node `idx` to `value`, without visiting its descendants.
    fn assign_node(&mut self, idx: usize, left: usize, right: usize, value: T) {
        self.nodes[idx] = repeat_sum(value, right - left + 1);
        if left != right {
            self.pending[idx] = Some(value);
        }
    }

    /// Hands a pending assignment on node `idx` down to its children.
    fn push_down(&mut self, idx: usize, left: usize, right: usize) {
        if let Some(value) = self.pending[idx].take() {
            let mid = midpoint(left, right);
            self.assign_node(left_child(idx), left, mid, value);
            self.assign_node(right_child(idx), mid + 1, right, value);
        }
    }

    fn update_node(&mut self, index: usize, value: T, idx: usize, left: usize, right: usize) {
        if left == right {
            self.nodes[idx] = value;
            return;
        }

        self.push_down(idx, left, right);
        let mid = midpoint(left, right);
        if index <= mid {
            self.update_node(index, value, left_child(idx), left, mid);
        } else {
            self.update_node(index, value, right_child(idx), mid + 1, right);
        }
        self.rebuild(idx);
    }

    fn query_node(
        &self,
        idx: usize,
        node_left: usize,
        node_right: usize,
        left: usize,
        right: usize,
    ) -> T {
        if node_right < left || node_left > right {
            T::default()
        } else if node_left >= left && node_right <= right {
            self.nodes[idx]
        } else if let Some(value) = self.pending[idx] {
            // the children are stale, but every element here is `value`
            let overlap = node_right.min(right) - node_left.max(left) + 1;
            repeat_sum(value, overlap)
        } else {
            let mid = midpoint(node_left, node_right);
            self.query_node(left_child(idx), node_left, mid, left, right)
                + self.query_node(right_child(idx), mid + 1, node_right, left, right)
        }
    }

    fn update_range_node(
        &mut self,
        start: usize,
        end: usize,
        value: T,
        idx: usize,
        left: usize,
        right: usize,
    ) {
        if right < start || left > end {
            return;
        }
        if left >= start && right <= end {
            self.assign_node(idx, left, right, value);
            return;
        }

        // partial overlap, so this isn't a leaf
        self.push_down(idx, left, right);
        let mid = midpoint(left, right);
        self.update_range_node(start, end, value, left_child(idx), left, mid);
        self.update_range_node(start, end, value, right_child(idx), mid + 1, right);
        self.rebuild(idx);
    }
}

impl<T: Summable> SumTree<T> for LazySegmentTree<T> {
    fn size(&self) -> usize {
        self.len
    }

    fn update(&mut self, index: usize, value: T) -> Result<()> {
        check_index(index, self.len)?;
        log::trace!("update at {index}");
        self.update_node(index, value, 0, 0, self.len - 1);
        Ok(())
    }

    fn query(&self, left: usize, right: usize) -> Result<T> {
        check_span(left, right, self.len)?;
        Ok(self.query_node(0, 0, self.len - 1, left, right))
    }

    fn update_range(&mut self, start: usize, end: usize, value: T) -> Result<()> {
        check_span(start, end, self.len)?;
        log::trace!("lazily assign over {start}..={end}");
        self.update_range_node(start, end, value, 0, 0, self.len - 1);
        Ok(())
    }
}

impl<T: Summable + PartialEq + std::fmt::Debug> LazySegmentTree<T> {
    /// Checks the sums of every node that isn't below a pending assignment.
    /// If they're wrong, panics.
    pub fn assert_correctness(&self) {
        assert_eq!(self.nodes.len(), node_capacity(self.len));
        assert_eq!(self.pending.len(), node_capacity(self.len));
        if !self.is_empty() {
            self.assert_node(0, 0, self.len - 1);
        }
    }

    fn assert_node(&self, idx: usize, left: usize, right: usize) {
        if left == right {
            assert!(self.pending[idx].is_none(), "leaf {idx} has a pending assignment");
            return;
        }
        if let Some(value) = self.pending[idx] {
            assert_eq!(
                self.nodes[idx],
                repeat_sum(value, right - left + 1),
                "node {idx} covering {left}..={right} disagrees with its pending assignment"
            );
            return;
        }
        let mid = midpoint(left, right);
        self.assert_node(left_child(idx), left, mid);
        self.assert_node(right_child(idx), mid + 1, right);
        assert_eq!(
            self.nodes[idx],
            self.nodes[left_child(idx)] + self.nodes[right_child(idx)],
            "node {idx} covering {left}..={right} isn't the sum of its children"
        );
    }
}

impl<T: Summable> From<Vec<T>> for LazySegmentTree<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_slice(&values)
    }
}

impl<T: Summable> From<&[T]> for LazySegmentTree<T> {
    fn from(values: &[T]) -> Self {
        Self::from_slice(values)
    }
}

impl<T: Summable> FromIterator<T> for LazySegmentTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let values: Vec<T> = iter.into_iter().collect();
        Self::from_slice(&values)
    }
}
