//! The eager segment tree. See [`SegmentTree`].

use std::iter::FromIterator;

use super::{left_child, midpoint, node_capacity, right_child, Summable, SumTree};
use crate::error::{check_index, check_span, Result};

/// A segment tree of sums over a fixed-length array.
///
/// Keeps both the logical array and a node buffer of length `4 * len`, where
/// every internal node holds the sum of its two children and every leaf holds
/// its element. Node slots that the layout never reaches hold `T::default()`.
///
/// Point updates and range queries are `O(log n)`. Range assignment with
/// [`SumTree::update_range`] is eager: it visits every node intersecting the
/// range, so it costs `O(k + log n)` for a range of `k` elements.
/// See [`crate::LazySegmentTree`] for `O(log n)` range assignment.
///
///```
/// use sumtree::{SegmentTree, SumTree};
///
/// let mut tree: SegmentTree<i32> = vec![5, 9, 2, 3, 4, 1].into();
/// assert_eq!(tree.query(3, 4), Ok(7));
/// assert_eq!(tree.query(1, 4), Ok(18));
///
/// tree.update(2, 45).unwrap();
/// assert_eq!(tree.values(), &[5, 9, 45, 3, 4, 1]);
/// assert_eq!(tree.query(0, 5), Ok(67));
/// # tree.assert_correctness();
///```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct SegmentTree<T = i64> {
    nodes: Vec<T>,
    values: Vec<T>,
}

impl<T> SegmentTree<T> {
    /// Creates a new empty tree. Every operation on it reports an out of range error.
    pub fn new() -> Self {
        SegmentTree {
            nodes: vec![],
            values: vec![],
        }
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The elements, in order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// The raw node buffer, root first. Has length `4 * self.len()`.
    pub fn nodes(&self) -> &[T] {
        &self.nodes
    }

    /// Consumes the tree, returning its elements.
    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}

impl<T> Default for SegmentTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Summable> SegmentTree<T> {
    /// Builds a tree over `values`.
    /// O(n)
    pub fn from_vec(values: Vec<T>) -> Self {
        let mut tree = SegmentTree {
            nodes: vec![T::default(); node_capacity(values.len())],
            values,
        };
        if !tree.is_empty() {
            tree.build(0, 0, tree.len() - 1);
        }
        log::debug!("built segment tree over {} elements", tree.len());
        tree
    }

    fn build(&mut self, idx: usize, left: usize, right: usize) {
        if left == right {
            self.nodes[idx] = self.values[left];
            return;
        }

        let mid = midpoint(left, right);
        self.build(left_child(idx), left, mid);
        self.build(right_child(idx), mid + 1, right);
        self.rebuild(idx);
    }

    /// Recomputes a node from its two children.
    #[inline]
    fn rebuild(&mut self, idx: usize) {
        self.nodes[idx] = self.nodes[left_child(idx)] + self.nodes[right_child(idx)];
    }

    // `left..=right` is the span of node `idx`, and always contains `index`.
    fn update_node(&mut self, index: usize, value: T, idx: usize, left: usize, right: usize) {
        if left == right {
            self.nodes[idx] = value;
            return;
        }

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
            // no overlap
            T::default()
        } else if node_left >= left && node_right <= right {
            // contained in the queried span
            self.nodes[idx]
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
        if left == right {
            // a leaf that isn't disjoint from the span must be inside it
            self.nodes[idx] = value;
            return;
        }

        let mid = midpoint(left, right);
        self.update_range_node(start, end, value, left_child(idx), left, mid);
        self.update_range_node(start, end, value, right_child(idx), mid + 1, right);
        self.rebuild(idx);
    }
}

impl<T: Summable> SumTree<T> for SegmentTree<T> {
    fn size(&self) -> usize {
        self.len()
    }

    fn update(&mut self, index: usize, value: T) -> Result<()> {
        check_index(index, self.len())?;
        log::trace!("update at {index}");
        self.update_node(index, value, 0, 0, self.len() - 1);
        self.values[index] = value;
        Ok(())
    }

    fn query(&self, left: usize, right: usize) -> Result<T> {
        check_span(left, right, self.len())?;
        Ok(self.query_node(0, 0, self.len() - 1, left, right))
    }

    fn update_range(&mut self, start: usize, end: usize, value: T) -> Result<()> {
        check_span(start, end, self.len())?;
        log::trace!("assign over {start}..={end}");
        self.update_range_node(start, end, value, 0, 0, self.len() - 1);
        for element in &mut self.values[start..=end] {
            *element = value;
        }
        Ok(())
    }

    fn get(&self, index: usize) -> Result<T> {
        check_index(index, self.len())?;
        Ok(self.values[index])
    }
}

impl<T: Summable + PartialEq + std::fmt::Debug> SegmentTree<T> {
    /// Checks that the node buffer agrees with the elements: every leaf holds
    /// its element and every internal node holds the sum of its children.
    /// If not, panics.
    pub fn assert_correctness(&self) {
        assert_eq!(self.nodes.len(), node_capacity(self.values.len()));
        if !self.is_empty() {
            self.assert_node(0, 0, self.len() - 1);
        }
    }

    fn assert_node(&self, idx: usize, left: usize, right: usize) {
        if left == right {
            assert_eq!(
                self.nodes[idx], self.values[left],
                "leaf {idx} disagrees with element {left}"
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

impl<T: Summable> From<Vec<T>> for SegmentTree<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T: Summable> From<&[T]> for SegmentTree<T> {
    fn from(values: &[T]) -> Self {
        Self::from_vec(values.to_vec())
    }
}

impl<T: Summable> FromIterator<T> for SegmentTree<T> {
    /// Builds a tree from the elements of an iterator.
    /// O(n)
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}
