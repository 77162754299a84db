#[cfg(feature = "bench")]
pub mod bench;

use proptest::prelude::*;
use rand::{self, Rng};
use std::ops::Range;
pub use sumtree::*;

/// Something to perform in one round of tests.
/// Indices are not necessarily in bounds: the trees have to reject those.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum RoundAction {
    Update { index: usize, value: i64 },
    Assign { start: usize, end: usize, value: i64 },
    Query { left: usize, right: usize },
    SegmentSum { range: Range<usize> },
}

/// The result after one round
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum RoundResult {
    Empty,
    Sum(i64),
    Error(SegmentTreeError),
}

/// Access to a tree's elements and invariant checks, for comparing against the model.
pub trait Inspect {
    fn elements(&self) -> Vec<i64>;
    fn assert_correctness(&self);
}

impl Inspect for SegmentTree<i64> {
    fn elements(&self) -> Vec<i64> {
        self.values().to_vec()
    }
    fn assert_correctness(&self) {
        SegmentTree::assert_correctness(self)
    }
}

impl Inspect for LazySegmentTree<i64> {
    fn elements(&self) -> Vec<i64> {
        self.values()
    }
    fn assert_correctness(&self) {
        LazySegmentTree::assert_correctness(self)
    }
}

pub const MAX_VALUE: i64 = 200;

fn random_range(rng: &mut rand::prelude::ThreadRng, len: usize) -> Range<usize> {
    let res = (rng.gen_range(0..len + 1), rng.gen_range(0..len + 1));
    if res.0 <= res.1 {
        res.0..res.1
    } else {
        res.1..res.0
    }
}

// mostly in bounds, sometimes one or two past the end
fn random_index(rng: &mut rand::prelude::ThreadRng, len: usize) -> usize {
    rng.gen_range(0..len + 2)
}

pub fn random_round_action(rng: &mut rand::prelude::ThreadRng, len: usize) -> RoundAction {
    use RoundAction::*;
    match rng.gen_range(0..4) {
        0 => Update {
            index: random_index(rng, len),
            value: rng.gen_range(-MAX_VALUE..=MAX_VALUE),
        },
        1 => Assign {
            start: random_index(rng, len),
            end: random_index(rng, len),
            value: rng.gen_range(-MAX_VALUE..=MAX_VALUE),
        },
        2 => Query {
            left: random_index(rng, len),
            right: random_index(rng, len),
        },
        3 => SegmentSum {
            range: random_range(rng, len),
        },
        _ => panic!(),
    }
}

pub fn run_round<T: SumTree<i64>>(round_action: RoundAction, tree: &mut T) -> RoundResult {
    use RoundAction::*;
    use RoundResult::*;

    let res = match round_action {
        Update { index, value } => tree.update(index, value).map(|()| Empty),
        Assign { start, end, value } => tree.update_range(start, end, value).map(|()| Empty),
        Query { left, right } => tree.query(left, right).map(Sum),
        SegmentSum { range } => tree.segment_sum(range).map(Sum),
    };
    res.unwrap_or_else(Error)
}

/// The same round, on a plain vector.
pub fn run_model(round_action: RoundAction, model: &mut [i64]) -> RoundResult {
    use RoundAction::*;
    use RoundResult::*;

    let len = model.len();
    let out_of_range = |start, end| Error(SegmentTreeError::IndexOutOfRange { start, end, len });
    match round_action {
        Update { index, .. } if index >= len => out_of_range(index, index),
        Update { index, value } => {
            model[index] = value;
            Empty
        }
        Assign { start, end, .. } if start > end || end >= len => out_of_range(start, end),
        Assign { start, end, value } => {
            model[start..=end].iter_mut().for_each(|x| *x = value);
            Empty
        }
        Query { left, right } if left > right || right >= len => out_of_range(left, right),
        Query { left, right } => Sum(model[left..=right].iter().sum()),
        SegmentSum { range } => Sum(model[range].iter().sum()),
    }
}

const INITIAL_SIZE: usize = 200;

/// Replays random rounds against two trees and a model vector, and checks
/// that all three always agree.
pub fn check_consistency<T1, T2>(num_rounds: u32)
where
    T1: SumTree<i64> + Inspect + FromIterator<i64>,
    T2: SumTree<i64> + Inspect + FromIterator<i64>,
{
    let mut rng = rand::thread_rng();
    let mut model: Vec<i64> = (0..INITIAL_SIZE)
        .map(|_| rng.gen_range(-MAX_VALUE..=MAX_VALUE))
        .collect();
    let mut tree1: T1 = model.iter().cloned().collect();
    let mut tree2: T2 = model.iter().cloned().collect();

    for _ in 0..num_rounds {
        let round_action = random_round_action(&mut rng, model.len());
        let res1 = run_round(round_action.clone(), &mut tree1);
        let res2 = run_round(round_action.clone(), &mut tree2);
        let expected = run_model(round_action.clone(), &mut model);
        assert_eq!(res1, expected, "first tree disagrees on {round_action:?}");
        assert_eq!(res2, expected, "second tree disagrees on {round_action:?}");

        let total: i64 = model.iter().sum();
        assert_eq!(tree1.segment_sum(..), Ok(total));
        assert_eq!(tree2.segment_sum(..), Ok(total));
        assert_eq!(tree1.size(), INITIAL_SIZE);
        assert_eq!(tree2.size(), INITIAL_SIZE);
    }

    // This check takes `O(n)` time, so it only runs at the end.
    tree1.assert_correctness();
    tree2.assert_correctness();
    assert_eq!(tree1.elements(), model);
    assert_eq!(tree2.elements(), model);
}

/// Same as [`check_consistency`], with the initial array and rounds given by proptest.
pub fn check_consistency_proptest<T1, T2>(
    initial: &[i64],
    round_actions: &[RoundAction],
) -> Result<(), TestCaseError>
where
    T1: SumTree<i64> + Inspect + FromIterator<i64>,
    T2: SumTree<i64> + Inspect + FromIterator<i64>,
{
    let mut model = initial.to_vec();
    let mut tree1: T1 = initial.iter().cloned().collect();
    let mut tree2: T2 = initial.iter().cloned().collect();

    for round_action in round_actions {
        let res1 = run_round(round_action.clone(), &mut tree1);
        let res2 = run_round(round_action.clone(), &mut tree2);
        let expected = run_model(round_action.clone(), &mut model);
        prop_assert_eq!(&res1, &expected);
        prop_assert_eq!(&res2, &expected);
    }

    tree1.assert_correctness();
    tree2.assert_correctness();
    prop_assert_eq!(tree1.elements(), model.clone());
    prop_assert_eq!(tree2.elements(), model);
    Ok(())
}
