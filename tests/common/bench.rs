use super::*;
extern crate test;
use test::Bencher;

pub fn bench_tree<T>(b: &mut Bencher)
where
    T: SumTree<i64> + FromIterator<i64>,
{
    let mut rng = rand::thread_rng();
    let len: usize = INITIAL_SIZE;

    let mut tree: T = (0..len as i64).collect();
    b.iter(|| {
        let round_action = random_round_action(&mut rng, len);
        let res = run_round(round_action, &mut tree);
        test::bench::black_box(res);
    });
}

/// Wide assignments only, where the two trees differ the most.
pub fn bench_wide_assign<T>(b: &mut Bencher)
where
    T: SumTree<i64> + FromIterator<i64>,
{
    let mut rng = rand::thread_rng();
    let len: usize = 10 * INITIAL_SIZE;

    let mut tree: T = (0..len as i64).collect();
    b.iter(|| {
        let start = rng.gen_range(0..len / 4);
        let end = rng.gen_range(3 * len / 4..len);
        tree.update_range(start, end, rng.gen_range(-MAX_VALUE..=MAX_VALUE))
            .unwrap();
        test::bench::black_box(tree.query(0, len - 1).unwrap());
    });
}

#[bench]
fn bench_eager(b: &mut Bencher) {
    bench_tree::<SegmentTree<i64>>(b)
}

#[bench]
fn bench_lazy(b: &mut Bencher) {
    bench_tree::<LazySegmentTree<i64>>(b)
}

#[bench]
fn bench_eager_wide_assign(b: &mut Bencher) {
    bench_wide_assign::<SegmentTree<i64>>(b)
}

#[bench]
fn bench_lazy_wide_assign(b: &mut Bencher) {
    bench_wide_assign::<LazySegmentTree<i64>>(b)
}
