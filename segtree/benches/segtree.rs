use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use query::{Min, Sum};
use rand::{rngs::StdRng, Rng, SeedableRng};
use segtree::Segtree;

const N: usize = 200_000;
const Q: usize = 200_000;

#[derive(Clone, Copy)]
enum Query {
    Update(usize, i64),
    Fold(usize, usize),
}

fn benchmark_case() -> (Vec<i64>, Vec<Query>) {
    let mut rng = StdRng::seed_from_u64(0x5e9);
    let data = (0..N).map(|_| rng.gen_range(0..1_000_000_000)).collect();
    let queries = (0..Q)
        .map(|_| {
            if rng.gen_bool(0.5) {
                Query::Update(rng.gen_range(0..N), rng.gen_range(0..1_000_000_000))
            } else {
                let l = rng.gen_range(0..N);
                Query::Fold(l, rng.gen_range(l..=N))
            }
        })
        .collect();
    (data, queries)
}

fn benchmark(c: &mut Criterion) {
    let (data, queries) = benchmark_case();
    let mut group = c.benchmark_group("segtree");
    group.bench_function("build", |b| {
        b.iter_batched(
            || data.clone(),
            |data| Segtree::from_vec(data, Sum::<i64>::new()),
            BatchSize::LargeInput,
        )
    });
    group.bench_function("sum", |b| {
        b.iter_batched(
            || Segtree::from_vec(data.clone(), Sum::<i64>::new()),
            |mut segtree| {
                let mut acc = 0i64;
                for &query in &queries {
                    match query {
                        Query::Update(i, x) => segtree.update(i, x),
                        Query::Fold(l, r) => acc = acc.wrapping_add(segtree.query(l..r)),
                    }
                }
                black_box(acc)
            },
            BatchSize::LargeInput,
        )
    });
    group.bench_function("min", |b| {
        b.iter_batched(
            || Segtree::from_vec(data.clone(), Min::<i64>::new()),
            |mut segtree| {
                let mut acc = 0i64;
                for &query in &queries {
                    match query {
                        Query::Update(i, x) => segtree.update(i, x),
                        Query::Fold(l, r) => acc ^= segtree.query(l..r),
                    }
                }
                black_box(acc)
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
