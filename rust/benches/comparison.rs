//! Criterion comparison of both strategies against std BTreeSet.
//!
//! Drives only the public API; kept outside the library core.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flatbst::{AvlTree, ScapegoatTree};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::BTreeSet;

fn shuffled(n: i32) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(1);
    let mut data: Vec<i32> = (0..n).collect();
    data.shuffle(&mut rng);
    data
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for size in [1_000, 10_000] {
        let data = shuffled(size);
        group.bench_with_input(BenchmarkId::new("avl", size), &data, |b, data| {
            b.iter(|| {
                let mut tree = AvlTree::new();
                for &value in data {
                    tree.insert(black_box(value)).unwrap();
                }
                tree
            })
        });
        group.bench_with_input(BenchmarkId::new("scapegoat", size), &data, |b, data| {
            b.iter(|| {
                let mut tree = ScapegoatTree::new();
                for &value in data {
                    tree.insert(black_box(value)).unwrap();
                }
                tree
            })
        });
        group.bench_with_input(BenchmarkId::new("btreeset", size), &data, |b, data| {
            b.iter(|| {
                let mut set = BTreeSet::new();
                for &value in data {
                    set.insert(black_box(value));
                }
                set
            })
        });
    }
    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let data = shuffled(10_000);
    let avl = AvlTree::from_values(data.clone()).unwrap();
    let goat = ScapegoatTree::from_values(data.clone()).unwrap();
    let set: BTreeSet<i32> = data.iter().copied().collect();

    let mut group = c.benchmark_group("find");
    group.bench_function("avl", |b| {
        b.iter(|| {
            for probe in 0..10_000 {
                black_box(avl.contains(&probe));
            }
        })
    });
    group.bench_function("scapegoat", |b| {
        b.iter(|| {
            for probe in 0..10_000 {
                black_box(goat.contains(&probe));
            }
        })
    });
    group.bench_function("btreeset", |b| {
        b.iter(|| {
            for probe in 0..10_000 {
                black_box(set.contains(&probe));
            }
        })
    });
    group.finish();
}

fn bench_iterate(c: &mut Criterion) {
    let data = shuffled(10_000);
    let avl = AvlTree::from_values(data.clone()).unwrap();
    let goat = ScapegoatTree::from_values(data.clone()).unwrap();

    let mut group = c.benchmark_group("iterate");
    group.bench_function("avl", |b| {
        b.iter(|| avl.iter().copied().sum::<i32>())
    });
    group.bench_function("scapegoat", |b| {
        b.iter(|| goat.iter().copied().sum::<i32>())
    });
    group.finish();
}

criterion_group!(benches, bench_insert, bench_find, bench_iterate);
criterion_main!(benches);
