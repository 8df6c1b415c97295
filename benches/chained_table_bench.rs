use chained_table::ChainedTable;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;

const SLOTS: usize = 4096;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn filled(seed: u64, n: usize) -> (ChainedTable, Vec<String>) {
    let mut t = ChainedTable::with_capacity(SLOTS).unwrap();
    let keys: Vec<String> = lcg(seed).take(n).map(key).collect();
    for (i, k) in keys.iter().enumerate() {
        t.insert(k.as_str(), i.to_string()).unwrap();
    }
    (t, keys)
}

fn bench_insert_fresh_10k(c: &mut Criterion) {
    c.bench_function("table::insert_fresh_10k", |b| {
        let keys: Vec<String> = lcg(1).take(10_000).map(key).collect();
        b.iter_batched(
            || ChainedTable::with_capacity(SLOTS).unwrap(),
            |mut t| {
                for k in &keys {
                    let _ = t.insert(k.as_str(), "v").unwrap();
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_overwrite_10k(c: &mut Criterion) {
    c.bench_function("table::overwrite_10k", |b| {
        let (mut t, keys) = filled(2, 10_000);
        b.iter(|| {
            for k in &keys {
                black_box(t.insert(k.as_str(), "w").unwrap());
            }
        })
    });
}

fn bench_search_hit_10k(c: &mut Criterion) {
    c.bench_function("table::search_hit_10k", |b| {
        let (t, keys) = filled(7, 10_000);
        let n = keys.len();
        let mut s = 0x9e3779b97f4a7c15u64;
        let queries: Vec<&str> = (0..10_000)
            .map(|_| {
                s = s.wrapping_mul(2862933555777941757).wrapping_add(3037000493);
                keys[(s as usize) % n].as_str()
            })
            .collect();
        b.iter(|| {
            for k in &queries {
                black_box(t.search(k));
            }
        })
    });
}

fn bench_search_miss_10k(c: &mut Criterion) {
    c.bench_function("table::search_miss_10k", |b| {
        let (t, _) = filled(11, 10_000);
        let misses: Vec<String> = lcg(0xdead_beef).take(10_000).map(key).collect();
        b.iter(|| {
            for k in &misses {
                black_box(t.search(k));
            }
        })
    });
}

fn bench_delete_all_10k(c: &mut Criterion) {
    c.bench_function("table::delete_all_10k", |b| {
        b.iter_batched(
            || filled(5, 10_000),
            |(mut t, keys)| {
                for k in &keys {
                    black_box(t.delete(k));
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_iter_10k(c: &mut Criterion) {
    c.bench_function("table::iter_all_10k", |b| {
        let (t, _) = filled(999, 10_000);
        b.iter(|| {
            let mut bytes = 0usize;
            for (k, v) in t.iter() {
                bytes = bytes.wrapping_add(k.len() + v.len());
            }
            black_box(bytes)
        })
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(12)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1))
}

criterion_group! {
    name = benches_insert;
    config = bench_config();
    targets = bench_insert_fresh_10k, bench_overwrite_10k
}
criterion_group! {
    name = benches_ops;
    config = bench_config();
    targets = bench_search_hit_10k,
              bench_search_miss_10k,
              bench_delete_all_10k,
              bench_iter_10k
}
criterion_main!(benches_insert, benches_ops);
