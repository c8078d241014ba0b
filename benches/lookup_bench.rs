//! Benchmark for BstMap vs standard BTreeMap lookups.
//!
//! Builds both maps from the same seeded-random key set, balances the
//! BstMap, and compares `get` latency across several tree sizes. The RNG
//! seed is an explicit parameter of every generator call, so runs are
//! reproducible.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::collections::BTreeMap;

use bstmap::BstMap;

const KEY_SPACE: i32 = 50_000;
const BUILD_SEED: u64 = 0x5EED_B57;
const PROBE_SEED: u64 = 0xFACE_0FF;

/// Generates `count` random keys from the given seed.
fn random_keys(count: usize, seed: u64) -> Vec<i32> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(0..KEY_SPACE)).collect()
}

/// Builds a balanced tree and the reference map from the same keys.
fn build_maps(count: usize, seed: u64) -> (BstMap<i32, i32>, BTreeMap<i32, i32>) {
    let keys = random_keys(count, seed);

    let mut tree = BstMap::new();
    let mut reference = BTreeMap::new();
    for key in keys {
        tree.insert(key, key);
        reference.entry(key).or_insert(key);
    }
    tree.balance();

    (tree, reference)
}

// =============================================================================
// get Benchmark
// =============================================================================

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for size in [100, 1_000, 10_000] {
        let (tree, reference) = build_maps(size, BUILD_SEED);
        let probes = random_keys(1_000, PROBE_SEED);

        // BstMap get (after balance)
        group.bench_with_input(BenchmarkId::new("BstMap", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut hits = 0usize;
                for key in &probes {
                    if tree.get(black_box(key)).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });

        // Standard BTreeMap get
        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut hits = 0usize;
                for key in &probes {
                    if reference.get(black_box(key)).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });
    }

    group.finish();
}

// =============================================================================
// find Benchmark (cursor API)
// =============================================================================

fn benchmark_find(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("find");

    for size in [100, 1_000, 10_000] {
        let (tree, _) = build_maps(size, BUILD_SEED);
        let probes = random_keys(1_000, PROBE_SEED);

        group.bench_with_input(BenchmarkId::new("BstMap", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut hits = 0usize;
                for key in &probes {
                    if !tree.find(black_box(key)).is_end() {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_get, benchmark_find);
criterion_main!(benches);
