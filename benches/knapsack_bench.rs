//! Criterion benchmarks comparing the exact and heuristic knapsack solvers.
//!
//! Instances are generated from a fixed seed with weakly correlated costs
//! (cost = weight ± 10), which keeps branch and bound non-trivial.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_knapsack::bnb::{BnbConfig, BnbRunner};
use u_knapsack::ga::{GaConfig, GaRunner};
use u_knapsack::{compare, Item, KnapsackInstance};

// ===========================================================================
// Instance generation
// ===========================================================================

fn weakly_correlated(n: usize, seed: u64) -> KnapsackInstance {
    let mut rng = StdRng::seed_from_u64(seed);
    let items: Vec<Item> = (0..n)
        .map(|_| {
            let weight = rng.random_range(1..=100u64);
            let cost = (weight + rng.random_range(0..=20u64)).saturating_sub(10);
            Item::new(weight, cost)
        })
        .collect();
    let capacity = items.iter().map(|i| i.weight).sum::<u64>() / 2;
    KnapsackInstance::new(items, capacity).expect("generated weights are positive")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_bnb(c: &mut Criterion) {
    let mut group = c.benchmark_group("bnb_weakly_correlated");
    group.sample_size(10);

    for &n in &[20usize, 40, 60] {
        let instance = weakly_correlated(n, 42);
        let config = BnbConfig::default();
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(instance, config),
            |b, (inst, cfg)| {
                b.iter(|| {
                    let result = BnbRunner::run(black_box(inst), black_box(cfg));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_ga(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_weakly_correlated");
    group.sample_size(10);

    for (n, pop, gen) in [(20usize, 100usize, 100usize), (60, 100, 100), (200, 200, 100)] {
        let instance = weakly_correlated(n, 42);
        let config = GaConfig::default()
            .with_population_size(pop)
            .with_generations(gen)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_p{}_g{}", n, pop, gen), n),
            &(instance, config),
            |b, (inst, cfg)| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(inst), black_box(cfg));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");
    group.sample_size(10);

    let instance = weakly_correlated(40, 7);
    let bnb = BnbConfig::default();
    let ga = GaConfig::default().with_seed(7);
    group.bench_function("n40", |b| {
        b.iter(|| black_box(compare(black_box(&instance), &bnb, &ga)))
    });
    group.finish();
}

criterion_group!(benches, bench_bnb, bench_ga, bench_compare);
criterion_main!(benches);
