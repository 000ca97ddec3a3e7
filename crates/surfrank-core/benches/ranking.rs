//! Ranking performance benchmarks
//!
//! Measures performance of:
//! - Transition model construction
//! - Sampling estimator at several walk lengths
//! - Power iteration on ring-with-chords graphs

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use surfrank_core::{iterate_rank, sample_rank, transition_model, LinkGraph, LinkMap};

/// Ring of `n` pages where every page also links a few pages ahead
fn ring_graph(n: usize) -> LinkGraph {
    let links: LinkMap = (0..n)
        .map(|i| {
            let targets = [1, 3, 7]
                .iter()
                .map(|step| format!("{}.html", (i + step) % n))
                .collect();
            (format!("{}.html", i), targets)
        })
        .collect();
    LinkGraph::from_links(links)
}

fn bench_transition(c: &mut Criterion) {
    let mut group = c.benchmark_group("transition_model");

    for size in [10, 100, 500] {
        let graph = ring_graph(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| transition_model(black_box(graph), "0.html", 0.85).unwrap());
        });
    }

    group.finish();
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_rank");
    let graph = ring_graph(50);

    for samples in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(samples as u64));
        group.bench_with_input(BenchmarkId::from_parameter(samples), &samples, |b, &n| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(42);
                sample_rank(black_box(&graph), 0.85, n, &mut rng).unwrap()
            });
        });
    }

    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate_rank");

    for size in [10, 100, 1_000] {
        let graph = ring_graph(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| iterate_rank(black_box(graph), 0.85, 1e-6).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_transition, bench_sampling, bench_iteration);
criterion_main!(benches);
