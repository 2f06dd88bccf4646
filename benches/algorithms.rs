use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use prime_count_core::{Algorithm, Segment, count_primes_below, segmented_sieve};

fn bench_counting(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_primes_below");
    for algorithm in [Algorithm::TrialDivision, Algorithm::SqrtBound, Algorithm::Sieve] {
        group.bench_function(algorithm.to_string(), |b| {
            b.iter(|| count_primes_below(black_box(5_000), algorithm));
        });
    }
    group.finish();
}

fn bench_segment(c: &mut Criterion) {
    let segment = Segment::new(1_000_000, 1_010_000).unwrap();
    c.bench_function("segmented_sieve_10k_window", |b| {
        b.iter(|| segmented_sieve(black_box(segment)));
    });
}

criterion_group!(benches, bench_counting, bench_segment);
criterion_main!(benches);
