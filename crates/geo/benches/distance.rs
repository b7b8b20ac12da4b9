//! Benchmarks for geo crate distance calculations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stayfind_geo::{
    euclidean_distance_meters, haversine_distance_meters, law_of_cosines_distance_meters,
    vincenty_distance_meters, Coordinate, DistanceAlgorithm,
};

fn bench_distance_kernels(c: &mut Criterion) {
    let berlin = Coordinate::new(52.5200, 13.4050);
    let paris = Coordinate::new(48.8566, 2.3522);

    let mut group = c.benchmark_group("distance_kernels");

    group.bench_function("euclidean", |b| {
        b.iter(|| euclidean_distance_meters(black_box(&berlin), black_box(&paris)))
    });

    group.bench_function("haversine", |b| {
        b.iter(|| haversine_distance_meters(black_box(&berlin), black_box(&paris)))
    });

    group.bench_function("law_of_cosines", |b| {
        b.iter(|| law_of_cosines_distance_meters(black_box(&berlin), black_box(&paris)))
    });

    group.bench_function("vincenty", |b| {
        b.iter(|| vincenty_distance_meters(black_box(&berlin), black_box(&paris)))
    });

    group.finish();
}

fn bench_algorithm_dispatch(c: &mut Criterion) {
    let berlin = Coordinate::new(52.5200, 13.4050);
    let paris = Coordinate::new(48.8566, 2.3522);
    let algo = DistanceAlgorithm::Haversine;

    c.bench_function("dispatch_haversine", |b| {
        b.iter(|| algo.distance_meters(black_box(&berlin), black_box(&paris)))
    });
}

criterion_group!(benches, bench_distance_kernels, bench_algorithm_dispatch);
criterion_main!(benches);
