//! Benchmarks for geolocation distance calculations.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use geolocation::{
    Coordinate, CoordinateBoundaries, DistanceUnit,
    batch::{BatchOptions, LocationItem, calculate_distances, find_within_radius},
    distance_between,
};

fn create_test_items(count: usize) -> Vec<LocationItem> {
    (0..count)
        .map(|i| {
            // Generate points in a grid around Los Angeles
            let lat = 33.0 + (i as f64 * 0.01) % 2.0;
            let lng = -119.0 + (i as f64 * 0.013) % 2.0;
            LocationItem::new(i as i64, lat, lng)
        })
        .collect()
}

fn bench_single_distance(c: &mut Criterion) {
    let origin = Coordinate::new(34.0675918, -118.3977091);
    let destination = Coordinate::new(35.076234, -118.9078687);

    c.bench_function("haversine_single", |b| {
        b.iter(|| {
            distance_between(
                black_box(&origin),
                black_box(&destination),
                1,
                DistanceUnit::Miles,
            )
        })
    });

    c.bench_function("boundaries_single", |b| {
        b.iter(|| {
            CoordinateBoundaries::from_coordinate(
                black_box(&origin),
                black_box(25.0),
                DistanceUnit::Miles,
            )
        })
    });
}

fn bench_batch_distances(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_distances");
    let origin = Coordinate::new(34.0675918, -118.3977091);

    for size in [10, 100, 1000, 10000].iter() {
        let items = create_test_items(*size);

        group.bench_with_input(BenchmarkId::new("all", size), size, |b, _| {
            b.iter(|| {
                calculate_distances(black_box(&origin), black_box(&items), BatchOptions::default())
            })
        });

        group.bench_with_input(BenchmarkId::new("within_25mi", size), size, |b, _| {
            b.iter(|| {
                find_within_radius(
                    black_box(&origin),
                    black_box(&items),
                    25.0,
                    BatchOptions::default(),
                )
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_distance, bench_batch_distances);
criterion_main!(benches);
