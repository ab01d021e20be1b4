//! Performance benchmarks for geo-track-lib
//!
//! Run with: cargo bench --package geo-track-lib

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use geo_track_lib::{Coordinate, Path, simplify};
use std::hint::black_box;

/// Generate a realistic wiggly track with the specified number of points.
fn generate_track(num_points: usize, base_lat: f64, base_lon: f64) -> Vec<Coordinate> {
    (0..num_points)
        .map(|i| {
            let t = i as f64 / num_points as f64;
            let lat = base_lat + t * 0.1 + (t * 50.0).sin() * 0.001;
            let lon = base_lon + t * 0.1 + (t * 30.0).cos() * 0.001;
            let elevation = 200.0 + (t * 20.0).sin() * 150.0;
            Coordinate::new(lat, lon, elevation).expect("generated coordinate is valid")
        })
        .collect()
}

/// Generate multiple tracks spread across an area
fn generate_multiple_paths(num_paths: usize, points_per_path: usize) -> Vec<Path> {
    (0..num_paths)
        .map(|i| {
            let lat_offset = (i % 10) as f64 * 0.1;
            let lon_offset = (i / 10) as f64 * 0.1;
            Path::new(generate_track(points_per_path, 51.5 + lat_offset, -0.1 + lon_offset))
                .expect("generated path has enough points")
        })
        .collect()
}

// ============================================================================
// Core Benchmarks - Key performance indicators
// ============================================================================

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for size in [1_000, 50_000] {
        let coordinates = generate_track(size, 51.5, -0.1);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &coordinates, |b, coords| {
            b.iter(|| Path::new(black_box(coords.iter().copied())).unwrap());
        });
    }

    group.finish();
}

fn bench_simplify(c: &mut Criterion) {
    let mut group = c.benchmark_group("simplify");

    let coordinates = generate_track(50_000, 51.5, -0.1);
    group.throughput(Throughput::Elements(coordinates.len() as u64));

    for epsilon in [0.00001, 0.0001, 0.001] {
        group.bench_with_input(
            BenchmarkId::new("rdp_50k", epsilon),
            &epsilon,
            |b, &epsilon| {
                b.iter(|| simplify::simplify_indices(black_box(&coordinates), epsilon));
            },
        );
    }

    // Straight line: worst case for split selection
    let straight: Vec<Coordinate> = (0..50_000)
        .map(|i| Coordinate::new(i as f64 * 1e-5, i as f64 * 1e-5, 0.0).unwrap())
        .collect();
    group.bench_function("rdp_straight_50k", |b| {
        b.iter(|| simplify::simplify_indices(black_box(&straight), 1e-9));
    });

    group.finish();
}

fn bench_simplify_many(c: &mut Criterion) {
    let mut group = c.benchmark_group("simplify_many");
    group.sample_size(20);

    // 100 paths with 1000 points each
    let paths = generate_multiple_paths(100, 1_000);
    group.throughput(Throughput::Elements(100 * 1_000));
    group.bench_function("parallel_100x1k", |b| {
        b.iter(|| simplify::simplify_all(black_box(&paths), 0.0001));
    });

    group.finish();
}

fn bench_alignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("alignment");
    group.sample_size(20);

    let a = Path::new(generate_track(1_000, 51.5, -0.1)).unwrap();
    let b_path = Path::new(generate_track(2_000, 51.5, -0.1)).unwrap();

    group.bench_function("1k_vs_2k", |b| {
        b.iter(|| a.is_aligned_with(black_box(&b_path), 50.0).unwrap());
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_construction,
    bench_simplify,
    bench_simplify_many,
    bench_alignment,
);

criterion_main!(benches);
