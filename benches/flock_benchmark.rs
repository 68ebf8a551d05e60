/*
 * Flock Benchmark
 *
 * Measures the per-tick cost of the brute-force neighbourhood scan for a
 * few flock sizes. The whole flock spawns on one point, so every bird is in
 * every neighbourhood at first; the worst case for the O(n^2) scan.
 */

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

use birds::params::SimulationParams;
use birds::{Flock, Viewport, NEIGHBOURHOOD_RADIUS};

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("flock_tick");

    for flock_size in [100usize, 300, 1000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(flock_size),
            &flock_size,
            |b, &n| {
                let viewport = Viewport::new(1280.0, 800.0);
                let params = SimulationParams::default();
                let (spawn_x, spawn_y) = viewport.centre();
                let mut flock = Flock::new(n, NEIGHBOURHOOD_RADIUS, spawn_x, spawn_y);

                b.iter(|| flock.tick(&params, &viewport));
            },
        );
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_tick
}

criterion_main!(benches);
