//! Composition benchmarks across step counts.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use strider_walk::{compose, LatticeDim, RegisterLayout, WalkConfig};

fn bench_compose_1d(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose_1d");
    for steps in [10u32, 100, 1000] {
        let config = WalkConfig::new(steps, LatticeDim::One);
        let layout = RegisterLayout::for_steps(steps).unwrap();
        group.bench_function(format!("steps_{steps}"), |b| {
            b.iter(|| compose::walk_1d(black_box(&config), black_box(&layout)).unwrap());
        });
    }
    group.finish();
}

fn bench_compose_2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose_2d");
    for steps in [10u32, 100] {
        let config = WalkConfig::new(steps, LatticeDim::Two);
        let layout = RegisterLayout::for_steps(steps).unwrap();
        group.bench_function(format!("steps_{steps}"), |b| {
            b.iter(|| compose::walk_2d(black_box(&config), black_box(&layout)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compose_1d, bench_compose_2d);
criterion_main!(benches);
