//! Criterion benchmarks for the Monte Carlo engine.
//!
//! Compares the portable and parallel simulators on path generation alone and
//! on end-to-end pricing of each path-dependent payoff.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pricer_models::instruments::exotic::{AsianOption, BarrierOption, BarrierType, DigitalOption};
use pricer_models::instruments::{EquityOption, OptionType};
use pricer_pricing::mc::{
    GbmParams, MonteCarloConfig, MonteCarloEngine, ParallelSimulator, PathSimulator,
    PortableSimulator, SimulatorBackend,
};

const N_STEPS: usize = 52;

fn vanilla() -> EquityOption {
    EquityOption::new(100.0, 100.0, 1.0, 0.03, 0.0, 0.2, OptionType::Call).unwrap()
}

/// Benchmark raw path generation for both backends.
fn bench_simulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");
    let params = GbmParams::from_option(&vanilla()).unwrap();

    for n_paths in [1_000usize, 10_000, 50_000] {
        group.throughput(Throughput::Elements((n_paths * N_STEPS) as u64));

        group.bench_with_input(BenchmarkId::new("portable", n_paths), &n_paths, |b, &n| {
            b.iter(|| PortableSimulator.simulate(black_box(&params), n, N_STEPS, 42));
        });

        group.bench_with_input(BenchmarkId::new("parallel", n_paths), &n_paths, |b, &n| {
            b.iter(|| ParallelSimulator.simulate(black_box(&params), n, N_STEPS, 42));
        });
    }

    group.finish();
}

/// Benchmark end-to-end pricing per payoff and backend.
fn bench_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("price");
    group.sample_size(20);

    let config = MonteCarloConfig::builder()
        .n_paths(20_000)
        .n_steps(N_STEPS)
        .seed(42)
        .build()
        .unwrap();
    let asian = AsianOption::new(vanilla());
    let barrier = BarrierOption::new(vanilla(), 120.0, BarrierType::UpAndOut).unwrap();
    let digital = DigitalOption::unit(vanilla());

    for backend in [SimulatorBackend::Portable, SimulatorBackend::Parallel] {
        let engine = MonteCarloEngine::new(config.clone(), backend).unwrap();

        group.bench_function(BenchmarkId::new("asian", backend), |b| {
            b.iter(|| engine.price_asian(black_box(&asian)));
        });
        group.bench_function(BenchmarkId::new("barrier", backend), |b| {
            b.iter(|| engine.price_barrier(black_box(&barrier)));
        });
        group.bench_function(BenchmarkId::new("digital", backend), |b| {
            b.iter(|| engine.price_digital(black_box(&digital)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_simulation, bench_pricing);
criterion_main!(benches);
