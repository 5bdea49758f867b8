//! Benchmarks for pricer_optimiser.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_models::analytical::black_scholes_price;
use pricer_models::instruments::OptionType;
use pricer_optimiser::calibration::{implied_vol, ImpliedVolSolver};

fn benchmark_implied_vol(c: &mut Criterion) {
    let mut group = c.benchmark_group("implied_vol");
    let solver = ImpliedVolSolver::default();

    for vol in [0.1, 0.4, 1.2] {
        let target = black_scholes_price(100.0, 105.0, 1.0, 0.03, 0.0, vol, OptionType::Call)
            .unwrap_or_default();

        group.bench_with_input(BenchmarkId::new("solve", vol), &target, |b, &target| {
            b.iter(|| {
                solver.solve(
                    black_box(target),
                    100.0,
                    105.0,
                    1.0,
                    0.03,
                    0.0,
                    OptionType::Call,
                )
            });
        });
    }

    group.finish();
}

fn benchmark_implied_vol_strip(c: &mut Criterion) {
    let strikes: Vec<f64> = (0..21).map(|i| 80.0 + 2.0 * i as f64).collect();
    let targets: Vec<f64> = strikes
        .iter()
        .map(|&k| black_scholes_price(100.0, k, 0.5, 0.03, 0.0, 0.25, OptionType::Put).unwrap_or_default())
        .collect();

    c.bench_function("implied_vol_strip_21", |b| {
        b.iter(|| {
            strikes
                .iter()
                .zip(&targets)
                .map(|(&k, &p)| {
                    implied_vol(black_box(p), 100.0, k, 0.5, 0.03, 0.0, OptionType::Put, 1e-6, 100)
                })
                .collect::<Vec<_>>()
        })
    });
}

criterion_group!(benches, benchmark_implied_vol, benchmark_implied_vol_strip);
criterion_main!(benches);
