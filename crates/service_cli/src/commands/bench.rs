//! Bench command implementation
//!
//! Wall-clock timings for the closed-form and Monte Carlo pricers. The
//! Criterion suites under each crate's `benches/` are the detailed
//! measurements; this is the quick check run against an installed binary.

use std::time::{Duration, Instant};

use clap::Args;
use pricer_models::analytical::black_scholes_price;
use pricer_models::instruments::exotic::AsianOption;
use pricer_models::instruments::{EquityOption, OptionType};
use pricer_pricing::mc::{MonteCarloConfig, MonteCarloEngine, PathSimulator};
use serde::Serialize;
use tracing::{debug, info};

use super::Context;
use crate::output::Report;
use crate::{CliError, Result};

const WARMUP_PATHS: usize = 1_000;
const WARMUP_STEPS: usize = 20;
const WARMUP_SEED: u64 = 123;
const TIMED_SEED: u64 = 42;

/// Benchmark sizes
#[derive(Debug, Clone, Args)]
pub struct BenchArgs {
    /// Closed-form pricing calls to time
    #[arg(long, default_value_t = 200)]
    pub runs: usize,

    /// Monte Carlo pricing calls to time
    #[arg(long, default_value_t = 5)]
    pub mc_runs: usize,

    /// Paths per Monte Carlo call
    #[arg(long, default_value_t = 20_000)]
    pub mc_paths: usize,

    /// Steps per Monte Carlo path
    #[arg(long, default_value_t = 100)]
    pub mc_steps: usize,
}

impl Default for BenchArgs {
    fn default() -> Self {
        Self {
            runs: 200,
            mc_runs: 5,
            mc_paths: 20_000,
            mc_steps: 100,
        }
    }
}

/// Aggregate timing of repeated calls
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimingStats {
    pub runs: usize,
    pub total_seconds: f64,
    pub per_call_ms: f64,
}

impl TimingStats {
    fn new(runs: usize, elapsed: Duration) -> Self {
        let total_seconds = elapsed.as_secs_f64();
        Self {
            runs,
            total_seconds,
            per_call_ms: total_seconds * 1e3 / runs.max(1) as f64,
        }
    }
}

fn time_calls<F>(runs: usize, mut call: F) -> Result<TimingStats>
where
    F: FnMut() -> Result<f64>,
{
    let start = Instant::now();
    for _ in 0..runs {
        std::hint::black_box(call()?);
    }
    Ok(TimingStats::new(runs, start.elapsed()))
}

/// Run the benchmarks and collect the timings
pub fn bench_report(ctx: &Context, args: &BenchArgs) -> Result<Report> {
    if args.runs == 0 || args.mc_runs == 0 {
        return Err(CliError::InvalidArgument(
            "runs and mc-runs must be at least 1".to_string(),
        ));
    }

    let option = EquityOption::new(100.0, 100.0, 1.0, 0.03, 0.0, 0.2, OptionType::Call)?;
    let asian = AsianOption::new(option);

    let warmup = MonteCarloConfig::builder()
        .n_paths(WARMUP_PATHS)
        .n_steps(WARMUP_STEPS)
        .seed(WARMUP_SEED)
        .build()?;
    MonteCarloEngine::new(warmup, ctx.backend)?.price_asian(&asian)?;
    debug!("warm-up complete");

    let closed_form = time_calls(args.runs, || {
        Ok(black_scholes_price(
            option.spot(),
            option.strike(),
            option.maturity(),
            option.rate(),
            option.dividend_yield(),
            option.volatility(),
            option.option_type(),
        )?)
    })?;

    let timed = MonteCarloConfig::builder()
        .n_paths(args.mc_paths)
        .n_steps(args.mc_steps)
        .seed(TIMED_SEED)
        .build()?;
    let engine = MonteCarloEngine::new(timed, ctx.backend)?;
    let monte_carlo = time_calls(args.mc_runs, || Ok(engine.price_asian(&asian)?.price))?;

    info!(
        bs_per_call_ms = closed_form.per_call_ms,
        mc_per_call_ms = monte_carlo.per_call_ms,
        "Benchmarks complete"
    );

    Ok(Report::new("bench")
        .nested("black_scholes", &closed_form)?
        .nested("asian_monte_carlo", &monte_carlo)?
        .field("mc_paths", args.mc_paths)
        .field("mc_steps", args.mc_steps)
        .field("backend", ctx.backend.name()))
}

/// Run the bench command
pub fn run(ctx: &Context, args: &BenchArgs) -> Result<()> {
    info!(runs = args.runs, mc_runs = args.mc_runs, "Running benchmarks");
    bench_report(ctx, args)?.emit(ctx.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BackendChoice, PricerConfig};
    use crate::output::OutputFormat;

    #[test]
    fn test_default_sizes() {
        let args = BenchArgs::default();
        assert_eq!((args.runs, args.mc_runs), (200, 5));
        assert_eq!((args.mc_paths, args.mc_steps), (20_000, 100));
    }

    #[test]
    fn test_per_call_time() {
        let stats = TimingStats::new(4, Duration::from_millis(10));
        assert!((stats.per_call_ms - 2.5).abs() < 1e-9);
        assert_eq!(TimingStats::new(0, Duration::ZERO).per_call_ms, 0.0);
    }

    #[test]
    fn test_zero_runs_rejected() {
        let ctx = Context::new(PricerConfig::default(), OutputFormat::Table);
        let args = BenchArgs {
            runs: 0,
            ..BenchArgs::default()
        };
        let err = bench_report(&ctx, &args).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_small_bench_reports_timings() {
        let mut config = PricerConfig::default();
        config.monte_carlo.backend = BackendChoice::Portable;
        let ctx = Context::new(config, OutputFormat::Json);
        let args = BenchArgs {
            runs: 3,
            mc_runs: 2,
            mc_paths: 200,
            mc_steps: 5,
        };

        let report = bench_report(&ctx, &args).unwrap();
        assert_eq!(report.get("black_scholes").unwrap()["runs"], 3);
        assert_eq!(report.get("asian_monte_carlo").unwrap()["runs"], 2);
        assert_eq!(report.get("mc_paths").and_then(|v| v.as_u64()), Some(200));
        assert_eq!(report.get("backend").and_then(|v| v.as_str()), Some("portable"));
    }
}
