//! Monte Carlo price commands
//!
//! Prices Asian, barrier and digital options with the pricer_pricing engine
//! on the backend resolved at start-up.

use pricer_models::instruments::exotic::{AsianOption, BarrierOption, BarrierType, DigitalOption};
use pricer_pricing::mc::{MonteCarloEngine, PathSimulator, PricingResult};
use tracing::info;

use super::{Context, EquityArgs};
use crate::output::Report;
use crate::Result;

fn engine(ctx: &Context) -> Result<MonteCarloEngine> {
    let config = ctx.config.monte_carlo_config()?;
    info!(
        backend = ctx.backend.name(),
        n_paths = config.n_paths(),
        n_steps = config.n_steps(),
        "Monte Carlo pricing"
    );
    Ok(MonteCarloEngine::new(config, ctx.backend)?)
}

fn simulated(title: &str, ctx: &Context, result: &PricingResult) -> Report {
    Report::new(title)
        .field("price", result.price)
        .field("std_error", result.std_error)
        .field("n_paths", result.n_paths)
        .field("n_steps", ctx.config.monte_carlo.n_steps)
        .field("seed", result.seed)
        .field("backend", ctx.backend.name())
}

/// Build the Asian option report
pub fn asian_report(ctx: &Context, args: &EquityArgs) -> Result<Report> {
    let option = AsianOption::new(args.to_option()?);
    let result = engine(ctx)?.price_asian(&option)?;
    Ok(simulated("asian", ctx, &result))
}

/// Run the asian command
pub fn run_asian(ctx: &Context, args: &EquityArgs) -> Result<()> {
    asian_report(ctx, args)?.emit(ctx.format)
}

/// Build the barrier option report
pub fn barrier_report(
    ctx: &Context,
    args: &EquityArgs,
    barrier: f64,
    barrier_type: BarrierType,
) -> Result<Report> {
    let option = BarrierOption::new(args.to_option()?, barrier, barrier_type)?;
    let result = engine(ctx)?.price_barrier(&option)?;
    Ok(simulated("barrier", ctx, &result).field("barrier_type", barrier_type.as_str()))
}

/// Run the barrier command
pub fn run_barrier(
    ctx: &Context,
    args: &EquityArgs,
    barrier: f64,
    barrier_type: BarrierType,
) -> Result<()> {
    barrier_report(ctx, args, barrier, barrier_type)?.emit(ctx.format)
}

/// Build the digital option report
pub fn digital_report(ctx: &Context, args: &EquityArgs, payout: f64) -> Result<Report> {
    let option = DigitalOption::new(args.to_option()?, payout)?;
    let result = engine(ctx)?.price_digital(&option)?;
    Ok(simulated("digital", ctx, &result).field("payout", payout))
}

/// Run the digital command
pub fn run_digital(ctx: &Context, args: &EquityArgs, payout: f64) -> Result<()> {
    digital_report(ctx, args, payout)?.emit(ctx.format)
}
