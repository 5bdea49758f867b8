//! Calibrate command implementation
//!
//! Backs out the Black-Scholes volatility that reproduces a quoted premium,
//! using the pricer_optimiser Newton-Raphson solver.

use clap::Args;
use pricer_models::instruments::OptionType;
use tracing::info;

use super::Context;
use crate::output::Report;
use crate::Result;

/// Quoted premium and contract terms
#[derive(Debug, Clone, Args)]
pub struct ImpliedVolArgs {
    /// Observed option premium
    #[arg(long)]
    pub price: f64,

    /// Spot price
    #[arg(long)]
    pub spot: f64,

    /// Strike price
    #[arg(long)]
    pub strike: f64,

    /// Time to maturity in years
    #[arg(long)]
    pub maturity: f64,

    /// Continuously compounded risk-free rate
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub rate: f64,

    /// Continuous dividend yield
    #[arg(long, default_value_t = 0.0)]
    pub dividend_yield: f64,

    /// Option type (call, put)
    #[arg(long = "type", default_value = "call")]
    pub option_type: OptionType,
}

/// Build the implied volatility report
pub fn implied_vol_report(ctx: &Context, args: &ImpliedVolArgs) -> Result<Report> {
    let solver = ctx.config.solver()?;
    let result = solver.solve(
        args.price,
        args.spot,
        args.strike,
        args.maturity,
        args.rate,
        args.dividend_yield,
        args.option_type,
    )?;

    Ok(Report::new("implied-vol")
        .field("volatility", result.volatility)
        .field("iterations", result.iterations)
        .field("status", result.status.as_str())
        .field("tolerance", solver.config().tolerance))
}

/// Run the implied-vol command
pub fn run(ctx: &Context, args: &ImpliedVolArgs) -> Result<()> {
    info!(price = args.price, strike = args.strike, "Solving for implied volatility");
    implied_vol_report(ctx, args)?.emit(ctx.format)
}
