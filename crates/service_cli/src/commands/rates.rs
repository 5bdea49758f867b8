//! Discount curve commands
//!
//! Zero-coupon bonds and fixed-vs-floating swaps on a flat curve.

use clap::Args;
use pricer_core::market_data::curves::FlatCurve;
use pricer_models::instruments::rates::{price_zero_coupon, InterestRateSwap};
use tracing::info;

use super::Context;
use crate::output::Report;
use crate::Result;

/// Swap terms and curve level
#[derive(Debug, Clone, Args)]
pub struct SwapArgs {
    /// Notional amount
    #[arg(long)]
    pub notional: f64,

    /// Fixed leg rate
    #[arg(long, allow_negative_numbers = true)]
    pub fixed_rate: f64,

    /// Maturity in years
    #[arg(long)]
    pub maturity: f64,

    /// Fixed payments per year
    #[arg(long, default_value_t = 2)]
    pub frequency: u32,

    /// Flat continuously compounded curve rate
    #[arg(long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Parallel shift applied to the curve, in basis points
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub shift_bps: f64,
}

/// Build the swap report
pub fn swap_report(args: &SwapArgs) -> Result<Report> {
    let curve = FlatCurve::try_new(args.rate)?.parallel_shift(args.shift_bps);
    let swap = InterestRateSwap::new(args.notional, args.fixed_rate, args.maturity, args.frequency)?;

    Ok(Report::new("swap")
        .field("pv", swap.price(&curve)?)
        .field("par_rate", swap.par_rate(&curve)?)
        .field("annuity", swap.annuity(&curve)?)
        .field("payments", swap.schedule().len())
        .field("curve_rate", curve.rate()))
}

/// Run the swap command
pub fn run_swap(ctx: &Context, args: &SwapArgs) -> Result<()> {
    info!(notional = args.notional, fixed_rate = args.fixed_rate, maturity = args.maturity, "Pricing swap");
    swap_report(args)?.emit(ctx.format)
}

/// Build the zero-coupon report
pub fn zero_coupon_report(face: f64, maturity: f64, rate: f64) -> Result<Report> {
    let curve = FlatCurve::try_new(rate)?;
    Ok(Report::new("zero-coupon").field("price", price_zero_coupon(face, maturity, &curve)?))
}

/// Run the zero-coupon command
pub fn run_zero_coupon(ctx: &Context, face: f64, maturity: f64, rate: f64) -> Result<()> {
    zero_coupon_report(face, maturity, rate)?.emit(ctx.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn value(report: &Report, name: &str) -> f64 {
        report.get(name).and_then(|v| v.as_f64()).unwrap()
    }

    #[test]
    fn test_zero_coupon() {
        let report = zero_coupon_report(100.0, 2.0, 0.05).unwrap();
        assert_relative_eq!(value(&report, "price"), 100.0 * (-0.1_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_swap_at_par_is_zero() {
        let args = SwapArgs {
            notional: 1_000_000.0,
            fixed_rate: 0.03,
            maturity: 5.0,
            frequency: 2,
            rate: 0.03,
            shift_bps: 0.0,
        };
        let par = value(&swap_report(&args).unwrap(), "par_rate");

        let at_par = SwapArgs {
            fixed_rate: par,
            ..args
        };
        let report = swap_report(&at_par).unwrap();
        assert!(value(&report, "pv").abs() < 1e-6);
        assert_eq!(report.get("payments").and_then(|v| v.as_u64()), Some(10));
    }

    #[test]
    fn test_shift_moves_curve() {
        let args = SwapArgs {
            notional: 1.0,
            fixed_rate: 0.03,
            maturity: 1.0,
            frequency: 1,
            rate: 0.03,
            shift_bps: 25.0,
        };
        assert_relative_eq!(value(&swap_report(&args).unwrap(), "curve_rate"), 0.0325, epsilon = 1e-15);
    }
}
