//! CDS command implementation
//!
//! Values both legs of a CDS on flat discount and hazard curves.

use clap::Args;
use pricer_core::market_data::curves::{FlatCurve, FlatHazardRateCurve};
use pricer_models::instruments::credit::{
    CdsPricer, CreditDefaultSwap, DEFAULT_DISCOUNT_RATE, DEFAULT_HAZARD_RATE,
    DEFAULT_PAYMENT_FREQUENCY, DEFAULT_RECOVERY_RATE,
};
use tracing::info;

use super::Context;
use crate::output::Report;
use crate::Result;

/// CDS contract and curve inputs
#[derive(Debug, Clone, Args)]
pub struct CdsArgs {
    /// Notional amount
    #[arg(long)]
    pub notional: f64,

    /// Running spread as a decimal (0.01 = 100bp)
    #[arg(long)]
    pub spread: f64,

    /// Maturity in years
    #[arg(long)]
    pub maturity: f64,

    /// Premium payments per year
    #[arg(long, default_value_t = DEFAULT_PAYMENT_FREQUENCY)]
    pub frequency: u32,

    /// Constant hazard rate
    #[arg(long, default_value_t = DEFAULT_HAZARD_RATE)]
    pub hazard_rate: f64,

    /// Recovery rate in [0, 1]
    #[arg(long, default_value_t = DEFAULT_RECOVERY_RATE)]
    pub recovery_rate: f64,

    /// Flat discount rate
    #[arg(long, default_value_t = DEFAULT_DISCOUNT_RATE, allow_negative_numbers = true)]
    pub discount_rate: f64,
}

/// Build the CDS report
pub fn cds_report(args: &CdsArgs) -> Result<Report> {
    let cds = CreditDefaultSwap::new(
        args.notional,
        args.spread,
        args.maturity,
        args.frequency,
        args.hazard_rate,
        args.recovery_rate,
        args.discount_rate,
    )?;
    let discount_curve = FlatCurve::try_new(cds.discount_rate())?;
    let credit_curve = FlatHazardRateCurve::try_new(cds.hazard_rate())?;
    let result = CdsPricer::new(&discount_curve, &credit_curve).price(&cds)?;

    Ok(Report::new("cds")
        .field("npv", result.npv)
        .field("fair_spread", result.fair_spread)
        .field("protection_leg", result.protection_leg)
        .field("premium_leg", result.premium_leg)
        .field("risky_annuity", result.risky_annuity))
}

/// Run the cds command
pub fn run(ctx: &Context, args: &CdsArgs) -> Result<()> {
    info!(notional = args.notional, spread = args.spread, maturity = args.maturity, "Pricing CDS");
    cds_report(args)?.emit(ctx.format)
}
