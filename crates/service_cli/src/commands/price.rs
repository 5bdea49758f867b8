//! Analytic price commands
//!
//! Prices vanilla equity, FX and rate options with the closed-form models of
//! pricer_models, optionally with Greeks.

use clap::Args;
use pricer_models::analytical::Greeks;
use pricer_models::instruments::fx::FxOption;
use pricer_models::instruments::rates::RateOption;
use pricer_models::instruments::OptionType;
use tracing::info;

use super::{Context, EquityArgs};
use crate::output::Report;
use crate::Result;

/// Garman-Kohlhagen inputs
#[derive(Debug, Clone, Args)]
pub struct FxArgs {
    /// Spot exchange rate (domestic per foreign)
    #[arg(long)]
    pub spot: f64,

    /// Strike exchange rate
    #[arg(long)]
    pub strike: f64,

    /// Time to maturity in years
    #[arg(long)]
    pub maturity: f64,

    /// Domestic risk-free rate
    #[arg(long, allow_negative_numbers = true)]
    pub domestic_rate: f64,

    /// Foreign risk-free rate
    #[arg(long, allow_negative_numbers = true)]
    pub foreign_rate: f64,

    /// Volatility
    #[arg(long)]
    pub vol: f64,

    /// Option type (call, put)
    #[arg(long = "type", default_value = "call")]
    pub option_type: OptionType,
}

/// Black-76 inputs
#[derive(Debug, Clone, Args)]
pub struct RateArgs {
    /// Forward rate or price
    #[arg(long)]
    pub forward: f64,

    /// Strike
    #[arg(long)]
    pub strike: f64,

    /// Time to maturity in years
    #[arg(long)]
    pub maturity: f64,

    /// Discount rate
    #[arg(long, allow_negative_numbers = true)]
    pub discount_rate: f64,

    /// Volatility of the forward
    #[arg(long)]
    pub vol: f64,

    /// Option type (call, put)
    #[arg(long = "type", default_value = "call")]
    pub option_type: OptionType,
}

fn with_greeks(report: Report, greeks: &Greeks) -> Report {
    report
        .field("delta", greeks.delta)
        .field("gamma", greeks.gamma)
        .field("vega", greeks.vega)
        .field("theta", greeks.theta)
        .field("rho", greeks.rho)
}

/// Build the equity option report
pub fn equity_report(args: &EquityArgs, greeks: bool) -> Result<Report> {
    let option = args.to_option()?;
    let mut report = Report::new("equity")
        .field("option_type", option.option_type().as_str())
        .field("price", option.price()?);
    if greeks {
        report = with_greeks(report, &option.greeks()?);
    }
    Ok(report)
}

/// Run the equity command
pub fn run_equity(ctx: &Context, args: &EquityArgs, greeks: bool) -> Result<()> {
    info!(spot = args.spot, strike = args.strike, maturity = args.maturity, "Pricing equity option");
    equity_report(args, greeks)?.emit(ctx.format)
}

/// Build the FX option report
pub fn fx_report(args: &FxArgs, greeks: bool) -> Result<Report> {
    let option = FxOption::new(
        args.spot,
        args.strike,
        args.maturity,
        args.domestic_rate,
        args.foreign_rate,
        args.vol,
        args.option_type,
    )?;
    let mut report = Report::new("fx")
        .field("option_type", option.option_type().as_str())
        .field("price", option.price()?);
    if greeks {
        report = with_greeks(report, &option.greeks()?);
    }
    Ok(report)
}

/// Run the fx command
pub fn run_fx(ctx: &Context, args: &FxArgs, greeks: bool) -> Result<()> {
    info!(spot = args.spot, strike = args.strike, maturity = args.maturity, "Pricing FX option");
    fx_report(args, greeks)?.emit(ctx.format)
}

/// Build the rate option report
pub fn rate_report(args: &RateArgs) -> Result<Report> {
    let option = RateOption::new(
        args.forward,
        args.strike,
        args.maturity,
        args.discount_rate,
        args.vol,
        args.option_type,
    )?;
    Ok(Report::new("rate")
        .field("option_type", option.option_type().as_str())
        .field("price", option.price()?))
}

/// Run the rate command
pub fn run_rate(ctx: &Context, args: &RateArgs) -> Result<()> {
    info!(forward = args.forward, strike = args.strike, maturity = args.maturity, "Pricing rate option");
    rate_report(args)?.emit(ctx.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn equity() -> EquityArgs {
        EquityArgs {
            spot: 100.0,
            strike: 100.0,
            maturity: 1.0,
            rate: 0.05,
            dividend_yield: 0.0,
            vol: 0.2,
            option_type: OptionType::Call,
        }
    }

    #[test]
    fn test_equity_reference_price() {
        let report = equity_report(&equity(), false).unwrap();
        let price = report.get("price").and_then(|v| v.as_f64()).unwrap();
        assert_relative_eq!(price, 10.4506, epsilon = 1e-3);
        assert!(report.get("delta").is_none());
    }

    #[test]
    fn test_equity_greeks_fields() {
        let report = equity_report(&equity(), true).unwrap();
        for name in ["delta", "gamma", "vega", "theta", "rho"] {
            assert!(report.get(name).and_then(|v| v.as_f64()).is_some(), "{}", name);
        }
    }

    #[test]
    fn test_invalid_strike_rejected() {
        let args = EquityArgs {
            strike: 0.0,
            ..equity()
        };
        assert!(equity_report(&args, false).is_err());
    }

    #[test]
    fn test_fx_matches_equity_with_foreign_yield() {
        let fx = FxArgs {
            spot: 100.0,
            strike: 100.0,
            maturity: 1.0,
            domestic_rate: 0.05,
            foreign_rate: 0.02,
            vol: 0.2,
            option_type: OptionType::Put,
        };
        let eq = EquityArgs {
            dividend_yield: 0.02,
            option_type: OptionType::Put,
            ..equity()
        };
        let fx_price = fx_report(&fx, false).unwrap().get("price").and_then(|v| v.as_f64());
        let eq_price = equity_report(&eq, false).unwrap().get("price").and_then(|v| v.as_f64());
        assert_relative_eq!(fx_price.unwrap(), eq_price.unwrap(), epsilon = 1e-12);
    }

    #[test]
    fn test_rate_option_positive() {
        let args = RateArgs {
            forward: 0.03,
            strike: 0.03,
            maturity: 2.0,
            discount_rate: 0.03,
            vol: 0.25,
            option_type: OptionType::Call,
        };
        let price = rate_report(&args).unwrap().get("price").and_then(|v| v.as_f64()).unwrap();
        assert!(price > 0.0);
    }
}
