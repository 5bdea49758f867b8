//! Neutryx CLI - command line front end for the pricing library
//!
//! # Commands
//!
//! - `neutryx equity | fx | rate` - closed-form option prices, optionally with Greeks
//! - `neutryx asian | barrier | digital` - Monte Carlo exotic prices with standard error
//! - `neutryx swap | zero-coupon` - flat-curve rates instruments
//! - `neutryx cds` - CDS value with leg breakdown and fair spread
//! - `neutryx implied-vol` - Black-Scholes implied volatility
//! - `neutryx bench` - wall-clock timings of the pricing kernels
//! - `neutryx check` - print the resolved configuration
//!
//! # Configuration
//!
//! Settings come from `neutryx.toml` (or `--config`), then `PRICER_*`
//! environment variables, then the global flags below. `RUST_LOG` overrides
//! the configured log level. Logs go to stderr so `--format json` output can
//! be piped.
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires the core, model,
//! simulation and calibration crates into one binary.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use pricer_models::instruments::exotic::BarrierType;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::bench::BenchArgs;
use commands::calibrate::ImpliedVolArgs;
use commands::credit::CdsArgs;
use commands::price::{FxArgs, RateArgs};
use commands::rates::SwapArgs;
use commands::{Context, EquityArgs};
use config::{build_config, CliArgs, LogLevel};
use output::OutputFormat;

/// Neutryx option, rates and credit pricing CLI
#[derive(Parser, Debug)]
#[command(name = "neutryx")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Enable verbose output (same as --log-level info)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Monte Carlo path count
    #[arg(long, global = true)]
    paths: Option<usize>,

    /// Monte Carlo time steps
    #[arg(long, global = true)]
    steps: Option<usize>,

    /// Monte Carlo seed
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Simulation backend (auto, portable, parallel)
    #[arg(long, global = true)]
    backend: Option<String>,

    /// Implied volatility price tolerance
    #[arg(long, global = true)]
    tolerance: Option<f64>,

    /// Implied volatility iteration limit
    #[arg(long, global = true)]
    max_iterations: Option<usize>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Black-Scholes price of a European equity option
    Equity {
        #[command(flatten)]
        option: EquityArgs,

        /// Also report delta, gamma, vega, theta and rho
        #[arg(long)]
        greeks: bool,
    },

    /// Garman-Kohlhagen price of a European FX option
    Fx {
        #[command(flatten)]
        option: FxArgs,

        /// Also report delta, gamma, vega, theta and rho
        #[arg(long)]
        greeks: bool,
    },

    /// Black-76 price of an option on a forward rate
    Rate {
        #[command(flatten)]
        option: RateArgs,
    },

    /// Monte Carlo price of an arithmetic-average Asian option
    Asian {
        #[command(flatten)]
        option: EquityArgs,
    },

    /// Monte Carlo price of a discretely monitored barrier option
    Barrier {
        #[command(flatten)]
        option: EquityArgs,

        /// Barrier level
        #[arg(long)]
        barrier: f64,

        /// Barrier type (up-and-out, down-and-out, up-and-in, down-and-in)
        #[arg(long)]
        barrier_type: BarrierType,
    },

    /// Monte Carlo price of a cash-or-nothing digital option
    Digital {
        #[command(flatten)]
        option: EquityArgs,

        /// Cash paid when the option finishes in the money
        #[arg(long, default_value_t = 1.0)]
        payout: f64,
    },

    /// Fixed-vs-floating swap value and par rate on a flat curve
    Swap {
        #[command(flatten)]
        swap: SwapArgs,
    },

    /// Zero-coupon bond price on a flat curve
    ZeroCoupon {
        /// Face value
        #[arg(long)]
        face: f64,

        /// Maturity in years
        #[arg(long)]
        maturity: f64,

        /// Flat continuously compounded rate
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,
    },

    /// Constant-hazard CDS value, legs and fair spread
    Cds {
        #[command(flatten)]
        cds: CdsArgs,
    },

    /// Implied Black-Scholes volatility from an option premium
    ImpliedVol {
        #[command(flatten)]
        quote: ImpliedVolArgs,
    },

    /// Time the closed-form and Monte Carlo pricers
    Bench {
        #[command(flatten)]
        sizes: BenchArgs,
    },

    /// Print the resolved configuration and backend
    Check,
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        let log_level = match (&cli.log_level, cli.verbose) {
            (Some(level), _) => Some(level.clone()),
            (None, true) => Some(LogLevel::Info.to_string()),
            (None, false) => None,
        };
        CliArgs {
            config_file: cli.config.clone(),
            log_level,
            n_paths: cli.paths,
            n_steps: cli.steps,
            seed: cli.seed,
            backend: cli.backend.clone(),
            tolerance: cli.tolerance,
            max_iterations: cli.max_iterations,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn dispatch(ctx: &Context, command: &Commands) -> Result<()> {
    match command {
        Commands::Equity { option, greeks } => commands::price::run_equity(ctx, option, *greeks),
        Commands::Fx { option, greeks } => commands::price::run_fx(ctx, option, *greeks),
        Commands::Rate { option } => commands::price::run_rate(ctx, option),
        Commands::Asian { option } => commands::exotic::run_asian(ctx, option),
        Commands::Barrier {
            option,
            barrier,
            barrier_type,
        } => commands::exotic::run_barrier(ctx, option, *barrier, *barrier_type),
        Commands::Digital { option, payout } => commands::exotic::run_digital(ctx, option, *payout),
        Commands::Swap { swap } => commands::rates::run_swap(ctx, swap),
        Commands::ZeroCoupon {
            face,
            maturity,
            rate,
        } => commands::rates::run_zero_coupon(ctx, *face, *maturity, *rate),
        Commands::Cds { cds } => commands::credit::run(ctx, cds),
        Commands::ImpliedVol { quote } => commands::calibrate::run(ctx, quote),
        Commands::Bench { sizes } => commands::bench::run(ctx, sizes),
        Commands::Check => commands::check::run(ctx),
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = build_config(&CliArgs::from(&cli))?;
    init_tracing(config.log_level.as_filter_str());
    debug!(?config, "Configuration loaded");

    let ctx = Context::new(config, cli.format);
    dispatch(&ctx, &cli.command)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "Command failed");
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code())
        }
    }
}
