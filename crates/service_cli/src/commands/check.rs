//! Check command implementation
//!
//! Prints the configuration after file, environment and flag overrides have
//! been applied, and the simulation backend it resolved to.

use pricer_pricing::mc::PathSimulator;
use tracing::info;

use super::Context;
use crate::output::Report;
use crate::Result;

/// Build the resolved configuration report
pub fn check_report(ctx: &Context) -> Report {
    let config = &ctx.config;
    Report::new("config")
        .field("version", env!("CARGO_PKG_VERSION"))
        .field("log_level", config.log_level.to_string())
        .field("mc_paths", config.monte_carlo.n_paths)
        .field("mc_steps", config.monte_carlo.n_steps)
        .field("mc_seed", config.monte_carlo.seed)
        .field("backend_setting", config.monte_carlo.backend.to_string())
        .field("backend", ctx.backend.name())
        .field("tolerance", config.calibration.tolerance)
        .field("max_iterations", config.calibration.max_iterations)
}

/// Run the check command
pub fn run(ctx: &Context) -> Result<()> {
    info!("Configuration check");
    check_report(ctx).emit(ctx.format)
}
