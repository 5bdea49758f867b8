//! Path-dependent payoff evaluation.
//!
//! [`PathPayoff`] turns one simulated row into an undiscounted cash amount.
//! It is implemented for the option records of `pricer_models`:
//!
//! - `EquityOption`: vanilla payoff on the terminal price
//! - `AsianOption`: payoff on the arithmetic average of steps `1..=n`
//! - `BarrierOption`: vanilla payoff gated by a discretely monitored barrier
//! - `DigitalOption`: fixed payout if the terminal price is strictly in the money
//!
//! Barrier touches are checked only at simulated steps, initial spot
//! included. Increasing `n_steps` reduces the resulting monitoring bias.

mod payoff;

pub use payoff::PathPayoff;
