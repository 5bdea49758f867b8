//! Path payoff trait and its implementations for the option records.

use pricer_models::instruments::exotic::{AsianOption, BarrierOption, DigitalOption};
use pricer_models::instruments::EquityOption;

/// Undiscounted payoff of one simulated path.
///
/// `path[0]` is the initial spot and `path[n_steps]` the terminal price.
/// Implementations must be pure so paths can be evaluated in parallel.
pub trait PathPayoff: Send + Sync {
    /// Computes the payoff of `path`.
    fn evaluate(&self, path: &[f64]) -> f64;
}

/// European payoff on the terminal price.
impl PathPayoff for EquityOption {
    #[inline]
    fn evaluate(&self, path: &[f64]) -> f64 {
        path.last().map_or(0.0, |&terminal| self.payoff(terminal))
    }
}

impl PathPayoff for AsianOption {
    #[inline]
    fn evaluate(&self, path: &[f64]) -> f64 {
        self.path_payoff(path)
    }
}

impl PathPayoff for BarrierOption {
    #[inline]
    fn evaluate(&self, path: &[f64]) -> f64 {
        self.path_payoff(path)
    }
}

impl PathPayoff for DigitalOption {
    #[inline]
    fn evaluate(&self, path: &[f64]) -> f64 {
        self.path_payoff(path)
    }
}

impl<P: PathPayoff + ?Sized> PathPayoff for &P {
    #[inline]
    fn evaluate(&self, path: &[f64]) -> f64 {
        (**self).evaluate(path)
    }
}
