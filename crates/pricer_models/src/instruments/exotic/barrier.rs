//! Single-barrier knock-in/knock-out options.

use std::fmt;
use std::str::FromStr;

use crate::instruments::error::InstrumentError;
use crate::instruments::params;
use crate::instruments::vanilla::EquityOption;

/// Barrier direction and knock behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum BarrierType {
    /// Dies when the path reaches the barrier from below.
    UpAndOut,
    /// Dies when the path reaches the barrier from above.
    DownAndOut,
    /// Comes alive when the path reaches the barrier from below.
    UpAndIn,
    /// Comes alive when the path reaches the barrier from above.
    DownAndIn,
}

impl BarrierType {
    /// Every barrier type.
    pub const ALL: [BarrierType; 4] = [
        BarrierType::UpAndOut,
        BarrierType::DownAndOut,
        BarrierType::UpAndIn,
        BarrierType::DownAndIn,
    ];

    /// `true` if the barrier sits above the path.
    #[inline]
    pub fn is_up(&self) -> bool {
        matches!(self, BarrierType::UpAndOut | BarrierType::UpAndIn)
    }

    /// `true` for knock-in barriers.
    #[inline]
    pub fn is_in(&self) -> bool {
        matches!(self, BarrierType::UpAndIn | BarrierType::DownAndIn)
    }

    /// Whether a path with the given extremes has touched `barrier`.
    ///
    /// An up barrier is touched when `max >= barrier`, a down barrier when
    /// `min <= barrier`.
    #[inline]
    pub fn is_touched(&self, path_min: f64, path_max: f64, barrier: f64) -> bool {
        if self.is_up() {
            path_max >= barrier
        } else {
            path_min <= barrier
        }
    }

    /// Whether the option pays given the touch state.
    #[inline]
    pub fn is_active(&self, touched: bool) -> bool {
        touched == self.is_in()
    }

    /// Hyphenated name, e.g. `"up-and-out"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            BarrierType::UpAndOut => "up-and-out",
            BarrierType::DownAndOut => "down-and-out",
            BarrierType::UpAndIn => "up-and-in",
            BarrierType::DownAndIn => "down-and-in",
        }
    }
}

impl fmt::Display for BarrierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BarrierType {
    type Err = InstrumentError;

    /// Parses the hyphenated name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase();
        BarrierType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalised)
            .ok_or_else(|| InstrumentError::UnknownBarrierType {
                value: s.to_string(),
            })
    }
}

/// Vanilla equity option that is switched on or off by a barrier.
///
/// The barrier is monitored only at the simulated time steps, so prices carry
/// a discretisation bias relative to continuous monitoring. Knock-outs are
/// overpriced and knock-ins underpriced; more steps shrink the gap.
///
/// # Examples
/// ```
/// use pricer_models::instruments::exotic::{BarrierOption, BarrierType};
/// use pricer_models::instruments::{EquityOption, OptionType};
///
/// let vanilla = EquityOption::new(100.0, 100.0, 1.0, 0.05, 0.0, 0.2, OptionType::Call).unwrap();
/// let option = BarrierOption::new(vanilla, 130.0, BarrierType::UpAndOut).unwrap();
///
/// assert_eq!(option.path_payoff(&[100.0, 120.0, 110.0]), 10.0);
/// assert_eq!(option.path_payoff(&[100.0, 135.0, 110.0]), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BarrierOption {
    underlying: EquityOption,
    barrier: f64,
    barrier_type: BarrierType,
}

impl BarrierOption {
    /// Creates a barrier option.
    ///
    /// # Errors
    /// `InstrumentError::InvalidBarrier` if barrier <= 0, `NonFinite` if NaN or infinite.
    pub fn new(
        underlying: EquityOption,
        barrier: f64,
        barrier_type: BarrierType,
    ) -> Result<Self, InstrumentError> {
        params::positive("barrier", barrier, |barrier| {
            InstrumentError::InvalidBarrier { barrier }
        })?;
        Ok(Self {
            underlying,
            barrier,
            barrier_type,
        })
    }

    /// Vanilla terms and market state.
    #[inline]
    pub fn underlying(&self) -> &EquityOption {
        &self.underlying
    }

    /// Barrier level.
    #[inline]
    pub fn barrier(&self) -> f64 {
        self.barrier
    }

    /// Barrier type.
    #[inline]
    pub fn barrier_type(&self) -> BarrierType {
        self.barrier_type
    }

    /// Undiscounted payoff of one simulated path, initial level included.
    ///
    /// Returns 0 for an empty path.
    pub fn path_payoff(&self, path: &[f64]) -> f64 {
        let Some(&terminal) = path.last() else {
            return 0.0;
        };
        let (min, max) = path
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &s| {
                (lo.min(s), hi.max(s))
            });
        let touched = self.barrier_type.is_touched(min, max, self.barrier);
        if self.barrier_type.is_active(touched) {
            self.underlying.payoff(terminal)
        } else {
            0.0
        }
    }
}
