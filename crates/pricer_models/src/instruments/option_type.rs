//! Call/put discriminator shared by every option instrument.

use std::fmt;
use std::str::FromStr;

use super::error::InstrumentError;

/// Option payoff direction.
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
///
/// let call: OptionType = "call".parse().unwrap();
/// assert_eq!(call, OptionType::Call);
/// assert_eq!(call.intrinsic(110.0, 100.0), 10.0);
/// assert_eq!(OptionType::Put.intrinsic(110.0, 100.0), 0.0);
/// assert!("straddle".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum OptionType {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionType {
    /// Returns `true` for calls.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Intrinsic value `max(underlying - strike, 0)` for a call,
    /// `max(strike - underlying, 0)` for a put.
    #[inline]
    pub fn intrinsic(&self, underlying: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (underlying - strike).max(0.0),
            OptionType::Put => (strike - underlying).max(0.0),
        }
    }

    /// Lower-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(InstrumentError::UnknownOptionType {
                value: s.to_string(),
            }),
        }
    }
}
