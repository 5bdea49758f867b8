//! Financial instrument definitions.
//!
//! Every instrument is an immutable value record validated on construction.
//! Records own their market state (rates, volatility, hazard rate) so a
//! pricing call needs nothing but the record itself.
//!
//! # Asset Class Modules
//!
//! Instruments are organised by asset class (enabled via feature flags):
//! - [`EquityOption`]: European equity option (always available)
//! - [`rates`]: Rate options, swaps and discount-curve pricers
//! - [`credit`]: Credit default swaps
//! - [`fx`]: FX options
//! - [`exotic`]: Asian, barrier and digital option terms
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{EquityOption, OptionType};
//!
//! let put: OptionType = "put".parse().unwrap();
//! let option = EquityOption::new(100.0, 105.0, 0.5, 0.03, 0.01, 0.25, put).unwrap();
//!
//! assert_eq!(option.payoff(90.0), 15.0);
//! assert!(option.price().unwrap() > 5.0);
//! ```

// Core types (always available)
mod error;
mod option_type;
mod params;
mod vanilla;

// Asset class submodules (feature-gated)
#[cfg(feature = "rates")]
pub mod rates;

#[cfg(feature = "credit")]
pub mod credit;

#[cfg(feature = "fx")]
pub mod fx;

#[cfg(feature = "exotic")]
pub mod exotic;

pub use error::InstrumentError;
pub use option_type::OptionType;
pub use vanilla::EquityOption;
