//! Payment schedule generation.
//!
//! This module provides:
//! - [`PaymentSchedule`]: Payment times in year fractions with a common accrual
//! - [`ScheduleError`]: Schedule construction errors
//!
//! One construction rule serves both the swap pricers and the CDS premium
//! leg.
//!
//! # Examples
//!
//! ```
//! use pricer_models::schedules::PaymentSchedule;
//!
//! let schedule = PaymentSchedule::regular(1.0, 2).unwrap();
//! assert_eq!(schedule.times(), &[0.5, 1.0]);
//! ```

mod error;
mod schedule;

pub use error::ScheduleError;
pub use schedule::{PaymentSchedule, MAX_PAYMENTS};
