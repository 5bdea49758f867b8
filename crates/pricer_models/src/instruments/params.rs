//! Shared input validation for instrument constructors.

use super::error::InstrumentError;

/// Reject NaN and infinite inputs.
pub(crate) fn finite(name: &'static str, value: f64) -> Result<f64, InstrumentError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InstrumentError::NonFinite { name, value })
    }
}

/// Require a finite, strictly positive value; `err` builds the typed error.
pub(crate) fn positive(
    name: &'static str,
    value: f64,
    err: impl FnOnce(f64) -> InstrumentError,
) -> Result<f64, InstrumentError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(err(value))
    }
}

/// Require a finite, non-negative value; `err` builds the typed error.
pub(crate) fn non_negative(
    name: &'static str,
    value: f64,
    err: impl FnOnce(f64) -> InstrumentError,
) -> Result<f64, InstrumentError> {
    finite(name, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(err(value))
    }
}

/// Validate the option terms common to every single-underlying option:
/// positive spot and strike, non-negative maturity.
pub(crate) fn option_terms(spot: f64, strike: f64, maturity: f64) -> Result<(), InstrumentError> {
    positive("spot", spot, |spot| InstrumentError::InvalidSpot { spot })?;
    positive("strike", strike, |strike| InstrumentError::InvalidStrike {
        strike,
    })?;
    non_negative("maturity", maturity, |expiry| {
        InstrumentError::InvalidExpiry { expiry }
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive() {
        let err = |v| InstrumentError::InvalidNotional { notional: v };
        assert_eq!(positive("notional", 1.0, err).unwrap(), 1.0);
        assert!(matches!(
            positive("notional", 0.0, err),
            Err(InstrumentError::InvalidNotional { .. })
        ));
        assert!(matches!(
            positive("notional", f64::NAN, err),
            Err(InstrumentError::NonFinite { name: "notional", .. })
        ));
    }

    #[test]
    fn test_non_negative_accepts_zero() {
        let err = |v| InstrumentError::InvalidExpiry { expiry: v };
        assert_eq!(non_negative("maturity", 0.0, err).unwrap(), 0.0);
        assert!(non_negative("maturity", -1e-12, err).is_err());
    }

    #[test]
    fn test_option_terms() {
        assert!(option_terms(100.0, 100.0, 0.0).is_ok());
        assert!(matches!(
            option_terms(100.0, -1.0, 1.0),
            Err(InstrumentError::InvalidStrike { .. })
        ));
        assert!(matches!(
            option_terms(0.0, 100.0, 1.0),
            Err(InstrumentError::InvalidSpot { .. })
        ));
        assert!(matches!(
            option_terms(100.0, 100.0, -0.5),
            Err(InstrumentError::InvalidExpiry { .. })
        ));
    }
}
