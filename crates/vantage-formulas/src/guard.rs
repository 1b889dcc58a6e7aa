//! Input and output checks shared by the formulas.

use vantage_core::percent;

use crate::error::{DomainError, EngineResult};

/// Longest horizon any series formula accepts.
pub const MAX_YEARS: u32 = 1000;

pub(crate) fn finite(
    formula: &'static str,
    parameter: &'static str,
    value: f64,
) -> EngineResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NonFiniteInput {
            formula,
            parameter,
            value,
        })
    }
}

/// Returns `1 + pct/100`, failing when it would be used as a zero denominator.
pub(crate) fn discount_base(
    formula: &'static str,
    parameter: &'static str,
    rate_pct: f64,
) -> EngineResult<f64> {
    let base = percent::growth_factor(finite(formula, parameter, rate_pct)?);
    if base == 0.0 {
        return Err(DomainError::DivisionByZero {
            formula,
            parameter,
            value: rate_pct,
        });
    }
    Ok(base)
}

/// Validates a horizon and returns it as a `powi` exponent.
pub(crate) fn horizon(formula: &'static str, years: u32) -> EngineResult<i32> {
    if years == 0 || years > MAX_YEARS {
        return Err(DomainError::InvalidHorizon {
            formula,
            years,
            max: MAX_YEARS,
        });
    }
    // MAX_YEARS fits in i32
    Ok(years as i32)
}

pub(crate) fn checked(formula: &'static str, value: f64) -> EngineResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::Undefined { formula })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_base_rejects_minus_hundred() {
        let err = discount_base("f", "rate", -100.0).unwrap_err();
        assert!(matches!(err, DomainError::DivisionByZero { value, .. } if value == -100.0));
    }

    #[test]
    fn test_discount_base_allows_negative_rates() {
        assert_eq!(discount_base("f", "rate", -50.0).unwrap(), 0.5);
        assert_eq!(discount_base("f", "rate", -150.0).unwrap(), -0.5);
    }

    #[test]
    fn test_horizon_bounds() {
        assert!(horizon("f", 0).is_err());
        assert_eq!(horizon("f", 1).unwrap(), 1);
        assert_eq!(horizon("f", MAX_YEARS).unwrap(), 1000);
        assert!(horizon("f", MAX_YEARS + 1).is_err());
    }

    #[test]
    fn test_finite_rejects_nan() {
        assert!(finite("f", "x", f64::NAN).is_err());
        assert!(finite("f", "x", f64::NEG_INFINITY).is_err());
        assert_eq!(finite("f", "x", 1.5).unwrap(), 1.5);
    }
}
