//! Single-expression return measures.
//!
//! All percentage inputs and outputs use whole numbers (`8.0` is 8%).

use vantage_core::percent;

use crate::error::EngineResult;
use crate::guard::{checked, discount_base, finite};

/// Expected return on the security market line (CAPM).
///
/// ```text
/// E[R] = rf + β · (rm - rf)
/// ```
///
/// Any real beta is accepted, including negative betas.
pub fn capm_expected_return(
    risk_free_pct: f64,
    market_return_pct: f64,
    beta: f64,
) -> EngineResult<f64> {
    const NAME: &str = "capm_expected_return";

    let rf = finite(NAME, "risk_free_pct", risk_free_pct)?;
    let rm = finite(NAME, "market_return_pct", market_return_pct)?;
    let beta = finite(NAME, "beta", beta)?;

    checked(NAME, rf + beta * (rm - rf))
}

/// Mean-variance utility of a risky portfolio.
///
/// ```text
/// U = E[r] - 0.5 · A · σ² / 100
/// ```
///
/// Both `expected_return_pct` and `stddev_pct` are percentages; the `/100`
/// keeps the variance term on the same percentage scale as the return.
pub fn risk_aversion_utility(
    expected_return_pct: f64,
    stddev_pct: f64,
    aversion_coefficient: f64,
) -> EngineResult<f64> {
    const NAME: &str = "risk_aversion_utility";

    let expected = finite(NAME, "expected_return_pct", expected_return_pct)?;
    let sigma = finite(NAME, "stddev_pct", stddev_pct)?;
    let aversion = finite(NAME, "aversion_coefficient", aversion_coefficient)?;

    checked(NAME, expected - 0.5 * aversion * sigma.powi(2) / percent::SCALE)
}

/// Real return after inflation (Fisher relation), as a percentage.
///
/// ```text
/// r = ((1 + n) / (1 + i) - 1) · 100
/// ```
pub fn inflation_adjusted_real_return(nominal_pct: f64, inflation_pct: f64) -> EngineResult<f64> {
    const NAME: &str = "inflation_adjusted_real_return";

    let nominal = percent::growth_factor(finite(NAME, "nominal_pct", nominal_pct)?);
    let inflation = discount_base(NAME, "inflation_pct", inflation_pct)?;

    checked(NAME, percent::from_fraction(nominal / inflation - 1.0))
}

/// Return on invested capital, as a percentage.
///
/// Zero invested capital yields `0.0` rather than an error: an empty capital
/// base is a degenerate but legitimate input.
pub fn roic(nopat: f64, invested_capital: f64) -> EngineResult<f64> {
    const NAME: &str = "roic";

    let nopat = finite(NAME, "nopat", nopat)?;
    let invested_capital = finite(NAME, "invested_capital", invested_capital)?;

    if invested_capital == 0.0 {
        return Ok(0.0);
    }
    checked(NAME, percent::from_fraction(nopat / invested_capital))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DomainError;
    use approx::assert_relative_eq;

    #[test]
    fn test_capm_market_beta() {
        assert_eq!(capm_expected_return(2.0, 8.0, 1.0).unwrap(), 8.0);
    }

    #[test]
    fn test_capm_zero_beta_is_risk_free() {
        assert_eq!(capm_expected_return(2.0, 8.0, 0.0).unwrap(), 2.0);
    }

    #[test]
    fn test_capm_negative_beta() {
        assert_eq!(capm_expected_return(2.0, 8.0, -0.5).unwrap(), -1.0);
    }

    #[test]
    fn test_capm_leveraged_beta() {
        assert_relative_eq!(capm_expected_return(3.0, 9.0, 1.5).unwrap(), 12.0);
    }

    #[test]
    fn test_risk_aversion_defaults() {
        // 10 - 0.5 * 3 * 25 / 100
        assert_relative_eq!(risk_aversion_utility(10.0, 5.0, 3.0).unwrap(), 9.625);
    }

    #[test]
    fn test_risk_aversion_riskless() {
        assert_eq!(risk_aversion_utility(4.0, 0.0, 10.0).unwrap(), 4.0);
    }

    #[test]
    fn test_real_return() {
        let real = inflation_adjusted_real_return(10.0, 3.0).unwrap();
        assert_relative_eq!(real, 6.7961, epsilon = 0.01);
    }

    #[test]
    fn test_real_return_deflation() {
        let real = inflation_adjusted_real_return(2.0, -2.0).unwrap();
        assert!(real > 4.0);
    }

    #[test]
    fn test_real_return_equal_rates_is_zero() {
        assert_relative_eq!(inflation_adjusted_real_return(4.0, 4.0).unwrap(), 0.0);
    }

    #[test]
    fn test_real_return_rejects_minus_hundred_inflation() {
        let err = inflation_adjusted_real_return(10.0, -100.0).unwrap_err();
        assert!(matches!(
            err,
            DomainError::DivisionByZero {
                parameter: "inflation_pct",
                ..
            }
        ));
    }

    #[test]
    fn test_roic() {
        assert_eq!(roic(100.0, 1000.0).unwrap(), 10.0);
    }

    #[test]
    fn test_roic_zero_capital_is_zero() {
        assert_eq!(roic(100.0, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_roic_negative_nopat() {
        assert_eq!(roic(-50.0, 1000.0).unwrap(), -5.0);
    }

    #[test]
    fn test_roic_rejects_nan() {
        assert!(roic(f64::NAN, 1000.0).is_err());
    }
}
