//! Property-based tests for formula identities.
//!
//! - A series whose growth equals its discount sums to `amount · n`
//! - A bond priced at its coupon rate is worth par
//! - CAPM with beta 0 returns the risk-free rate, beta 1 the market
//! - A -100% rate never leaks `inf` or `NaN`
//! - Evaluation is pure

use approx::relative_eq;
use proptest::prelude::*;
use vantage_formulas::prelude::*;
use vantage_formulas::{
    bond_price, capm_expected_return, discounted_series, inflation_adjusted_real_return,
    put_call_parity_put, roic, MAX_YEARS,
};

fn rate() -> impl Strategy<Value = f64> {
    -50.0..50.0f64
}

fn amount() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

proptest! {
    #[test]
    fn series_with_equal_rates_sums_to_amount_times_years(
        base in amount(),
        g in rate(),
        years in 1u32..=40,
    ) {
        let value = discounted_series(base, g, g, years).unwrap();
        let expected = base * f64::from(years);
        prop_assert!(
            relative_eq!(value, expected, epsilon = 1e-6, max_relative = 1e-12),
            "{value} != {expected}"
        );
    }

    #[test]
    fn series_identity_holds_for_large_rates_and_horizons(
        base in amount(),
        g in -99.0..1.0e4f64,
        years in 1u32..=MAX_YEARS,
    ) {
        let value = discounted_series(base, g, g, years).unwrap();
        let expected = base * f64::from(years);
        prop_assert!(
            relative_eq!(value, expected, epsilon = 1e-6, max_relative = 1e-12),
            "{value} != {expected}"
        );
    }

    #[test]
    fn par_bond_prices_at_face(
        face in 1.0..1.0e6f64,
        coupon in 0.0..25.0f64,
        years in 1u32..=30,
    ) {
        let price = bond_price(face, coupon, years, coupon).unwrap();
        prop_assert!(
            relative_eq!(price, face, max_relative = 1e-9),
            "{price} != {face}"
        );
    }

    #[test]
    fn capm_beta_anchors(rf in rate(), rm in rate()) {
        prop_assert_eq!(capm_expected_return(rf, rm, 0.0).unwrap(), rf);
        prop_assert!(relative_eq!(
            capm_expected_return(rf, rm, 1.0).unwrap(),
            rm,
            epsilon = 1e-12
        ));
    }

    #[test]
    fn minus_hundred_rates_are_domain_errors(
        base in amount(),
        g in rate(),
        years in 1u32..=10,
    ) {
        prop_assert!(matches!(
            discounted_series(base, g, -100.0, years),
            Err(DomainError::DivisionByZero { .. })
        ), "expected DivisionByZero");
        prop_assert!(matches!(
            bond_price(base, g, years, -100.0),
            Err(DomainError::DivisionByZero { .. })
        ), "expected DivisionByZero");
        prop_assert!(matches!(
            put_call_parity_put(base, base, base, -100.0, years),
            Err(DomainError::DivisionByZero { .. })
        ), "expected DivisionByZero");
        prop_assert!(matches!(
            inflation_adjusted_real_return(g, -100.0),
            Err(DomainError::DivisionByZero { .. })
        ), "expected DivisionByZero");
    }

    #[test]
    fn roic_never_fails_on_zero_capital(nopat in amount()) {
        prop_assert_eq!(roic(nopat, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn evaluation_is_pure(
        profit in amount(),
        g in rate(),
        d in rate(),
        years in 1u32..=10,
    ) {
        let request = FormulaRequest::Valuation {
            profit,
            growth_pct: g,
            discount_pct: d,
            years,
        };
        let first = evaluate(&request).unwrap();
        let second = evaluate(&request).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(first.kind, ResultKind::Amount);
    }
}
