//! Time-value-of-money series: discounted cash flows and bond pricing.
//!
//! Rates are whole-number percentages (`10.0` is 10%). Horizons are whole
//! years, evaluated for `t = 1..=years`.

use vantage_core::percent;

use crate::error::EngineResult;
use crate::guard::{checked, discount_base, finite, horizon};

/// Present value of a cash flow that grows at a constant rate.
///
/// # Formula
///
/// ```text
/// PV = Σ_{t=1}^{n} base · (1 + g)^t / (1 + d)^t
/// ```
///
/// # Arguments
///
/// * `base_amount` - Cash flow before growth is applied
/// * `growth_rate_pct` - Annual growth rate as a percentage
/// * `discount_rate_pct` - Annual discount rate as a percentage
/// * `years` - Number of annual periods (at least 1)
///
/// # Errors
///
/// Returns [`DomainError::DivisionByZero`](crate::DomainError::DivisionByZero)
/// when the discount rate is -100%, and a domain error for a zero horizon or
/// non-finite inputs.
///
/// # Example
///
/// ```rust
/// use vantage_formulas::discounted_series;
///
/// assert_eq!(discounted_series(100.0, 0.0, 0.0, 5).unwrap(), 500.0);
/// ```
pub fn discounted_series(
    base_amount: f64,
    growth_rate_pct: f64,
    discount_rate_pct: f64,
    years: u32,
) -> EngineResult<f64> {
    const NAME: &str = "discounted_series";

    let base_amount = finite(NAME, "base_amount", base_amount)?;
    let growth = percent::growth_factor(finite(NAME, "growth_rate_pct", growth_rate_pct)?);
    let discount = discount_base(NAME, "discount_rate_pct", discount_rate_pct)?;
    let n = horizon(NAME, years)?;

    // Equal growth and discount give a ratio of exactly 1
    let ratio = growth / discount;
    let total: f64 = (1..=n).map(|t| base_amount * ratio.powi(t)).sum();

    checked(NAME, total)
}

/// DCF valuation of a profit stream; same series as [`discounted_series`].
pub fn dcf_valuation(
    annual_profit: f64,
    growth_rate_pct: f64,
    discount_rate_pct: f64,
    years: u32,
) -> EngineResult<f64> {
    discounted_series(annual_profit, growth_rate_pct, discount_rate_pct, years)
}

/// Intrinsic value from an initial cash flow; same series as
/// [`discounted_series`].
pub fn intrinsic_value(
    cash_flow: f64,
    growth_rate_pct: f64,
    discount_rate_pct: f64,
    years: u32,
) -> EngineResult<f64> {
    discounted_series(cash_flow, growth_rate_pct, discount_rate_pct, years)
}

/// Price of an annual-coupon bond.
///
/// # Formula
///
/// ```text
/// P = Σ_{t=1}^{n} (F · c) / (1 + d)^t + F / (1 + d)^n
/// ```
///
/// A bond whose coupon rate equals its discount rate prices at par.
///
/// # Arguments
///
/// * `face_value` - Redemption amount
/// * `coupon_rate_pct` - Annual coupon as a percentage of face
/// * `years` - Years to maturity (at least 1)
/// * `discount_rate_pct` - Annual discount rate as a percentage
pub fn bond_price(
    face_value: f64,
    coupon_rate_pct: f64,
    years: u32,
    discount_rate_pct: f64,
) -> EngineResult<f64> {
    const NAME: &str = "bond_price";

    let face_value = finite(NAME, "face_value", face_value)?;
    let coupon_pct = finite(NAME, "coupon_rate_pct", coupon_rate_pct)?;
    let coupon = face_value * percent::to_fraction(coupon_pct);
    let discount = discount_base(NAME, "discount_rate_pct", discount_rate_pct)?;
    let n = horizon(NAME, years)?;

    let coupons: f64 = (1..=n).map(|t| coupon / discount.powi(t)).sum();
    let principal = face_value / discount.powi(n);

    checked(NAME, coupons + principal)
}
