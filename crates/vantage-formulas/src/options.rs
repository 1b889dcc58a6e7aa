//! Put-call parity for European options with annual discrete discounting.

use crate::error::EngineResult;
use crate::guard::{checked, discount_base, finite, horizon};

/// Present value of the strike, `K / (1 + r)^T`.
fn discounted_strike(
    name: &'static str,
    strike: f64,
    rate_pct: f64,
    years: u32,
) -> EngineResult<f64> {
    let strike = finite(name, "strike", strike)?;
    let base = discount_base(name, "rate_pct", rate_pct)?;
    let n = horizon(name, years)?;
    Ok(strike / base.powi(n))
}

/// Put price implied by a call price.
///
/// ```text
/// P = C + K / (1 + r)^T - S
/// ```
///
/// # Errors
///
/// Fails with a domain error when `rate_pct` is -100%.
pub fn put_call_parity_put(
    call_price: f64,
    strike: f64,
    stock_price: f64,
    rate_pct: f64,
    years: u32,
) -> EngineResult<f64> {
    const NAME: &str = "put_call_parity_put";

    let call = finite(NAME, "call_price", call_price)?;
    let stock = finite(NAME, "stock_price", stock_price)?;
    let pv_strike = discounted_strike(NAME, strike, rate_pct, years)?;

    checked(NAME, call + pv_strike - stock)
}

/// Call price implied by a put price; the inverse of [`put_call_parity_put`].
///
/// ```text
/// C = P - K / (1 + r)^T + S
/// ```
pub fn put_call_parity_call(
    put_price: f64,
    strike: f64,
    stock_price: f64,
    rate_pct: f64,
    years: u32,
) -> EngineResult<f64> {
    const NAME: &str = "put_call_parity_call";

    let put = finite(NAME, "put_price", put_price)?;
    let stock = finite(NAME, "stock_price", stock_price)?;
    let pv_strike = discounted_strike(NAME, strike, rate_pct, years)?;

    checked(NAME, put - pv_strike + stock)
}
