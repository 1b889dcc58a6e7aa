//! Amount conversion between the two sides of a currency pair.
//!
//! Only monetary amounts pass through here. Percentages and ratios are
//! currency-invariant and must never be multiplied by a rate.

use vantage_core::{Currency, CurrencyPair, CurrencySelection, ExchangeRate};

use crate::error::{FxError, FxResult};

/// Converts a source-currency amount for display.
///
/// Returns `amount` unchanged for [`CurrencySelection::Source`], otherwise
/// `amount × rate`.
///
/// # Example
///
/// ```rust
/// use vantage_core::{CurrencySelection, ExchangeRate};
/// use vantage_fx::convert;
///
/// let rate = ExchangeRate::new(83.0).unwrap();
/// assert_eq!(convert(100.0, CurrencySelection::Target, rate), 8300.0);
/// assert_eq!(convert(100.0, CurrencySelection::Source, rate), 100.0);
/// ```
#[must_use]
pub fn convert(amount: f64, selection: CurrencySelection, rate: ExchangeRate) -> f64 {
    match selection {
        CurrencySelection::Source => amount,
        CurrencySelection::Target => amount * rate.value(),
    }
}

/// Converts an amount quoted in `from` into the selected display currency.
///
/// Quote prices can be native to either side of the pair: a target-currency
/// price shown in the source currency is divided by the rate.
pub fn convert_from(
    amount: f64,
    from: Currency,
    pair: CurrencyPair,
    selection: CurrencySelection,
    rate: ExchangeRate,
) -> FxResult<f64> {
    let display = pair.display_currency(selection);
    if from == display {
        return Ok(amount);
    }
    if from == pair.source() {
        Ok(amount * rate.value())
    } else if from == pair.target() {
        Ok(amount / rate.value())
    } else {
        Err(FxError::CurrencyMismatch { from, pair })
    }
}
