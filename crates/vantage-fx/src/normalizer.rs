//! The normalizer: pair, selection and rate bundled for rendering results.

use serde::{Deserialize, Serialize};
use vantage_core::{Currency, CurrencyPair, CurrencySelection, ExchangeRate};
use vantage_formulas::{FormulaResult, ResultKind};

use crate::convert::{convert, convert_from};
use crate::error::FxResult;
use crate::format::{format_amount_in, format_percent, format_score};

/// Display settings for one interaction.
///
/// Passed explicitly to whatever renders results; there is no global
/// currency selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normalizer {
    pair: CurrencyPair,
    selection: CurrencySelection,
    rate: ExchangeRate,
}

impl Normalizer {
    /// Creates a normalizer.
    pub fn new(pair: CurrencyPair, selection: CurrencySelection, rate: ExchangeRate) -> Self {
        Self {
            pair,
            selection,
            rate,
        }
    }

    /// Creates a normalizer from an unvalidated rate.
    pub fn try_new(pair: CurrencyPair, selection: CurrencySelection, rate: f64) -> FxResult<Self> {
        Ok(Self::new(pair, selection, ExchangeRate::new(rate)?))
    }

    /// USD/INR normalizer.
    pub fn usd_inr(selection: CurrencySelection, rate: ExchangeRate) -> Self {
        Self::new(CurrencyPair::usd_inr(), selection, rate)
    }

    /// Active pair.
    pub fn pair(&self) -> CurrencyPair {
        self.pair
    }

    /// Active selection.
    pub fn selection(&self) -> CurrencySelection {
        self.selection
    }

    /// Active rate.
    pub fn rate(&self) -> ExchangeRate {
        self.rate
    }

    /// Currency results are displayed in.
    pub fn display_currency(&self) -> Currency {
        self.pair.display_currency(self.selection)
    }

    /// Converts a source-currency amount into the display currency.
    pub fn convert(&self, amount: f64) -> f64 {
        convert(amount, self.selection, self.rate)
    }

    /// Converts an amount quoted in `from` into the display currency.
    pub fn convert_from(&self, amount: f64, from: Currency) -> FxResult<f64> {
        convert_from(amount, from, self.pair, self.selection, self.rate)
    }

    /// Formats an amount already expressed in the display currency.
    pub fn format_amount(&self, amount: f64) -> String {
        format_amount_in(amount, self.display_currency())
    }

    /// Converts then formats a source-currency amount.
    pub fn display_amount(&self, amount: f64) -> String {
        self.format_amount(self.convert(amount))
    }

    /// Converts then formats an amount quoted in `from`.
    pub fn display_amount_from(&self, amount: f64, from: Currency) -> FxResult<String> {
        Ok(self.format_amount(self.convert_from(amount, from)?))
    }

    /// Display value of a formula result.
    ///
    /// Amounts are converted; percentages and scores are shown as computed.
    pub fn render(&self, result: &FormulaResult) -> String {
        match result.kind {
            ResultKind::Amount => self.display_amount(result.value),
            ResultKind::Percent => format_percent(result.value),
            ResultKind::Score => format_score(result.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_formulas::{evaluate, Formula, FormulaRequest};

    fn target() -> Normalizer {
        Normalizer::usd_inr(CurrencySelection::Target, ExchangeRate::new(83.0).unwrap())
    }

    #[test]
    fn test_display_currency() {
        assert_eq!(target().display_currency(), Currency::INR);
        let source = Normalizer::usd_inr(CurrencySelection::Source, ExchangeRate::USD_INR_FALLBACK);
        assert_eq!(source.display_currency(), Currency::USD);
    }

    #[test]
    fn test_amount_result_is_converted() {
        let result = evaluate(&FormulaRequest::Roic {
            nopat: 100.0,
            invested_capital: 1000.0,
        })
        .unwrap();
        // ROIC is a percentage and must not be scaled by the rate
        assert_eq!(target().render(&result), "10.00%");

        let bond = evaluate(&FormulaRequest::Bonds {
            face: 1000.0,
            coupon_pct: 5.0,
            years: 10,
            discount_pct: 5.0,
        })
        .unwrap();
        assert_eq!(target().render(&bond), "₹83,000.00");
    }

    #[test]
    fn test_score_rendering() {
        let result = evaluate(&FormulaRequest::with_defaults(Formula::RiskAversion)).unwrap();
        assert_eq!(target().render(&result), "9.63");
    }

    #[test]
    fn test_try_new_rejects_bad_rate() {
        let pair = CurrencyPair::usd_inr();
        assert!(Normalizer::try_new(pair, CurrencySelection::Target, 0.0).is_err());
        let n = Normalizer::try_new(pair, CurrencySelection::Target, 83.5).unwrap();
        assert_eq!(n.convert(2.0), 167.0);
    }

    #[test]
    fn test_display_amount_source() {
        let source = Normalizer::usd_inr(CurrencySelection::Source, ExchangeRate::USD_INR_FALLBACK);
        assert_eq!(source.display_amount(1234.5), "$1,234.50");
    }

    #[test]
    fn test_display_amount_from_native_inr() {
        let display = target().display_amount_from(2950.0, Currency::INR).unwrap();
        assert_eq!(display, "₹2,950.00");
    }
}
