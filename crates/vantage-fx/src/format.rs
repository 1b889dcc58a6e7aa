//! Display formatting for amounts, percentages and scores.

use rust_decimal::{Decimal, RoundingStrategy};
use vantage_core::{Currency, CurrencyPair, CurrencySelection};

/// Formats an amount in the currency chosen from the default USD/INR pair.
///
/// Output follows `SYMBOL#,##0.00`.
///
/// ```rust
/// use vantage_core::CurrencySelection;
/// use vantage_fx::format_amount;
///
/// assert_eq!(format_amount(1234.5, CurrencySelection::Source), "$1,234.50");
/// assert_eq!(format_amount(1234.5, CurrencySelection::Target), "₹1,234.50");
/// ```
pub fn format_amount(amount: f64, selection: CurrencySelection) -> String {
    format_amount_in(amount, CurrencyPair::usd_inr().display_currency(selection))
}

/// Formats an amount with the symbol of `currency`, thousands separators and
/// exactly two decimals. Negative amounts put the sign before the symbol.
pub fn format_amount_in(amount: f64, currency: Currency) -> String {
    let (negative, digits) = two_decimals(amount);
    let sign = if negative { "-" } else { "" };
    format!("{}{}{}", sign, currency.symbol(), add_thousands_separator(&digits))
}

/// Formats a whole-number percentage with two decimals (`6.80%`).
pub fn format_percent(value: f64) -> String {
    let (negative, digits) = two_decimals(value);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{digits}%")
}

/// Formats a unitless score with two decimals.
pub fn format_score(value: f64) -> String {
    let (negative, digits) = two_decimals(value);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{digits}")
}

/// Rounds half away from zero to two places and returns the sign and the
/// unsigned digits.
///
/// Rounding goes through `Decimal`, parsed from the shortest round-trip
/// representation, so that `1.005` rounds to `1.01` as written rather than by
/// its binary approximation.
fn two_decimals(value: f64) -> (bool, String) {
    match value.to_string().parse::<Decimal>() {
        Ok(d) => {
            let rounded = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            let negative = rounded.is_sign_negative() && !rounded.is_zero();
            (negative, format!("{:.2}", rounded.abs()))
        }
        // Outside Decimal's range
        Err(_) => {
            let negative = value < 0.0;
            (negative, format!("{:.2}", value.abs()))
        }
    }
}

/// Add thousands separators to a number string.
fn add_thousands_separator(s: &str) -> String {
    let (integer_part, decimal_part) = match s.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (s, None),
    };

    let chars: Vec<char> = integer_part.chars().rev().collect();
    let formatted: String = chars
        .chunks(3)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<String>>()
        .join(",")
        .chars()
        .rev()
        .collect();

    match decimal_part {
        Some(dec) => format!("{}.{}", formatted, dec),
        None => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_usd() {
        assert_eq!(format_amount(1234.5, CurrencySelection::Source), "$1,234.50");
    }

    #[test]
    fn test_format_amount_inr() {
        assert_eq!(format_amount(8300.0, CurrencySelection::Target), "₹8,300.00");
    }

    #[test]
    fn test_small_and_large_amounts() {
        assert_eq!(format_amount_in(0.0, Currency::USD), "$0.00");
        assert_eq!(format_amount_in(999.999, Currency::USD), "$1,000.00");
        assert_eq!(format_amount_in(1_234_567.891, Currency::USD), "$1,234,567.89");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(format_amount_in(-1234.5, Currency::USD), "-$1,234.50");
    }

    #[test]
    fn test_negative_rounding_to_zero_has_no_sign() {
        assert_eq!(format_amount_in(-0.001, Currency::USD), "$0.00");
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        assert_eq!(format_amount_in(1.005, Currency::USD), "$1.01");
        assert_eq!(format_amount_in(-1.005, Currency::USD), "-$1.01");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(6.796_116_504_854_366), "6.80%");
        assert_eq!(format_percent(-1.0), "-1.00%");
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(9.625), "9.63");
    }

    #[test]
    fn test_add_thousands_separator() {
        assert_eq!(add_thousands_separator("1234567.89"), "1,234,567.89");
        assert_eq!(add_thousands_separator("100"), "100");
        assert_eq!(add_thousands_separator("1000"), "1,000");
    }

    #[test]
    fn test_huge_value_falls_back_to_float_formatting() {
        let formatted = format_amount_in(1e30, Currency::USD);
        assert!(formatted.starts_with("$1,000,000"));
        assert!(formatted.ends_with(".00"));
    }
}
