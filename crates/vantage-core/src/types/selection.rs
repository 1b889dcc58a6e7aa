//! Currency pair and display selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Currency;
use crate::error::{CoreError, CoreResult};

/// Which side of a [`CurrencyPair`] results are displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CurrencySelection {
    /// The currency the formula inputs are denominated in.
    #[default]
    Source,
    /// The currency reached by applying the exchange rate.
    Target,
}

impl CurrencySelection {
    /// Returns the lowercase identifier.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Target => "target",
        }
    }
}

impl fmt::Display for CurrencySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencySelection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "source" | "src" => Ok(Self::Source),
            "target" | "tgt" => Ok(Self::Target),
            other => Err(CoreError::UnknownSelection {
                value: other.to_string(),
            }),
        }
    }
}

/// An ordered pair of currencies: amounts are entered in `source` and
/// optionally displayed in `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PairFields")]
pub struct CurrencyPair {
    source: Currency,
    target: Currency,
}

/// Unchecked wire form of a [`CurrencyPair`].
#[derive(Deserialize)]
struct PairFields {
    source: Currency,
    target: Currency,
}

impl TryFrom<PairFields> for CurrencyPair {
    type Error = CoreError;

    fn try_from(fields: PairFields) -> Result<Self, Self::Error> {
        Self::new(fields.source, fields.target)
    }
}

impl CurrencyPair {
    /// Creates a pair, rejecting a pair with the same currency on both sides.
    pub fn new(source: Currency, target: Currency) -> CoreResult<Self> {
        if source == target {
            return Err(CoreError::DegeneratePair {
                currency: source.code().to_string(),
            });
        }
        Ok(Self { source, target })
    }

    /// The USD/INR pair used by default.
    #[must_use]
    pub const fn usd_inr() -> Self {
        Self {
            source: Currency::USD,
            target: Currency::INR,
        }
    }

    /// Source currency.
    #[must_use]
    pub fn source(&self) -> Currency {
        self.source
    }

    /// Target currency.
    #[must_use]
    pub fn target(&self) -> Currency {
        self.target
    }

    /// The currency shown for a given selection.
    #[must_use]
    pub fn display_currency(&self, selection: CurrencySelection) -> Currency {
        match selection {
            CurrencySelection::Source => self.source,
            CurrencySelection::Target => self.target,
        }
    }
}

impl Default for CurrencyPair {
    fn default() -> Self {
        Self::usd_inr()
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_parse() {
        assert_eq!("source".parse(), Ok(CurrencySelection::Source));
        assert_eq!("TARGET".parse(), Ok(CurrencySelection::Target));
        assert!("usd".parse::<CurrencySelection>().is_err());
    }

    #[test]
    fn test_selection_default_is_source() {
        assert_eq!(CurrencySelection::default(), CurrencySelection::Source);
    }

    #[test]
    fn test_pair_display_currency() {
        let pair = CurrencyPair::usd_inr();
        assert_eq!(pair.display_currency(CurrencySelection::Source), Currency::USD);
        assert_eq!(pair.display_currency(CurrencySelection::Target), Currency::INR);
        assert_eq!(pair.to_string(), "USD/INR");
    }

    #[test]
    fn test_degenerate_pair_rejected() {
        assert!(CurrencyPair::new(Currency::USD, Currency::USD).is_err());
        assert!(CurrencyPair::new(Currency::EUR, Currency::GBP).is_ok());
    }

    #[test]
    fn test_pair_serde_rejects_degenerate() {
        let pair: CurrencyPair =
            serde_json::from_str(r#"{"source":"EUR","target":"GBP"}"#).unwrap();
        assert_eq!(pair, CurrencyPair::new(Currency::EUR, Currency::GBP).unwrap());
        assert!(
            serde_json::from_str::<CurrencyPair>(r#"{"source":"USD","target":"USD"}"#).is_err()
        );
    }

    #[test]
    fn test_selection_serde() {
        let json = serde_json::to_string(&CurrencySelection::Target).unwrap();
        assert_eq!(json, "\"target\"");
    }
}
