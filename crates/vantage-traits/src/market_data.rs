//! Market data source traits.
//!
//! - [`ExchangeRateSource`]: Spot rate for a currency pair
//! - [`QuoteSource`]: Descriptive quote for an equity ticker
//!
//! Sources are synchronous snapshot providers: one call, one answer.

use serde::{Deserialize, Serialize};

use crate::error::ProviderResult;
use crate::ids::Ticker;
use vantage_core::{Currency, CurrencyPair, ExchangeRate};

/// Source type for market data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceType {
    /// Request/response service
    Snapshot,
    /// File-based (CSV, JSON)
    File,
    /// Fixed value supplied by configuration
    Static,
    /// Source that never has data
    Empty,
}

// =============================================================================
// EXCHANGE RATE SOURCE
// =============================================================================

/// Trait for exchange-rate providers.
pub trait ExchangeRateSource: Send + Sync {
    /// Source type.
    fn source_type(&self) -> SourceType;

    /// Units of `pair.target()` per one unit of `pair.source()`.
    ///
    /// Fails with [`ProviderError::RateUnavailable`](crate::ProviderError::RateUnavailable)
    /// when no rate can be supplied.
    fn get_rate(&self, pair: &CurrencyPair) -> ProviderResult<ExchangeRate>;
}

// =============================================================================
// QUOTE SOURCE
// =============================================================================

/// Descriptive quote for a listed equity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockQuote {
    /// Ticker symbol
    pub symbol: Ticker,
    /// Company display name
    pub name: Option<String>,
    /// Sector classification
    pub sector: Option<String>,
    /// Industry classification
    pub industry: Option<String>,
    /// Currency the price and market cap are quoted in
    pub currency: Currency,
    /// Last price
    pub current_price: Option<f64>,
    /// Market capitalization
    pub market_cap: Option<f64>,
    /// Source of the quote
    pub source: String,
}

impl StockQuote {
    /// Create a quote with only the symbol and currency set.
    pub fn new(symbol: impl Into<Ticker>, currency: Currency) -> Self {
        Self {
            symbol: symbol.into(),
            name: None,
            sector: None,
            industry: None,
            currency,
            current_price: None,
            market_cap: None,
            source: String::new(),
        }
    }

    /// Display name, or a generic heading when the source has none.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Company Info")
    }

    /// Sector, or `N/A`.
    pub fn sector_or_na(&self) -> &str {
        self.sector.as_deref().unwrap_or("N/A")
    }

    /// Industry, or `N/A`.
    pub fn industry_or_na(&self) -> &str {
        self.industry.as_deref().unwrap_or("N/A")
    }

    /// Price, or zero when missing.
    pub fn price_or_zero(&self) -> f64 {
        self.current_price.unwrap_or(0.0)
    }

    /// Market cap, or zero when missing.
    pub fn market_cap_or_zero(&self) -> f64 {
        self.market_cap.unwrap_or(0.0)
    }
}

/// Trait for quote providers.
pub trait QuoteSource: Send + Sync {
    /// Source type.
    fn source_type(&self) -> SourceType;

    /// Look up a ticker.
    ///
    /// Unknown tickers fail with
    /// [`ProviderError::LookupFailure`](crate::ProviderError::LookupFailure).
    fn get_quote(&self, ticker: &Ticker) -> ProviderResult<StockQuote>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fall_back() {
        let quote = StockQuote::new("TCS.NS", Currency::INR);
        assert_eq!(quote.display_name(), "Company Info");
        assert_eq!(quote.sector_or_na(), "N/A");
        assert_eq!(quote.industry_or_na(), "N/A");
        assert_eq!(quote.price_or_zero(), 0.0);
        assert_eq!(quote.market_cap_or_zero(), 0.0);
    }

    #[test]
    fn test_quote_serde() {
        let mut quote = StockQuote::new("aapl", Currency::USD);
        quote.current_price = Some(190.5);
        let json = serde_json::to_string(&quote).unwrap();
        let parsed: StockQuote = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, quote);
        assert_eq!(parsed.symbol.as_str(), "AAPL");
    }
}
