//! File-based market data sources.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use dashmap::DashMap;
use serde::Deserialize;
use tracing::{debug, warn};

use vantage_core::{Currency, CurrencyPair, ExchangeRate};
use vantage_traits::error::{ProviderError, ProviderResult};
use vantage_traits::ids::Ticker;
use vantage_traits::market_data::*;

// =============================================================================
// CSV QUOTE SOURCE
// =============================================================================

/// CSV record for quotes.
#[derive(Debug, Deserialize)]
struct QuoteRecord {
    symbol: String,
    name: Option<String>,
    sector: Option<String>,
    industry: Option<String>,
    currency: String,
    current_price: Option<f64>,
    market_cap: Option<f64>,
}

/// CSV-based quote source.
///
/// Columns: `symbol,name,sector,industry,currency,current_price,market_cap`.
/// A missing file is treated as an empty source.
pub struct CsvQuoteSource {
    file_path: PathBuf,
    quotes: DashMap<Ticker, StockQuote>,
}

impl CsvQuoteSource {
    /// Create a new CSV quote source.
    pub fn new(file_path: impl AsRef<Path>) -> ProviderResult<Self> {
        let source = Self {
            file_path: file_path.as_ref().to_path_buf(),
            quotes: DashMap::new(),
        };
        source.reload()?;
        Ok(source)
    }

    /// Reload quotes from file.
    pub fn reload(&self) -> ProviderResult<()> {
        if !self.file_path.exists() {
            return Ok(()); // Empty source
        }

        let location = self.file_path.display().to_string();
        let mut reader = csv::Reader::from_path(&self.file_path)
            .map_err(|e| ProviderError::load_failed(&location, e.to_string()))?;

        let mut loaded = Vec::new();
        for result in reader.deserialize() {
            let record: QuoteRecord =
                result.map_err(|e| ProviderError::load_failed(&location, e.to_string()))?;

            let currency = record.currency.parse::<Currency>().map_err(|e| {
                ProviderError::load_failed(&location, format!("{}: {}", record.symbol, e))
            })?;

            let quote = StockQuote {
                symbol: Ticker::new(&record.symbol),
                name: record.name.filter(|s| !s.is_empty()),
                sector: record.sector.filter(|s| !s.is_empty()),
                industry: record.industry.filter(|s| !s.is_empty()),
                currency,
                current_price: record.current_price,
                market_cap: record.market_cap,
                source: "file".to_string(),
            };

            loaded.push(quote);
        }

        self.quotes.clear();
        for quote in loaded {
            self.quotes.insert(quote.symbol.clone(), quote);
        }

        debug!(path = %location, quotes = self.quotes.len(), "quotes loaded");
        Ok(())
    }

    /// Number of loaded quotes.
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Returns true if no quotes are loaded.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

impl QuoteSource for CsvQuoteSource {
    fn source_type(&self) -> SourceType {
        SourceType::File
    }

    fn get_quote(&self, ticker: &Ticker) -> ProviderResult<StockQuote> {
        if ticker.is_empty() {
            return Err(ProviderError::lookup("", "empty ticker"));
        }
        self.quotes
            .get(ticker)
            .map(|q| q.clone())
            .ok_or_else(|| ProviderError::lookup(ticker.as_str(), "no quote for ticker"))
    }
}

// =============================================================================
// JSON RATE SNAPSHOT SOURCE
// =============================================================================

/// Rates snapshot in the shape served by public "latest rates" endpoints:
/// `{"base": "USD", "rates": {"INR": 83.2, "EUR": 0.92}}`.
#[derive(Debug, Deserialize)]
struct RateSnapshot {
    base: String,
    rates: HashMap<String, f64>,
}

/// JSON snapshot exchange-rate source.
///
/// Rates are stored relative to the snapshot base, so any pair of listed
/// currencies can be answered by triangulating through the base.
pub struct JsonRateSource {
    file_path: PathBuf,
    per_base: DashMap<Currency, f64>,
}

impl JsonRateSource {
    /// Create a new JSON rate source.
    pub fn new(file_path: impl AsRef<Path>) -> ProviderResult<Self> {
        let source = Self {
            file_path: file_path.as_ref().to_path_buf(),
            per_base: DashMap::new(),
        };
        source.reload()?;
        Ok(source)
    }

    /// Reload rates from file.
    pub fn reload(&self) -> ProviderResult<()> {
        if !self.file_path.exists() {
            return Ok(()); // Empty source
        }

        let location = self.file_path.display().to_string();
        let content = std::fs::read_to_string(&self.file_path)
            .map_err(|e| ProviderError::load_failed(&location, e.to_string()))?;
        let snapshot: RateSnapshot = serde_json::from_str(&content)
            .map_err(|e| ProviderError::load_failed(&location, e.to_string()))?;

        let base = snapshot
            .base
            .parse::<Currency>()
            .map_err(|e| ProviderError::load_failed(&location, e.to_string()))?;

        self.per_base.clear();
        self.per_base.insert(base, 1.0);
        for (code, value) in snapshot.rates {
            match Currency::from_code(&code) {
                Some(currency) if value.is_finite() && value > 0.0 => {
                    self.per_base.insert(currency, value);
                }
                Some(_) => {
                    warn!(path = %location, code = %code, value, "ignoring non-positive rate")
                }
                // Codes outside the supported set are skipped
                None => {}
            }
        }

        debug!(path = %location, base = %base, currencies = self.per_base.len(), "rates loaded");
        Ok(())
    }

    fn units_per_base(&self, currency: Currency, pair: &CurrencyPair) -> ProviderResult<f64> {
        self.per_base
            .get(&currency)
            .map(|v| *v)
            .ok_or_else(|| ProviderError::rate_unavailable(pair, format!("no rate for {currency}")))
    }
}

impl ExchangeRateSource for JsonRateSource {
    fn source_type(&self) -> SourceType {
        SourceType::File
    }

    fn get_rate(&self, pair: &CurrencyPair) -> ProviderResult<ExchangeRate> {
        let source = self.units_per_base(pair.source(), pair)?;
        let target = self.units_per_base(pair.target(), pair)?;
        ExchangeRate::new(target / source)
            .map_err(|e| ProviderError::rate_unavailable(pair, e.to_string()))
    }
}

// =============================================================================
// STATIC AND EMPTY SOURCES
// =============================================================================

/// Source that always answers with one configured rate.
pub struct FixedRateSource {
    pair: CurrencyPair,
    rate: ExchangeRate,
}

impl FixedRateSource {
    /// Create a fixed rate source for `pair`.
    pub fn new(pair: CurrencyPair, rate: ExchangeRate) -> Self {
        Self { pair, rate }
    }
}

impl ExchangeRateSource for FixedRateSource {
    fn source_type(&self) -> SourceType {
        SourceType::Static
    }

    fn get_rate(&self, pair: &CurrencyPair) -> ProviderResult<ExchangeRate> {
        if *pair == self.pair {
            Ok(self.rate)
        } else if pair.source() == self.pair.target() && pair.target() == self.pair.source() {
            Ok(self.rate.inverse())
        } else {
            Err(ProviderError::rate_unavailable(
                pair,
                format!("only {} is configured", self.pair),
            ))
        }
    }
}

/// Empty exchange-rate source.
pub struct EmptyRateSource;

impl ExchangeRateSource for EmptyRateSource {
    fn source_type(&self) -> SourceType {
        SourceType::Empty
    }

    fn get_rate(&self, pair: &CurrencyPair) -> ProviderResult<ExchangeRate> {
        Err(ProviderError::rate_unavailable(pair, "no rate source configured"))
    }
}

/// Empty quote source.
pub struct EmptyQuoteSource;

impl QuoteSource for EmptyQuoteSource {
    fn source_type(&self) -> SourceType {
        SourceType::Empty
    }

    fn get_quote(&self, ticker: &Ticker) -> ProviderResult<StockQuote> {
        Err(ProviderError::lookup(ticker.as_str(), "no quote source configured"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    const QUOTES: &str = "\
symbol,name,sector,industry,currency,current_price,market_cap
RELIANCE.NS,Reliance Industries Limited,Energy,Oil & Gas Refining & Marketing,INR,2950.5,19960000000000
AAPL,Apple Inc.,Technology,Consumer Electronics,USD,190.25,2950000000000
BARE.NS,,,,INR,,
";

    #[test]
    fn test_csv_quote_lookup() {
        let file = write_temp(QUOTES);
        let source = CsvQuoteSource::new(file.path()).unwrap();
        assert_eq!(source.len(), 3);

        let quote = source.get_quote(&Ticker::new("reliance.ns")).unwrap();
        assert_eq!(quote.display_name(), "Reliance Industries Limited");
        assert_eq!(quote.currency, Currency::INR);
        assert_eq!(quote.current_price, Some(2950.5));
        assert_eq!(quote.source, "file");
    }

    #[test]
    fn test_csv_blank_fields_are_none() {
        let file = write_temp(QUOTES);
        let source = CsvQuoteSource::new(file.path()).unwrap();
        let quote = source.get_quote(&Ticker::new("BARE.NS")).unwrap();
        assert_eq!(quote.name, None);
        assert_eq!(quote.sector_or_na(), "N/A");
        assert_eq!(quote.current_price, None);
    }

    #[test]
    fn test_csv_unknown_ticker_is_lookup_failure() {
        let file = write_temp(QUOTES);
        let source = CsvQuoteSource::new(file.path()).unwrap();
        let err = source.get_quote(&Ticker::new("NOPE")).unwrap_err();
        assert!(matches!(err, ProviderError::LookupFailure { .. }));
    }

    #[test]
    fn test_csv_missing_file_is_empty() {
        let source = CsvQuoteSource::new("/nonexistent/quotes.csv").unwrap();
        assert!(source.is_empty());
        assert!(source.get_quote(&Ticker::new("AAPL")).is_err());
    }

    #[test]
    fn test_csv_bad_currency_fails_to_load() {
        let file = write_temp(
            "symbol,name,sector,industry,currency,current_price,market_cap\nX,,,,ZZZ,1,1\n",
        );
        let err = CsvQuoteSource::new(file.path()).err().unwrap();
        assert!(matches!(err, ProviderError::LoadFailed { .. }));
    }

    #[test]
    fn test_csv_failed_reload_keeps_previous_quotes() {
        let file = write_temp(QUOTES);
        let source = CsvQuoteSource::new(file.path()).unwrap();
        assert_eq!(source.len(), 3);

        // First row is valid, second is not
        std::fs::write(
            file.path(),
            "symbol,name,sector,industry,currency,current_price,market_cap\n\
             TCS.NS,Tata Consultancy Services,,,INR,3900,\n\
             X,,,,ZZZ,1,1\n",
        )
        .unwrap();

        let err = source.reload().unwrap_err();
        assert!(matches!(err, ProviderError::LoadFailed { .. }));
        assert_eq!(source.len(), 3);
        assert!(source.get_quote(&Ticker::new("AAPL")).is_ok());
        assert!(source.get_quote(&Ticker::new("TCS.NS")).is_err());
    }

    #[test]
    fn test_json_rate_direct() {
        let file = write_temp(r#"{"base":"USD","rates":{"INR":83.5,"EUR":0.9,"AED":3.67}}"#);
        let source = JsonRateSource::new(file.path()).unwrap();
        let rate = source.get_rate(&CurrencyPair::usd_inr()).unwrap();
        assert_eq!(rate.value(), 83.5);
    }

    #[test]
    fn test_json_rate_triangulated() {
        let file = write_temp(r#"{"base":"USD","rates":{"INR":83.5,"EUR":0.9}}"#);
        let source = JsonRateSource::new(file.path()).unwrap();
        let pair = CurrencyPair::new(Currency::EUR, Currency::INR).unwrap();
        let rate = source.get_rate(&pair).unwrap();
        assert_relative_eq!(rate.value(), 83.5 / 0.9, max_relative = 1e-12);
    }

    #[test]
    fn test_json_rate_missing_currency() {
        let file = write_temp(r#"{"base":"USD","rates":{"EUR":0.9}}"#);
        let source = JsonRateSource::new(file.path()).unwrap();
        let err = source.get_rate(&CurrencyPair::usd_inr()).unwrap_err();
        assert!(matches!(err, ProviderError::RateUnavailable { .. }));
    }

    #[test]
    fn test_json_rate_ignores_non_positive() {
        let file = write_temp(r#"{"base":"USD","rates":{"INR":0.0}}"#);
        let source = JsonRateSource::new(file.path()).unwrap();
        assert!(source.get_rate(&CurrencyPair::usd_inr()).is_err());
    }

    #[test]
    fn test_json_rate_malformed_file() {
        let file = write_temp("not json");
        assert!(matches!(
            JsonRateSource::new(file.path()),
            Err(ProviderError::LoadFailed { .. })
        ));
    }

    #[test]
    fn test_fixed_rate_source_and_inverse() {
        let rate = ExchangeRate::new(80.0).unwrap();
        let source = FixedRateSource::new(CurrencyPair::usd_inr(), rate);
        assert_eq!(source.get_rate(&CurrencyPair::usd_inr()).unwrap().value(), 80.0);

        let inverse = CurrencyPair::new(Currency::INR, Currency::USD).unwrap();
        assert_relative_eq!(source.get_rate(&inverse).unwrap().value(), 0.0125);

        let other = CurrencyPair::new(Currency::EUR, Currency::USD).unwrap();
        assert!(source.get_rate(&other).is_err());
    }

    #[test]
    fn test_empty_sources() {
        assert!(EmptyRateSource.get_rate(&CurrencyPair::usd_inr()).is_err());
        assert!(matches!(
            EmptyQuoteSource.get_quote(&Ticker::new("AAPL")),
            Err(ProviderError::LookupFailure { .. })
        ));
    }
}
