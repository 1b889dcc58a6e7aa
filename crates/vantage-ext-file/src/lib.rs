//! # Vantage Ext File
//!
//! File-based exchange rates and quotes for the Vantage toolkit.
//!
//! This crate provides offline implementations of the provider traits:
//! - JSON rate snapshot source (`{"base": "USD", "rates": {...}}`)
//! - CSV-based quote source
//! - Fixed and empty sources for configuration-only use
//!
//! A file that does not exist loads as an empty source; a file that exists
//! but cannot be parsed is an error.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod market_data;

pub use market_data::*;

use std::path::Path;

use vantage_core::{CurrencyPair, ExchangeRate};
use vantage_traits::error::ProviderResult;
use vantage_traits::market_data::{ExchangeRateSource, QuoteSource};

/// Picks the rate source for a run.
///
/// An explicit rate wins over a rates file; with neither, the empty source
/// is returned and callers fall back.
pub fn create_rate_source(
    pair: CurrencyPair,
    rate: Option<ExchangeRate>,
    rates_json: Option<&Path>,
) -> ProviderResult<Box<dyn ExchangeRateSource>> {
    if let Some(rate) = rate {
        return Ok(Box::new(FixedRateSource::new(pair, rate)));
    }
    match rates_json {
        Some(path) => Ok(Box::new(JsonRateSource::new(path)?)),
        None => Ok(Box::new(EmptyRateSource)),
    }
}

/// Picks the quote source for a run.
pub fn create_quote_source(quotes_csv: Option<&Path>) -> ProviderResult<Box<dyn QuoteSource>> {
    match quotes_csv {
        Some(path) => Ok(Box::new(CsvQuoteSource::new(path)?)),
        None => Ok(Box::new(EmptyQuoteSource)),
    }
}
