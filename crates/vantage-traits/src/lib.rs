//! # Vantage Traits
//!
//! Trait definitions for the collaborators that feed the valuation engine.
//!
//! This crate contains ONLY trait definitions and the records they exchange.
//! Implementations live in extension crates such as `vantage-ext-file`.
//!
//! ## Module Structure
//!
//! - [`market_data`]: [`ExchangeRateSource`](market_data::ExchangeRateSource)
//!   and [`QuoteSource`](market_data::QuoteSource)
//! - [`ids`]: Ticker identifiers
//! - [`error`]: [`ProviderError`]
//!
//! ## Injection
//!
//! The engine never performs I/O. Callers resolve a rate or a quote through
//! these traits and pass the plain values into the formulas and normalizer.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod ids;
pub mod market_data;

// Re-export commonly used types
pub use error::{ProviderError, ProviderResult};
pub use ids::Ticker;
pub use market_data::{ExchangeRateSource, QuoteSource, SourceType, StockQuote};
