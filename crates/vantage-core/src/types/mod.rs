//! Domain types for valuation and currency display.
//!
//! - [`Currency`]: ISO currency codes and display symbols
//! - [`CurrencyPair`]: Source/target pair used for conversion
//! - [`CurrencySelection`]: Which side of the pair to display
//! - [`ExchangeRate`]: Validated conversion factor

mod currency;
mod rate;
mod selection;

pub use currency::Currency;
pub use rate::ExchangeRate;
pub use selection::{CurrencyPair, CurrencySelection};
