//! # Vantage Core
//!
//! Core types shared by the Vantage valuation and conversion toolkit.
//!
//! - **Currencies**: [`Currency`] codes and symbols, a [`CurrencyPair`], and the
//!   [`CurrencySelection`] that picks which side of the pair is displayed
//! - **Rates**: [`ExchangeRate`], a validated positive conversion factor
//! - **Percentages**: the single whole-number percentage convention used by
//!   every formula (see [`percent`])
//!
//! ## Example
//!
//! ```rust
//! use vantage_core::prelude::*;
//!
//! let pair = CurrencyPair::usd_inr();
//! let rate = ExchangeRate::new(83.0).unwrap();
//!
//! assert_eq!(pair.display_currency(CurrencySelection::Target), Currency::INR);
//! assert_eq!(rate.value(), 83.0);
//! assert_eq!(percent::to_fraction(5.0), 0.05);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod percent;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::percent;
    pub use crate::types::{Currency, CurrencyPair, CurrencySelection, ExchangeRate};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Currency, CurrencyPair, CurrencySelection, ExchangeRate};
