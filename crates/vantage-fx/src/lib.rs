//! # Vantage FX
//!
//! The currency normalizer: converts source-currency amounts for display and
//! formats them as `SYMBOL#,##0.00`.
//!
//! - [`convert`] / [`convert_from`]: apply an exchange rate to an amount
//! - [`format_amount`], [`format_percent`]: display strings
//! - [`Normalizer`]: pair + selection + rate, rendering [`FormulaResult`]s
//!   so that only amounts are ever converted
//! - [`resolve_rate`]: ask a rate source, falling back to a constant
//!
//! [`FormulaResult`]: vantage_formulas::FormulaResult

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod convert;
pub mod error;
pub mod format;
pub mod normalizer;
pub mod resolve;

pub use convert::{convert, convert_from};
pub use error::{FxError, FxResult};
pub use format::{format_amount, format_amount_in, format_percent, format_score};
pub use normalizer::Normalizer;
pub use resolve::{resolve_rate, RateOrigin, RateResolution};
