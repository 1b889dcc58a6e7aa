//! Error types for currency normalization.

use thiserror::Error;
use vantage_core::{CoreError, Currency, CurrencyPair};

/// Result type for normalizer operations.
pub type FxResult<T> = Result<T, FxError>;

/// Errors raised by the normalizer.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FxError {
    /// An amount is denominated in a currency outside the active pair.
    #[error("cannot convert {from} amounts with the {pair} rate")]
    CurrencyMismatch {
        /// Currency of the amount.
        from: Currency,
        /// Active pair.
        pair: CurrencyPair,
    },

    /// A core value object rejected its input.
    #[error(transparent)]
    Core(#[from] CoreError),
}
