//! Error types for the core value objects.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while constructing core value objects.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Exchange rate is zero, negative, or not finite.
    #[error("Invalid exchange rate: {value} - {reason}")]
    InvalidRate {
        /// The rejected rate.
        value: f64,
        /// Reason for invalidity.
        reason: String,
    },

    /// Currency code is not recognised.
    #[error("Unknown currency code: {code}")]
    UnknownCurrency {
        /// The code that failed to parse.
        code: String,
    },

    /// Currency selection string is not recognised.
    #[error("Unknown currency selection: {value}. Use 'source' or 'target'.")]
    UnknownSelection {
        /// The value that failed to parse.
        value: String,
    },

    /// A currency pair was built from the same currency on both sides.
    #[error("Currency pair must use two different currencies, got {currency}/{currency}")]
    DegeneratePair {
        /// The repeated currency code.
        currency: String,
    },
}

impl CoreError {
    /// Creates an invalid rate error.
    #[must_use]
    pub fn invalid_rate(value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidRate {
            value,
            reason: reason.into(),
        }
    }

    /// Creates an unknown currency error.
    #[must_use]
    pub fn unknown_currency(code: impl Into<String>) -> Self {
        Self::UnknownCurrency { code: code.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_rate(-1.0, "must be positive");
        assert!(err.to_string().contains("Invalid exchange rate"));
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn test_unknown_currency_display() {
        let err = CoreError::unknown_currency("XYZ");
        assert_eq!(err.to_string(), "Unknown currency code: XYZ");
    }
}
