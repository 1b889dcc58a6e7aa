//! Error types for provider operations.

use thiserror::Error;

/// Result type for provider calls.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Common error type for provider operations.
///
/// Lookup and rate failures are recoverable: callers render a message or
/// fall back, they never abort.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// The quote source could not resolve the identifier, or failed.
    #[error("lookup failed for {symbol}: {reason}")]
    LookupFailure {
        /// Requested ticker.
        symbol: String,
        /// What went wrong.
        reason: String,
    },

    /// The exchange-rate source could not supply a rate.
    #[error("exchange rate unavailable for {pair}: {reason}")]
    RateUnavailable {
        /// Requested pair, e.g. `USD/INR`.
        pair: String,
        /// What went wrong.
        reason: String,
    },

    /// A source could not load its backing data.
    #[error("failed to load {location}: {reason}")]
    LoadFailed {
        /// File path or endpoint.
        location: String,
        /// What went wrong.
        reason: String,
    },
}

impl ProviderError {
    /// Creates a lookup failure.
    pub fn lookup(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::LookupFailure {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }

    /// Creates a rate-unavailable error.
    pub fn rate_unavailable(pair: impl ToString, reason: impl Into<String>) -> Self {
        Self::RateUnavailable {
            pair: pair.to_string(),
            reason: reason.into(),
        }
    }

    /// Creates a load failure.
    pub fn load_failed(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::LoadFailed {
            location: location.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_display() {
        let err = ProviderError::lookup("NOPE.NS", "not found");
        assert_eq!(err.to_string(), "lookup failed for NOPE.NS: not found");
    }

    #[test]
    fn test_rate_display() {
        let err = ProviderError::rate_unavailable("USD/INR", "connection refused");
        assert!(err.to_string().contains("USD/INR"));
    }
}
