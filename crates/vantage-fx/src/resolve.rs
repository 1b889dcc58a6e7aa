//! Exchange-rate resolution with a documented fallback.
//!
//! A failing rate source never reaches the user: the fallback constant is
//! substituted and the degradation is logged at `warn`.

use serde::Serialize;
use tracing::{debug, warn};
use vantage_core::{CurrencyPair, ExchangeRate};
use vantage_traits::{ExchangeRateSource, SourceType};

/// Where a resolved rate came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "origin", rename_all = "lowercase")]
pub enum RateOrigin {
    /// Supplied by a rate source.
    Provider {
        /// Kind of source that answered.
        source: SourceType,
    },
    /// The source failed and the fallback constant was used.
    Fallback {
        /// Why the source failed.
        reason: String,
    },
}

/// A rate together with its origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateResolution {
    /// Pair the rate applies to.
    pub pair: CurrencyPair,
    /// Resolved rate.
    pub rate: ExchangeRate,
    /// Where the rate came from.
    pub origin: RateOrigin,
}

impl RateResolution {
    /// Returns true if the fallback constant was substituted.
    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, RateOrigin::Fallback { .. })
    }
}

/// Asks `source` for the pair's rate, substituting `fallback` on failure.
///
/// # Example
///
/// ```rust
/// use vantage_core::{CurrencyPair, ExchangeRate};
/// use vantage_fx::resolve_rate;
/// use vantage_traits::{ExchangeRateSource, ProviderError, ProviderResult, SourceType};
///
/// struct Offline;
///
/// impl ExchangeRateSource for Offline {
///     fn source_type(&self) -> SourceType {
///         SourceType::Snapshot
///     }
///
///     fn get_rate(&self, pair: &CurrencyPair) -> ProviderResult<ExchangeRate> {
///         Err(ProviderError::rate_unavailable(pair, "offline"))
///     }
/// }
///
/// let resolved = resolve_rate(&Offline, CurrencyPair::usd_inr(), ExchangeRate::USD_INR_FALLBACK);
/// assert!(resolved.is_fallback());
/// assert_eq!(resolved.rate.value(), 83.0);
/// ```
pub fn resolve_rate(
    source: &dyn ExchangeRateSource,
    pair: CurrencyPair,
    fallback: ExchangeRate,
) -> RateResolution {
    match source.get_rate(&pair) {
        Ok(rate) => {
            debug!(%pair, %rate, source = ?source.source_type(), "exchange rate resolved");
            RateResolution {
                pair,
                rate,
                origin: RateOrigin::Provider {
                    source: source.source_type(),
                },
            }
        }
        Err(e) => {
            warn!(
                %pair,
                fallback = %fallback,
                error = %e,
                "exchange rate unavailable, using fallback"
            );
            RateResolution {
                pair,
                rate: fallback,
                origin: RateOrigin::Fallback {
                    reason: e.to_string(),
                },
            }
        }
    }
}
