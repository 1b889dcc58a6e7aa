//! Exchange rate value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// Number of target-currency units per one unit of source currency.
///
/// Always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ExchangeRate(f64);

impl ExchangeRate {
    /// USD/INR rate used when no live rate can be obtained.
    pub const USD_INR_FALLBACK: ExchangeRate = ExchangeRate(83.0);

    /// Creates a rate, rejecting zero, negative and non-finite values.
    pub fn new(value: f64) -> CoreResult<Self> {
        if !value.is_finite() {
            return Err(CoreError::invalid_rate(value, "rate must be finite"));
        }
        if value <= 0.0 {
            return Err(CoreError::invalid_rate(value, "rate must be positive"));
        }
        Ok(Self(value))
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the rate for the opposite direction of the pair.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self(1.0 / self.0)
    }
}

impl TryFrom<f64> for ExchangeRate {
    type Error = CoreError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ExchangeRate> for f64 {
    fn from(rate: ExchangeRate) -> Self {
        rate.0
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}
