//! Vantage Configuration Layer
//!
//! Persistent settings for the Vantage command-line dashboard: which currency
//! amounts are shown in, the currency pair, the fallback exchange rate, and
//! where file-backed rate and quote sources live.
//!
//! # Example
//!
//! ```rust
//! use vantage_config::{ConfigKey, DashboardConfig, Validate};
//!
//! let mut config = DashboardConfig::from_toml_str("currency = \"target\"", "inline").unwrap();
//! assert_eq!(config.fallback().unwrap().value(), 83.0);
//!
//! config.set(ConfigKey::Rate, "84.1").unwrap();
//! assert!(config.is_valid());
//! assert!(config.set(ConfigKey::FallbackRate, "0").is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dashboard;
pub mod error;

pub use dashboard::{default_config_path, ConfigKey, DashboardConfig, OUTPUT_FORMATS};
pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
