//! Dashboard settings.
//!
//! Persisted as TOML. Every field has a serde default so a partial (or empty)
//! file loads, and command-line flags override whatever the file holds.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;
use vantage_core::{Currency, CurrencyPair, CurrencySelection, ExchangeRate};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

/// Output formats the CLI understands.
pub const OUTPUT_FORMATS: &[&str] = &["table", "json", "csv", "minimal"];

/// Persistent dashboard settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Which side of the pair amounts are displayed in.
    pub currency: CurrencySelection,
    /// Currency formula inputs are entered in.
    pub source_currency: Currency,
    /// Currency reached by applying the exchange rate.
    pub target_currency: Currency,
    /// Rate used when no source can supply one.
    pub fallback_rate: f64,
    /// Fixed rate that bypasses every source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    /// JSON rates snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rates_file: Option<PathBuf>,
    /// CSV quote file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quotes_file: Option<PathBuf>,
    /// Default output format.
    pub default_format: String,
}

fn default_format() -> String {
    "table".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            currency: CurrencySelection::Source,
            source_currency: Currency::USD,
            target_currency: Currency::INR,
            fallback_rate: ExchangeRate::USD_INR_FALLBACK.value(),
            rate: None,
            rates_file: None,
            quotes_file: None,
            default_format: default_format(),
        }
    }
}

impl DashboardConfig {
    /// Parses settings from TOML text.
    pub fn from_toml_str(content: &str, origin: impl Into<PathBuf>) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::Deserialization {
            path: origin.into(),
            message: e.to_string(),
        })
    }

    /// Loads settings from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let config = Self::from_toml_str(&content, path)?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Loads settings, treating a missing file as defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!(path = %path.display(), "no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Renders settings as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialization(e.to_string()))
    }

    /// Writes settings to `path`, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
        }
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|e| ConfigError::io(path, e))
    }

    /// The configured currency pair.
    pub fn pair(&self) -> ConfigResult<CurrencyPair> {
        CurrencyPair::new(self.source_currency, self.target_currency).map_err(|e| {
            ConfigError::Validation {
                field: "target_currency".to_string(),
                message: e.to_string(),
            }
        })
    }

    /// The configured fallback rate.
    pub fn fallback(&self) -> ConfigResult<ExchangeRate> {
        ExchangeRate::new(self.fallback_rate).map_err(|e| ConfigError::Validation {
            field: "fallback_rate".to_string(),
            message: e.to_string(),
        })
    }

    /// Current value of `key` as text; empty for unset optional values.
    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::Currency => self.currency.to_string(),
            ConfigKey::SourceCurrency => self.source_currency.to_string(),
            ConfigKey::TargetCurrency => self.target_currency.to_string(),
            ConfigKey::FallbackRate => self.fallback_rate.to_string(),
            ConfigKey::Rate => self.rate.map(|r| r.to_string()).unwrap_or_default(),
            ConfigKey::RatesFile => display_path(self.rates_file.as_deref()),
            ConfigKey::QuotesFile => display_path(self.quotes_file.as_deref()),
            ConfigKey::DefaultFormat => self.default_format.clone(),
        }
    }

    /// Parses and stores `value` under `key`.
    ///
    /// The updated settings are validated as a whole, so a change that would
    /// leave the file inconsistent (e.g. target equal to source) is rejected
    /// and `self` is left untouched.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> ConfigResult<()> {
        let mut updated = self.clone();
        let invalid = |message: String| ConfigError::Validation {
            field: key.as_str().to_string(),
            message,
        };
        let value = value.trim();

        match key {
            ConfigKey::Currency => {
                updated.currency = value
                    .parse()
                    .map_err(|e: vantage_core::CoreError| invalid(e.to_string()))?;
            }
            ConfigKey::SourceCurrency => {
                updated.source_currency =
                    value.parse().map_err(|e: vantage_core::CoreError| invalid(e.to_string()))?;
            }
            ConfigKey::TargetCurrency => {
                updated.target_currency =
                    value.parse().map_err(|e: vantage_core::CoreError| invalid(e.to_string()))?;
            }
            ConfigKey::FallbackRate => {
                updated.fallback_rate = parse_number(value).map_err(invalid)?;
            }
            ConfigKey::Rate => {
                updated.rate = if value.is_empty() {
                    None
                } else {
                    Some(parse_number(value).map_err(invalid)?)
                };
            }
            ConfigKey::RatesFile => updated.rates_file = optional_path(value),
            ConfigKey::QuotesFile => updated.quotes_file = optional_path(value),
            ConfigKey::DefaultFormat => updated.default_format = value.to_lowercase(),
        }

        updated.validate_or_error()?;
        *self = updated;
        Ok(())
    }

    /// Restores `key` to its default.
    pub fn reset(&mut self, key: ConfigKey) {
        let defaults = Self::default();
        match key {
            ConfigKey::Currency => self.currency = defaults.currency,
            ConfigKey::SourceCurrency => self.source_currency = defaults.source_currency,
            ConfigKey::TargetCurrency => self.target_currency = defaults.target_currency,
            ConfigKey::FallbackRate => self.fallback_rate = defaults.fallback_rate,
            ConfigKey::Rate => self.rate = None,
            ConfigKey::RatesFile => self.rates_file = None,
            ConfigKey::QuotesFile => self.quotes_file = None,
            ConfigKey::DefaultFormat => self.default_format = defaults.default_format,
        }
    }
}

fn parse_number(value: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|_| format!("'{value}' is not a number"))
}

fn optional_path(value: &str) -> Option<PathBuf> {
    (!value.is_empty()).then(|| PathBuf::from(value))
}

fn display_path(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string()).unwrap_or_default()
}

fn positive_rate(field: &str, value: f64) -> Option<ValidationError> {
    if value.is_finite() && value > 0.0 {
        None
    } else {
        Some(ValidationError::with_rule(
            field,
            format!("must be a positive finite number, got {value}"),
            "positive",
        ))
    }
}

impl Validate for DashboardConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.source_currency == self.target_currency {
            errors.push(ValidationError::with_rule(
                "target_currency",
                format!("must differ from source_currency ({})", self.source_currency),
                "distinct_pair",
            ));
        }

        errors.extend(positive_rate("fallback_rate", self.fallback_rate));
        if let Some(rate) = self.rate {
            errors.extend(positive_rate("rate", rate));
        }

        if !OUTPUT_FORMATS.contains(&self.default_format.as_str()) {
            errors.push(ValidationError::with_rule(
                "default_format",
                format!(
                    "'{}' is not one of {}",
                    self.default_format,
                    OUTPUT_FORMATS.join(", ")
                ),
                "one_of",
            ));
        }

        errors
    }
}

// =============================================================================
// KEYS
// =============================================================================

/// Settable configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    /// Display side of the pair
    Currency,
    /// Input currency
    SourceCurrency,
    /// Converted currency
    TargetCurrency,
    /// Fallback exchange rate
    FallbackRate,
    /// Fixed exchange rate
    Rate,
    /// Rates snapshot path
    RatesFile,
    /// Quote file path
    QuotesFile,
    /// Default output format
    DefaultFormat,
}

impl ConfigKey {
    /// Looks a key up by name, accepting a few short aliases.
    pub fn from_name(s: &str) -> ConfigResult<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "currency" | "display_currency" => Ok(Self::Currency),
            "source_currency" | "source" => Ok(Self::SourceCurrency),
            "target_currency" | "target" => Ok(Self::TargetCurrency),
            "fallback_rate" | "fallback" => Ok(Self::FallbackRate),
            "rate" => Ok(Self::Rate),
            "rates_file" | "rates" => Ok(Self::RatesFile),
            "quotes_file" | "quotes" => Ok(Self::QuotesFile),
            "default_format" | "format" => Ok(Self::DefaultFormat),
            _ => Err(ConfigError::UnknownKey { key: s.to_string() }),
        }
    }

    /// Canonical key name, as written in the TOML file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Currency => "currency",
            Self::SourceCurrency => "source_currency",
            Self::TargetCurrency => "target_currency",
            Self::FallbackRate => "fallback_rate",
            Self::Rate => "rate",
            Self::RatesFile => "rates_file",
            Self::QuotesFile => "quotes_file",
            Self::DefaultFormat => "default_format",
        }
    }

    /// One-line description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Currency => "Display currency (source, target)",
            Self::SourceCurrency => "Currency inputs are entered in (USD, INR, EUR, GBP, JPY)",
            Self::TargetCurrency => "Currency amounts convert to (USD, INR, EUR, GBP, JPY)",
            Self::FallbackRate => "Exchange rate used when no source answers",
            Self::Rate => "Fixed exchange rate overriding every source",
            Self::RatesFile => "JSON rates snapshot ({\"base\": ..., \"rates\": {...}})",
            Self::QuotesFile => "CSV quote file",
            Self::DefaultFormat => "Default output format (table, json, csv, minimal)",
        }
    }

    /// Default value as text.
    pub fn default_value(&self) -> String {
        DashboardConfig::default().get(*self)
    }

    /// All keys.
    pub fn all() -> &'static [Self] {
        &[
            Self::Currency,
            Self::SourceCurrency,
            Self::TargetCurrency,
            Self::FallbackRate,
            Self::Rate,
            Self::RatesFile,
            Self::QuotesFile,
            Self::DefaultFormat,
        ]
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default settings file: `<config dir>/vantage/config.toml`.
pub fn default_config_path() -> ConfigResult<PathBuf> {
    let base = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join("vantage").join("config.toml"))
}
