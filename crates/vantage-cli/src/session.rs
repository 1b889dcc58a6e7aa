//! Per-invocation state: merged settings, output format and the exchange rate.

use std::cell::OnceCell;
use std::path::PathBuf;

use tracing::{debug, warn};
use vantage_config::{default_config_path, DashboardConfig, Validate};
use vantage_core::{Currency, CurrencyPair, CurrencySelection, ExchangeRate};
use vantage_ext_file::{create_quote_source, create_rate_source};
use vantage_formulas::FormulaResult;
use vantage_fx::{format_amount_in, resolve_rate, Normalizer, RateResolution};
use vantage_traits::{
    ExchangeRateSource, ProviderError, ProviderResult, SourceType, StockQuote, Ticker,
};

use crate::cli::{GlobalArgs, OutputFormat};
use crate::error::CliResult;

/// Settings file in effect: `--config`, `VANTAGE_CONFIG`, or the default.
pub fn config_path(global: &GlobalArgs) -> CliResult<PathBuf> {
    match &global.config {
        Some(path) => Ok(path.clone()),
        None => Ok(default_config_path()?),
    }
}

/// Loads the settings file and applies command-line overrides.
pub fn load_config(global: &GlobalArgs) -> CliResult<DashboardConfig> {
    let mut config = DashboardConfig::load_or_default(config_path(global)?)?;

    if let Some(currency) = global.currency {
        config.currency = currency;
    }
    if let Some(rate) = global.fx_rate {
        config.rate = Some(rate);
    }
    if let Some(path) = &global.rates_file {
        config.rates_file = Some(path.clone());
    }
    if let Some(path) = &global.quotes_file {
        config.quotes_file = Some(path.clone());
    }

    config.validate_or_error()?;
    Ok(config)
}

/// Rate source that could not be constructed; answers with the load error.
struct UnavailableRateSource(ProviderError);

impl ExchangeRateSource for UnavailableRateSource {
    fn source_type(&self) -> SourceType {
        SourceType::Empty
    }

    fn get_rate(&self, _pair: &CurrencyPair) -> ProviderResult<ExchangeRate> {
        Err(self.0.clone())
    }
}

/// State shared by the commands of one invocation.
pub struct Session {
    /// Merged settings.
    pub config: DashboardConfig,
    /// Output format.
    pub format: OutputFormat,
    pair: CurrencyPair,
    fallback: ExchangeRate,
    fixed_rate: Option<ExchangeRate>,
    resolution: OnceCell<RateResolution>,
}

impl Session {
    /// Builds the session from global flags and the settings file.
    pub fn new(global: &GlobalArgs) -> CliResult<Self> {
        let config = load_config(global)?;
        let format = global
            .format
            .or_else(|| OutputFormat::from_name(&config.default_format))
            .unwrap_or_default();
        let pair = config.pair()?;
        let fallback = config.fallback()?;
        let fixed_rate = config.rate.map(ExchangeRate::new).transpose()?;

        debug!(%pair, selection = %config.currency, ?format, "session ready");
        Ok(Self {
            config,
            format,
            pair,
            fallback,
            fixed_rate,
            resolution: OnceCell::new(),
        })
    }

    /// Which side of the pair is displayed.
    pub fn selection(&self) -> CurrencySelection {
        self.config.currency
    }

    /// Currency amounts are shown in.
    pub fn display_currency(&self) -> Currency {
        self.pair.display_currency(self.selection())
    }

    /// The exchange rate, resolved on first use.
    ///
    /// Never fails: a missing or broken source yields the fallback rate.
    pub fn resolution(&self) -> &RateResolution {
        self.resolution.get_or_init(|| {
            let source = create_rate_source(
                self.pair,
                self.fixed_rate,
                self.config.rates_file.as_deref(),
            )
            .unwrap_or_else(|e| {
                warn!(error = %e, "rate source could not be loaded");
                Box::new(UnavailableRateSource(e)) as Box<dyn ExchangeRateSource>
            });
            resolve_rate(source.as_ref(), self.pair, self.fallback)
        })
    }

    /// Normalizer using the resolved rate.
    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.pair, self.selection(), self.resolution().rate)
    }

    /// Returns true if displaying `result` applies the exchange rate.
    pub fn converts(&self, result: &FormulaResult) -> bool {
        result.is_amount() && self.selection() == CurrencySelection::Target
    }

    /// Normalizer for `result`, resolving the rate only when it is applied.
    pub fn normalizer_for(&self, result: &FormulaResult) -> Normalizer {
        if self.converts(result) {
            self.normalizer()
        } else {
            // The rate is never read on this path
            Normalizer::new(self.pair, self.selection(), self.fallback)
        }
    }

    /// Formats an amount quoted in `currency` for display.
    ///
    /// Amounts already in the display currency need no rate. Amounts in a
    /// currency outside the pair are shown as quoted.
    pub fn display_native(&self, amount: f64, currency: Currency) -> String {
        if currency == self.display_currency() {
            return format_amount_in(amount, currency);
        }
        self.normalizer()
            .display_amount_from(amount, currency)
            .unwrap_or_else(|_| format_amount_in(amount, currency))
    }

    /// Looks up a quote in the configured quote file.
    pub fn lookup_quote(&self, ticker: &Ticker) -> ProviderResult<StockQuote> {
        create_quote_source(self.config.quotes_file.as_deref())?.get_quote(ticker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn global(dir: &TempDir) -> GlobalArgs {
        GlobalArgs {
            config: Some(dir.path().join("config.toml")),
            ..GlobalArgs::default()
        }
    }

    #[test]
    fn test_flags_override_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "currency = \"target\"\ndefault_format = \"json\"\nrate = 80.0\n",
        )
        .unwrap();

        let mut args = global(&dir);
        let session = Session::new(&args).unwrap();
        assert_eq!(session.selection(), CurrencySelection::Target);
        assert_eq!(session.format, OutputFormat::Json);
        assert_eq!(session.resolution().rate.value(), 80.0);

        args.currency = Some(CurrencySelection::Source);
        args.fx_rate = Some(82.0);
        args.format = Some(OutputFormat::Csv);
        let session = Session::new(&args).unwrap();
        assert_eq!(session.selection(), CurrencySelection::Source);
        assert_eq!(session.format, OutputFormat::Csv);
        assert_eq!(session.resolution().rate.value(), 82.0);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let dir = TempDir::new().unwrap();
        let args = GlobalArgs {
            fx_rate: Some(-1.0),
            ..global(&dir)
        };
        assert!(Session::new(&args).is_err());
    }

    #[test]
    fn test_no_source_uses_fallback() {
        let dir = TempDir::new().unwrap();
        let session = Session::new(&global(&dir)).unwrap();
        let resolution = session.resolution();
        assert!(resolution.is_fallback());
        assert_eq!(resolution.rate, ExchangeRate::USD_INR_FALLBACK);
    }

    #[test]
    fn test_malformed_rates_file_uses_fallback() {
        let dir = TempDir::new().unwrap();
        let mut rates = NamedTempFile::new().unwrap();
        rates.write_all(b"{ not json").unwrap();

        let args = GlobalArgs {
            rates_file: Some(rates.path().to_path_buf()),
            ..global(&dir)
        };
        let session = Session::new(&args).unwrap();
        assert!(session.resolution().is_fallback());
    }

    #[test]
    fn test_display_native() {
        let dir = TempDir::new().unwrap();
        let args = GlobalArgs {
            currency: Some(CurrencySelection::Target),
            fx_rate: Some(80.0),
            ..global(&dir)
        };
        let session = Session::new(&args).unwrap();
        assert_eq!(session.display_native(100.0, Currency::USD), "₹8,000.00");
        assert_eq!(session.display_native(2950.0, Currency::INR), "₹2,950.00");
        assert_eq!(session.display_native(10.0, Currency::EUR), "€10.00");
    }
}
