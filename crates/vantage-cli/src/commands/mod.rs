//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod formula;
pub mod quote;
pub mod rate;
pub mod valuation;

// Re-export submodules for convenience
pub use catalog::CatalogArgs;
pub use config::ConfigArgs;
pub use formula::{
    BondArgs, CapmArgs, InflationArgs, IntrinsicArgs, PutCallArgs, RiskAversionArgs, RoicArgs,
};
pub use quote::QuoteArgs;
pub use rate::RateArgs;
pub use valuation::ValuationArgs;

use vantage_formulas::Formula;
use vantage_fx::{RateOrigin, RateResolution};

/// An input from the command line, or the catalog default when omitted.
pub fn input_or_default(value: Option<f64>, formula: Formula, key: &str) -> f64 {
    value.unwrap_or_else(|| formula.default_of(key))
}

/// A horizon from the command line, or the catalog default when omitted.
pub fn years_or_default(value: Option<u32>, formula: Formula) -> u32 {
    // Catalog horizons are small positive whole numbers
    value.unwrap_or_else(|| formula.default_of("years").round() as u32)
}

/// One-line description of a resolved rate, e.g. `83.2000 USD/INR (file)`.
pub fn describe_rate(resolution: &RateResolution) -> String {
    format!(
        "{} {} ({})",
        resolution.rate,
        resolution.pair,
        describe_origin(&resolution.origin)
    )
}

/// Where a rate came from, in words.
pub fn describe_origin(origin: &RateOrigin) -> String {
    match origin {
        RateOrigin::Provider { source } => format!("{source:?}").to_lowercase(),
        RateOrigin::Fallback { .. } => "fallback".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_core::{CurrencyPair, ExchangeRate};
    use vantage_traits::SourceType;

    #[test]
    fn test_defaults_fill_missing_inputs() {
        assert_eq!(input_or_default(None, Formula::Capm, "beta"), 1.0);
        assert_eq!(input_or_default(Some(1.4), Formula::Capm, "beta"), 1.4);
        assert_eq!(years_or_default(None, Formula::Bonds), 10);
        assert_eq!(years_or_default(Some(3), Formula::Bonds), 3);
    }

    #[test]
    fn test_describe_rate() {
        let resolution = RateResolution {
            pair: CurrencyPair::usd_inr(),
            rate: ExchangeRate::new(83.2).unwrap(),
            origin: RateOrigin::Provider {
                source: SourceType::File,
            },
        };
        assert_eq!(describe_rate(&resolution), "83.2000 USD/INR (file)");

        let fallback = RateResolution {
            origin: RateOrigin::Fallback {
                reason: "offline".to_string(),
            },
            ..resolution
        };
        assert_eq!(describe_rate(&fallback), "83.2000 USD/INR (fallback)");
    }
}
