//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use vantage_core::CurrencySelection;

use crate::commands::{
    BondArgs, CapmArgs, CatalogArgs, ConfigArgs, InflationArgs, IntrinsicArgs, PutCallArgs,
    QuoteArgs, RateArgs, RiskAversionArgs, RoicArgs, ValuationArgs,
};

/// Vantage - valuation formulas with USD/INR currency display
#[derive(Parser)]
#[command(name = "vantage")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command. Each overrides the settings file.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Output format [default: table, or `default_format` from the settings file]
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Suppress warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Display amounts in the source or target currency
    #[arg(long, global = true, value_name = "SIDE")]
    pub currency: Option<CurrencySelection>,

    /// Fixed exchange rate (target units per source unit)
    #[arg(long, global = true, value_name = "RATE")]
    pub fx_rate: Option<f64>,

    /// JSON rates snapshot, e.g. {"base": "USD", "rates": {"INR": 83.2}}
    #[arg(long, global = true, value_name = "FILE")]
    pub rates_file: Option<PathBuf>,

    /// CSV quote file (symbol,name,sector,industry,currency,current_price,market_cap)
    #[arg(long, global = true, value_name = "FILE")]
    pub quotes_file: Option<PathBuf>,

    /// Settings file [default: <config dir>/vantage/config.toml]
    #[arg(long, global = true, env = "VANTAGE_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// DCF valuation, optionally with company info for a ticker
    Valuation(ValuationArgs),

    /// Expected return from the security market line
    Capm(CapmArgs),

    /// Implied put price from put-call parity
    PutCall(PutCallArgs),

    /// Mean-variance investor utility
    RiskAversion(RiskAversionArgs),

    /// Intrinsic value of a growing cash flow
    Intrinsic(IntrinsicArgs),

    /// Inflation-adjusted real return
    Inflation(InflationArgs),

    /// Annual-coupon bond price
    Bond(BondArgs),

    /// Return on invested capital
    Roic(RoicArgs),

    /// Show a stock quote
    Quote(QuoteArgs),

    /// Show the exchange rate in effect
    Rate(RateArgs),

    /// List formulas and their inputs
    Catalog(CatalogArgs),

    /// Manage settings
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}

impl OutputFormat {
    /// Parses a format name as stored in the settings file.
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "vantage",
            "bond",
            "--currency",
            "target",
            "--fx-rate",
            "80",
        ])
            .unwrap();
        assert_eq!(cli.global.currency, Some(CurrencySelection::Target));
        assert_eq!(cli.global.fx_rate, Some(80.0));
    }

    #[test]
    fn test_format_from_name() {
        assert_eq!(OutputFormat::from_name("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_name("yaml"), None);
    }
}
