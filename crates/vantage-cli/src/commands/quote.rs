//! Quote command implementation.
//!
//! Looks a ticker up in the quote file. A failed lookup is reported, not fatal.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use vantage_core::Currency;
use vantage_traits::{StockQuote, Ticker};

use crate::cli::OutputFormat;
use crate::output::{print_error, print_header, print_json_value, print_output, KeyValue};
use crate::session::Session;

/// Arguments for the quote command.
#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Ticker symbol (e.g. RELIANCE.NS, INFY.NS, TCS.NS)
    pub ticker: String,
}

/// Company information as displayed.
#[derive(Debug, Serialize)]
pub struct CompanyInfo {
    pub symbol: Ticker,
    pub name: String,
    pub sector: String,
    pub industry: String,
    /// Currency the quote is listed in.
    pub currency: Currency,
    pub current_price: String,
    pub market_cap: String,
}

impl CompanyInfo {
    /// Renders a quote, converting price and market cap for display.
    ///
    /// Missing descriptive fields show as `N/A`; missing numbers as zero.
    pub fn from_quote(quote: &StockQuote, session: &Session) -> Self {
        Self {
            symbol: quote.symbol.clone(),
            name: quote.display_name().to_string(),
            sector: quote.sector_or_na().to_string(),
            industry: quote.industry_or_na().to_string(),
            currency: quote.currency,
            current_price: session.display_native(quote.price_or_zero(), quote.currency),
            market_cap: session.display_native(quote.market_cap_or_zero(), quote.currency),
        }
    }

    /// Metric/value rows for table and CSV output.
    pub fn rows(&self) -> Vec<KeyValue> {
        vec![
            KeyValue::new("Symbol", self.symbol.to_string()),
            KeyValue::new("Sector", self.sector.clone()),
            KeyValue::new("Industry", self.industry.clone()),
            KeyValue::new("Current Price", self.current_price.clone()),
            KeyValue::new("Market Cap", self.market_cap.clone()),
        ]
    }
}

/// Message shown when a lookup fails.
pub fn lookup_error_message(ticker: &Ticker, error: &impl std::fmt::Display) -> String {
    format!("Error fetching data for {ticker}: {error}")
}

/// Execute the quote command.
pub fn execute(args: QuoteArgs, session: &Session) -> Result<()> {
    let ticker = Ticker::new(&args.ticker);
    let quote = match session.lookup_quote(&ticker) {
        Ok(quote) => quote,
        Err(e) => {
            print_error(&lookup_error_message(&ticker, &e));
            return Ok(());
        }
    };

    let info = CompanyInfo::from_quote(&quote, session);
    match session.format {
        OutputFormat::Table => {
            print_header(&info.name);
            print_output(&info.rows(), session.format)?;
        }
        OutputFormat::Json => print_json_value(&info)?,
        OutputFormat::Csv => print_output(&info.rows(), session.format)?,
        OutputFormat::Minimal => println!("{}", info.current_price),
    }
    Ok(())
}
