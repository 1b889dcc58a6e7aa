//! Rate command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use vantage_core::{Currency, CurrencySelection};
use vantage_fx::{convert, format_amount_in, RateOrigin, RateResolution};

use crate::cli::OutputFormat;
use crate::commands::describe_origin;
use crate::output::{print_header, print_json_value, print_output, print_warning, KeyValue};
use crate::session::Session;

/// Arguments for the rate command.
#[derive(Args, Debug)]
pub struct RateArgs {
    /// Convert this source-currency amount at the rate
    #[arg(long, allow_negative_numbers = true)]
    pub amount: Option<f64>,
}

/// Rate in effect, with an optional sample conversion.
#[derive(Debug, Serialize)]
pub struct RateReport {
    #[serde(flatten)]
    pub resolution: RateResolution,
    pub selection: CurrencySelection,
    pub display_currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted: Option<f64>,
}

impl RateReport {
    fn rows(&self) -> Vec<KeyValue> {
        let pair = self.resolution.pair;
        let mut rows = vec![
            KeyValue::new("Pair", pair.to_string()),
            KeyValue::new("Rate", self.resolution.rate.to_string()),
            KeyValue::new("Source", describe_origin(&self.resolution.origin)),
            KeyValue::new(
                "Display Currency",
                format!("{} ({})", self.display_currency, self.selection),
            ),
        ];
        if let (Some(amount), Some(converted)) = (self.amount, self.converted) {
            rows.push(KeyValue::new(
                format!("Amount ({})", pair.source()),
                format_amount_in(amount, pair.source()),
            ));
            rows.push(KeyValue::new(
                format!("Converted ({})", pair.target()),
                format_amount_in(converted, pair.target()),
            ));
        }
        rows
    }
}

/// Execute the rate command.
pub fn execute(args: RateArgs, session: &Session) -> Result<()> {
    let resolution = session.resolution().clone();
    let rate = resolution.rate;

    if let RateOrigin::Fallback { reason } = &resolution.origin {
        print_warning(&format!("Using fallback rate: {reason}"));
    }

    let report = RateReport {
        resolution,
        selection: session.selection(),
        display_currency: session.display_currency(),
        amount: args.amount,
        converted: args
            .amount
            .map(|amount| convert(amount, CurrencySelection::Target, rate)),
    };

    match session.format {
        OutputFormat::Table => {
            print_header("Exchange Rate");
            print_output(&report.rows(), session.format)?;
        }
        OutputFormat::Json => print_json_value(&report)?,
        OutputFormat::Csv => print_output(&report.rows(), session.format)?,
        OutputFormat::Minimal => println!("{}", rate.value()),
    }
    Ok(())
}
