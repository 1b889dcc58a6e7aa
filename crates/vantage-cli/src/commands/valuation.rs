//! Valuation command implementation.
//!
//! DCF valuation of an expected profit stream. With `--ticker`, company
//! information is looked up first; a failed lookup is shown inline and the
//! valuation is still rendered.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use vantage_formulas::{Formula, FormulaRequest};
use vantage_traits::Ticker;

use crate::cli::OutputFormat;
use crate::commands::formula::FormulaReport;
use crate::commands::quote::{lookup_error_message, CompanyInfo};
use crate::commands::{input_or_default, years_or_default};
use crate::output::{print_error, print_header, print_json_value, print_output};
use crate::session::Session;

/// Arguments for the valuation command.
#[derive(Args, Debug)]
pub struct ValuationArgs {
    /// Ticker to show company information for (e.g. RELIANCE.NS)
    #[arg(long)]
    pub ticker: Option<String>,

    /// Expected annual profit [default: 100]
    #[arg(long, allow_negative_numbers = true)]
    pub profit: Option<f64>,

    /// Annual growth rate (%) [default: 5]
    #[arg(long, allow_negative_numbers = true)]
    pub growth: Option<f64>,

    /// Discount rate (%) [default: 10]
    #[arg(long, allow_negative_numbers = true)]
    pub discount: Option<f64>,

    /// Projection period in years [default: 5]
    #[arg(long)]
    pub years: Option<u32>,
}

impl ValuationArgs {
    /// Request with omitted inputs taken from the catalog.
    pub fn request(&self) -> FormulaRequest {
        let f = Formula::Valuation;
        FormulaRequest::Valuation {
            profit: input_or_default(self.profit, f, "profit"),
            growth_pct: input_or_default(self.growth, f, "growth"),
            discount_pct: input_or_default(self.discount, f, "discount"),
            years: years_or_default(self.years, f),
        }
    }
}

/// Valuation with optional company information.
#[derive(Debug, Serialize)]
pub struct ValuationReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookup_error: Option<String>,
    #[serde(flatten)]
    pub valuation: FormulaReport,
}

/// Execute the valuation command.
pub fn execute(args: ValuationArgs, session: &Session) -> Result<()> {
    let mut company = None;
    let mut lookup_error = None;

    if let Some(symbol) = &args.ticker {
        let ticker = Ticker::new(symbol);
        match session.lookup_quote(&ticker) {
            Ok(quote) => company = Some(CompanyInfo::from_quote(&quote, session)),
            Err(e) => lookup_error = Some(lookup_error_message(&ticker, &e)),
        }
    }

    let report = ValuationReport {
        company,
        lookup_error,
        valuation: FormulaReport::build(&args.request(), session)?,
    };

    if let Some(message) = &report.lookup_error {
        print_error(message);
    }

    match session.format {
        OutputFormat::Table => {
            if let Some(info) = &report.company {
                print_header(&info.name);
                print_output(&info.rows(), session.format)?;
            }
            report.valuation.print(session.format)?;
        }
        OutputFormat::Json => print_json_value(&report)?,
        OutputFormat::Csv => {
            let mut rows = report
                .company
                .as_ref()
                .map(CompanyInfo::rows)
                .unwrap_or_default();
            rows.extend(report.valuation.rows());
            print_output(&rows, session.format)?;
        }
        OutputFormat::Minimal => println!("{}", report.valuation.display),
    }
    Ok(())
}
