//! Formula commands.
//!
//! Every formula page shares one report: the inputs, the labelled result, and
//! the exchange rate whenever an amount is shown converted.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use vantage_core::Currency;
use vantage_formulas::{evaluate, Formula, FormulaRequest, ResultKind};
use vantage_fx::RateResolution;

use crate::cli::OutputFormat;
use crate::commands::{describe_rate, input_or_default, years_or_default};
use crate::error::CliResult;
use crate::output::{print_header, print_json_value, print_output, KeyValue};
use crate::session::Session;

/// Arguments for the capm command.
#[derive(Args, Debug)]
pub struct CapmArgs {
    /// Risk-free rate (%) [default: 2]
    #[arg(long, allow_negative_numbers = true)]
    pub risk_free: Option<f64>,

    /// Market return (%) [default: 8]
    #[arg(long, allow_negative_numbers = true)]
    pub market_return: Option<f64>,

    /// Beta [default: 1]
    #[arg(long, allow_negative_numbers = true)]
    pub beta: Option<f64>,
}

impl CapmArgs {
    /// Request with omitted inputs taken from the catalog.
    pub fn request(&self) -> FormulaRequest {
        let f = Formula::Capm;
        FormulaRequest::Capm {
            risk_free_pct: input_or_default(self.risk_free, f, "risk-free"),
            market_return_pct: input_or_default(self.market_return, f, "market-return"),
            beta: input_or_default(self.beta, f, "beta"),
        }
    }
}

/// Arguments for the put-call command.
#[derive(Args, Debug)]
pub struct PutCallArgs {
    /// Call price [default: 10]
    #[arg(long, allow_negative_numbers = true)]
    pub call: Option<f64>,

    /// Strike price [default: 100]
    #[arg(long, allow_negative_numbers = true)]
    pub strike: Option<f64>,

    /// Stock price [default: 95]
    #[arg(long, allow_negative_numbers = true)]
    pub stock: Option<f64>,

    /// Interest rate (%) [default: 5]
    #[arg(long, allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Time to maturity in years [default: 1]
    #[arg(long)]
    pub years: Option<u32>,
}

impl PutCallArgs {
    /// Request with omitted inputs taken from the catalog.
    pub fn request(&self) -> FormulaRequest {
        let f = Formula::PutCallParity;
        FormulaRequest::PutCallParity {
            call: input_or_default(self.call, f, "call"),
            strike: input_or_default(self.strike, f, "strike"),
            stock: input_or_default(self.stock, f, "stock"),
            rate_pct: input_or_default(self.rate, f, "rate"),
            years: years_or_default(self.years, f),
        }
    }
}

/// Arguments for the risk-aversion command.
#[derive(Args, Debug)]
pub struct RiskAversionArgs {
    /// Expected return (%) [default: 10]
    #[arg(long, allow_negative_numbers = true)]
    pub expected_return: Option<f64>,

    /// Standard deviation (%) [default: 5]
    #[arg(long, allow_negative_numbers = true)]
    pub stddev: Option<f64>,

    /// Risk aversion coefficient A [default: 3]
    #[arg(long, allow_negative_numbers = true)]
    pub aversion: Option<f64>,
}

impl RiskAversionArgs {
    /// Request with omitted inputs taken from the catalog.
    pub fn request(&self) -> FormulaRequest {
        let f = Formula::RiskAversion;
        FormulaRequest::RiskAversion {
            expected_return_pct: input_or_default(self.expected_return, f, "expected-return"),
            stddev_pct: input_or_default(self.stddev, f, "stddev"),
            aversion: input_or_default(self.aversion, f, "aversion"),
        }
    }
}

/// Arguments for the intrinsic command.
#[derive(Args, Debug)]
pub struct IntrinsicArgs {
    /// Initial cash flow [default: 100]
    #[arg(long, allow_negative_numbers = true)]
    pub cash_flow: Option<f64>,

    /// Growth rate (%) [default: 5]
    #[arg(long, allow_negative_numbers = true)]
    pub growth: Option<f64>,

    /// Discount rate (%) [default: 10]
    #[arg(long, allow_negative_numbers = true)]
    pub discount: Option<f64>,

    /// Years [default: 5]
    #[arg(long)]
    pub years: Option<u32>,
}

impl IntrinsicArgs {
    /// Request with omitted inputs taken from the catalog.
    pub fn request(&self) -> FormulaRequest {
        let f = Formula::IntrinsicValue;
        FormulaRequest::IntrinsicValue {
            cash_flow: input_or_default(self.cash_flow, f, "cash-flow"),
            growth_pct: input_or_default(self.growth, f, "growth"),
            discount_pct: input_or_default(self.discount, f, "discount"),
            years: years_or_default(self.years, f),
        }
    }
}

/// Arguments for the inflation command.
#[derive(Args, Debug)]
pub struct InflationArgs {
    /// Nominal return (%) [default: 10]
    #[arg(long, allow_negative_numbers = true)]
    pub nominal: Option<f64>,

    /// Inflation rate (%) [default: 3]
    #[arg(long, allow_negative_numbers = true)]
    pub inflation: Option<f64>,
}

impl InflationArgs {
    /// Request with omitted inputs taken from the catalog.
    pub fn request(&self) -> FormulaRequest {
        let f = Formula::Inflation;
        FormulaRequest::Inflation {
            nominal_pct: input_or_default(self.nominal, f, "nominal"),
            inflation_pct: input_or_default(self.inflation, f, "inflation"),
        }
    }
}

/// Arguments for the bond command.
#[derive(Args, Debug)]
pub struct BondArgs {
    /// Face value [default: 1000]
    #[arg(long, allow_negative_numbers = true)]
    pub face: Option<f64>,

    /// Annual coupon rate (%) [default: 5]
    #[arg(long, allow_negative_numbers = true)]
    pub coupon: Option<f64>,

    /// Years to maturity [default: 10]
    #[arg(long)]
    pub years: Option<u32>,

    /// Discount rate (%) [default: 4]
    #[arg(long, allow_negative_numbers = true)]
    pub discount: Option<f64>,
}

impl BondArgs {
    /// Request with omitted inputs taken from the catalog.
    pub fn request(&self) -> FormulaRequest {
        let f = Formula::Bonds;
        FormulaRequest::Bonds {
            face: input_or_default(self.face, f, "face"),
            coupon_pct: input_or_default(self.coupon, f, "coupon"),
            years: years_or_default(self.years, f),
            discount_pct: input_or_default(self.discount, f, "discount"),
        }
    }
}

/// Arguments for the roic command.
#[derive(Args, Debug)]
pub struct RoicArgs {
    /// Net operating profit after tax [default: 100]
    #[arg(long, allow_negative_numbers = true)]
    pub nopat: Option<f64>,

    /// Invested capital [default: 1000]
    #[arg(long, allow_negative_numbers = true)]
    pub invested_capital: Option<f64>,
}

impl RoicArgs {
    /// Request with omitted inputs taken from the catalog.
    pub fn request(&self) -> FormulaRequest {
        let f = Formula::Roic;
        FormulaRequest::Roic {
            nopat: input_or_default(self.nopat, f, "nopat"),
            invested_capital: input_or_default(self.invested_capital, f, "invested-capital"),
        }
    }
}

/// One formula input as shown.
#[derive(Debug, Serialize)]
pub struct InputValue {
    pub key: &'static str,
    pub label: &'static str,
    pub value: f64,
}

/// Evaluated formula, ready for any output format.
#[derive(Debug, Serialize)]
pub struct FormulaReport {
    pub formula: Formula,
    pub title: &'static str,
    pub inputs: Vec<InputValue>,
    pub label: &'static str,
    pub kind: ResultKind,
    /// Value in the currency of the inputs.
    pub value: f64,
    /// Value in the display currency.
    pub display_value: f64,
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<RateResolution>,
}

impl FormulaReport {
    /// Evaluates `request` and renders the result for `session`.
    pub fn build(request: &FormulaRequest, session: &Session) -> CliResult<Self> {
        let result = evaluate(request)?;
        let formula = result.formula;
        let normalizer = session.normalizer_for(&result);
        let display_value = if result.is_amount() {
            normalizer.convert(result.value)
        } else {
            result.value
        };

        Ok(Self {
            formula,
            title: formula.title(),
            inputs: request
                .inputs()
                .into_iter()
                .map(|(spec, value)| InputValue {
                    key: spec.key,
                    label: spec.label,
                    value,
                })
                .collect(),
            label: formula.result_label(),
            kind: result.kind,
            value: result.value,
            display_value,
            display: normalizer.render(&result),
            currency: result.is_amount().then(|| normalizer.display_currency()),
            exchange_rate: session
                .converts(&result)
                .then(|| session.resolution().clone()),
        })
    }

    /// Metric/value rows for table and CSV output.
    pub fn rows(&self) -> Vec<KeyValue> {
        let mut rows: Vec<KeyValue> = self
            .inputs
            .iter()
            .map(|input| KeyValue::new(input.label, input.value.to_string()))
            .collect();
        rows.push(KeyValue::new(self.label, self.display.clone()));
        if let Some(resolution) = &self.exchange_rate {
            rows.push(KeyValue::new("Exchange Rate", describe_rate(resolution)));
        }
        rows
    }

    /// Prints the report in `format`.
    pub fn print(&self, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Table => {
                print_header(self.title);
                print_output(&self.rows(), format)?;
            }
            OutputFormat::Json => print_json_value(self)?,
            OutputFormat::Csv => print_output(&self.rows(), format)?,
            OutputFormat::Minimal => println!("{}", self.display),
        }
        Ok(())
    }
}

/// Execute a formula command.
pub fn execute(request: FormulaRequest, session: &Session) -> Result<()> {
    FormulaReport::build(&request, session)?.print(session.format)
}
