//! Catalog command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use vantage_formulas::{Formula, ParameterSpec, ResultKind};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::{print_header, print_json_value, print_output};

/// Arguments for the catalog command.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Show the inputs of one formula (e.g. bond, put-call)
    pub formula: Option<String>,
}

/// One catalog line.
#[derive(Debug, Serialize, Tabled)]
pub struct CatalogRow {
    #[tabled(rename = "Command")]
    pub command: &'static str,
    #[tabled(rename = "Title")]
    pub title: &'static str,
    #[tabled(rename = "Result")]
    pub result: &'static str,
    #[tabled(rename = "Inputs")]
    pub inputs: String,
}

/// One input of a formula.
#[derive(Debug, Serialize, Tabled)]
pub struct ParameterRow {
    #[tabled(rename = "Flag")]
    pub flag: String,
    #[tabled(rename = "Label")]
    pub label: &'static str,
    #[tabled(rename = "Default")]
    pub default: f64,
    #[tabled(rename = "Range")]
    pub range: String,
}

/// Catalog entry for JSON output.
#[derive(Debug, Serialize)]
struct CatalogEntry {
    id: &'static str,
    title: &'static str,
    result_label: &'static str,
    kind: ResultKind,
    parameters: &'static [ParameterSpec],
}

fn kind_name(kind: ResultKind) -> &'static str {
    match kind {
        ResultKind::Amount => "amount",
        ResultKind::Percent => "percent",
        ResultKind::Score => "score",
    }
}

fn range_of(spec: &ParameterSpec) -> String {
    match (spec.min, spec.max) {
        (Some(min), Some(max)) => format!("{min} to {max}"),
        (Some(min), None) => format!(">= {min}"),
        (None, Some(max)) => format!("<= {max}"),
        (None, None) => "any".to_string(),
    }
}

fn entry(formula: Formula) -> CatalogEntry {
    CatalogEntry {
        id: formula.id(),
        title: formula.title(),
        result_label: formula.result_label(),
        kind: formula.result_kind(),
        parameters: formula.parameters(),
    }
}

/// Execute the catalog command.
pub fn execute(args: CatalogArgs, format: OutputFormat) -> Result<()> {
    match args.formula {
        Some(name) => {
            let formula: Formula = name.parse().map_err(CliError::InvalidInput)?;
            show_formula(formula, format)
        }
        None => list_formulas(format),
    }
}

fn list_formulas(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let entries: Vec<_> = Formula::all().iter().copied().map(entry).collect();
            print_json_value(&entries)
        }
        OutputFormat::Minimal => {
            for formula in Formula::all() {
                println!("{}", formula.id());
            }
            Ok(())
        }
        OutputFormat::Table | OutputFormat::Csv => {
            let rows: Vec<CatalogRow> = Formula::all()
                .iter()
                .map(|f| CatalogRow {
                    command: f.id(),
                    title: f.title(),
                    result: kind_name(f.result_kind()),
                    inputs: f
                        .parameters()
                        .iter()
                        .map(|p| p.key)
                        .collect::<Vec<_>>()
                        .join(", "),
                })
                .collect();
            if format == OutputFormat::Table {
                print_header("Formula Catalog");
            }
            print_output(&rows, format)
        }
    }
}

fn show_formula(formula: Formula, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json_value(&entry(formula)),
        OutputFormat::Minimal => {
            for spec in formula.parameters() {
                println!("{}={}", spec.key, spec.default);
            }
            Ok(())
        }
        OutputFormat::Table | OutputFormat::Csv => {
            let rows: Vec<ParameterRow> = formula
                .parameters()
                .iter()
                .map(|spec| ParameterRow {
                    flag: format!("--{}", spec.key),
                    label: spec.label,
                    default: spec.default,
                    range: range_of(spec),
                })
                .collect();
            if format == OutputFormat::Table {
                print_header(&format!(
                    "{} ({}: {})",
                    formula.title(),
                    formula.result_label(),
                    kind_name(formula.result_kind())
                ));
            }
            print_output(&rows, format)
        }
    }
}
