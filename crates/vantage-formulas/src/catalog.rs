//! The formula catalog: titles, parameter labels and default inputs.
//!
//! Defaults pre-populate inputs and ranges describe the usual input domain.
//! Neither is enforced by the formulas themselves.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a formula's output measures, which decides how it is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    /// Money in the currency of the inputs. The only kind that is converted.
    Amount,
    /// A whole-number percentage.
    Percent,
    /// A unitless score.
    Score,
}

/// One input of a formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterSpec {
    /// Machine name, matching the CLI flag.
    pub key: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Default input value.
    pub default: f64,
    /// Lower end of the usual input range, if any.
    pub min: Option<f64>,
    /// Upper end of the usual input range, if any.
    pub max: Option<f64>,
}

impl ParameterSpec {
    const fn free(key: &'static str, label: &'static str, default: f64) -> Self {
        Self {
            key,
            label,
            default,
            min: None,
            max: None,
        }
    }

    const fn ranged(
        key: &'static str,
        label: &'static str,
        default: f64,
        min: f64,
        max: f64,
    ) -> Self {
        Self {
            key,
            label,
            default,
            min: Some(min),
            max: Some(max),
        }
    }

    /// Returns true if `value` lies inside the usual range.
    pub fn in_range(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

/// Every formula the toolkit offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Formula {
    /// DCF valuation of an expected profit stream.
    Valuation,
    /// CAPM / security market line expected return.
    Capm,
    /// Put price implied by put-call parity.
    #[serde(rename = "put-call")]
    PutCallParity,
    /// Mean-variance investor utility.
    RiskAversion,
    /// Intrinsic value of a growing cash flow.
    #[serde(rename = "intrinsic")]
    IntrinsicValue,
    /// Inflation-adjusted real return.
    Inflation,
    /// Annual-coupon bond price.
    #[serde(rename = "bond")]
    Bonds,
    /// Return on invested capital.
    Roic,
}

const VALUATION_PARAMS: &[ParameterSpec] = &[
    ParameterSpec::free("profit", "Expected Annual Profit", 100.0),
    ParameterSpec::free("growth", "Annual Growth Rate (%)", 5.0),
    ParameterSpec::free("discount", "Discount Rate (%)", 10.0),
    ParameterSpec::ranged("years", "Projection Period (Years)", 5.0, 1.0, 10.0),
];

const CAPM_PARAMS: &[ParameterSpec] = &[
    ParameterSpec::free("risk-free", "Risk-Free Rate (%)", 2.0),
    ParameterSpec::free("market-return", "Market Return (%)", 8.0),
    ParameterSpec::ranged("beta", "Beta", 1.0, 0.0, 2.0),
];

const PUT_CALL_PARAMS: &[ParameterSpec] = &[
    ParameterSpec::free("call", "Call Price", 10.0),
    ParameterSpec::free("strike", "Strike Price", 100.0),
    ParameterSpec::free("stock", "Stock Price", 95.0),
    ParameterSpec::free("rate", "Interest Rate (%)", 5.0),
    ParameterSpec::ranged("years", "Time to Maturity (Years)", 1.0, 1.0, 10.0),
];

const RISK_AVERSION_PARAMS: &[ParameterSpec] = &[
    ParameterSpec::ranged("expected-return", "Expected Return (%)", 10.0, 0.0, 20.0),
    ParameterSpec::ranged("stddev", "Standard Deviation (%)", 5.0, 0.0, 20.0),
    ParameterSpec::ranged("aversion", "Risk Aversion Coefficient (A)", 3.0, 1.0, 10.0),
];

const INTRINSIC_PARAMS: &[ParameterSpec] = &[
    ParameterSpec::free("cash-flow", "Initial Cash Flow", 100.0),
    ParameterSpec::free("growth", "Growth Rate (%)", 5.0),
    ParameterSpec::free("discount", "Discount Rate (%)", 10.0),
    ParameterSpec::ranged("years", "Years", 5.0, 1.0, 10.0),
];

const INFLATION_PARAMS: &[ParameterSpec] = &[
    ParameterSpec::free("nominal", "Nominal Return (%)", 10.0),
    ParameterSpec::free("inflation", "Inflation Rate (%)", 3.0),
];

const BOND_PARAMS: &[ParameterSpec] = &[
    ParameterSpec::free("face", "Face Value", 1000.0),
    ParameterSpec::free("coupon", "Coupon Rate (%)", 5.0),
    ParameterSpec::ranged("years", "Years to Maturity", 10.0, 1.0, 30.0),
    ParameterSpec::free("discount", "Discount Rate (%)", 4.0),
];

const ROIC_PARAMS: &[ParameterSpec] = &[
    ParameterSpec::free("nopat", "NOPAT", 100.0),
    ParameterSpec::free("invested-capital", "Invested Capital", 1000.0),
];

impl Formula {
    /// All formulas, in menu order.
    pub fn all() -> &'static [Formula] {
        &[
            Formula::Valuation,
            Formula::Capm,
            Formula::PutCallParity,
            Formula::RiskAversion,
            Formula::IntrinsicValue,
            Formula::Inflation,
            Formula::Bonds,
            Formula::Roic,
        ]
    }

    /// Kebab-case identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Formula::Valuation => "valuation",
            Formula::Capm => "capm",
            Formula::PutCallParity => "put-call",
            Formula::RiskAversion => "risk-aversion",
            Formula::IntrinsicValue => "intrinsic",
            Formula::Inflation => "inflation",
            Formula::Bonds => "bond",
            Formula::Roic => "roic",
        }
    }

    /// Page title.
    pub fn title(&self) -> &'static str {
        match self {
            Formula::Valuation => "Valuation Model",
            Formula::Capm => "CAPM / SML",
            Formula::PutCallParity => "Put-Call Parity",
            Formula::RiskAversion => "Risk Aversion",
            Formula::IntrinsicValue => "Intrinsic Value Calculator",
            Formula::Inflation => "Inflation Adjusted Return",
            Formula::Bonds => "Bond Pricing",
            Formula::Roic => "Return on Invested Capital",
        }
    }

    /// Label of the computed value.
    pub fn result_label(&self) -> &'static str {
        match self {
            Formula::Valuation => "Estimated Valuation",
            Formula::Capm => "Expected Return",
            Formula::PutCallParity => "Implied Put Price",
            Formula::RiskAversion => "Investor Utility",
            Formula::IntrinsicValue => "Intrinsic Value",
            Formula::Inflation => "Real Return",
            Formula::Bonds => "Bond Price",
            Formula::Roic => "ROIC",
        }
    }

    /// Kind of the computed value.
    pub fn result_kind(&self) -> ResultKind {
        match self {
            Formula::Valuation
            | Formula::PutCallParity
            | Formula::IntrinsicValue
            | Formula::Bonds => ResultKind::Amount,
            Formula::Capm | Formula::Inflation | Formula::Roic => ResultKind::Percent,
            Formula::RiskAversion => ResultKind::Score,
        }
    }

    /// Inputs in display order.
    pub fn parameters(&self) -> &'static [ParameterSpec] {
        match self {
            Formula::Valuation => VALUATION_PARAMS,
            Formula::Capm => CAPM_PARAMS,
            Formula::PutCallParity => PUT_CALL_PARAMS,
            Formula::RiskAversion => RISK_AVERSION_PARAMS,
            Formula::IntrinsicValue => INTRINSIC_PARAMS,
            Formula::Inflation => INFLATION_PARAMS,
            Formula::Bonds => BOND_PARAMS,
            Formula::Roic => ROIC_PARAMS,
        }
    }

    /// Looks up an input by key.
    pub fn parameter(&self, key: &str) -> Option<&'static ParameterSpec> {
        self.parameters().iter().find(|p| p.key == key)
    }

    /// Default value of an input; `0.0` for an unknown key.
    pub fn default_of(&self, key: &str) -> f64 {
        self.parameter(key).map_or(0.0, |p| p.default)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Formula {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Formula::all()
            .iter()
            .copied()
            .find(|f| f.id() == needle)
            .ok_or_else(|| format!("Unknown formula: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_eight_formulas() {
        assert_eq!(Formula::all().len(), 8);
    }

    #[test]
    fn test_ids_parse_back() {
        for formula in Formula::all() {
            assert_eq!(formula.id().parse::<Formula>(), Ok(*formula));
        }
        assert!("npv".parse::<Formula>().is_err());
    }

    #[test]
    fn test_defaults_sit_inside_ranges() {
        for formula in Formula::all() {
            for param in formula.parameters() {
                assert!(
                    param.in_range(param.default),
                    "{}:{} default outside range",
                    formula.id(),
                    param.key
                );
            }
        }
    }

    #[test]
    fn test_result_kinds() {
        assert_eq!(Formula::Bonds.result_kind(), ResultKind::Amount);
        assert_eq!(Formula::Roic.result_kind(), ResultKind::Percent);
        assert_eq!(Formula::RiskAversion.result_kind(), ResultKind::Score);
    }

    #[test]
    fn test_default_lookup() {
        assert_eq!(Formula::Bonds.default_of("years"), 10.0);
        assert_eq!(Formula::Capm.default_of("beta"), 1.0);
        assert_eq!(Formula::Capm.default_of("missing"), 0.0);
    }

    #[test]
    fn test_range_check() {
        let beta = Formula::Capm.parameter("beta").unwrap();
        assert!(beta.in_range(1.5));
        assert!(!beta.in_range(-0.5));
        let profit = Formula::Valuation.parameter("profit").unwrap();
        assert!(profit.in_range(-1e9));
    }
}
