//! Typed formula inputs and a single evaluation entry point.

use serde::{Deserialize, Serialize};

use crate::catalog::{Formula, ParameterSpec, ResultKind};
use crate::error::EngineResult;
use crate::{options, returns, series};

/// Inputs for one formula evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "formula", rename_all = "kebab-case")]
pub enum FormulaRequest {
    /// DCF valuation of an expected annual profit.
    Valuation {
        /// Expected annual profit.
        profit: f64,
        /// Growth rate (%).
        growth_pct: f64,
        /// Discount rate (%).
        discount_pct: f64,
        /// Projection period in years.
        years: u32,
    },
    /// CAPM expected return.
    Capm {
        /// Risk-free rate (%).
        risk_free_pct: f64,
        /// Market return (%).
        market_return_pct: f64,
        /// Systematic risk.
        beta: f64,
    },
    /// Put price from put-call parity.
    #[serde(rename = "put-call")]
    PutCallParity {
        /// Call price.
        call: f64,
        /// Strike price.
        strike: f64,
        /// Underlying price.
        stock: f64,
        /// Interest rate (%).
        rate_pct: f64,
        /// Years to expiry.
        years: u32,
    },
    /// Investor utility.
    RiskAversion {
        /// Expected return (%).
        expected_return_pct: f64,
        /// Standard deviation (%).
        stddev_pct: f64,
        /// Risk aversion coefficient.
        aversion: f64,
    },
    /// Intrinsic value of a growing cash flow.
    #[serde(rename = "intrinsic")]
    IntrinsicValue {
        /// Initial cash flow.
        cash_flow: f64,
        /// Growth rate (%).
        growth_pct: f64,
        /// Discount rate (%).
        discount_pct: f64,
        /// Horizon in years.
        years: u32,
    },
    /// Real return after inflation.
    Inflation {
        /// Nominal return (%).
        nominal_pct: f64,
        /// Inflation rate (%).
        inflation_pct: f64,
    },
    /// Annual-coupon bond price.
    #[serde(rename = "bond")]
    Bonds {
        /// Face value.
        face: f64,
        /// Coupon rate (%).
        coupon_pct: f64,
        /// Years to maturity.
        years: u32,
        /// Discount rate (%).
        discount_pct: f64,
    },
    /// Return on invested capital.
    Roic {
        /// Net operating profit after tax.
        nopat: f64,
        /// Invested capital.
        invested_capital: f64,
    },
}

/// Converts a catalog default to a whole number of years.
fn default_years(formula: Formula) -> u32 {
    // Catalog defaults for years are small positive integers
    formula.default_of("years").round() as u32
}

impl FormulaRequest {
    /// Builds a request populated with the catalog defaults.
    pub fn with_defaults(formula: Formula) -> Self {
        let d = |key: &str| formula.default_of(key);
        match formula {
            Formula::Valuation => Self::Valuation {
                profit: d("profit"),
                growth_pct: d("growth"),
                discount_pct: d("discount"),
                years: default_years(formula),
            },
            Formula::Capm => Self::Capm {
                risk_free_pct: d("risk-free"),
                market_return_pct: d("market-return"),
                beta: d("beta"),
            },
            Formula::PutCallParity => Self::PutCallParity {
                call: d("call"),
                strike: d("strike"),
                stock: d("stock"),
                rate_pct: d("rate"),
                years: default_years(formula),
            },
            Formula::RiskAversion => Self::RiskAversion {
                expected_return_pct: d("expected-return"),
                stddev_pct: d("stddev"),
                aversion: d("aversion"),
            },
            Formula::IntrinsicValue => Self::IntrinsicValue {
                cash_flow: d("cash-flow"),
                growth_pct: d("growth"),
                discount_pct: d("discount"),
                years: default_years(formula),
            },
            Formula::Inflation => Self::Inflation {
                nominal_pct: d("nominal"),
                inflation_pct: d("inflation"),
            },
            Formula::Bonds => Self::Bonds {
                face: d("face"),
                coupon_pct: d("coupon"),
                years: default_years(formula),
                discount_pct: d("discount"),
            },
            Formula::Roic => Self::Roic {
                nopat: d("nopat"),
                invested_capital: d("invested-capital"),
            },
        }
    }

    /// The formula this request evaluates.
    pub fn formula(&self) -> Formula {
        match self {
            Self::Valuation { .. } => Formula::Valuation,
            Self::Capm { .. } => Formula::Capm,
            Self::PutCallParity { .. } => Formula::PutCallParity,
            Self::RiskAversion { .. } => Formula::RiskAversion,
            Self::IntrinsicValue { .. } => Formula::IntrinsicValue,
            Self::Inflation { .. } => Formula::Inflation,
            Self::Bonds { .. } => Formula::Bonds,
            Self::Roic { .. } => Formula::Roic,
        }
    }

    /// Input values paired with their catalog parameters, in catalog order.
    pub fn inputs(&self) -> Vec<(&'static ParameterSpec, f64)> {
        let values: Vec<f64> = match *self {
            Self::Valuation {
                profit,
                growth_pct,
                discount_pct,
                years,
            } => vec![profit, growth_pct, discount_pct, f64::from(years)],
            Self::Capm {
                risk_free_pct,
                market_return_pct,
                beta,
            } => vec![risk_free_pct, market_return_pct, beta],
            Self::PutCallParity {
                call,
                strike,
                stock,
                rate_pct,
                years,
            } => vec![call, strike, stock, rate_pct, f64::from(years)],
            Self::RiskAversion {
                expected_return_pct,
                stddev_pct,
                aversion,
            } => vec![expected_return_pct, stddev_pct, aversion],
            Self::IntrinsicValue {
                cash_flow,
                growth_pct,
                discount_pct,
                years,
            } => vec![cash_flow, growth_pct, discount_pct, f64::from(years)],
            Self::Inflation {
                nominal_pct,
                inflation_pct,
            } => vec![nominal_pct, inflation_pct],
            Self::Bonds {
                face,
                coupon_pct,
                years,
                discount_pct,
            } => vec![face, coupon_pct, f64::from(years), discount_pct],
            Self::Roic {
                nopat,
                invested_capital,
            } => vec![nopat, invested_capital],
        };
        self.formula().parameters().iter().zip(values).collect()
    }
}

/// Outcome of a formula evaluation, tagged with what it measures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormulaResult {
    /// Formula that produced the value.
    pub formula: Formula,
    /// What the value measures.
    pub kind: ResultKind,
    /// The value, in input currency for amounts and whole-number percent
    /// for percentages.
    pub value: f64,
}

impl FormulaResult {
    /// Returns true if the value is money and may be currency converted.
    pub fn is_amount(&self) -> bool {
        self.kind == ResultKind::Amount
    }
}

/// Evaluates a request.
///
/// # Example
///
/// ```rust
/// use vantage_formulas::{evaluate, FormulaRequest, ResultKind};
///
/// let request = FormulaRequest::Roic { nopat: 100.0, invested_capital: 1000.0 };
/// let result = evaluate(&request).unwrap();
/// assert_eq!(result.kind, ResultKind::Percent);
/// assert_eq!(result.value, 10.0);
/// ```
pub fn evaluate(request: &FormulaRequest) -> EngineResult<FormulaResult> {
    let value = match *request {
        FormulaRequest::Valuation {
            profit,
            growth_pct,
            discount_pct,
            years,
        } => series::dcf_valuation(profit, growth_pct, discount_pct, years)?,
        FormulaRequest::Capm {
            risk_free_pct,
            market_return_pct,
            beta,
        } => returns::capm_expected_return(risk_free_pct, market_return_pct, beta)?,
        FormulaRequest::PutCallParity {
            call,
            strike,
            stock,
            rate_pct,
            years,
        } => options::put_call_parity_put(call, strike, stock, rate_pct, years)?,
        FormulaRequest::RiskAversion {
            expected_return_pct,
            stddev_pct,
            aversion,
        } => returns::risk_aversion_utility(expected_return_pct, stddev_pct, aversion)?,
        FormulaRequest::IntrinsicValue {
            cash_flow,
            growth_pct,
            discount_pct,
            years,
        } => series::intrinsic_value(cash_flow, growth_pct, discount_pct, years)?,
        FormulaRequest::Inflation {
            nominal_pct,
            inflation_pct,
        } => returns::inflation_adjusted_real_return(nominal_pct, inflation_pct)?,
        FormulaRequest::Bonds {
            face,
            coupon_pct,
            years,
            discount_pct,
        } => series::bond_price(face, coupon_pct, years, discount_pct)?,
        FormulaRequest::Roic {
            nopat,
            invested_capital,
        } => returns::roic(nopat, invested_capital)?,
    };

    let formula = request.formula();
    Ok(FormulaResult {
        formula,
        kind: formula.result_kind(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DomainError;
    use approx::assert_relative_eq;

    #[test]
    fn test_every_default_request_evaluates() {
        for formula in Formula::all() {
            let request = FormulaRequest::with_defaults(*formula);
            assert_eq!(request.formula(), *formula);
            let result = evaluate(&request).unwrap();
            assert_eq!(result.kind, formula.result_kind());
            assert!(result.value.is_finite());
        }
    }

    #[test]
    fn test_default_bond_request() {
        let request = FormulaRequest::with_defaults(Formula::Bonds);
        assert_eq!(
            request,
            FormulaRequest::Bonds {
                face: 1000.0,
                coupon_pct: 5.0,
                years: 10,
                discount_pct: 4.0,
            }
        );
        let result = evaluate(&request).unwrap();
        assert!(result.is_amount());
        assert_relative_eq!(result.value, 1081.11, epsilon = 0.01);
    }

    #[test]
    fn test_percent_results_are_not_amounts() {
        let result = evaluate(&FormulaRequest::with_defaults(Formula::Capm)).unwrap();
        assert!(!result.is_amount());
        assert_eq!(result.value, 8.0);
    }

    #[test]
    fn test_domain_error_propagates() {
        let request = FormulaRequest::Inflation {
            nominal_pct: 10.0,
            inflation_pct: -100.0,
        };
        assert!(matches!(
            evaluate(&request),
            Err(DomainError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_request_from_json() {
        let json =
            r#"{"formula":"bond","face":1000.0,"coupon_pct":5.0,"years":10,"discount_pct":5.0}"#;
        let request: FormulaRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.formula(), Formula::Bonds);
        let result = evaluate(&request).unwrap();
        assert_relative_eq!(result.value, 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_inputs_follow_catalog_order() {
        let inputs = FormulaRequest::with_defaults(Formula::Bonds).inputs();
        let keys: Vec<&str> = inputs.iter().map(|(spec, _)| spec.key).collect();
        assert_eq!(keys, ["face", "coupon", "years", "discount"]);
        assert_eq!(inputs[2].1, 10.0);

        for formula in Formula::all() {
            let request = FormulaRequest::with_defaults(*formula);
            for (spec, value) in request.inputs() {
                assert_eq!(spec.default, value, "{formula:?} {}", spec.key);
            }
        }
    }

    #[test]
    fn test_evaluation_is_pure() {
        let request = FormulaRequest::with_defaults(Formula::Valuation);
        assert_eq!(evaluate(&request).unwrap(), evaluate(&request).unwrap());
    }
}
