//! # Vantage Formulas
//!
//! The valuation engine: a stateless library of closed-form finance formulas.
//!
//! - **Series**: [`discounted_series`] (DCF valuation, intrinsic value) and
//!   [`bond_price`]
//! - **Returns**: [`capm_expected_return`], [`inflation_adjusted_real_return`],
//!   [`risk_aversion_utility`], [`roic`]
//! - **Options**: [`put_call_parity_put`] and its inverse
//! - **Catalog**: [`Formula`] titles, labels and default inputs, plus the
//!   [`evaluate`] dispatcher over [`FormulaRequest`]
//!
//! ## Conventions
//!
//! Rates are whole-number percentages (`5.0` is 5%). Every function is pure:
//! the same inputs always produce the same output. Inputs for which a formula
//! is undefined, such as a -100% discount rate, produce a [`DomainError`]
//! instead of `inf` or `NaN`. Results are in the currency of the inputs;
//! conversion for display happens downstream and only for amounts.
//!
//! ## Example
//!
//! ```rust
//! use vantage_formulas::{bond_price, capm_expected_return};
//!
//! let price = bond_price(1000.0, 5.0, 10, 5.0).unwrap();
//! assert!((price - 1000.0).abs() < 1e-9);
//!
//! assert_eq!(capm_expected_return(2.0, 8.0, 1.0).unwrap(), 8.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod error;
mod guard;
pub mod options;
pub mod request;
pub mod returns;
pub mod series;

pub use catalog::{Formula, ParameterSpec, ResultKind};
pub use error::{DomainError, EngineResult};
pub use guard::MAX_YEARS;
pub use options::{put_call_parity_call, put_call_parity_put};
pub use request::{evaluate, FormulaRequest, FormulaResult};
pub use returns::{
    capm_expected_return, inflation_adjusted_real_return, risk_aversion_utility, roic,
};
pub use series::{bond_price, dcf_valuation, discounted_series, intrinsic_value};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::catalog::{Formula, ResultKind};
    pub use crate::error::{DomainError, EngineResult};
    pub use crate::request::{evaluate, FormulaRequest, FormulaResult};
}
