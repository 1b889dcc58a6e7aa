//! Error types for formula evaluation.

use thiserror::Error;

/// A specialized Result type for formula evaluation.
pub type EngineResult<T> = Result<T, DomainError>;

/// An input for which a formula has no defined result.
///
/// Returned instead of letting a zero denominator or an overflow surface as
/// `inf` or `NaN`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A denominator evaluated to zero (for example a rate of -100%).
    #[error("{formula}: division by zero ({parameter} = {value})")]
    DivisionByZero {
        /// Formula being evaluated.
        formula: &'static str,
        /// Parameter that produced the zero denominator.
        parameter: &'static str,
        /// The offending input value.
        value: f64,
    },

    /// An input was NaN or infinite.
    #[error("{formula}: {parameter} must be finite, got {value}")]
    NonFiniteInput {
        /// Formula being evaluated.
        formula: &'static str,
        /// Name of the parameter.
        parameter: &'static str,
        /// The offending input value.
        value: f64,
    },

    /// The horizon was zero or too large to evaluate.
    #[error("{formula}: horizon must be between 1 and {max} years, got {years}")]
    InvalidHorizon {
        /// Formula being evaluated.
        formula: &'static str,
        /// The rejected horizon.
        years: u32,
        /// Largest supported horizon.
        max: u32,
    },

    /// The result overflowed to a non-finite value.
    #[error("{formula}: result is undefined for these inputs")]
    Undefined {
        /// Formula being evaluated.
        formula: &'static str,
    },
}

impl DomainError {
    /// Name of the formula that rejected its inputs.
    #[must_use]
    pub fn formula(&self) -> &'static str {
        match self {
            Self::DivisionByZero { formula, .. }
            | Self::NonFiniteInput { formula, .. }
            | Self::InvalidHorizon { formula, .. }
            | Self::Undefined { formula } => formula,
        }
    }
}
