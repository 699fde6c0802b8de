//! Error model for the business-case engine.
//!
//! Two layers:
//! - [`MetricError`]: a single derived metric could not be computed. Carried
//!   *inside* output records so one degenerate metric never blocks another.
//! - [`DomainError`]: configuration or scenario-set validation failures.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used for configuration/validation paths.
pub type DomainResult<T> = Result<T, DomainError>;

/// Outcome of one derived metric: a finite value, or the reason it is undefined.
pub type Metric = Result<f64, MetricError>;

/// Why a derived metric is undefined for the given inputs.
///
/// Each variant replaces a `NaN`/`Infinity` the raw formula would otherwise
/// produce. Checked before the affected metric is computed.
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MetricError {
    /// Unit price is zero, negative, or not a finite number.
    #[error("unit price must be a finite positive number")]
    InvalidPrice,

    /// Unit price equals unit cost; breakeven volume is unbounded.
    #[error("gross margin is zero")]
    ZeroMargin,

    /// Innovation cost is zero; ratios against it are undefined.
    #[error("innovation cost is zero")]
    ZeroInnovationCost,

    /// Time horizon has no years to discount over.
    #[error("time duration must be at least one year")]
    NonPositiveDuration,

    /// Contribution exactly covers fixed costs; the investment is never paid back.
    #[error("annual cash flow is zero")]
    ZeroCashFlow,

    /// Discount rate is negative or not a finite number.
    #[error("discount rate must be a finite non-negative number")]
    InvalidDiscountRate,

    /// The NPV function has no sign change inside the search bracket.
    #[error("no internal rate of return within [{lower}, {upper}]")]
    NoSignChange { lower: f64, upper: f64 },

    /// Root finder exhausted its iteration budget.
    #[error("rate solver did not converge after {iterations} iterations")]
    DidNotConverge { iterations: u32 },
}

/// Validation failure for engine configuration and scenario definitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}
