//! Non-fatal flags raised alongside computed metrics.

use serde::{Deserialize, Serialize};

/// A metric was computed, but its value signals something the caller must
/// surface rather than display as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MetricWarning {
    /// Unit cost exceeds unit price; breakeven volume is negative.
    NegativeUnitMargin,

    /// Contribution does not cover fixed costs; payback period is negative.
    NonPositiveCashFlow,

    /// An input field is `NaN` or infinite (e.g. a blank form field coerced upstream).
    NonFiniteInput { field: String },

    /// Finite inputs overflowed a derived value (e.g. price × volume past `f64::MAX`).
    /// JSON has no infinity, so such a value serializes as `null`.
    NonFiniteResult { metric: String },
}

impl MetricWarning {
    pub fn non_finite(field: impl Into<String>) -> Self {
        Self::NonFiniteInput {
            field: field.into(),
        }
    }

    pub fn non_finite_result(metric: impl Into<String>) -> Self {
        Self::NonFiniteResult {
            metric: metric.into(),
        }
    }
}

impl core::fmt::Display for MetricWarning {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MetricWarning::NegativeUnitMargin => {
                f.write_str("unit cost exceeds unit price (loss-making unit economics)")
            }
            MetricWarning::NonPositiveCashFlow => {
                f.write_str("annual cash flow is negative; investment is never paid back")
            }
            MetricWarning::NonFiniteInput { field } => {
                write!(f, "input field `{field}` is not a finite number")
            }
            MetricWarning::NonFiniteResult { metric } => {
                write!(f, "derived value `{metric}` overflowed to a non-finite number")
            }
        }
    }
}
