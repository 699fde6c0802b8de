//! Input reconciliation: funnels both input shapes into [`EconomicInputs`].
//!
//! Pure and deterministic. Malformed numbers are not rejected here; a `NaN`
//! component flows through and is flagged by the metrics calculator.

use crate::inputs::{CostInputs, DetailedCostInputs, EconomicInputs, FixedCostProfile};

/// Reconcile itemized inputs using the record's own profile, or the default one.
pub fn reconcile(detailed: &DetailedCostInputs) -> EconomicInputs {
    reconcile_with(detailed, FixedCostProfile::default())
}

/// Reconcile itemized inputs; `fallback` applies when the record names no profile.
pub fn reconcile_with(detailed: &DetailedCostInputs, fallback: FixedCostProfile) -> EconomicInputs {
    let profile = detailed.profile.unwrap_or(fallback);

    EconomicInputs {
        unit_price: detailed.unit_price,
        unit_cost: detailed.unit_cost(),
        expected_volume: detailed.expected_volume,
        fixed_costs: profile.fixed_costs(detailed),
        innovation_cost: detailed.innovation_cost,
        discount_rate: detailed.discount_rate,
        time_duration_years: detailed.time_duration_years,
    }
}

impl CostInputs {
    /// Canonical inputs for either mode. Essential inputs pass through unchanged.
    pub fn reconcile(&self, fallback: FixedCostProfile) -> EconomicInputs {
        match self {
            CostInputs::Essential(inputs) => inputs.clone(),
            CostInputs::Detailed(detailed) => reconcile_with(detailed, fallback),
        }
    }
}
