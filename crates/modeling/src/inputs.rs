//! Input records: the canonical economic inputs and the two shapes callers supply.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use bizcase_core::DomainError;

/// Canonical unit-economics record every calculation runs on.
///
/// Expected (not enforced): `unit_price > 0`, `discount_rate >= 0`.
/// Degenerate values surface as typed metric failures downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomicInputs {
    pub unit_price: f64,
    pub unit_cost: f64,
    pub expected_volume: f64,
    /// Annual fixed costs.
    pub fixed_costs: f64,
    /// Up-front investment (capex) recovered by the annual cash flow.
    pub innovation_cost: f64,
    /// Annual discount rate as a fraction (0.12 = 12%).
    pub discount_rate: f64,
    pub time_duration_years: u32,
}

impl EconomicInputs {
    /// Names of the numeric fields holding `NaN` or an infinity.
    pub fn non_finite_fields(&self) -> Vec<&'static str> {
        [
            ("unitPrice", self.unit_price),
            ("unitCost", self.unit_cost),
            ("expectedVolume", self.expected_volume),
            ("fixedCosts", self.fixed_costs),
            ("innovationCost", self.innovation_cost),
            ("discountRate", self.discount_rate),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_finite())
        .map(|(name, _)| name)
        .collect()
    }
}

/// How the itemized fixed-cost components of [`DetailedCostInputs`] are aggregated.
///
/// Two aggregation rules are in use and neither is authoritative, so both are
/// selectable by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixedCostProfile {
    /// `fixed_costs + overhead% of revenue + marketing% of revenue`.
    Aggregate,
    /// `R&D + marketing + admin + equipment + overhead% of revenue`.
    #[default]
    Itemized,
}

impl FixedCostProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            FixedCostProfile::Aggregate => "aggregate",
            FixedCostProfile::Itemized => "itemized",
        }
    }

    /// Total annual fixed costs for `detailed` under this profile.
    pub fn fixed_costs(&self, detailed: &DetailedCostInputs) -> f64 {
        match self {
            FixedCostProfile::Aggregate => {
                detailed.fixed_costs + detailed.overhead_cost() + detailed.marketing_cost()
            }
            FixedCostProfile::Itemized => {
                detailed.rnd_costs
                    + detailed.marketing_costs
                    + detailed.admin_costs
                    + detailed.equipment_costs
                    + detailed.overhead_cost()
            }
        }
    }
}

impl core::fmt::Display for FixedCostProfile {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FixedCostProfile {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aggregate" => Ok(FixedCostProfile::Aggregate),
            "itemized" => Ok(FixedCostProfile::Itemized),
            other => Err(DomainError::validation(format!(
                "unknown fixed cost profile `{other}` (expected `aggregate` or `itemized`)"
            ))),
        }
    }
}

/// Itemized cost breakdown ("detailed" input mode).
///
/// Absent components default to zero. Which fixed components are summed
/// depends on the [`FixedCostProfile`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetailedCostInputs {
    pub materials_per_unit: f64,
    pub labor_per_unit: f64,
    pub logistics_per_unit: f64,
    pub warranty_per_unit: f64,

    /// Flat fixed amount (used by [`FixedCostProfile::Aggregate`]).
    pub fixed_costs: f64,
    pub rnd_costs: f64,
    pub marketing_costs: f64,
    pub admin_costs: f64,
    pub equipment_costs: f64,

    /// Overhead as a percentage of revenue (5.0 = 5%).
    pub overhead_percentage: f64,
    /// Marketing as a percentage of revenue (used by [`FixedCostProfile::Aggregate`]).
    pub marketing_percentage: f64,

    pub unit_price: f64,
    pub expected_volume: f64,
    pub innovation_cost: f64,
    pub discount_rate: f64,
    pub time_duration_years: u32,

    /// Aggregation rule for this record; the caller's default applies when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<FixedCostProfile>,
}

impl DetailedCostInputs {
    /// Sum of the per-unit cost components.
    pub fn unit_cost(&self) -> f64 {
        self.materials_per_unit + self.labor_per_unit + self.logistics_per_unit + self.warranty_per_unit
    }

    /// Top-line revenue: `unit_price * expected_volume`.
    pub fn total_revenue(&self) -> f64 {
        self.unit_price * self.expected_volume
    }

    pub fn overhead_cost(&self) -> f64 {
        self.total_revenue() * self.overhead_percentage / 100.0
    }

    pub fn marketing_cost(&self) -> f64 {
        self.total_revenue() * self.marketing_percentage / 100.0
    }
}

/// Raw cost inputs in either of the two supported shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum CostInputs {
    /// Aggregate unit cost and fixed costs entered directly.
    Essential(EconomicInputs),
    /// Itemized components reconciled into [`EconomicInputs`].
    Detailed(DetailedCostInputs),
}

impl CostInputs {
    pub fn mode(&self) -> &'static str {
        match self {
            CostInputs::Essential(_) => "essential",
            CostInputs::Detailed(_) => "detailed",
        }
    }
}

impl From<EconomicInputs> for CostInputs {
    fn from(value: EconomicInputs) -> Self {
        CostInputs::Essential(value)
    }
}

impl From<DetailedCostInputs> for CostInputs {
    fn from(value: DetailedCostInputs) -> Self {
        CostInputs::Detailed(value)
    }
}
