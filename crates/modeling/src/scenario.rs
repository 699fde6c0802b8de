//! Scenario projector: deterministic volume multipliers with fixed weights.
//!
//! Scenarios are data ([`ScenarioSpec`]), not code branches. Probabilities are
//! constants, not sampled from any distribution.

use serde::{Deserialize, Serialize};

use bizcase_core::{DomainError, DomainResult, Metric, MetricError};

use crate::inputs::EconomicInputs;

/// Share of the volume multiplier's deviation from 1.0 that carries into price.
pub const PRICE_DAMPING: f64 = 0.1;

const PROBABILITY_TOTAL: f64 = 100.0;
const PROBABILITY_EPSILON: f64 = 1e-9;

/// `(name, multiplier, probability %)` for the standard three-scenario set.
const STANDARD_SCENARIOS: [(&str, f64, f64); 3] = [
    ("Conservative", 0.8, 25.0),
    ("Base Case", 1.0, 50.0),
    ("Optimistic", 1.3, 25.0),
];

/// One scenario definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub name: String,
    /// Volume scaling factor (1.0 = expected volume).
    pub multiplier: f64,
    /// Weight in percent.
    pub probability: f64,
}

impl ScenarioSpec {
    pub fn new(name: impl Into<String>, multiplier: f64, probability: f64) -> Self {
        Self {
            name: name.into(),
            multiplier,
            probability,
        }
    }
}

/// Outcome of projecting one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    pub name: String,
    pub multiplier: f64,
    pub probability: f64,
    pub adjusted_volume: f64,
    pub adjusted_price: f64,
    /// `adjusted_price - unit_cost`; unit cost does not move with volume.
    pub gross_margin: f64,
    pub contribution: f64,
    /// `(contribution - fixed_costs - innovation_cost) / innovation_cost * 100`.
    pub roi: Metric,
}

/// Probability-weighted view over a projected scenario set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSummary {
    pub expected_contribution: f64,
    /// Undefined if any scenario ROI is undefined.
    pub expected_roi: Metric,
    pub total_probability: f64,
}

/// Ordered, validated set of scenarios plus the price-damping factor.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSet {
    scenarios: Vec<ScenarioSpec>,
    price_damping: f64,
}

impl Default for ScenarioSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl ScenarioSet {
    /// Conservative (0.8, 25%) → Base Case (1.0, 50%) → Optimistic (1.3, 25%).
    pub fn standard() -> Self {
        Self {
            scenarios: STANDARD_SCENARIOS
                .iter()
                .map(|&(name, multiplier, probability)| ScenarioSpec::new(name, multiplier, probability))
                .collect(),
            price_damping: PRICE_DAMPING,
        }
    }

    /// Build a custom set. Probabilities must sum to 100.
    pub fn new(scenarios: Vec<ScenarioSpec>) -> DomainResult<Self> {
        if scenarios.is_empty() {
            return Err(DomainError::validation("scenario set cannot be empty"));
        }

        for spec in &scenarios {
            if spec.name.trim().is_empty() {
                return Err(DomainError::validation("scenario name cannot be empty"));
            }
            if !(spec.multiplier.is_finite() && spec.multiplier >= 0.0) {
                return Err(DomainError::validation(format!(
                    "scenario `{}` multiplier must be a finite non-negative number",
                    spec.name
                )));
            }
            if !(spec.probability.is_finite() && spec.probability >= 0.0) {
                return Err(DomainError::validation(format!(
                    "scenario `{}` probability must be a finite non-negative number",
                    spec.name
                )));
            }
        }

        let total: f64 = scenarios.iter().map(|s| s.probability).sum();
        if (total - PROBABILITY_TOTAL).abs() > PROBABILITY_EPSILON {
            return Err(DomainError::invariant(format!(
                "scenario probabilities must sum to 100 (got {total})"
            )));
        }

        Ok(Self {
            scenarios,
            price_damping: PRICE_DAMPING,
        })
    }

    pub fn with_price_damping(mut self, price_damping: f64) -> DomainResult<Self> {
        if !price_damping.is_finite() {
            return Err(DomainError::validation("price damping must be finite"));
        }
        self.price_damping = price_damping;
        Ok(self)
    }

    pub fn scenarios(&self) -> &[ScenarioSpec] {
        &self.scenarios
    }

    pub fn price_damping(&self) -> f64 {
        self.price_damping
    }

    /// Project every scenario, in set order.
    pub fn project(&self, inputs: &EconomicInputs) -> Vec<ScenarioResult> {
        self.scenarios
            .iter()
            .map(|spec| project_scenario(spec, inputs, self.price_damping))
            .collect()
    }
}

/// Project the standard three scenarios, in fixed order.
pub fn project_scenarios(inputs: &EconomicInputs) -> [ScenarioResult; 3] {
    STANDARD_SCENARIOS.map(|(name, multiplier, probability)| {
        project_scenario(
            &ScenarioSpec::new(name, multiplier, probability),
            inputs,
            PRICE_DAMPING,
        )
    })
}

/// Project a single scenario.
pub fn project_scenario(spec: &ScenarioSpec, inputs: &EconomicInputs, price_damping: f64) -> ScenarioResult {
    let adjusted_volume = inputs.expected_volume * spec.multiplier;
    let adjusted_price = inputs.unit_price * (1.0 + (spec.multiplier - 1.0) * price_damping);
    let gross_margin = adjusted_price - inputs.unit_cost;
    let contribution = gross_margin * adjusted_volume;

    let roi = if inputs.innovation_cost == 0.0 {
        Err(MetricError::ZeroInnovationCost)
    } else {
        Ok((contribution - inputs.fixed_costs - inputs.innovation_cost) / inputs.innovation_cost * 100.0)
    };

    ScenarioResult {
        name: spec.name.clone(),
        multiplier: spec.multiplier,
        probability: spec.probability,
        adjusted_volume,
        adjusted_price,
        gross_margin,
        contribution,
        roi,
    }
}

/// Probability-weighted expected contribution and ROI.
pub fn summarize(results: &[ScenarioResult]) -> ScenarioSummary {
    let total_probability: f64 = results.iter().map(|r| r.probability).sum();
    let expected_contribution: f64 = results
        .iter()
        .map(|r| r.contribution * r.probability / PROBABILITY_TOTAL)
        .sum();
    let expected_roi: Metric = results
        .iter()
        .map(|r| r.roi.clone().map(|roi| roi * r.probability / PROBABILITY_TOTAL))
        .sum();

    ScenarioSummary {
        expected_contribution,
        expected_roi,
        total_probability,
    }
}
