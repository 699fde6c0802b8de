//! Engine facade: reconcile, compute, project, and solve in one call.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use bizcase_core::Metric;

use crate::inputs::{CostInputs, EconomicInputs, FixedCostProfile};
use crate::irr::{IrrSolverConfig, solve_irr};
use crate::metrics::{CalculatedMetrics, compute_metrics};
use crate::scenario::{ScenarioResult, ScenarioSet, ScenarioSummary, summarize};

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EngineConfig {
    /// Applied to detailed inputs that do not name a profile.
    pub fixed_cost_profile: FixedCostProfile,
    pub scenarios: ScenarioSet,
    pub irr: IrrSolverConfig,
}

impl EngineConfig {
    pub fn with_fixed_cost_profile(mut self, profile: FixedCostProfile) -> Self {
        self.fixed_cost_profile = profile;
        self
    }

    pub fn with_scenarios(mut self, scenarios: ScenarioSet) -> Self {
        self.scenarios = scenarios;
        self
    }

    pub fn with_irr_solver(mut self, irr: IrrSolverConfig) -> Self {
        self.irr = irr;
        self
    }
}

/// Everything the engine derives from one set of cost inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessCaseReport {
    /// Canonical inputs after reconciliation.
    pub inputs: EconomicInputs,
    pub metrics: CalculatedMetrics,
    pub scenarios: Vec<ScenarioResult>,
    pub summary: ScenarioSummary,
    /// Root-found internal rate of return (percent).
    pub irr_percent: Metric,
}

/// Stateless evaluator; holds only immutable configuration, so one instance
/// can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct BusinessCaseEngine {
    config: EngineConfig,
}

impl BusinessCaseEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate `inputs` from scratch.
    pub fn evaluate(&self, inputs: &CostInputs) -> BusinessCaseReport {
        let span = tracing::debug_span!("bizcase.evaluate", mode = inputs.mode());
        let _enter = span.enter();

        let canonical = inputs.reconcile(self.config.fixed_cost_profile);
        debug!(
            unit_cost = canonical.unit_cost,
            fixed_costs = canonical.fixed_costs,
            "inputs reconciled"
        );

        let metrics = compute_metrics(&canonical);
        for warning in &metrics.warnings {
            warn!(%warning, "metric warning");
        }

        let scenarios = self.config.scenarios.project(&canonical);
        let summary = summarize(&scenarios);
        debug!(scenarios = scenarios.len(), "scenarios projected");

        let irr_percent = solve_irr(&canonical, &self.config.irr);
        if let Err(error) = &irr_percent {
            debug!(%error, "internal rate of return undefined");
        }

        BusinessCaseReport {
            inputs: canonical,
            metrics,
            scenarios,
            summary,
            irr_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::DetailedCostInputs;

    fn detailed() -> DetailedCostInputs {
        DetailedCostInputs {
            materials_per_unit: 500.0,
            labor_per_unit: 200.0,
            logistics_per_unit: 60.0,
            warranty_per_unit: 40.0,
            fixed_costs: 150_000.0,
            rnd_costs: 80_000.0,
            marketing_costs: 50_000.0,
            admin_costs: 30_000.0,
            equipment_costs: 16_000.0,
            overhead_percentage: 2.0,
            marketing_percentage: 3.0,
            unit_price: 1200.0,
            expected_volume: 1000.0,
            innovation_cost: 100_000.0,
            discount_rate: 0.12,
            time_duration_years: 5,
            profile: None,
        }
    }

    #[test]
    fn configured_profile_applies_to_detailed_inputs() {
        let itemized = BusinessCaseEngine::default().evaluate(&detailed().into());
        let aggregate = BusinessCaseEngine::new(
            EngineConfig::default().with_fixed_cost_profile(FixedCostProfile::Aggregate),
        )
        .evaluate(&detailed().into());

        assert_eq!(itemized.inputs.fixed_costs, 200_000.0);
        assert_eq!(aggregate.inputs.fixed_costs, 210_000.0);
    }

    #[test]
    fn both_modes_converge_on_the_same_report() {
        let engine = BusinessCaseEngine::default();
        let from_detailed = engine.evaluate(&detailed().into());
        let from_essential = engine.evaluate(&CostInputs::Essential(from_detailed.inputs.clone()));

        assert_eq!(from_detailed, from_essential);
    }

    #[test]
    fn report_keeps_approximation_and_true_irr_apart() {
        let report = BusinessCaseEngine::default().evaluate(&detailed().into());

        assert_eq!(report.metrics.irr_approx_percent, Ok(200.0));
        let irr = report.irr_percent.unwrap();
        assert!((irr - 199.165).abs() < 0.01, "irr = {irr}");
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BusinessCaseEngine>();
    }
}
