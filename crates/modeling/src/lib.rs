//! Business-case modeling engine.
//!
//! Pure domain logic only: no IO, no persistence, no formatting. Raw cost
//! inputs are reconciled into [`EconomicInputs`], from which investment
//! metrics, deterministic scenarios and a root-found IRR are derived.

pub mod engine;
pub mod inputs;
pub mod irr;
pub mod metrics;
pub mod reconcile;
pub mod scenario;

pub use engine::{BusinessCaseEngine, BusinessCaseReport, EngineConfig};
pub use inputs::{CostInputs, DetailedCostInputs, EconomicInputs, FixedCostProfile};
pub use irr::{IrrSolverConfig, solve_irr};
pub use metrics::{CalculatedMetrics, compute_metrics, net_present_value};
pub use reconcile::{reconcile, reconcile_with};
pub use scenario::{
    PRICE_DAMPING, ScenarioResult, ScenarioSet, ScenarioSpec, ScenarioSummary, project_scenario,
    project_scenarios, summarize,
};

pub use bizcase_core::{DomainError, Metric, MetricError, MetricWarning};
