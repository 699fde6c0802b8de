//! Metrics calculator: canonical inputs to derived investment metrics.
//!
//! Formulas are applied without rounding; rounding is a presentation concern.
//! Each metric that can degenerate is guarded on its own, so a failure in one
//! (e.g. payback with zero innovation cost) never blocks the others.

use serde::{Deserialize, Serialize};

use bizcase_core::{Metric, MetricError, MetricWarning};

use crate::inputs::EconomicInputs;

/// Derived metrics for one set of [`EconomicInputs`].
///
/// Recomputed from scratch on every call; holds no state of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedMetrics {
    /// `unit_price - unit_cost`.
    pub gross_margin: f64,
    pub gross_margin_percent: Metric,
    /// Contribution-margin dollars (`gross_margin * expected_volume`), not revenue.
    pub total_contribution: f64,
    pub breakeven_volume: Metric,
    /// `total_contribution - fixed_costs`, held flat across the horizon.
    pub annual_cash_flow: f64,
    pub payback_period_years: Metric,
    #[serde(rename = "simpleROIPercent")]
    pub simple_roi_percent: Metric,
    pub npv: Metric,
    /// Single-period return `annual_cash_flow / innovation_cost * 100`.
    ///
    /// This is *not* an internal rate of return; see [`crate::irr::solve_irr`].
    pub irr_approx_percent: Metric,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<MetricWarning>,
}

/// Compute every metric for `inputs`.
pub fn compute_metrics(inputs: &EconomicInputs) -> CalculatedMetrics {
    let mut warnings: Vec<MetricWarning> = inputs
        .non_finite_fields()
        .into_iter()
        .map(MetricWarning::non_finite)
        .collect();
    let inputs_finite = warnings.is_empty();

    let gross_margin = inputs.unit_price - inputs.unit_cost;

    let gross_margin_percent = if is_valid_price(inputs.unit_price) {
        Ok(gross_margin / inputs.unit_price * 100.0)
    } else {
        Err(MetricError::InvalidPrice)
    };

    let total_contribution = gross_margin * inputs.expected_volume;

    let breakeven_volume = if gross_margin == 0.0 {
        Err(MetricError::ZeroMargin)
    } else {
        if gross_margin < 0.0 {
            warnings.push(MetricWarning::NegativeUnitMargin);
        }
        Ok(inputs.fixed_costs / gross_margin)
    };

    let annual_cash_flow = total_contribution - inputs.fixed_costs;
    if annual_cash_flow <= 0.0 {
        warnings.push(MetricWarning::NonPositiveCashFlow);
    }

    let payback_period_years = if inputs.innovation_cost == 0.0 {
        Err(MetricError::ZeroInnovationCost)
    } else if annual_cash_flow == 0.0 {
        Err(MetricError::ZeroCashFlow)
    } else {
        Ok(inputs.innovation_cost / annual_cash_flow)
    };

    let simple_roi_percent = per_innovation_cost(inputs, annual_cash_flow - inputs.innovation_cost);
    let irr_approx_percent = per_innovation_cost(inputs, annual_cash_flow);

    let npv = if is_valid_discount_rate(inputs.discount_rate) {
        Ok(net_present_value(
            annual_cash_flow,
            inputs.innovation_cost,
            inputs.discount_rate,
            inputs.time_duration_years,
        ))
    } else {
        Err(MetricError::InvalidDiscountRate)
    };

    if inputs_finite {
        let derived = [
            ("grossMargin", Ok(gross_margin)),
            ("grossMarginPercent", gross_margin_percent.clone()),
            ("totalContribution", Ok(total_contribution)),
            ("breakevenVolume", breakeven_volume.clone()),
            ("annualCashFlow", Ok(annual_cash_flow)),
            ("paybackPeriodYears", payback_period_years.clone()),
            ("simpleROIPercent", simple_roi_percent.clone()),
            ("npv", npv.clone()),
            ("irrApproxPercent", irr_approx_percent.clone()),
        ];
        warnings.extend(
            derived
                .into_iter()
                .filter(|(_, value)| matches!(value, Ok(v) if !v.is_finite()))
                .map(|(name, _)| MetricWarning::non_finite_result(name)),
        );
    }

    CalculatedMetrics {
        gross_margin,
        gross_margin_percent,
        total_contribution,
        breakeven_volume,
        annual_cash_flow,
        payback_period_years,
        simple_roi_percent,
        npv,
        irr_approx_percent,
        warnings,
    }
}

/// `annual_cash_flow` for `inputs` (contribution net of fixed costs).
pub fn annual_cash_flow(inputs: &EconomicInputs) -> f64 {
    (inputs.unit_price - inputs.unit_cost) * inputs.expected_volume - inputs.fixed_costs
}

/// NPV of a flat annuity: `-investment + Σ_{year=1..=years} cash_flow / (1 + rate)^year`.
///
/// With `years == 0` this is exactly `-investment`.
pub fn net_present_value(cash_flow: f64, investment: f64, rate: f64, years: u32) -> f64 {
    let growth = 1.0 + rate;
    let mut factor = 1.0;
    let mut npv = -investment;
    for _year in 1..=years {
        factor *= growth;
        npv += cash_flow / factor;
    }
    npv
}

/// `value / innovation_cost * 100`, undefined when nothing was invested.
fn per_innovation_cost(inputs: &EconomicInputs, value: f64) -> Metric {
    if inputs.innovation_cost == 0.0 {
        return Err(MetricError::ZeroInnovationCost);
    }
    Ok(value / inputs.innovation_cost * 100.0)
}

fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price > 0.0
}

fn is_valid_discount_rate(rate: f64) -> bool {
    rate.is_finite() && rate >= 0.0
}
