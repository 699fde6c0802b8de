//! True internal rate of return for the flat-annuity cash-flow model.
//!
//! Kept separate from [`CalculatedMetrics::irr_approx_percent`](crate::metrics::CalculatedMetrics),
//! which is a single-period return and diverges from the real IRR at longer
//! horizons. The solver finds `r` such that
//! `-innovation_cost + Σ_{k=1..=years} annual_cash_flow / (1 + r)^k = 0`.
//!
//! Method: Newton steps, falling back to bisection whenever a step would
//! leave the current sign-change bracket.

use bizcase_core::{Metric, MetricError};

use crate::inputs::EconomicInputs;
use crate::metrics::{annual_cash_flow, net_present_value};

/// Root-finder settings.
#[derive(Debug, Clone, PartialEq)]
pub struct IrrSolverConfig {
    /// Lower end of the rate bracket (fraction; must be > -1).
    pub lower_bound: f64,
    /// Upper end of the rate bracket (fraction).
    pub upper_bound: f64,
    /// Starting rate for Newton steps.
    pub initial_guess: f64,
    /// Converged once a step moves the rate by less than this.
    pub tolerance: f64,
    pub max_iterations: u32,
}

impl Default for IrrSolverConfig {
    fn default() -> Self {
        Self {
            lower_bound: -0.99,
            upper_bound: 10.0,
            initial_guess: 0.1,
            tolerance: 1e-10,
            max_iterations: 200,
        }
    }
}

impl IrrSolverConfig {
    pub fn with_bracket(mut self, lower: f64, upper: f64) -> Self {
        self.lower_bound = lower;
        self.upper_bound = upper;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Internal rate of return for `inputs`, as a percent.
pub fn solve_irr(inputs: &EconomicInputs, config: &IrrSolverConfig) -> Metric {
    if inputs.innovation_cost == 0.0 {
        return Err(MetricError::ZeroInnovationCost);
    }
    if inputs.time_duration_years == 0 {
        return Err(MetricError::NonPositiveDuration);
    }

    let cash_flow = annual_cash_flow(inputs);
    let investment = inputs.innovation_cost;
    let years = inputs.time_duration_years;
    let npv = |rate: f64| net_present_value(cash_flow, investment, rate, years);

    let (mut lo, mut hi) = (config.lower_bound, config.upper_bound);
    if !(lo < hi) {
        return Err(MetricError::NoSignChange { lower: lo, upper: hi });
    }
    let f_lo = npv(lo);
    let f_hi = npv(hi);

    if f_lo == 0.0 {
        return Ok(lo * 100.0);
    }
    if f_hi == 0.0 {
        return Ok(hi * 100.0);
    }
    // An endpoint may be infinite once `(1 + lo)^k` underflows; only NaN hides the sign.
    if f_lo.is_nan() || f_hi.is_nan() || f_lo.signum() == f_hi.signum() {
        return Err(MetricError::NoSignChange { lower: lo, upper: hi });
    }

    let lo_negative = f_lo < 0.0;
    let mut rate = config.initial_guess.clamp(lo, hi);

    for _ in 0..config.max_iterations {
        let (value, slope) = npv_and_slope(cash_flow, investment, rate, years);
        if value == 0.0 {
            return Ok(rate * 100.0);
        }

        if (value < 0.0) == lo_negative {
            lo = rate;
        } else {
            hi = rate;
        }

        let newton = rate - value / slope;
        let next = if slope != 0.0 && newton > lo && newton < hi {
            newton
        } else {
            0.5 * (lo + hi)
        };

        if (next - rate).abs() < config.tolerance {
            return Ok(next * 100.0);
        }
        rate = next;
    }

    Err(MetricError::DidNotConverge {
        iterations: config.max_iterations,
    })
}

/// NPV at `rate` and its derivative with respect to `rate`.
fn npv_and_slope(cash_flow: f64, investment: f64, rate: f64, years: u32) -> (f64, f64) {
    let growth = 1.0 + rate;
    let mut factor = 1.0;
    let mut value = -investment;
    let mut slope = 0.0;
    for year in 1..=years {
        factor *= growth;
        value += cash_flow / factor;
        slope -= f64::from(year) * cash_flow / (factor * growth);
    }
    (value, slope)
}
