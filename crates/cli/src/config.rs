//! Engine configuration from environment variables.
//!
//! Invalid values are logged and ignored; the defaults stay in effect.

use tracing::warn;

use bizcase_modeling::{EngineConfig, FixedCostProfile, IrrSolverConfig};

pub const FIXED_COST_PROFILE_VAR: &str = "BIZCASE_FIXED_COST_PROFILE";
pub const IRR_MAX_ITERATIONS_VAR: &str = "BIZCASE_IRR_MAX_ITERATIONS";
pub const IRR_TOLERANCE_VAR: &str = "BIZCASE_IRR_TOLERANCE";

/// Load configuration from the process environment.
pub fn from_env() -> EngineConfig {
    from_lookup(|key| std::env::var(key).ok())
}

/// Load configuration through `lookup` (key -> raw value).
pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> EngineConfig {
    let mut config = EngineConfig::default();

    if let Some(raw) = lookup(FIXED_COST_PROFILE_VAR) {
        match raw.parse::<FixedCostProfile>() {
            Ok(profile) => config = config.with_fixed_cost_profile(profile),
            Err(error) => warn!(var = FIXED_COST_PROFILE_VAR, %error, "ignoring invalid value"),
        }
    }

    let mut irr = IrrSolverConfig::default();

    if let Some(raw) = lookup(IRR_MAX_ITERATIONS_VAR) {
        match raw.trim().parse::<u32>() {
            Ok(n) if n > 0 => irr = irr.with_max_iterations(n),
            _ => warn!(var = IRR_MAX_ITERATIONS_VAR, value = %raw, "expected a positive integer; ignoring"),
        }
    }

    if let Some(raw) = lookup(IRR_TOLERANCE_VAR) {
        match raw.trim().parse::<f64>() {
            Ok(t) if t.is_finite() && t > 0.0 => irr = irr.with_tolerance(t),
            _ => warn!(var = IRR_TOLERANCE_VAR, value = %raw, "expected a positive number; ignoring"),
        }
    }

    config.with_irr_solver(irr)
}
