//! Parallel evaluation of many industrial scenarios.
//!
//! Calculations share only read-only tables, so scenarios are evaluated
//! independently across threads. Output order matches input order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::calc::error::CalcError;
use crate::calc::industrial::{calculate_emissions, CalculationResult, TimePeriod};

/// One industrial calculation input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustrialScenario {
    pub industry: String,
    pub production: f64,
    pub time_period: TimePeriod,
    pub energy_source: String,
}

/// Evaluates all scenarios in parallel, preserving input order.
pub fn calculate_batch(
    scenarios: &[IndustrialScenario],
) -> Vec<Result<CalculationResult, CalcError>> {
    scenarios
        .par_iter()
        .map(|s| calculate_emissions(&s.industry, s.production, s.time_period, &s.energy_source))
        .collect()
}
