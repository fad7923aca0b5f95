//! Next-period emission forecast.
//!
//! Builds on the industrial calculator: the current total is projected
//! forward with a sampled trend factor and paired with templated
//! recommendations. The caller supplies the RNG, keeping the projection
//! reproducible under a seeded generator.

use rand::Rng;
use serde::Serialize;

use crate::calc::error::CalcError;
use crate::calc::industrial::{calculate_emissions, TimePeriod};
use crate::calc::recommend::industrial_recommendations;
use crate::numutils::round2;

/// Direction of the projected emission change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

/// Forecast of the next period's emissions.
#[derive(Debug, Clone, Serialize)]
pub struct EmissionForecast {
    /// Current total emissions in tonnes CO₂e.
    pub current_emissions: f64,
    /// Projected next-period emissions in tonnes CO₂e.
    pub next_period_emissions: f64,
    /// Confidence in [0.75, 0.95].
    pub confidence: f64,
    pub trend: Trend,
    pub recommendations: Vec<String>,
}

fn classify_trend(trend_factor: f64) -> Trend {
    if trend_factor > 1.03 {
        Trend::Increasing
    } else if trend_factor < 0.97 {
        Trend::Decreasing
    } else {
        Trend::Stable
    }
}

/// Projects the next period's emissions for an industrial scenario.
///
/// The trend factor is sampled uniformly from [0.95, 1.08] (±8% variation
/// with a slight upward skew). Input validation matches
/// [`calculate_emissions`].
pub fn forecast_emissions(
    industry: &str,
    production: f64,
    time_period: TimePeriod,
    energy_source: &str,
    rng: &mut impl Rng,
) -> Result<EmissionForecast, CalcError> {
    let result = calculate_emissions(industry, production, time_period, energy_source)?;
    let current = result.calculations.total_emissions;

    let trend_factor = rng.gen_range(0.95..1.08);
    let confidence = rng.gen_range(0.75..0.95);

    let recommendations =
        industrial_recommendations(&result.industry, &result.energy_source, trend_factor);

    Ok(EmissionForecast {
        current_emissions: current,
        next_period_emissions: round2(current * trend_factor),
        confidence: round2(confidence),
        trend: classify_trend(trend_factor),
        recommendations,
    })
}
