//! Industrial emission calculator.
//!
//! Pure function of its inputs plus the static factor tables: no state is
//! read or written, so concurrent calls are safe.

use serde::{Deserialize, Serialize};

use crate::calc::awards::{
    award_tier_for, efficiency_bonus, energy_bonus, AwardTier, EfficiencyBonus, EnergyBonus,
};
use crate::calc::error::CalcError;
use crate::calc::factors::{
    resolve_with_fallback, CREDIT_PRICE_USD, EMISSION_FACTORS, ENERGY_MULTIPLIERS,
    FALLBACK_ENERGY_SOURCE, FALLBACK_INDUSTRY,
};
use crate::numutils::round2;

/// Reporting period for a production figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimePeriod {
    Monthly,
    Yearly,
}

impl TimePeriod {
    /// Fraction of a year covered by the period.
    pub fn multiplier(self) -> f64 {
        match self {
            TimePeriod::Yearly => 1.0,
            TimePeriod::Monthly => 1.0 / 12.0,
        }
    }
}

/// Intermediate figures of the emission computation.
///
/// `base_emissions` and `total_emissions` are in tonnes CO₂e, rounded to
/// 2 decimals for display.
#[derive(Debug, Clone, Serialize)]
pub struct EmissionBreakdown {
    pub emission_factor: f64,
    pub energy_multiplier: f64,
    pub time_multiplier: f64,
    pub base_emissions: f64,
    pub total_emissions: f64,
}

/// Credits required to cover the computed emissions.
#[derive(Debug, Clone, Serialize)]
pub struct CreditRequirement {
    /// 1 credit = 1 tonne CO₂e, rounded up — never under-provision.
    pub needed: u64,
    pub cost: f64,
    pub price: f64,
}

/// Credits awarded back: tier award plus energy and efficiency bonuses.
#[derive(Debug, Clone, Serialize)]
pub struct CreditAwards {
    pub tier: &'static AwardTier,
    pub energy_bonus: EnergyBonus,
    pub efficiency_bonus: EfficiencyBonus,
    pub total_awarded: u64,
    pub value: f64,
}

/// Net position after offsetting required credits with awarded ones.
#[derive(Debug, Clone, Serialize)]
pub struct NetResult {
    pub credits_needed: u64,
    pub cost: f64,
    pub savings: f64,
}

/// Complete result of one industrial calculation.
///
/// Created fresh per call and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationResult {
    pub industry: String,
    pub production: f64,
    pub time_period: TimePeriod,
    pub energy_source: String,
    pub calculations: EmissionBreakdown,
    pub credits: CreditRequirement,
    pub awards: CreditAwards,
    pub net: NetResult,
}

/// Calculates emissions, credit requirements and awards for an industrial
/// production figure.
///
/// Unknown `industry` and `energy_source` identifiers resolve to the
/// `other` / `mixed` fallback factors. A `production` that is not a
/// positive finite number is rejected.
pub fn calculate_emissions(
    industry: &str,
    production: f64,
    time_period: TimePeriod,
    energy_source: &str,
) -> Result<CalculationResult, CalcError> {
    if !production.is_finite() || production <= 0.0 {
        return Err(CalcError::NonPositiveQuantity(production));
    }

    let emission_factor = resolve_with_fallback(EMISSION_FACTORS, industry, FALLBACK_INDUSTRY);
    let energy_multiplier =
        resolve_with_fallback(ENERGY_MULTIPLIERS, energy_source, FALLBACK_ENERGY_SOURCE);
    let time_multiplier = time_period.multiplier();

    // Full precision throughout; round only at the result boundary.
    let base_emissions = production * emission_factor * time_multiplier;
    let total_emissions = base_emissions * energy_multiplier;

    let credits_needed = total_emissions.ceil() as u64;
    let credit_cost = credits_needed as f64 * CREDIT_PRICE_USD;

    let tier = award_tier_for(total_emissions);
    let energy_bonus = energy_bonus(energy_source, credits_needed);
    let efficiency_bonus = efficiency_bonus(total_emissions, production, time_period);

    let total_awarded = tier.credits + energy_bonus.amount + efficiency_bonus.amount;
    let awarded_value = total_awarded as f64 * CREDIT_PRICE_USD;

    let net_credits_needed = credits_needed.saturating_sub(total_awarded);
    let net_cost = net_credits_needed as f64 * CREDIT_PRICE_USD;
    let savings = credit_cost - net_cost;

    Ok(CalculationResult {
        industry: industry.trim().to_ascii_lowercase(),
        production,
        time_period,
        energy_source: energy_source.trim().to_ascii_lowercase(),
        calculations: EmissionBreakdown {
            emission_factor,
            energy_multiplier,
            time_multiplier,
            base_emissions: round2(base_emissions),
            total_emissions: round2(total_emissions),
        },
        credits: CreditRequirement {
            needed: credits_needed,
            cost: round2(credit_cost),
            price: CREDIT_PRICE_USD,
        },
        awards: CreditAwards {
            tier,
            energy_bonus,
            efficiency_bonus,
            total_awarded,
            value: round2(awarded_value),
        },
        net: NetResult {
            credits_needed: net_credits_needed,
            cost: round2(net_cost),
            savings: round2(savings),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steel_monthly_mixed() {
        let r = calculate_emissions("steel", 100.0, TimePeriod::Monthly, "mixed").unwrap();
        assert_eq!(r.calculations.emission_factor, 1.9);
        assert_eq!(r.calculations.energy_multiplier, 1.1);
        assert!((r.calculations.time_multiplier - 1.0 / 12.0).abs() < 1e-12);
        assert_eq!(r.calculations.base_emissions, 15.83);
        assert_eq!(r.calculations.total_emissions, 17.42);
        assert_eq!(r.credits.needed, 18);
        assert_eq!(r.credits.cost, round2(18.0 * 6.97));
    }

    #[test]
    fn test_steel_monthly_mixed_awards() {
        let r = calculate_emissions("steel", 100.0, TimePeriod::Monthly, "mixed").unwrap();
        // 17.42 t lands in the 50 t tier.
        assert_eq!(r.awards.tier.name, "Improving");
        assert_eq!(r.awards.tier.credits, 10);
        // floor(18 * 0.05) = 0
        assert_eq!(r.awards.energy_bonus.amount, 0);
        // intensity 0.174 -> 15, no yearly top-up
        assert_eq!(r.awards.efficiency_bonus.amount, 15);
        assert_eq!(r.awards.total_awarded, 25);
        // Awards exceed the requirement: nothing left to buy.
        assert_eq!(r.net.credits_needed, 0);
        assert_eq!(r.net.cost, 0.0);
        assert_eq!(r.net.savings, r.credits.cost);
    }

    #[test]
    fn test_unknown_industry_falls_back() {
        let r = calculate_emissions("unknown-xyz", 10.0, TimePeriod::Yearly, "coal").unwrap();
        assert_eq!(r.calculations.emission_factor, 0.7);
    }

    #[test]
    fn test_unknown_energy_source_falls_back_to_mixed() {
        let r = calculate_emissions("steel", 10.0, TimePeriod::Yearly, "fusion").unwrap();
        assert_eq!(r.calculations.energy_multiplier, 1.1);
    }

    #[test]
    fn test_rejects_non_positive_production() {
        assert!(matches!(
            calculate_emissions("steel", 0.0, TimePeriod::Monthly, "coal"),
            Err(CalcError::NonPositiveQuantity(_))
        ));
        assert!(calculate_emissions("steel", -5.0, TimePeriod::Monthly, "coal").is_err());
        assert!(calculate_emissions("steel", f64::NAN, TimePeriod::Monthly, "coal").is_err());
        assert!(calculate_emissions("steel", f64::INFINITY, TimePeriod::Monthly, "coal").is_err());
    }

    #[test]
    fn test_credits_cover_emissions() {
        for production in [0.1, 1.0, 37.5, 1000.0] {
            let r = calculate_emissions("cement", production, TimePeriod::Yearly, "oil").unwrap();
            assert!(r.credits.needed as f64 >= r.calculations.total_emissions);
        }
    }

    #[test]
    fn test_net_credits_never_negative() {
        // Tiny emissions, large awards.
        let r = calculate_emissions("food", 0.5, TimePeriod::Monthly, "renewable").unwrap();
        assert!(r.awards.total_awarded > r.credits.needed);
        assert_eq!(r.net.credits_needed, 0);
    }

    #[test]
    fn test_deterministic() {
        let a = calculate_emissions("chemical", 42.0, TimePeriod::Yearly, "nuclear").unwrap();
        let b = calculate_emissions("chemical", 42.0, TimePeriod::Yearly, "nuclear").unwrap();
        assert_eq!(a.calculations.total_emissions, b.calculations.total_emissions);
        assert_eq!(a.credits.needed, b.credits.needed);
        assert_eq!(a.net.savings, b.net.savings);
    }

    #[test]
    fn test_tier_monotonic_in_production() {
        let mut last_credits = None;
        for production in [1000.0, 100.0, 10.0, 1.0, 0.1] {
            let r = calculate_emissions("steel", production, TimePeriod::Monthly, "coal").unwrap();
            let credits = r.awards.tier.credits;
            if let Some(last) = last_credits {
                assert!(credits >= last, "smaller production must not lower the tier");
            }
            last_credits = Some(credits);
        }
    }
}
