//! Credit awards: emission-level tiers plus energy and efficiency bonuses.

use serde::Serialize;

use crate::calc::industrial::TimePeriod;

/// A credit award bracket keyed by total emissions.
///
/// Tiers are ordered ascending by `max_emission`; the first tier whose
/// `max_emission` is greater than or equal to the computed total emissions
/// is selected, so a boundary value belongs to the stricter tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AwardTier {
    /// Upper bound of total emissions (tonnes CO₂e) covered by this tier.
    pub max_emission: f64,
    /// Credits awarded outright for landing in this tier.
    pub credits: u64,
    /// Tier bonus rate (informational, used by display layers).
    pub bonus: f64,
    pub name: &'static str,
    /// Display color (hex).
    pub color: &'static str,
}

/// Award tiers in ascending emission order, terminated by a catch-all.
pub const AWARD_TIERS: &[AwardTier] = &[
    AwardTier {
        max_emission: 1.0,
        credits: 50,
        bonus: 0.2,
        name: "Eco Champion",
        color: "#10b981",
    },
    AwardTier {
        max_emission: 5.0,
        credits: 30,
        bonus: 0.15,
        name: "Green Leader",
        color: "#059669",
    },
    AwardTier {
        max_emission: 15.0,
        credits: 20,
        bonus: 0.1,
        name: "Sustainable",
        color: "#f59e0b",
    },
    AwardTier {
        max_emission: 50.0,
        credits: 10,
        bonus: 0.05,
        name: "Improving",
        color: "#f97316",
    },
    AwardTier {
        max_emission: 100.0,
        credits: 5,
        bonus: 0.0,
        name: "High Impact",
        color: "#ef4444",
    },
    AwardTier {
        max_emission: f64::INFINITY,
        credits: 0,
        bonus: 0.0,
        name: "Critical",
        color: "#dc2626",
    },
];

/// Returns the award tier for the given total emissions (tonnes CO₂e).
pub fn award_tier_for(total_emissions: f64) -> &'static AwardTier {
    AWARD_TIERS
        .iter()
        .find(|tier| total_emissions <= tier.max_emission)
        .unwrap_or(&AWARD_TIERS[AWARD_TIERS.len() - 1])
}

/// Bonus credits for using a cleaner energy source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyBonus {
    pub amount: u64,
    pub multiplier: f64,
    pub reason: &'static str,
}

const ENERGY_BONUSES: &[(&str, f64, &str)] = &[
    ("renewable", 0.25, "Clean Energy Champion"),
    ("nuclear", 0.2, "Low-Carbon Energy"),
    ("natural-gas", 0.1, "Cleaner Fossil Fuel"),
    ("mixed", 0.05, "Energy Diversity"),
    ("oil", 0.02, "Standard Practice"),
    ("coal", 0.0, "High Carbon Source"),
];

/// Computes the energy-source bonus from the required credit count.
///
/// The amount is floored, never rounded up, to avoid over-awarding.
/// Unrecognized sources earn the `coal` (zero) bonus.
pub fn energy_bonus(energy_source: &str, base_credits: u64) -> EnergyBonus {
    let key = energy_source.trim().to_ascii_lowercase();
    let entry = ENERGY_BONUSES
        .iter()
        .find(|(k, _, _)| *k == key)
        .unwrap_or(&ENERGY_BONUSES[ENERGY_BONUSES.len() - 1]);
    EnergyBonus {
        amount: (base_credits as f64 * entry.1).floor() as u64,
        multiplier: entry.1,
        reason: entry.2,
    }
}

/// Bonus credits for low emission intensity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EfficiencyBonus {
    pub amount: u64,
    pub reason: String,
}

/// Computes the efficiency bonus from emission intensity.
///
/// Intensity is total emissions divided by production. Yearly commitments
/// earn an additive +5 on top of any non-zero bonus.
pub fn efficiency_bonus(
    total_emissions: f64,
    production: f64,
    time_period: TimePeriod,
) -> EfficiencyBonus {
    let intensity = total_emissions / production;

    let (mut amount, reason) = if intensity < 0.3 {
        (15, "Ultra-Efficient Production")
    } else if intensity < 0.7 {
        (10, "High Efficiency")
    } else if intensity < 1.2 {
        (5, "Good Efficiency")
    } else {
        (0, "No Efficiency Bonus")
    };

    let mut reason = reason.to_string();
    if time_period == TimePeriod::Yearly && amount > 0 {
        amount += 5;
        reason.push_str(" + Long-term Commitment");
    }

    EfficiencyBonus { amount, reason }
}
