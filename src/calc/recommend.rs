//! Templated optimization recommendations.
//!
//! These are deterministic string builders parameterized by the
//! calculation inputs and catalog data. There is no model behind them.

use crate::calc::catalog::MaterialCatalog;
use crate::numutils::round2;

/// Maximum recommendations returned for a packaging calculation.
const MAX_PACKAGING_RECOMMENDATIONS: usize = 3;

/// Maximum recommendations returned for an industrial forecast.
const MAX_INDUSTRIAL_RECOMMENDATIONS: usize = 5;

/// Inputs needed to build packaging recommendations.
pub(crate) struct RecommendationInput<'a> {
    pub material_type: &'a str,
    pub subtype: &'a str,
    pub amount: f64,
    pub use_recycled: bool,
    pub transport_mode: &'a str,
    pub material_emissions_kg: f64,
    pub transport_emissions_kg: f64,
    pub transport_distance: f64,
}

pub(crate) fn packaging_recommendations(
    catalog: &MaterialCatalog,
    input: &RecommendationInput,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    match input.material_type {
        "plastics" => {
            if !input.use_recycled {
                if let Some(record) = catalog.resolve(input.material_type, input.subtype) {
                    let savings =
                        input.amount * (record.emission_factor - record.recycled_factor);
                    recommendations.push(format!(
                        "Switch to recycled {} to save {:.2} kg CO₂e",
                        input.subtype,
                        round2(savings)
                    ));
                }
            }
            recommendations
                .push("Consider lighter packaging design to reduce material usage".to_string());
            recommendations.push("Implement a packaging return program for reuse".to_string());
        }
        "fuels" => {
            if matches!(input.subtype, "Natural_Gas" | "Diesel" | "Gasoline" | "Coal") {
                recommendations.push("Consider renewable energy alternatives".to_string());
                recommendations
                    .push("Improve energy efficiency to reduce consumption".to_string());
                if input.subtype == "Coal" {
                    recommendations.push(
                        "Switch to cleaner fuels like natural gas for a 60% emission reduction"
                            .to_string(),
                    );
                } else if matches!(input.subtype, "Diesel" | "Gasoline") {
                    recommendations
                        .push("Consider electric vehicles to reduce fuel emissions".to_string());
                }
            }
        }
        "transportation" => {
            if matches!(input.subtype, "Passenger_Car_Petrol" | "Passenger_Car_Diesel") {
                recommendations
                    .push("Consider carpooling to reduce per-person emissions".to_string());
                recommendations.push("Use public transportation when possible".to_string());
            } else if matches!(input.subtype, "Domestic_Flight" | "International_Flight") {
                let train_factor = catalog
                    .resolve("transportation", "Train")
                    .map(|r| r.emission_factor)
                    .unwrap_or(0.041);
                let savings = input.material_emissions_kg - train_factor * input.amount;
                recommendations.push(format!(
                    "Consider train travel instead to save {:.2} kg CO₂e",
                    round2(savings)
                ));
            }
            recommendations
                .push("Optimize route planning to minimize distance traveled".to_string());
        }
        "waste" => {
            if input.subtype == "Landfill" {
                if let Some(recycling) = catalog.resolve("waste", "Recycling") {
                    let savings =
                        input.material_emissions_kg - recycling.emission_factor * input.amount;
                    recommendations.push(format!(
                        "Switch to recycling to save {:.2} kg CO₂e",
                        round2(savings)
                    ));
                }
                recommendations.push("Implement waste reduction strategies".to_string());
            }
            recommendations.push("Consider composting for organic waste".to_string());
        }
        _ => {
            if input.transport_mode == "air" && input.transport_distance > 0.0 {
                let ship_emissions =
                    input.amount / 1000.0 * input.transport_distance * 0.014;
                let savings = input.transport_emissions_kg - ship_emissions;
                recommendations.push(format!(
                    "Switch from air to sea freight to save {:.2} kg CO₂e",
                    round2(savings)
                ));
            }
            if let Some(alternative) = cheapest_alternative(catalog, input) {
                recommendations.push(alternative);
            }
        }
    }

    if recommendations.len() < MAX_PACKAGING_RECOMMENDATIONS {
        recommendations
            .push("Consider carbon offsetting programs for unavoidable emissions".to_string());
        recommendations.push(
            "Track and report emissions to identify future reduction opportunities".to_string(),
        );
    }
    recommendations.truncate(MAX_PACKAGING_RECOMMENDATIONS);
    recommendations
}

/// Finds the lowest-factor alternative subtype in the same category.
fn cheapest_alternative(catalog: &MaterialCatalog, input: &RecommendationInput) -> Option<String> {
    let subtypes = catalog.subtypes(input.material_type)?;
    let current_factor = input.material_emissions_kg / input.amount;

    let (name, factor, description) = subtypes
        .iter()
        .filter(|(name, _)| name.as_str() != input.subtype)
        .map(|(name, record)| {
            let factor = if input.use_recycled {
                record.recycled_factor
            } else {
                record.emission_factor
            };
            (name, factor, record.description.as_str())
        })
        .filter(|(_, factor, _)| *factor < current_factor)
        .min_by(|a, b| a.1.total_cmp(&b.1))?;

    let savings = input.amount * (current_factor - factor);
    let short_description = description.split(" - ").next().unwrap_or(description);
    Some(format!(
        "Consider {} ({}) to save {:.2} kg CO₂e",
        name.replace('_', " "),
        short_description,
        round2(savings)
    ))
}

/// Recommendations for an industrial emission forecast, combining energy
/// source, industry-specific tips and the predicted trend.
pub(crate) fn industrial_recommendations(
    industry: &str,
    energy_source: &str,
    trend_factor: f64,
) -> Vec<String> {
    let mut recommendations: Vec<String> = Vec::new();

    match energy_source {
        "coal" | "oil" => {
            recommendations.push(
                "Switch to renewable energy sources to reduce emissions by 70-90%".to_string(),
            );
            recommendations
                .push("Consider hybrid energy systems as an intermediate step".to_string());
        }
        "natural-gas" => {
            recommendations
                .push("Upgrade to renewable energy for maximum emission reduction".to_string());
        }
        "mixed" => {
            recommendations
                .push("Optimize energy mix by increasing renewable percentage".to_string());
        }
        _ => {}
    }

    let industry_tips: &[&str] = match industry {
        "steel" => &[
            "Implement electric arc furnace technology",
            "Use recycled steel to reduce emissions",
        ],
        "cement" => &[
            "Adopt carbon capture and storage (CCS)",
            "Use alternative fuels in kilns",
        ],
        "textile" => &[
            "Implement water recycling systems",
            "Switch to organic/sustainable materials",
        ],
        "chemical" => &[
            "Optimize reaction processes",
            "Implement heat recovery systems",
        ],
        "other" => &[
            "Conduct energy audit",
            "Implement lean manufacturing processes",
        ],
        _ => &[],
    };
    recommendations.extend(industry_tips.iter().map(|tip| tip.to_string()));

    if trend_factor > 1.05 {
        recommendations
            .push("Emissions trending upward - immediate action recommended".to_string());
        recommendations.push("Review and optimize current processes".to_string());
    } else if trend_factor < 0.95 {
        recommendations
            .push("Good progress - maintain current efficiency measures".to_string());
    }

    recommendations.truncate(MAX_INDUSTRIAL_RECOMMENDATIONS);
    recommendations
}
