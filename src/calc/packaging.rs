//! Packaging and transport emission calculator.
//!
//! Unit convention: material and transport emissions are computed and
//! reported in kg CO₂e; credits are tonne-denominated, so one credit
//! covers 1000 kg CO₂e. Transport factors are kg CO₂e per tonne-km.

use serde::{Deserialize, Serialize};

use crate::calc::catalog::{state_compatible, MaterialCatalog, ProductState};
use crate::calc::error::CalcError;
use crate::calc::factors::{resolve_with_fallback, FALLBACK_TRANSPORT_MODE, TRANSPORT_FACTORS};
use crate::calc::recommend::{packaging_recommendations, RecommendationInput};
use crate::numutils::round2;

/// kg CO₂e covered by one carbon credit.
pub const KG_PER_CREDIT: f64 = 1000.0;

/// Input to one packaging calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackagingRequest {
    pub material_type: String,
    pub material_subtype: String,
    /// Amount in the subtype's unit (kg unless the record says otherwise).
    pub amount: f64,
    pub state: ProductState,
    pub is_recycled: bool,
    /// Transport distance in km; zero or negative means no transport leg.
    pub transport_distance: f64,
    pub transport_mode: String,
}

/// Transport leg of a packaging result.
#[derive(Debug, Clone, Serialize)]
pub struct TransportBreakdown {
    pub mode: String,
    pub distance_km: f64,
    pub emissions_kg: f64,
}

/// Efficiency grade on the fixed intensity ladder.
///
/// Bucket bounds are half-open: an intensity of exactly 0.5 is an `A`,
/// not an `A+`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EfficiencyGrade {
    pub grade: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

/// Grades emission intensity (kg CO₂e per unit amount).
pub fn efficiency_grade(emissions_per_unit: f64) -> EfficiencyGrade {
    let (grade, label, color) = if emissions_per_unit < 0.5 {
        ("A+", "Excellent Efficiency", "#10b981")
    } else if emissions_per_unit < 1.0 {
        ("A", "Very Good Efficiency", "#059669")
    } else if emissions_per_unit < 2.0 {
        ("B", "Good Efficiency", "#f59e0b")
    } else if emissions_per_unit < 3.0 {
        ("C", "Fair Efficiency", "#f97316")
    } else if emissions_per_unit < 4.0 {
        ("D", "Poor Efficiency", "#ef4444")
    } else {
        ("F", "Very Poor Efficiency", "#dc2626")
    };
    EfficiencyGrade { grade, label, color }
}

/// Complete result of one packaging calculation.
#[derive(Debug, Clone, Serialize)]
pub struct PackagingCalculationResult {
    pub material_type: String,
    pub material_subtype: String,
    pub amount: f64,
    pub state: ProductState,
    pub is_recycled: bool,
    pub transport: TransportBreakdown,
    pub material_emissions_kg: f64,
    pub total_emissions_kg: f64,
    pub credits_needed: u64,
    pub credit_price: f64,
    pub credit_cost: f64,
    pub grade: EfficiencyGrade,
    pub recommendations: Vec<String>,
}

/// Calculates packaging emissions, credit cost and recommendations.
///
/// The material selector must resolve to a catalog entry and the product
/// state must be compatible with the material; unknown transport modes
/// fall back to `truck`.
pub fn calculate_packaging(
    catalog: &MaterialCatalog,
    request: &PackagingRequest,
) -> Result<PackagingCalculationResult, CalcError> {
    if !request.amount.is_finite() || request.amount <= 0.0 {
        return Err(CalcError::NonPositiveQuantity(request.amount));
    }

    let material_type = request.material_type.trim().to_ascii_lowercase();
    let subtype = request.material_subtype.trim().to_string();

    let record = catalog
        .resolve(&material_type, &subtype)
        .ok_or_else(|| CalcError::UnknownMaterial {
            material_type: material_type.clone(),
            subtype: subtype.clone(),
        })?;

    if !state_compatible(&material_type, &subtype, request.state) {
        return Err(CalcError::IncompatibleState {
            material_type,
            subtype,
            state: request.state.to_string(),
        });
    }

    let use_recycled = request.is_recycled && MaterialCatalog::supports_recycling(&material_type);
    let factor = if use_recycled {
        record.recycled_factor
    } else {
        record.emission_factor
    };

    let material_emissions = request.amount * factor;

    let transport_mode = request.transport_mode.trim().to_ascii_lowercase();
    let transport_emissions = if request.transport_distance > 0.0 {
        let per_tonne_km =
            resolve_with_fallback(TRANSPORT_FACTORS, &transport_mode, FALLBACK_TRANSPORT_MODE);
        request.amount / 1000.0 * request.transport_distance * per_tonne_km
    } else {
        0.0
    };

    let total_emissions = material_emissions + transport_emissions;

    // Tonne-denominated credits over kg emissions, with a floor of one.
    let credits_needed = ((total_emissions / KG_PER_CREDIT).ceil() as u64).max(1);
    let credit_price = catalog.credit_price();
    let credit_cost = credits_needed as f64 * credit_price;

    let grade = efficiency_grade(total_emissions / request.amount);

    let recommendations = packaging_recommendations(
        catalog,
        &RecommendationInput {
            material_type: &material_type,
            subtype: &subtype,
            amount: request.amount,
            use_recycled,
            transport_mode: &transport_mode,
            material_emissions_kg: material_emissions,
            transport_emissions_kg: transport_emissions,
            transport_distance: request.transport_distance,
        },
    );

    Ok(PackagingCalculationResult {
        material_type,
        material_subtype: subtype,
        amount: request.amount,
        state: request.state,
        is_recycled: request.is_recycled,
        transport: TransportBreakdown {
            mode: transport_mode,
            distance_km: request.transport_distance.max(0.0),
            emissions_kg: round2(transport_emissions),
        },
        material_emissions_kg: round2(material_emissions),
        total_emissions_kg: round2(total_emissions),
        credits_needed,
        credit_price,
        credit_cost: round2(credit_cost),
        grade,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pet_request() -> PackagingRequest {
        PackagingRequest {
            material_type: "plastics".to_string(),
            material_subtype: "PET".to_string(),
            amount: 10.0,
            state: ProductState::Solid,
            is_recycled: false,
            transport_distance: 0.0,
            transport_mode: "truck".to_string(),
        }
    }

    #[test]
    fn test_pet_material_emissions() {
        let catalog = MaterialCatalog::builtin();
        let r = calculate_packaging(&catalog, &pet_request()).unwrap();
        assert_eq!(r.material_emissions_kg, 34.0);
        assert_eq!(r.transport.emissions_kg, 0.0);
        assert_eq!(r.total_emissions_kg, 34.0);
        // 34 kg is well under a tonne but never less than one credit.
        assert_eq!(r.credits_needed, 1);
        assert_eq!(r.credit_cost, 6.5);
    }

    #[test]
    fn test_recycled_factor_applies() {
        let catalog = MaterialCatalog::builtin();
        let mut request = pet_request();
        request.is_recycled = true;
        let r = calculate_packaging(&catalog, &request).unwrap();
        assert_eq!(r.material_emissions_kg, 15.0);
    }

    #[test]
    fn test_recycled_flag_ignored_for_fuels() {
        let catalog = MaterialCatalog::builtin();
        let request = PackagingRequest {
            material_type: "fuels".to_string(),
            material_subtype: "Diesel".to_string(),
            amount: 100.0,
            state: ProductState::Liquid,
            is_recycled: true,
            transport_distance: 0.0,
            transport_mode: "truck".to_string(),
        };
        let r = calculate_packaging(&catalog, &request).unwrap();
        assert_eq!(r.material_emissions_kg, round2(100.0 * 2.678));
    }

    #[test]
    fn test_transport_term() {
        let catalog = MaterialCatalog::builtin();
        let mut request = pet_request();
        request.transport_distance = 500.0;
        let r = calculate_packaging(&catalog, &request).unwrap();
        // 10 kg over 500 km by truck: 0.01 t * 500 km * 0.12 = 0.6 kg
        assert_eq!(r.transport.emissions_kg, 0.6);
        assert_eq!(r.total_emissions_kg, 34.6);
    }

    #[test]
    fn test_unknown_transport_mode_falls_back_to_truck() {
        let catalog = MaterialCatalog::builtin();
        let mut request = pet_request();
        request.transport_distance = 500.0;
        request.transport_mode = "zeppelin".to_string();
        let r = calculate_packaging(&catalog, &request).unwrap();
        assert_eq!(r.transport.emissions_kg, 0.6);
    }

    #[test]
    fn test_negative_distance_means_no_transport_leg() {
        let catalog = MaterialCatalog::builtin();
        let mut request = pet_request();
        request.transport_distance = -100.0;
        let r = calculate_packaging(&catalog, &request).unwrap();
        assert_eq!(r.transport.emissions_kg, 0.0);
        assert_eq!(r.transport.distance_km, 0.0);
    }

    #[test]
    fn test_rejects_unknown_material() {
        let catalog = MaterialCatalog::builtin();
        let mut request = pet_request();
        request.material_subtype = "Unobtainium".to_string();
        let err = calculate_packaging(&catalog, &request).unwrap_err();
        assert!(matches!(err, CalcError::UnknownMaterial { .. }));
    }

    #[test]
    fn test_rejects_incompatible_state() {
        let catalog = MaterialCatalog::builtin();
        let mut request = pet_request();
        request.state = ProductState::Gas;
        let err = calculate_packaging(&catalog, &request).unwrap_err();
        assert!(matches!(err, CalcError::IncompatibleState { .. }));
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        let catalog = MaterialCatalog::builtin();
        let mut request = pet_request();
        request.amount = 0.0;
        assert!(matches!(
            calculate_packaging(&catalog, &request),
            Err(CalcError::NonPositiveQuantity(_))
        ));
    }

    #[test]
    fn test_credits_round_up_above_a_tonne() {
        let catalog = MaterialCatalog::builtin();
        let mut request = pet_request();
        request.amount = 500.0; // 500 * 3.4 = 1700 kg
        let r = calculate_packaging(&catalog, &request).unwrap();
        assert_eq!(r.total_emissions_kg, 1700.0);
        assert_eq!(r.credits_needed, 2);
    }

    #[test]
    fn test_grade_ladder_boundaries() {
        assert_eq!(efficiency_grade(0.49).grade, "A+");
        assert_eq!(efficiency_grade(0.5).grade, "A");
        assert_eq!(efficiency_grade(1.0).grade, "B");
        assert_eq!(efficiency_grade(2.5).grade, "C");
        assert_eq!(efficiency_grade(3.999).grade, "D");
        assert_eq!(efficiency_grade(4.0).grade, "F");
    }

    #[test]
    fn test_grade_on_result() {
        let catalog = MaterialCatalog::builtin();
        let r = calculate_packaging(&catalog, &pet_request()).unwrap();
        // 34 kg over 10 units -> 3.4 kg/unit -> D
        assert_eq!(r.grade.grade, "D");
    }

    #[test]
    fn test_recommendations_present_and_capped() {
        let catalog = MaterialCatalog::builtin();
        let r = calculate_packaging(&catalog, &pet_request()).unwrap();
        assert_eq!(r.recommendations.len(), 3);
    }
}
