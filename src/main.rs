use anyhow::Result;
use carbontracker::{
    calculate_emissions, calculate_packaging, MaterialCatalog, PackagingRequest, ProductState,
    TimePeriod,
};

fn main() -> Result<()> {
    let result = calculate_emissions("steel", 100.0, TimePeriod::Monthly, "mixed")?;
    println!(
        "steel, 100 units/month on mixed energy: {} t CO₂e",
        result.calculations.total_emissions
    );
    println!(
        "credits needed: {} (${}), tier: {}, awarded back: {}, net cost: ${}",
        result.credits.needed,
        result.credits.cost,
        result.awards.tier.name,
        result.awards.total_awarded,
        result.net.cost
    );

    let catalog = MaterialCatalog::builtin();
    let request = PackagingRequest {
        material_type: "plastics".to_string(),
        material_subtype: "PET".to_string(),
        amount: 10.0,
        state: ProductState::Solid,
        is_recycled: false,
        transport_distance: 500.0,
        transport_mode: "truck".to_string(),
    };
    let packaging = calculate_packaging(&catalog, &request)?;
    println!(
        "10 kg virgin PET shipped 500 km: {} kg CO₂e, grade {}",
        packaging.total_emissions_kg, packaging.grade.grade
    );
    for recommendation in &packaging.recommendations {
        println!("  - {recommendation}");
    }

    Ok(())
}
