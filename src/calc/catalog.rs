//! Packaging material catalog.
//!
//! The catalog maps a material type (`plastics`, `paper`, ...) to subtypes
//! with virgin and recycled emission factors. It is normally loaded from an
//! external JSON source; when that fails the built-in catalog is
//! substituted, so an unavailable catalog is never a caller-facing error.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default price of one carbon credit in USD (packaging calculator).
pub const DEFAULT_CREDIT_PRICE_USD: f64 = 6.5;

/// One material subtype entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    /// kg CO₂e per unit amount (virgin material).
    pub emission_factor: f64,
    /// kg CO₂e per unit amount when sourced recycled.
    pub recycled_factor: f64,
    pub description: String,
    /// Measurement unit when it differs from kg (e.g. `kWh`, `liter`, `km`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Material type -> subtype -> factors, plus the catalog's credit price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialCatalog {
    materials: BTreeMap<String, BTreeMap<String, MaterialRecord>>,
    credit_price: f64,
}

impl MaterialCatalog {
    /// Parses the external catalog shape: a JSON object whose keys are
    /// material types mapping to subtype records, with an optional
    /// `carbon_credit_price` number alongside them.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, serde_json::Value> =
            serde_json::from_str(json).context("Failed to parse material catalog JSON")?;

        let mut materials = BTreeMap::new();
        let mut credit_price = DEFAULT_CREDIT_PRICE_USD;
        for (key, value) in raw {
            if key == "carbon_credit_price" {
                credit_price = value
                    .as_f64()
                    .context("carbon_credit_price must be a number")?;
                continue;
            }
            let subtypes: BTreeMap<String, MaterialRecord> = serde_json::from_value(value)
                .with_context(|| format!("Invalid subtype table for material: {key}"))?;
            materials.insert(key.to_ascii_lowercase(), subtypes);
        }

        Ok(Self {
            materials,
            credit_price,
        })
    }

    /// Reads a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Failed to parse catalog file: {}", path.display()))
    }

    /// Reads a catalog from a JSON file, substituting the built-in catalog
    /// if the file is missing or malformed.
    pub fn load_or_builtin(path: &Path) -> Self {
        match Self::load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("Warning: using built-in material catalog: {e:#}");
                Self::builtin()
            }
        }
    }

    /// Looks up a subtype record. The material type is matched
    /// case-insensitively; the subtype key is exact.
    pub fn resolve(&self, material_type: &str, subtype: &str) -> Option<&MaterialRecord> {
        self.materials
            .get(&material_type.trim().to_ascii_lowercase())?
            .get(subtype.trim())
    }

    /// All subtype records of one material type.
    pub fn subtypes(&self, material_type: &str) -> Option<&BTreeMap<String, MaterialRecord>> {
        self.materials.get(&material_type.trim().to_ascii_lowercase())
    }

    /// Price of one carbon credit in USD.
    pub fn credit_price(&self) -> f64 {
        self.credit_price
    }

    /// Whether a recycled variant is meaningful for this material type.
    ///
    /// Fuels, transportation and waste carry identical virgin/recycled
    /// factors and are never substituted.
    pub fn supports_recycling(material_type: &str) -> bool {
        !matches!(
            material_type.trim().to_ascii_lowercase().as_str(),
            "fuels" | "transportation" | "waste"
        )
    }

    /// The full built-in catalog (the fallback when no external source is
    /// available).
    pub fn builtin() -> Self {
        let mut catalog = Self {
            materials: BTreeMap::new(),
            credit_price: DEFAULT_CREDIT_PRICE_USD,
        };

        catalog.insert_all(
            "plastics",
            &[
                ("PET", 3.4, 1.5, "Polyethylene Terephthalate - bottles, containers", None),
                ("HDPE", 1.9, 0.7, "High-Density Polyethylene - milk jugs, detergent bottles", None),
                ("LDPE", 1.8, 0.65, "Low-Density Polyethylene - plastic bags, films", None),
                ("PP", 1.95, 0.8, "Polypropylene - yogurt containers, caps", None),
                ("PS", 3.1, 1.2, "Polystyrene - disposable cups, food containers", None),
                ("PVC", 2.4, 1.0, "Polyvinyl Chloride - pipes, packaging films", None),
                ("Bioplastics", 2.1, 0.9, "Plant-based plastic alternatives", None),
            ],
        );
        catalog.insert_all(
            "paper",
            &[
                ("Virgin_Cardboard", 0.91, 0.73, "New corrugated cardboard", None),
                ("Recycled_Cardboard", 0.73, 0.55, "Recycled corrugated cardboard", None),
                ("Virgin_Paper", 1.32, 0.95, "Virgin paper packaging", None),
                ("Recycled_Paper", 0.95, 0.75, "Recycled paper packaging", None),
            ],
        );
        catalog.insert_all(
            "glass",
            &[
                ("Clear_Glass", 0.85, 0.36, "Clear glass containers", None),
                ("Brown_Glass", 0.88, 0.37, "Brown glass containers", None),
                ("Green_Glass", 0.87, 0.37, "Green glass containers", None),
            ],
        );
        catalog.insert_all(
            "metals",
            &[
                ("Primary_Aluminum", 9.12, 0.46, "Virgin aluminum cans and foil", None),
                ("Recycled_Aluminum", 0.46, 0.46, "Recycled aluminum packaging", None),
                ("Steel", 1.85, 0.36, "Steel cans and containers", None),
            ],
        );
        catalog.insert_all(
            "fuels",
            &[
                ("Natural_Gas", 0.202, 0.202, "Natural gas - kg CO₂e per kWh", Some("kWh")),
                ("Diesel", 2.678, 2.678, "Diesel fuel - kg CO₂e per liter", Some("liter")),
                ("Gasoline", 2.31, 2.31, "Gasoline/petrol - kg CO₂e per liter", Some("liter")),
                ("Coal", 2.23, 2.23, "Coal - kg CO₂e per kg", Some("kg")),
                ("LPG", 1.51, 1.51, "Liquid Petroleum Gas - kg CO₂e per kg", Some("kg")),
            ],
        );
        catalog.insert_all(
            "transportation",
            &[
                ("Passenger_Car_Petrol", 0.171, 0.171, "Petrol car - kg CO₂e per km", Some("km")),
                ("Passenger_Car_Diesel", 0.168, 0.168, "Diesel car - kg CO₂e per km", Some("km")),
                ("Bus", 0.089, 0.089, "Bus transport - kg CO₂e per km", Some("km")),
                ("Train", 0.041, 0.041, "Train transport - kg CO₂e per km", Some("km")),
                ("Domestic_Flight", 0.255, 0.255, "Domestic flight - kg CO₂e per km", Some("km")),
                ("International_Flight", 0.195, 0.195, "International flight - kg CO₂e per km", Some("km")),
            ],
        );
        catalog.insert_all(
            "waste",
            &[
                ("Landfill", 0.525, 0.525, "Landfill waste - kg CO₂e per kg", Some("kg")),
                ("Recycling", 0.021, 0.021, "Recycled waste - kg CO₂e per kg", Some("kg")),
                ("Incineration", 0.025, 0.025, "Incinerated waste - kg CO₂e per kg", Some("kg")),
            ],
        );

        catalog
    }

    fn insert_all(
        &mut self,
        material_type: &str,
        entries: &[(&str, f64, f64, &str, Option<&str>)],
    ) {
        let subtypes = entries
            .iter()
            .map(|(name, emission, recycled, description, unit)| {
                (
                    name.to_string(),
                    MaterialRecord {
                        emission_factor: *emission,
                        recycled_factor: *recycled,
                        description: description.to_string(),
                        unit: unit.map(str::to_string),
                    },
                )
            })
            .collect();
        self.materials.insert(material_type.to_string(), subtypes);
    }
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Physical state of the packaged product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductState {
    Solid,
    Liquid,
    Gas,
}

impl fmt::Display for ProductState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProductState::Solid => "solid",
            ProductState::Liquid => "liquid",
            ProductState::Gas => "gas",
        };
        write!(f, "{s}")
    }
}

/// States valid for a material, or `None` when the material is
/// unconstrained (transportation and waste have no meaningful physical
/// state; unknown combinations are permitted).
pub fn compatible_states(material_type: &str, subtype: &str) -> Option<&'static [ProductState]> {
    use ProductState::*;
    const SOLID_ONLY: &[ProductState] = &[Solid];
    const SOLID_OR_LIQUID: &[ProductState] = &[Solid, Liquid];
    const LIQUID_OR_GAS: &[ProductState] = &[Liquid, Gas];

    match material_type.trim().to_ascii_lowercase().as_str() {
        "paper" | "glass" | "metals" => Some(SOLID_ONLY),
        "plastics" => Some(SOLID_OR_LIQUID),
        "fuels" => match subtype.trim() {
            "Coal" => Some(SOLID_ONLY),
            "Gasoline" | "Diesel" | "Natural_Gas" | "LPG" => Some(LIQUID_OR_GAS),
            _ => None,
        },
        _ => None,
    }
}

/// Whether `state` is valid for the given material.
pub fn state_compatible(material_type: &str, subtype: &str, state: ProductState) -> bool {
    match compatible_states(material_type, subtype) {
        Some(states) => states.contains(&state),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_resolve() {
        let catalog = MaterialCatalog::builtin();
        let pet = catalog.resolve("plastics", "PET").unwrap();
        assert_eq!(pet.emission_factor, 3.4);
        assert_eq!(pet.recycled_factor, 1.5);
        assert!(pet.unit.is_none());

        let gas = catalog.resolve("fuels", "Natural_Gas").unwrap();
        assert_eq!(gas.unit.as_deref(), Some("kWh"));
    }

    #[test]
    fn test_builtin_recycled_never_exceeds_virgin() {
        let catalog = MaterialCatalog::builtin();
        for ty in ["plastics", "paper", "glass", "metals", "fuels", "transportation", "waste"] {
            for (name, record) in catalog.subtypes(ty).unwrap() {
                assert!(
                    record.recycled_factor <= record.emission_factor,
                    "{ty}/{name}: recycled factor exceeds virgin factor"
                );
            }
        }
    }

    #[test]
    fn test_resolve_type_case_insensitive_subtype_exact() {
        let catalog = MaterialCatalog::builtin();
        assert!(catalog.resolve("Plastics", "PET").is_some());
        assert!(catalog.resolve("plastics", "pet").is_none());
        assert!(catalog.resolve("unobtainium", "PET").is_none());
    }

    #[test]
    fn test_from_json_str_external_shape() {
        let json = r#"{
            "plastics": {
                "PET": {"emission_factor": 3.4, "recycled_factor": 1.5, "description": "PET bottles"}
            },
            "fuels": {
                "Diesel": {"emission_factor": 2.678, "recycled_factor": 2.678, "description": "Diesel", "unit": "liter"}
            },
            "carbon_credit_price": 7.25
        }"#;
        let catalog = MaterialCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.credit_price(), 7.25);
        assert_eq!(catalog.resolve("plastics", "PET").unwrap().emission_factor, 3.4);
        assert_eq!(
            catalog.resolve("fuels", "Diesel").unwrap().unit.as_deref(),
            Some("liter")
        );
    }

    #[test]
    fn test_from_json_str_defaults_credit_price() {
        let json = r#"{"glass": {"Clear_Glass": {"emission_factor": 0.85, "recycled_factor": 0.36, "description": "Clear glass"}}}"#;
        let catalog = MaterialCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.credit_price(), DEFAULT_CREDIT_PRICE_USD);
    }

    #[test]
    fn test_load_or_builtin_falls_back() {
        let catalog = MaterialCatalog::load_or_builtin(Path::new("/nonexistent/catalog.json"));
        assert_eq!(catalog, MaterialCatalog::builtin());
    }

    #[test]
    fn test_supports_recycling() {
        assert!(MaterialCatalog::supports_recycling("plastics"));
        assert!(MaterialCatalog::supports_recycling("paper"));
        assert!(!MaterialCatalog::supports_recycling("fuels"));
        assert!(!MaterialCatalog::supports_recycling("transportation"));
        assert!(!MaterialCatalog::supports_recycling("waste"));
    }

    #[test]
    fn test_state_compatibility() {
        assert!(state_compatible("paper", "Virgin_Cardboard", ProductState::Solid));
        assert!(!state_compatible("paper", "Virgin_Cardboard", ProductState::Liquid));
        assert!(state_compatible("plastics", "PET", ProductState::Liquid));
        assert!(!state_compatible("plastics", "PET", ProductState::Gas));
        assert!(!state_compatible("fuels", "Gasoline", ProductState::Solid));
        assert!(state_compatible("fuels", "Coal", ProductState::Solid));
        // Unconstrained categories accept any state.
        assert!(state_compatible("waste", "Landfill", ProductState::Gas));
        assert!(state_compatible("transportation", "Bus", ProductState::Solid));
    }
}
