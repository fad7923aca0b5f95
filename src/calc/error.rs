use thiserror::Error;

/// Validation errors for calculation inputs.
///
/// Unknown industry, energy source and transport mode identifiers are not
/// errors; they resolve through documented fallback keys. A quantity that
/// is not a positive finite number, or a material selector with no catalog
/// entry, is rejected instead of silently producing nonsensical output.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CalcError {
    #[error("quantity must be a positive, finite number (got {0})")]
    NonPositiveQuantity(f64),
    #[error("unknown packaging material: {material_type}/{subtype}")]
    UnknownMaterial {
        material_type: String,
        subtype: String,
    },
    #[error("{state} state is not available for {material_type}/{subtype}")]
    IncompatibleState {
        material_type: String,
        subtype: String,
        state: String,
    },
}
