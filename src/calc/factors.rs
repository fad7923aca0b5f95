//! Static emission factor tables.
//!
//! All lookups go through [`resolve_with_fallback`] so the tolerant-default
//! policy (unknown key resolves to a designated fallback key) is explicit
//! and testable rather than implicit per call site.

/// Market price of one carbon credit in USD (industrial calculator).
pub const CREDIT_PRICE_USD: f64 = 6.97;

/// Emission factors per industry in tonnes CO₂e per production unit.
pub const EMISSION_FACTORS: &[(&str, f64)] = &[
    ("steel", 1.9),
    ("cement", 0.9),
    ("textile", 0.5),
    ("chemical", 1.2),
    ("food", 0.3),
    ("automotive", 2.1),
    ("electronics", 1.5),
    ("paper", 0.8),
    ("mining", 2.3),
    ("other", 0.7),
];

/// Fallback key for unrecognized industries.
pub const FALLBACK_INDUSTRY: &str = "other";

/// Multiplicative factors per energy source, applied to base emissions.
pub const ENERGY_MULTIPLIERS: &[(&str, f64)] = &[
    ("coal", 1.0),
    ("oil", 0.8),
    ("natural-gas", 0.6),
    ("renewable", 0.1),
    ("nuclear", 0.05),
    ("mixed", 1.1),
];

/// Fallback key for unrecognized energy sources.
pub const FALLBACK_ENERGY_SOURCE: &str = "mixed";

/// Transport emission factors in kg CO₂e per tonne-km.
pub const TRANSPORT_FACTORS: &[(&str, f64)] = &[
    ("truck", 0.12),
    ("ship", 0.014),
    ("air", 0.5),
    ("rail", 0.04),
];

/// Fallback key for unrecognized transport modes.
pub const FALLBACK_TRANSPORT_MODE: &str = "truck";

fn lookup(table: &[(&str, f64)], key: &str) -> Option<f64> {
    let key = key.trim().to_ascii_lowercase();
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Resolves `key` in `table`, falling back to `fallback_key` when absent.
///
/// Keys are matched case-insensitively. The fallback key is present in
/// every table above (asserted by tests), so the trailing default is
/// unreachable for the built-in tables.
pub fn resolve_with_fallback(table: &[(&str, f64)], key: &str, fallback_key: &str) -> f64 {
    lookup(table, key)
        .or_else(|| lookup(table, fallback_key))
        .unwrap_or(0.0)
}
