pub mod calc;
pub mod feed;
pub mod forecast;
pub mod numutils;

// Prelude
pub use calc::batch::{calculate_batch, IndustrialScenario};
pub use calc::catalog::{MaterialCatalog, MaterialRecord, ProductState};
pub use calc::error::CalcError;
pub use calc::industrial::{calculate_emissions, CalculationResult, TimePeriod};
pub use calc::packaging::{calculate_packaging, PackagingCalculationResult, PackagingRequest};
pub use feed::EmissionFeed;
pub use forecast::{forecast_emissions, EmissionForecast};
