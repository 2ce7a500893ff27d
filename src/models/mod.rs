mod parameters;
mod range;
mod curve;

pub use parameters::{ReactorParameters, EconomicParameters};
pub use range::VolumeRange;
pub use curve::{ProfitCurve, ProfitPoint, OptimumResult};
