pub mod analysis;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod visualization;

#[cfg(feature = "web")]
pub mod web;

pub use analysis::{evaluate, find_optimum, OptimizationReport, Scenario};
pub use config::{load_config, ScenarioConfig};
pub use error::CstrError;
pub use io::ReportWriter;
pub use models::{
    EconomicParameters, OptimumResult, ProfitCurve, ProfitPoint, ReactorParameters, VolumeRange,
};
pub use visualization::AxisBounds;
