mod profit;
mod optimizer;
mod sweep;
mod scenario;

pub use profit::{conversion_factor, evaluate, ProfitBreakdown};
pub use optimizer::{find_optimum, sample_count, sample_volumes, MAX_SAMPLES, MIN_SAMPLES, SAMPLES_PER_UNIT_VOLUME};
pub use sweep::{sweep, EconomicParameter, SweepPoint, MAX_SWEEP_STEPS};
pub use scenario::{OptimizationReport, Scenario};
