use serde::{Deserialize, Serialize};

use super::optimizer::{find_optimum, sample_count};
use super::profit::{evaluate, ProfitBreakdown};
use super::sweep::{sweep, EconomicParameter, SweepPoint};
use crate::error::CstrError;
use crate::models::{
    EconomicParameters, OptimumResult, ProfitCurve, ReactorParameters, VolumeRange,
};

/// Immutable snapshot of everything the profit model needs.
///
/// Front ends own their editable state and build a fresh `Scenario` whenever
/// a parameter changes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Scenario {
    pub reactor: ReactorParameters,
    pub economics: EconomicParameters,
    pub range: VolumeRange,
}

/// Result of one optimisation, ready to be rendered or exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationReport {
    pub scenario: Scenario,
    pub sample_count: usize,
    pub optimum: OptimumResult,
    pub curve: ProfitCurve,
}

impl Scenario {
    pub fn new(reactor: ReactorParameters, economics: EconomicParameters, range: VolumeRange) -> Self {
        Self {
            reactor,
            economics,
            range,
        }
    }

    /// Profit rate at a single volume.
    pub fn evaluate(&self, volume: f64) -> Result<f64, CstrError> {
        evaluate(volume, &self.reactor, &self.economics)
    }

    /// All model terms at a single volume.
    pub fn breakdown(&self, volume: f64) -> Result<ProfitBreakdown, CstrError> {
        ProfitBreakdown::compute(volume, &self.reactor, &self.economics)
    }

    /// Sample the profit curve over the scenario's range and locate its maximum.
    pub fn optimize(&self) -> Result<OptimizationReport, CstrError> {
        let (curve, optimum) = find_optimum(&self.range, &self.reactor, &self.economics)?;
        Ok(OptimizationReport {
            scenario: *self,
            sample_count: sample_count(self.range.max),
            optimum,
            curve,
        })
    }

    /// Optimum as a function of one economic parameter.
    pub fn sweep(
        &self,
        parameter: EconomicParameter,
        lower: f64,
        upper: f64,
        steps: usize,
    ) -> Result<Vec<SweepPoint>, CstrError> {
        sweep(
            &self.range,
            &self.reactor,
            &self.economics,
            parameter,
            lower,
            upper,
            steps,
        )
    }
}
