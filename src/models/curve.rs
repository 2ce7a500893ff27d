use serde::{Deserialize, Serialize};

/// A single sample of the profit curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitPoint {
    /// Reactor volume in m^3
    pub volume: f64,
    /// Profit rate in €/s
    pub profit: f64,
}

/// Profit sampled over a volume grid, in ascending volume order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfitCurve {
    pub points: Vec<ProfitPoint>,
}

impl ProfitCurve {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn profits(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.profit)
    }
}

/// The best sample found on a profit curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimumResult {
    pub optimal_volume: f64,
    pub max_profit: f64,
}
