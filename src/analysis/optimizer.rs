use tracing::debug;

use super::profit::evaluate;
use crate::error::CstrError;
use crate::models::{
    EconomicParameters, OptimumResult, ProfitCurve, ProfitPoint, ReactorParameters, VolumeRange,
};

/// Grid density: samples per m^3 of maximum volume.
pub const SAMPLES_PER_UNIT_VOLUME: f64 = 200.0;
/// Floor on the number of samples, applied to small ranges.
pub const MIN_SAMPLES: usize = 200;
/// Ceiling on the number of samples, reached at a maximum volume of 1000 m^3.
/// Larger ranges are rejected rather than allocating an unbounded grid.
pub const MAX_SAMPLES: usize = 200_000;

/// Number of grid points used for a range whose upper bound is `max_volume`.
pub fn sample_count(max_volume: f64) -> usize {
    // `as` saturates, so huge or negative products clamp instead of wrapping.
    let scaled = (max_volume * SAMPLES_PER_UNIT_VOLUME).floor() as usize;
    scaled.max(MIN_SAMPLES)
}

/// Uniformly spaced volumes covering `range`, both endpoints included.
pub fn sample_volumes(range: &VolumeRange) -> Result<Vec<f64>, CstrError> {
    range.validate()?;
    let count = sample_count(range.max);
    if count > MAX_SAMPLES {
        return Err(CstrError::InvalidRange(format!(
            "maximum volume {} needs {count} samples, limit is {MAX_SAMPLES}",
            range.max
        )));
    }
    let step = (range.max - range.min) / (count - 1) as f64;

    let mut volumes: Vec<f64> = (0..count).map(|i| range.min + i as f64 * step).collect();
    if let Some(last) = volumes.last_mut() {
        *last = range.max;
    }
    Ok(volumes)
}

/// Sample the profit model over `range` and pick the most profitable volume.
///
/// Ties go to the smallest volume: the scan keeps the first maximum it meets.
pub fn find_optimum(
    range: &VolumeRange,
    reactor: &ReactorParameters,
    economics: &EconomicParameters,
) -> Result<(ProfitCurve, OptimumResult), CstrError> {
    let volumes = sample_volumes(range)?;

    let points = volumes
        .into_iter()
        .map(|volume| {
            evaluate(volume, reactor, economics).map(|profit| ProfitPoint { volume, profit })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut best = points[0];
    for point in &points[1..] {
        if point.profit > best.profit {
            best = *point;
        }
    }

    let optimum = OptimumResult {
        optimal_volume: best.volume,
        max_profit: best.profit,
    };
    debug!(
        samples = points.len(),
        optimal_volume = optimum.optimal_volume,
        max_profit = optimum.max_profit,
        "profit curve sampled"
    );

    Ok((ProfitCurve { points }, optimum))
}
