use std::path::Path;

use crate::analysis::OptimizationReport;
use crate::error::CstrError;
use crate::models::{ProfitCurve, ProfitPoint};

/// Write the sampled profit curve to a CSV file with `volume,profit` columns.
pub fn write_csv(report: &OptimizationReport, path: impl AsRef<Path>) -> Result<(), CstrError> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;
    for point in &report.curve.points {
        wtr.serialize(point)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read a `volume,profit` CSV back into a curve.
pub fn read_csv_curve(path: impl AsRef<Path>) -> Result<ProfitCurve, CstrError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;

    let points = rdr
        .deserialize()
        .collect::<Result<Vec<ProfitPoint>, _>>()?;
    Ok(ProfitCurve { points })
}
