use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::analysis::{EconomicParameter, OptimizationReport};
use crate::error::CstrError;

/// Write the report as an Excel workbook with a "Profit Curve" sheet holding
/// every sample and a "Summary" sheet with parameters and the optimum.
pub fn write_excel(report: &OptimizationReport, path: impl AsRef<Path>) -> Result<(), CstrError> {
    let mut workbook = Workbook::new();

    let curve_sheet = workbook.add_worksheet();
    curve_sheet.set_name("Profit Curve")?;
    curve_sheet.write_string(0, 0, "volume")?;
    curve_sheet.write_string(0, 1, "profit")?;
    for (i, point) in report.curve.points.iter().enumerate() {
        let row = i as u32 + 1;
        curve_sheet.write_number(row, 0, point.volume)?;
        curve_sheet.write_number(row, 1, point.profit)?;
    }

    let scenario = &report.scenario;
    let mut rows: Vec<(String, f64)> = vec![
        ("feed_concentration".to_string(), scenario.reactor.feed_concentration),
        ("rate_constant".to_string(), scenario.reactor.rate_constant),
        ("flow_rate".to_string(), scenario.reactor.flow_rate),
        ("v_min".to_string(), scenario.range.min),
        ("v_max".to_string(), scenario.range.max),
    ];
    rows.extend(
        EconomicParameter::ALL
            .iter()
            .map(|p| (p.to_string(), p.get(&scenario.economics))),
    );
    rows.push(("sample_count".to_string(), report.sample_count as f64));
    rows.push(("optimal_volume".to_string(), report.optimum.optimal_volume));
    rows.push(("max_profit".to_string(), report.optimum.max_profit));

    let summary_sheet = workbook.add_worksheet();
    summary_sheet.set_name("Summary")?;
    summary_sheet.write_string(0, 0, "parameter")?;
    summary_sheet.write_string(0, 1, "value")?;
    for (i, (name, value)) in rows.iter().enumerate() {
        let row = i as u32 + 1;
        summary_sheet.write_string(row, 0, name)?;
        summary_sheet.write_number(row, 1, *value)?;
    }

    workbook.save(path.as_ref())?;
    Ok(())
}
