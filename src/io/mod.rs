mod csv_io;
mod json_io;
mod excel_io;

use std::path::Path;

use crate::analysis::OptimizationReport;
use crate::error::CstrError;

pub use csv_io::{read_csv_curve, write_csv};
pub use json_io::{read_json, write_json};
pub use excel_io::write_excel;

/// Trait for exporting an optimisation report to a file.
pub trait ReportWriter {
    fn write(&self, report: &OptimizationReport, path: &Path) -> Result<(), CstrError>;
}

/// CSV export of the sampled curve.
pub struct CsvFormat;

impl ReportWriter for CsvFormat {
    fn write(&self, report: &OptimizationReport, path: &Path) -> Result<(), CstrError> {
        write_csv(report, path)
    }
}

/// JSON export of the full report.
#[derive(Default)]
pub struct JsonFormat {
    pub pretty: bool,
}

impl ReportWriter for JsonFormat {
    fn write(&self, report: &OptimizationReport, path: &Path) -> Result<(), CstrError> {
        write_json(report, path, self.pretty)
    }
}

/// Excel (.xlsx) export of curve and summary.
pub struct ExcelFormat;

impl ReportWriter for ExcelFormat {
    fn write(&self, report: &OptimizationReport, path: &Path) -> Result<(), CstrError> {
        write_excel(report, path)
    }
}

/// Pick a writer from the file extension of `path`.
pub fn writer_for_path(path: &Path, pretty: bool) -> Result<Box<dyn ReportWriter>, CstrError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => Ok(Box::new(CsvFormat)),
        "json" => Ok(Box::new(JsonFormat { pretty })),
        "xlsx" => Ok(Box::new(ExcelFormat)),
        _ => Err(CstrError::ParseError(format!(
            "Unsupported export format: .{ext}. Use .csv, .json, or .xlsx"
        ))),
    }
}
