use std::path::Path;

use crate::analysis::OptimizationReport;
use crate::error::CstrError;

/// Write the full optimisation report (parameters, optimum, curve) as JSON.
pub fn write_json(
    report: &OptimizationReport,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), CstrError> {
    let content = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    std::fs::write(path.as_ref(), content)?;
    Ok(())
}

/// Read an optimisation report previously written with [`write_json`].
pub fn read_json(path: impl AsRef<Path>) -> Result<OptimizationReport, CstrError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Scenario;

    #[test]
    fn test_json_roundtrip() {
        let report = Scenario::default().optimize().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        write_json(&report, &path, true).unwrap();

        let loaded = read_json(&path).unwrap();
        assert_eq!(loaded.sample_count, 1200);
        assert_eq!(loaded.curve.len(), 1200);
        assert_eq!(loaded.scenario.reactor.flow_rate, 0.001);
    }

    #[test]
    fn test_pretty_output_is_indented() {
        let report = Scenario::default().optimize().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        write_json(&report, &path, true).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  \"scenario\""));
    }

    #[test]
    fn test_read_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(read_json(&path), Err(CstrError::Json(_))));
    }
}
