use crate::error::{Result, ScrapeError};
use crate::scraper::Report;
use crate::sink::ReportSink;
use std::path::Path;

/// Sink writing the report as pretty-printed JSON, including its metadata
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSink;

impl JsonSink {
    pub fn new() -> Self {
        Self
    }
}

impl ReportSink for JsonSink {
    fn write_report(&self, report: &Report, dest: &Path) -> Result<()> {
        let json = report
            .to_json()
            .map_err(|e| ScrapeError::Sink(format!("failed to serialize report: {}", e)))?;

        std::fs::write(dest, json)
            .map_err(|e| ScrapeError::Sink(format!("failed to write {}: {}", dest.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let report = Report {
            header: vec!["Name".into()],
            rows: vec![vec!["A".into()]],
            iterations: 1,
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        JsonSink::new().write_report(&report, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["header"][0], "Name");
        assert_eq!(value["rows"][0][0], "A");
        assert_eq!(value["iterations"], 1);
    }
}
