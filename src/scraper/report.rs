use serde::Serialize;

/// Final result of one scrape session.
///
/// Holds the header captured from the first snapshot and the deduplicated
/// data rows in the order they were first observed. `iterations` counts the
/// row snapshots consumed before convergence; convergence means the last
/// snapshot revealed no new row keys, which a stalled scroll is
/// indistinguishable from, so callers wanting to sanity-check completeness
/// can compare the iteration count against their expectations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Column titles from the header row
    pub header: Vec<String>,

    /// Deduplicated data rows in first-seen order
    pub rows: Vec<Vec<String>>,

    /// Number of row snapshots consumed, including the converging one
    pub iterations: usize,
}

impl Report {
    /// Create a report with a header and no data rows
    pub fn new(header: Vec<String>) -> Self {
        Self { header, rows: Vec::new(), iterations: 0 }
    }

    /// Number of data rows (the header is not counted)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Iterate the full table: header first, then each data row
    pub fn table(&self) -> impl Iterator<Item = &[String]> {
        std::iter::once(self.header.as_slice()).chain(self.rows.iter().map(Vec::as_slice))
    }

    /// Serialize the report to pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> Report {
        Report {
            header: vec!["Name".into(), "Score".into()],
            rows: vec![
                vec!["A".into(), "1".into()],
                vec!["B".into(), "2".into()],
            ],
            iterations: 3,
        }
    }

    #[test]
    fn test_table_puts_header_first() {
        let report = sample_report();
        let table: Vec<_> = report.table().collect();

        assert_eq!(table.len(), 3);
        assert_eq!(table[0], ["Name", "Score"]);
        assert_eq!(table[1], ["A", "1"]);
    }

    #[test]
    fn test_row_count_excludes_header() {
        assert_eq!(sample_report().row_count(), 2);
    }

    #[test]
    fn test_to_json() {
        let json = sample_report().to_json().unwrap();
        assert!(json.contains("\"header\""));
        assert!(json.contains("\"Score\""));
        assert!(json.contains("\"iterations\": 3"));
    }
}
