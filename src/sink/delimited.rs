use crate::error::{Result, ScrapeError};
use crate::scraper::Report;
use crate::sink::ReportSink;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// CSV/TSV sink with minimal quoting.
///
/// Cells containing the delimiter, a quote or a line break are wrapped in
/// double quotes with embedded quotes doubled; everything else is written
/// verbatim.
#[derive(Debug, Clone, Copy)]
pub struct DelimitedSink {
    delimiter: char,
}

impl DelimitedSink {
    /// Comma-separated output
    pub fn csv() -> Self {
        Self { delimiter: ',' }
    }

    /// Tab-separated output
    pub fn tsv() -> Self {
        Self { delimiter: '\t' }
    }

    /// Output with a custom delimiter
    pub fn with_delimiter(delimiter: char) -> Self {
        Self { delimiter }
    }

    fn write_row<W: Write>(&self, mut w: W, row: &[String]) -> io::Result<()> {
        let mut first = true;
        for cell in row {
            if !first {
                write!(w, "{}", self.delimiter)?;
            } else {
                first = false;
            }
            if needs_quotes(cell, self.delimiter) {
                write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
            } else {
                write!(w, "{}", cell)?;
            }
        }
        writeln!(w)
    }
}

fn needs_quotes(cell: &str, delimiter: char) -> bool {
    cell.contains(delimiter) || cell.contains('"') || cell.contains('\n') || cell.contains('\r')
}

impl ReportSink for DelimitedSink {
    fn write_report(&self, report: &Report, dest: &Path) -> Result<()> {
        let sink_err =
            |e: io::Error| ScrapeError::Sink(format!("failed to write {}: {}", dest.display(), e));

        let file = File::create(dest).map_err(sink_err)?;
        let mut out = BufWriter::new(file);

        for row in report.table() {
            self.write_row(&mut out, row).map_err(sink_err)?;
        }

        out.flush().map_err(sink_err)
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
                vec!["with, comma".into(), "say \"hi\"".into()],
            ],
            iterations: 2,
        }
    }

    #[test]
    fn test_csv_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        DelimitedSink::csv().write_report(&sample_report(), &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines[0], "Name,Score");
        assert_eq!(lines[1], "A,1");
        assert_eq!(lines[2], "\"with, comma\",\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_tsv_does_not_quote_commas() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.tsv");

        DelimitedSink::tsv().write_report(&sample_report(), &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.lines().nth(2).unwrap().starts_with("with, comma\t"));
    }

    #[test]
    fn test_unwritable_destination_is_sink_error() {
        let err = DelimitedSink::csv()
            .write_report(&sample_report(), Path::new("/nonexistent/dir/report.csv"))
            .unwrap_err();

        assert!(matches!(err, ScrapeError::Sink(_)));
    }
}
