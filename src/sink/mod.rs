//! Report persistence module
//!
//! Sinks write a finished [`Report`] to durable storage, header row first.
//! The report stays in memory when a sink fails, so a caller can retry the
//! write or pick a different sink without rescraping.

pub mod delimited;
pub mod json;

pub use delimited::DelimitedSink;
pub use json::JsonSink;

use crate::error::Result;
use crate::scraper::Report;
use std::path::Path;

/// Writes a report to a destination path
pub trait ReportSink {
    /// Persist the report, header as row 0 and each data row after it
    fn write_report(&self, report: &Report, dest: &Path) -> Result<()>;
}
