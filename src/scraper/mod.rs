//! Incremental scrape loop
//!
//! Virtualized list widgets only render the rows currently in the viewport,
//! so one snapshot never holds the whole list. The scraper repeatedly
//! captures a snapshot, extracts the visible rows, deduplicates them by each
//! row's first cell, and scrolls, until a snapshot contributes no key it has
//! not already seen. Consecutive scroll positions overlap, which makes the
//! empty novel-key delta a reliable end-of-list signal regardless of list
//! length or overlap window size.

pub mod report;

pub use report::Report;

use crate::device::CaptureDevice;
use crate::error::Result;
use crate::extract::{self, WidgetClasses};
use indexmap::IndexSet;

/// Scrapes a virtualized list UI through a capture device.
///
/// The scraper itself holds only configuration; all per-session state (seen
/// keys, accumulated rows) lives in a [`ScrapeSession`] created inside each
/// [`Scraper::scrape`] call, so one scraper can run any number of
/// independent sessions.
#[derive(Debug, Clone, Default)]
pub struct Scraper {
    classes: WidgetClasses,
}

impl Scraper {
    /// Create a scraper using the default widget classes
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scraper with custom widget classes
    pub fn with_classes(classes: WidgetClasses) -> Self {
        Self { classes }
    }

    /// Scrape the list until the viewport stops revealing new rows.
    ///
    /// The header is extracted once from the first snapshot; every iteration
    /// then captures a fresh snapshot, absorbs its rows and scrolls. Any
    /// structure or capture error aborts the whole scrape; no partial report
    /// is returned.
    pub fn scrape<D: CaptureDevice>(&self, device: &mut D) -> Result<Report> {
        let snapshot = device.capture_snapshot()?;
        let header = extract::extract_header(&snapshot, &self.classes)?;
        log::debug!("header: {}", header.join(" | "));

        let mut session = ScrapeSession::new(header);

        loop {
            let snapshot = device.capture_snapshot()?;
            let batch = extract::extract_rows(&snapshot, &self.classes)?;
            let batch_len = batch.len();

            let novel = session.absorb(batch);
            log::debug!(
                "iteration {}: {} visible rows, {} novel keys",
                session.iterations(),
                batch_len,
                novel
            );

            if novel == 0 {
                break;
            }

            device.advance_scroll()?;
        }

        let report = session.into_report();
        log::info!(
            "scrape converged after {} snapshots with {} rows",
            report.iterations,
            report.row_count()
        );

        Ok(report)
    }
}

/// Accumulated state of one scrape session.
///
/// Exposed so the dedup/termination logic can be driven directly with
/// prepared batches, without a capture device.
#[derive(Debug, Clone)]
pub struct ScrapeSession {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    seen: IndexSet<String>,
    iterations: usize,
}

impl ScrapeSession {
    /// Start a session with the header captured from the first snapshot
    pub fn new(header: Vec<String>) -> Self {
        Self { header, rows: Vec::new(), seen: IndexSet::new(), iterations: 0 }
    }

    /// Absorb one batch of visible rows and return the number of keys the
    /// batch contributed that no earlier batch contained.
    ///
    /// Rows whose key was already seen, in an earlier batch or earlier in
    /// this one, are dropped; the rest are appended in batch order. A return
    /// of zero (an empty batch included) means the viewport has stopped
    /// revealing new rows and the session has converged.
    pub fn absorb(&mut self, batch: Vec<Vec<String>>) -> usize {
        self.iterations += 1;

        let mut batch_keys: IndexSet<String> = IndexSet::new();
        for row in batch {
            let Some(key) = row.first().cloned() else {
                // extract_rows rejects cell-less rows before they get here
                continue;
            };

            let unseen = !self.seen.contains(&key);
            let first_in_batch = batch_keys.insert(key);
            if unseen && first_in_batch {
                self.rows.push(row);
            }
        }

        let novel = batch_keys.iter().filter(|key| !self.seen.contains(*key)).count();
        self.seen.extend(batch_keys);
        novel
    }

    /// Number of batches absorbed so far
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Number of distinct keys seen so far
    pub fn seen_keys(&self) -> usize {
        self.seen.len()
    }

    /// Finish the session and produce the report
    pub fn into_report(self) -> Report {
        Report { header: self.header, rows: self.rows, iterations: self.iterations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_absorb_counts_novel_keys() {
        let mut session = ScrapeSession::new(row(&["Name", "Score"]));

        assert_eq!(session.absorb(vec![row(&["A", "1"]), row(&["B", "2"])]), 2);
        assert_eq!(session.absorb(vec![row(&["B", "2"]), row(&["C", "3"])]), 1);
        assert_eq!(session.absorb(vec![row(&["B", "2"]), row(&["C", "3"])]), 0);
    }

    #[test]
    fn test_rows_kept_in_first_seen_order() {
        let mut session = ScrapeSession::new(vec![]);

        session.absorb(vec![row(&["A", "1"]), row(&["B", "2"])]);
        session.absorb(vec![row(&["B", "2"]), row(&["C", "3"]), row(&["A", "9"])]);

        let report = session.into_report();
        assert_eq!(report.rows, vec![row(&["A", "1"]), row(&["B", "2"]), row(&["C", "3"])]);
    }

    #[test]
    fn test_duplicate_key_within_one_batch_kept_once() {
        let mut session = ScrapeSession::new(vec![]);

        let novel = session.absorb(vec![row(&["A", "1"]), row(&["A", "2"])]);

        assert_eq!(novel, 1);
        assert_eq!(session.into_report().rows, vec![row(&["A", "1"])]);
    }

    #[test]
    fn test_empty_batch_is_convergence() {
        let mut session = ScrapeSession::new(vec![]);
        session.absorb(vec![row(&["A", "1"])]);

        assert_eq!(session.absorb(vec![]), 0);
    }

    #[test]
    fn test_subset_batch_is_convergence() {
        let mut session = ScrapeSession::new(vec![]);
        session.absorb(vec![row(&["A", "1"]), row(&["B", "2"]), row(&["C", "3"])]);

        // Strict subset of already-seen keys contributes nothing new
        assert_eq!(session.absorb(vec![row(&["B", "2"])]), 0);
    }

    #[test]
    fn test_iterations_counted_per_batch() {
        let mut session = ScrapeSession::new(vec![]);
        session.absorb(vec![row(&["A", "1"])]);
        session.absorb(vec![row(&["A", "1"])]);

        assert_eq!(session.iterations(), 2);
        assert_eq!(session.seen_keys(), 1);
    }

    #[test]
    fn test_report_carries_header_and_iterations() {
        let mut session = ScrapeSession::new(row(&["Name", "Score"]));
        session.absorb(vec![row(&["A", "1"])]);

        let report = session.into_report();
        assert_eq!(report.header, row(&["Name", "Score"]));
        assert_eq!(report.iterations, 1);
    }
}
