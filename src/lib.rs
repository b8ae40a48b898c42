//! # listview-scrape
//!
//! A Rust library for incrementally scraping virtualized list-style UIs, where
//! rows are rendered on demand as the user scrolls.
//!
//! ## Features
//!
//! - **Snapshot Parsing**: Build a UI tree from a uiautomator XML dump
//! - **Tabular Extraction**: Pull column headers and visible rows out of a snapshot,
//!   tolerant of the two row-internal layouts the list widget is known to render
//! - **Incremental Scraping**: Capture/extract/deduplicate/scroll until the viewport
//!   stops revealing new rows, then hand back the deduplicated report
//! - **Capture Devices**: `adb`-driven Android capture out of the box, or any
//!   implementation of the [`CaptureDevice`] trait
//! - **Report Sinks**: CSV/TSV and JSON export
//!
//! ## Usage
//!
//! ### Scraping a connected Android device
//!
//! ```rust,no_run
//! use listview_scrape::{AdbDevice, DelimitedSink, ReportSink, Scraper};
//! use std::path::Path;
//!
//! # fn main() -> listview_scrape::Result<()> {
//! let mut device = AdbDevice::new();
//! let report = Scraper::new().scrape(&mut device)?;
//!
//! println!("scraped {} rows in {} snapshots", report.row_count(), report.iterations);
//! DelimitedSink::csv().write_report(&report, Path::new("report.csv"))?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Extracting from a single snapshot
//!
//! ```rust,no_run
//! use listview_scrape::extract::{extract_header, extract_rows, WidgetClasses};
//! use listview_scrape::snapshot::Snapshot;
//!
//! # fn main() -> listview_scrape::Result<()> {
//! let snapshot = Snapshot::from_file("window_dump.xml")?;
//!
//! let classes = WidgetClasses::default();
//! let header = extract_header(&snapshot, &classes)?;
//! let rows = extract_rows(&snapshot, &classes)?;
//! println!("{} columns, {} visible rows", header.len(), rows.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`snapshot`]: UI tree representation and uiautomator dump parsing
//! - [`extract`]: header and row extraction from one snapshot
//! - [`scraper`]: the incremental scrape loop and its report
//! - [`device`]: capture device trait and the adb implementation
//! - [`sink`]: report persistence (CSV/TSV, JSON)
//! - [`error`]: error types and result alias

pub mod device;
pub mod error;
pub mod extract;
pub mod scraper;
pub mod sink;
pub mod snapshot;

pub use device::{AdbDevice, CaptureDevice};
pub use error::{Result, ScrapeError};
pub use extract::WidgetClasses;
pub use scraper::{Report, ScrapeSession, Scraper};
pub use sink::{DelimitedSink, JsonSink, ReportSink};
pub use snapshot::{Snapshot, UiNode};
