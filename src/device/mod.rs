//! Capture device module
//!
//! A capture device produces snapshots of the current UI state and advances
//! the scroll position between them. The scrape loop only talks to the
//! [`CaptureDevice`] trait; [`AdbDevice`] is the shipped implementation that
//! drives a connected Android device through `adb`.

pub mod adb;

pub use adb::{AdbDevice, SwipeGesture};

use crate::error::Result;
use crate::snapshot::Snapshot;

/// A device that can snapshot the current UI and scroll the list.
///
/// Both operations may block on external I/O with unspecified latency;
/// timeout and retry policy belongs to the implementation, not to the scrape
/// loop. Failures surface as [`crate::ScrapeError::Capture`] and abort the
/// scrape.
pub trait CaptureDevice {
    /// Capture a snapshot of the current UI state
    fn capture_snapshot(&mut self) -> Result<Snapshot>;

    /// Advance the scroll position of the list under capture
    fn advance_scroll(&mut self) -> Result<()>;
}
