use thiserror::Error;

/// Errors produced while scraping a list UI
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Snapshot does not match the expected list/header/row shape.
    ///
    /// The message names the extraction step that failed (container lookup,
    /// header sibling, row content) so a UI layout change can be diagnosed.
    #[error("snapshot structure mismatch: {0}")]
    Structure(String),

    /// Snapshot data could not be parsed into a UI tree
    #[error("snapshot parse failed: {0}")]
    Parse(String),

    /// The capture device failed to produce a snapshot or to scroll
    #[error("capture device failed: {0}")]
    Capture(String),

    /// Persisting the final report failed
    #[error("report sink failed: {0}")]
    Sink(String),
}

/// Result type alias for scrape operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

impl ScrapeError {
    /// Whether the error came from the snapshot itself rather than a capability
    pub fn is_snapshot_error(&self) -> bool {
        matches!(self, ScrapeError::Structure(_) | ScrapeError::Parse(_))
    }
}
