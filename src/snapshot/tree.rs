use crate::error::{Result, ScrapeError};
use crate::snapshot::node::UiNode;
use crate::snapshot::xml;
use std::path::Path;

/// Represents one captured UI tree
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Root node of the captured tree
    pub root: UiNode,
}

impl Snapshot {
    /// Create a Snapshot from an already-built node tree
    pub fn new(root: UiNode) -> Self {
        Self { root }
    }

    /// Parse a Snapshot from uiautomator XML
    pub fn from_xml(xml: &str) -> Result<Self> {
        Ok(Self::new(xml::parse(xml)?))
    }

    /// Read and parse a Snapshot from a dump file on disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ScrapeError::Parse(format!(
                "failed to read snapshot file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_xml(&contents)
    }

    /// Count all nodes in the snapshot
    pub fn count_nodes(&self) -> usize {
        self.root.count_nodes()
    }

    /// Serialize the snapshot tree to pretty JSON for debugging
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.root)
            .map_err(|e| ScrapeError::Parse(format!("failed to serialize snapshot to JSON: {}", e)))
    }
}
