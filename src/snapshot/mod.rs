//! Snapshot capture format module
//!
//! This module provides the in-memory representation of one captured UI tree
//! and the parser that builds it from a uiautomator XML dump. It includes:
//! - UiNode: representation of one UI widget node
//! - Snapshot: a complete captured tree
//! - xml: the dump parser

pub mod node;
pub mod tree;
pub mod xml;

pub use node::UiNode;
pub use tree::Snapshot;

use crate::error::Result;

/// Parse a uiautomator XML dump into a Snapshot
pub fn parse_snapshot(xml: &str) -> Result<Snapshot> {
    Snapshot::from_xml(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_snapshot_export() {
        let snapshot = parse_snapshot(r#"<hierarchy><node class="android.view.View"/></hierarchy>"#)
            .unwrap();
        assert_eq!(snapshot.count_nodes(), 2);
    }
}
