use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents one node of a captured UI tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiNode {
    /// Widget class tag (e.g., "android.widget.ListView", "android.widget.TextView")
    pub class: String,

    /// Text value of the node, if it carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Remaining node attributes (resource-id, content-desc, bounds, etc.)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, String>,

    /// Child nodes in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<UiNode>,
}

impl UiNode {
    /// Create a new UiNode with the given class tag
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            text: None,
            attributes: HashMap::new(),
            children: Vec::new(),
        }
    }

    /// Builder method: set text value
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Builder method: set children
    pub fn with_children(mut self, children: Vec<UiNode>) -> Self {
        self.children = children;
        self
    }

    /// Add a child node
    pub fn add_child(&mut self, child: UiNode) {
        self.children.push(child);
    }

    /// Add a single attribute
    pub fn add_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Get attribute value by key
    pub fn get_attribute(&self, key: &str) -> Option<&String> {
        self.attributes.get(key)
    }

    /// Check if the node has a specific class tag
    pub fn is_class(&self, class: &str) -> bool {
        self.class == class
    }

    /// Text value of the node, empty string if absent
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Count nodes in the subtree rooted here, including this node
    pub fn count_nodes(&self) -> usize {
        1 + self.children.iter().map(UiNode::count_nodes).sum::<usize>()
    }

    /// Collect references to every node in the subtree matching the predicate,
    /// in document order (pre-order traversal)
    pub fn find_all<'a>(&'a self, predicate: &dyn Fn(&UiNode) -> bool) -> Vec<&'a UiNode> {
        let mut matches = Vec::new();
        self.collect_matches(predicate, &mut matches);
        matches
    }

    fn collect_matches<'a>(&'a self, predicate: &dyn Fn(&UiNode) -> bool, out: &mut Vec<&'a UiNode>) {
        if predicate(self) {
            out.push(self);
        }
        for child in &self.children {
            child.collect_matches(predicate, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_creation() {
        let mut node = UiNode::new("android.widget.TextView").with_text("Alice");
        node.add_attribute("resource-id", "com.example:id/name");

        assert!(node.is_class("android.widget.TextView"));
        assert_eq!(node.text_or_empty(), "Alice");
        assert_eq!(
            node.get_attribute("resource-id"),
            Some(&"com.example:id/name".to_string())
        );
    }

    #[test]
    fn test_text_or_empty_defaults() {
        let node = UiNode::new("android.view.View");
        assert_eq!(node.text_or_empty(), "");
    }

    #[test]
    fn test_count_nodes() {
        let tree = UiNode::new("root").with_children(vec![
            UiNode::new("a").with_children(vec![UiNode::new("b"), UiNode::new("c")]),
            UiNode::new("d"),
        ]);

        assert_eq!(tree.count_nodes(), 5);
    }

    #[test]
    fn test_find_all_document_order() {
        let tree = UiNode::new("root").with_children(vec![
            UiNode::new("android.widget.TextView").with_text("first"),
            UiNode::new("android.view.View").with_children(vec![
                UiNode::new("android.widget.TextView").with_text("second"),
            ]),
            UiNode::new("android.widget.TextView").with_text("third"),
        ]);

        let texts: Vec<_> = tree
            .find_all(&|n| n.is_class("android.widget.TextView"))
            .iter()
            .map(|n| n.text_or_empty())
            .collect();

        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_serialization() {
        let node = UiNode::new("android.widget.TextView").with_text("Score");

        let json = serde_json::to_string(&node).unwrap();
        let deserialized: UiNode = serde_json::from_str(&json).unwrap();

        assert_eq!(node, deserialized);
    }
}
