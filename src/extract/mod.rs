//! Extraction of tabular data from a snapshot
//!
//! This module locates the scrollable list container inside a captured UI tree
//! and pulls out the column headers and visible rows. It includes:
//! - WidgetClasses: which class tags identify the list container and text cells
//! - header: column header extraction
//! - rows: visible row extraction

pub mod container;
pub mod header;
pub mod rows;

pub use header::extract_header;
pub use rows::extract_rows;

/// Widget class tags that drive extraction.
///
/// Defaults match the Android uiautomator class names; override them to scrape
/// a toolkit that renders its list and cells under different tags.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetClasses {
    /// Class tag of the scrollable list container
    pub list: String,

    /// Class tag of text-bearing cell leaves
    pub text: String,
}

impl Default for WidgetClasses {
    fn default() -> Self {
        Self {
            list: "android.widget.ListView".to_string(),
            text: "android.widget.TextView".to_string(),
        }
    }
}

impl WidgetClasses {
    /// Create widget classes with the default Android tags
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the list container class tag
    pub fn list_class(mut self, class: impl Into<String>) -> Self {
        self.list = class.into();
        self
    }

    /// Builder method: set the text cell class tag
    pub fn text_class(mut self, class: impl Into<String>) -> Self {
        self.text = class.into();
        self
    }
}
