//! Parser for uiautomator XML dumps.
//!
//! A dump is a `<hierarchy>` element wrapping nested `<node>` elements, where
//! every widget is a `<node>` carrying its class and text as attributes.
//! Elements are frequently self-closing, so empty-element expansion is enabled
//! and start/end events are handled uniformly.

use crate::error::{Result, ScrapeError};
use crate::snapshot::node::UiNode;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Parse a uiautomator XML dump into a UI node tree.
///
/// The root element (normally `<hierarchy>`) becomes the root node; its class
/// tag falls back to the element name when no `class` attribute is present.
pub fn parse(xml: &str) -> Result<UiNode> {
    let mut reader = Reader::from_str(xml);
    let config = reader.config_mut();
    config.expand_empty_elements = true;
    config.trim_text(true);

    // Stack of open elements; the finished tree is popped off at the end.
    let mut stack: Vec<UiNode> = Vec::new();
    let mut root: Option<UiNode> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                stack.push(node_from_element(&start)?);
            }
            Ok(Event::End(_)) => {
                let finished = stack
                    .pop()
                    .ok_or_else(|| ScrapeError::Parse("unbalanced closing tag".to_string()))?;
                match stack.last_mut() {
                    Some(parent) => parent.add_child(finished),
                    None if root.is_none() => root = Some(finished),
                    None => {
                        return Err(ScrapeError::Parse(
                            "multiple root elements in snapshot".to_string(),
                        ));
                    }
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(ScrapeError::Parse(format!("invalid snapshot XML: {}", e))),
        }
    }

    if !stack.is_empty() {
        return Err(ScrapeError::Parse("unclosed element in snapshot".to_string()));
    }

    root.ok_or_else(|| ScrapeError::Parse("empty snapshot document".to_string()))
}

/// Build a UiNode from an element's attributes
fn node_from_element(start: &BytesStart<'_>) -> Result<UiNode> {
    let element_name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut node = UiNode::new(element_name);

    for attribute in start.attributes() {
        let attribute = attribute
            .map_err(|e| ScrapeError::Parse(format!("invalid attribute: {}", e)))?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|e| ScrapeError::Parse(format!("invalid attribute value for '{}': {}", key, e)))?
            .into_owned();

        match key.as_str() {
            "class" => node.class = value,
            "text" => node.text = Some(value),
            _ => node.add_attribute(key, value),
        }
    }

    Ok(node)
}
