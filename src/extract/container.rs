use crate::error::{Result, ScrapeError};
use crate::extract::WidgetClasses;
use crate::snapshot::{Snapshot, UiNode};

/// A located list container together with its position in the tree.
///
/// The parent and sibling index are needed by the header extractor, which
/// selects the sibling immediately preceding the container.
#[derive(Debug)]
pub struct ContainerRef<'a> {
    /// The list container node itself
    pub node: &'a UiNode,

    /// Parent of the container, absent when the container is the tree root
    pub parent: Option<&'a UiNode>,

    /// Index of the container among its parent's children
    pub index_in_parent: usize,
}

/// Locate the single list container node within a snapshot.
///
/// Exactly one node with the configured list class must exist; zero matches
/// means the list is not on screen, more than one means the lookup is
/// ambiguous. Both are structure errors, never a silent pick.
pub fn find_list_container<'a>(
    snapshot: &'a Snapshot,
    classes: &WidgetClasses,
) -> Result<ContainerRef<'a>> {
    let mut matches = Vec::new();
    collect_containers(&snapshot.root, None, 0, &classes.list, &mut matches);

    match matches.len() {
        1 => Ok(matches.remove(0)),
        0 => Err(ScrapeError::Structure(format!(
            "container lookup: no node with class '{}' in snapshot",
            classes.list
        ))),
        n => Err(ScrapeError::Structure(format!(
            "container lookup: expected exactly 1 node with class '{}', found {}",
            classes.list, n
        ))),
    }
}

fn collect_containers<'a>(
    node: &'a UiNode,
    parent: Option<&'a UiNode>,
    index_in_parent: usize,
    list_class: &str,
    matches: &mut Vec<ContainerRef<'a>>,
) {
    if node.is_class(list_class) {
        matches.push(ContainerRef { node, parent, index_in_parent });
    }
    for (i, child) in node.children.iter().enumerate() {
        collect_containers(child, Some(node), i, list_class, matches);
    }
}
