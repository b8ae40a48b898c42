use crate::error::{Result, ScrapeError};
use crate::extract::WidgetClasses;
use crate::extract::container::find_list_container;
use crate::snapshot::Snapshot;

/// Extract the column header labels from a snapshot.
///
/// The header row sits structurally adjacent to the list container, as its
/// immediately preceding sibling, not inside it. Its immediate children are
/// the column titles in document order.
///
/// A header row with no children legitimately yields an empty vector; a
/// missing header row (container at the tree root, or container that is its
/// parent's first child) is a structure error.
pub fn extract_header(snapshot: &Snapshot, classes: &WidgetClasses) -> Result<Vec<String>> {
    let container = find_list_container(snapshot, classes)?;

    let parent = container.parent.ok_or_else(|| {
        ScrapeError::Structure(
            "header lookup: list container has no parent to hold a header sibling".to_string(),
        )
    })?;

    if container.index_in_parent == 0 {
        return Err(ScrapeError::Structure(
            "header lookup: list container has no preceding sibling".to_string(),
        ));
    }

    let header_row = &parent.children[container.index_in_parent - 1];

    Ok(header_row
        .children
        .iter()
        .map(|cell| cell.text_or_empty().to_string())
        .collect())
}
