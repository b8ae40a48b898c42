use crate::error::{Result, ScrapeError};
use crate::extract::WidgetClasses;
use crate::extract::container::find_list_container;
use crate::snapshot::{Snapshot, UiNode};

/// Extract the visible rows from a snapshot, top of the viewport to bottom.
///
/// Each immediate child of the list container is one visible row. The row's
/// first child holds all meaningful content in both internal layouts the
/// widget is known to render; separator elements may precede the first text
/// cell or sit between cells, so cells are selected purely by class tag,
/// never by position.
///
/// Every extracted row carries at least one cell; a row without any text
/// cells is a structure error, which keeps the first cell usable as the
/// row's dedup key downstream.
pub fn extract_rows(snapshot: &Snapshot, classes: &WidgetClasses) -> Result<Vec<Vec<String>>> {
    let container = find_list_container(snapshot, classes)?;

    let mut rows = Vec::with_capacity(container.node.children.len());
    for (i, row_node) in container.node.children.iter().enumerate() {
        let content = row_node.children.first().ok_or_else(|| {
            ScrapeError::Structure(format!("row content: row {} has no content sub-node", i))
        })?;

        let cells = collect_text_cells(content, &classes.text);
        if cells.is_empty() {
            return Err(ScrapeError::Structure(format!(
                "row content: row {} has no '{}' cells",
                i, classes.text
            )));
        }

        rows.push(cells);
    }

    Ok(rows)
}

/// Collect text values of all matching descendants of `content`, in document
/// order. The content node itself is never a cell.
fn collect_text_cells(content: &UiNode, text_class: &str) -> Vec<String> {
    content
        .children
        .iter()
        .flat_map(|child| child.find_all(&|n| n.is_class(text_class)))
        .map(|n| n.text_or_empty().to_string())
        .collect()
}
