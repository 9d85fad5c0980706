//! Button grid placement.
//!
//! Buttons fill rows left to right, wrapping after a fixed column count.

use deck_config::ConfigurationDocument;

/// Buttons per row before wrapping.
pub const MAX_COLUMNS: usize = 10;

/// One button's place in the grid and what to draw there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridCell {
    /// Position in the document.
    pub index: usize,
    pub row: usize,
    pub col: usize,
    /// Text fallback, used when `has_icon` is false.
    pub label: String,
    pub has_icon: bool,
}

/// Row and column of the button at `index`.
#[inline]
pub fn grid_position(index: usize, columns: usize) -> (usize, usize) {
    let columns = columns.max(1);
    (index / columns, index % columns)
}

/// Cells of the document, grouped row by row.
pub fn grid_rows(document: &ConfigurationDocument, columns: usize) -> Vec<Vec<GridCell>> {
    let mut rows: Vec<Vec<GridCell>> = Vec::new();

    for (index, entry) in document.entries().iter().enumerate() {
        let (row, col) = grid_position(index, columns);
        if rows.len() <= row {
            rows.push(Vec::new());
        }

        rows[row].push(GridCell {
            index,
            row,
            col,
            label: entry.label(),
            has_icon: entry.has_icon(),
        });
    }

    rows
}
