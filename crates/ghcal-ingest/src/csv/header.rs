//! Header labels and previews for choosing column mappings.

use ghcal_model::Grid;

/// Default number of rows shown in a preview.
pub const DEFAULT_PREVIEW_ROWS: usize = 10;

fn column_name(index: usize) -> String {
    format!("Col {index}")
}

/// Labels offered when mapping columns: the first row's trimmed cells, with
/// `Col {i}` standing in for blank cells.
pub fn header_labels(grid: &Grid) -> Vec<String> {
    grid.row(0)
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(index, cell)| {
            let trimmed = cell.trim();
            if trimmed.is_empty() {
                column_name(index)
            } else {
                trimmed.to_string()
            }
        })
        .collect()
}

/// The first rows of a grid, padded to a common width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPreview {
    /// `Col 0`, `Col 1`, ... for every previewed column.
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Rows in the full grid.
    pub total_rows: usize,
}

impl GridPreview {
    pub fn is_truncated(&self) -> bool {
        self.rows.len() < self.total_rows
    }
}

/// Build a preview of at most `max_rows` rows.
pub fn preview(grid: &Grid, max_rows: usize) -> GridPreview {
    let shown = &grid.rows[..grid.len().min(max_rows)];
    let width = shown.iter().map(Vec::len).max().unwrap_or(0);
    let rows = shown
        .iter()
        .map(|row| {
            (0..width)
                .map(|index| row.get(index).cloned().unwrap_or_default())
                .collect()
        })
        .collect();
    GridPreview {
        columns: (0..width).map(column_name).collect(),
        rows,
        total_rows: grid.len(),
    }
}
