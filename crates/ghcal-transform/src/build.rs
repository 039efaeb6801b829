//! Row-by-row folding of a grid into an [`OccupancyTable`].

use ghcal_model::{ColumnMapping, Grid, MergeOutcome, OccupancyTable, RoomSlots};
use tracing::{debug, info};

/// Counters collected while building a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub rows: usize,
    /// Rows seen before any month label.
    pub skipped_without_month: usize,
    /// Rows with a month context but no date.
    pub rows_without_date: usize,
    /// Rows folded into a day that already existed.
    pub merged_rows: usize,
}

fn trimmed_cell(row: &[String], index: usize) -> &str {
    row.get(index).map_or("", |cell| cell.trim())
}

/// Strip leading zeros from a trimmed date (`"03"` -> `"3"`).
///
/// A date made only of zeros keeps its original text.
pub fn normalize_day_label(date: &str) -> &str {
    match date.trim_start_matches('0') {
        "" => date,
        stripped => stripped,
    }
}

/// Build the occupancy table for `grid` under `mapping`.
pub fn build_table(grid: &Grid, mapping: &ColumnMapping) -> OccupancyTable {
    build_table_with_stats(grid, mapping).0
}

/// Like [`build_table`], also returning row counters.
///
/// A non-empty month cell sets the month for the following rows, so a label
/// written once at the top of a block covers every day row below it. Rows
/// before the first month label are dropped. A later row for a day already
/// present only fills that day's vacant rooms.
pub fn build_table_with_stats(
    grid: &Grid,
    mapping: &ColumnMapping,
) -> (OccupancyTable, BuildStats) {
    let mut table = OccupancyTable::new();
    let mut stats = BuildStats::default();
    let mut current_month: Option<&str> = None;

    for (index, row) in grid.iter().enumerate() {
        stats.rows += 1;
        let month_cell = trimmed_cell(row, mapping.month);
        if !month_cell.is_empty() {
            if current_month != Some(month_cell) {
                note_case_variant(&table, month_cell);
            }
            current_month = Some(month_cell);
        }
        let Some(month) = current_month else {
            stats.skipped_without_month += 1;
            debug!(row = index, "row before any month label skipped");
            continue;
        };

        let month_entry = table.ensure_month(month);
        let date = trimmed_cell(row, mapping.date);
        if date.is_empty() {
            stats.rows_without_date += 1;
            continue;
        }
        let day = normalize_day_label(date);
        let rooms: RoomSlots = mapping
            .rooms
            .map(|column| trimmed_cell(row, column).to_string());

        if let MergeOutcome::Merged { filled } = month_entry.merge_day(day, rooms) {
            stats.merged_rows += 1;
            debug!(row = index, month, day, filled, "merged repeated day row");
        }
    }

    info!(
        rows = stats.rows,
        months = table.len(),
        days = table.day_count(),
        skipped = stats.skipped_without_month,
        merged = stats.merged_rows,
        "built occupancy table"
    );
    (table, stats)
}

/// Month labels are kept verbatim; flag labels that differ only by case.
fn note_case_variant(table: &OccupancyTable, label: &str) {
    if table.contains_month(label) {
        return;
    }
    if let Some(existing) = table
        .months()
        .iter()
        .find(|month| month.label().eq_ignore_ascii_case(label))
    {
        debug!(
            existing = existing.label(),
            label, "month label differs from an earlier one only by case; keeping both"
        );
    }
}

/// Replace one day's rooms wholesale. Unlike [`build_table`] this never
/// merges: an empty string clears the slot.
pub fn set_day(table: &mut OccupancyTable, month: &str, day: &str, rooms: RoomSlots) {
    debug!(month, day, "set day rooms");
    table.set_day(month, day, rooms);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_leading_zeros() {
        assert_eq!(normalize_day_label("01"), "1");
        assert_eq!(normalize_day_label("7"), "7");
        assert_eq!(normalize_day_label("010"), "10");
    }

    #[test]
    fn normalize_all_zero_falls_back() {
        assert_eq!(normalize_day_label("00"), "00");
        assert_eq!(normalize_day_label("0"), "0");
    }

    #[test]
    fn normalize_leaves_text_alone() {
        assert_eq!(normalize_day_label("0a"), "a");
        assert_eq!(normalize_day_label("Mon"), "Mon");
    }
}
