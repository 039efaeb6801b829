use std::path::{Path, PathBuf};

use tracing::{debug, info};

use ghcal_ingest::{header_labels, parse_csv, prepare_text};
use ghcal_map::{MappingSelection, validate_selection};
use ghcal_model::{ColumnMapping, Grid, OccupancyTable, RoomSlots};
use ghcal_output::{export_csv, export_file_name, write_export};
use ghcal_transform::{
    Availability, MonthView, availability, build_table_with_stats, month_view,
    normalize_day_label, set_day,
};

use crate::error::{Result, SessionError};

/// State of one editing session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    grid: Option<Grid>,
    headers: Vec<String>,
    mapping: Option<ColumnMapping>,
    table: OccupancyTable,
    month_order: Vec<String>,
    /// Leading grid rows left out when building (e.g. a header line).
    skip_rows: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leave the first `rows` grid rows out of every build.
    #[must_use]
    pub fn with_skip_rows(mut self, rows: usize) -> Self {
        self.skip_rows = rows;
        self
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// Labels for the mapping choices, from the grid's first row.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn mapping(&self) -> Option<&ColumnMapping> {
        self.mapping.as_ref()
    }

    pub fn table(&self) -> &OccupancyTable {
        &self.table
    }

    /// Months in display order.
    pub fn month_order(&self) -> &[String] {
        &self.month_order
    }

    /// Trim and parse CSV text, replacing any previous grid.
    ///
    /// The table built from an earlier grid stays until the next
    /// [`confirm_mapping`](Self::confirm_mapping).
    pub fn load_text(&mut self, text: &str) -> Result<&Grid> {
        let text = prepare_text(text)?;
        let grid = parse_csv(text);
        self.headers = header_labels(&grid);
        info!(
            rows = grid.len(),
            columns = grid.max_width(),
            "loaded CSV into session"
        );
        Ok(&*self.grid.insert(grid))
    }

    /// Default mapping choices for the loaded grid.
    pub fn default_selection(&self) -> MappingSelection {
        MappingSelection::default_for(self.grid.as_ref().map_or(0, Grid::max_width))
    }

    /// Validate `selection` and rebuild the table from scratch.
    ///
    /// On rejection the previous mapping and table are left untouched.
    pub fn confirm_mapping(&mut self, selection: &MappingSelection) -> Result<&OccupancyTable> {
        let grid = self.grid.as_ref().ok_or(SessionError::NotParsed)?;
        let mapping = validate_selection(selection, Some(grid.max_width()))?;
        let (table, stats) = if self.skip_rows == 0 {
            build_table_with_stats(grid, &mapping)
        } else {
            let body = Grid::new(grid.rows.iter().skip(self.skip_rows).cloned().collect());
            build_table_with_stats(&body, &mapping)
        };
        debug!(?stats, skip_rows = self.skip_rows, "rebuilt table");
        self.month_order = table.month_labels();
        self.mapping = Some(mapping);
        self.table = table;
        Ok(&self.table)
    }

    fn require_month(&self, month: &str) -> Result<()> {
        if self.table.contains_month(month) {
            Ok(())
        } else {
            Err(SessionError::UnknownMonth {
                month: month.to_string(),
            })
        }
    }

    /// Replace the display order. Every label must name a built month.
    pub fn set_month_order(&mut self, order: Vec<String>) -> Result<()> {
        for month in &order {
            self.require_month(month)?;
        }
        self.month_order = order;
        Ok(())
    }

    pub fn month_view(&self, month: &str) -> Result<MonthView> {
        self.require_month(month)?;
        Ok(month_view(&self.table, month))
    }

    pub fn availability(&self, month: &str) -> Result<Availability> {
        self.require_month(month)?;
        Ok(availability(&self.table, month))
    }

    /// Overwrite one day with trimmed room values.
    ///
    /// `day` may carry leading zeros (`"03"` edits day `"3"`). Only days
    /// already in the table can be edited.
    pub fn set_day(&mut self, month: &str, day: &str, rooms: RoomSlots) -> Result<()> {
        let entry = self
            .table
            .month(month)
            .ok_or_else(|| SessionError::UnknownMonth {
                month: month.to_string(),
            })?;
        let trimmed = day.trim();
        let label = normalize_day_label(trimmed);
        if !entry.contains_day(label) {
            return Err(SessionError::UnknownDay {
                month: month.to_string(),
                day: trimmed.to_string(),
            });
        }
        let rooms = rooms.map(|name| name.trim().to_string());
        set_day(&mut self.table, month, label, rooms);
        Ok(())
    }

    /// CSV text of the table in the current month order.
    pub fn export_csv(&self) -> Result<String> {
        Ok(export_csv(&self.table, &self.month_order)?)
    }

    /// Write the export. A directory target gets `{org}_export.csv` inside it.
    pub fn export_to(&self, target: &Path, org: &str) -> Result<PathBuf> {
        let csv = self.export_csv()?;
        let path = if target.is_dir() {
            target.join(export_file_name(org))
        } else {
            target.to_path_buf()
        };
        write_export(&path, &csv)?;
        Ok(path)
    }
}
