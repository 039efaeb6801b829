use std::path::Path;

use ghcal_model::OccupancyTable;

use crate::error::{OutputError, Result};
use crate::serialize::serialize_table;
use crate::writer::write_csv;

/// Organisation prefix used for export file names.
pub const DEFAULT_ORG: &str = "esic_guesthouse";

/// `{org}_export.csv`.
pub fn export_file_name(org: &str) -> String {
    format!("{org}_export.csv")
}

/// Serialize and render the table as CSV text.
///
/// Fails with [`OutputError::EmptyTable`] when no month has been built. A
/// table whose months have no days still exports its header row.
pub fn export_csv<S: AsRef<str>>(table: &OccupancyTable, month_order: &[S]) -> Result<String> {
    if table.is_empty() {
        return Err(OutputError::EmptyTable);
    }
    let grid = serialize_table(table, month_order);
    tracing::info!(rows = grid.len() - 1, months = month_order.len(), "serialized export");
    Ok(write_csv(&grid))
}

/// Write export text to `path`.
pub fn write_export(path: &Path, csv: &str) -> Result<()> {
    std::fs::write(path, csv).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = csv.len(), "wrote export");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_uses_org() {
        assert_eq!(export_file_name(DEFAULT_ORG), "esic_guesthouse_export.csv");
        assert_eq!(export_file_name("acme"), "acme_export.csv");
    }

    #[test]
    fn empty_table_is_rejected() {
        let err = export_csv::<&str>(&OccupancyTable::new(), &[]).unwrap_err();
        assert!(matches!(err, OutputError::EmptyTable));
        assert_eq!(err.to_string(), "No data to export. Build first.");
    }
}
