//! Error types for mapping operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from mapping selection and mapping files.
#[derive(Debug, Error)]
pub enum MappingError {
    /// No month column chosen.
    #[error("Please select Month column")]
    MissingMonthColumn,

    /// No date column chosen.
    #[error("Please select Date column")]
    MissingDateColumn,

    /// Room column count other than six.
    #[error("Please select six room columns (got {found})")]
    RoomCount { found: usize },

    /// The same column chosen for two rooms.
    #[error("Column {column} is selected for more than one room")]
    DuplicateRoomColumn { column: usize },

    /// Column index past the widest row.
    #[error("{field} column {index} is out of range (CSV has {columns} columns)")]
    ColumnOutOfRange {
        field: String,
        index: usize,
        columns: usize,
    },

    /// Mapping file could not be read or written.
    #[error("mapping file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Mapping file is not valid JSON for a selection.
    #[error("invalid mapping file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for mapping operations.
pub type Result<T> = std::result::Result<T, MappingError>;
