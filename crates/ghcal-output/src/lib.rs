//! Occupancy table export.
//!
//! The export is a flat CSV with a fixed header
//! (`Months,Date,Room 01..Room 06`), one row per day, and the month label
//! written only on the first row of each month block.

mod error;
mod export;
mod serialize;
mod writer;

pub use error::{OutputError, Result};
pub use export::{DEFAULT_ORG, export_csv, export_file_name, write_export};
pub use serialize::{export_header, serialize_table};
pub use writer::{quote_cell, write_csv};
