//! Guest-house CSV ingestion.
//!
//! Turns raw CSV text (from a file, stdin, or the built-in sample) into a
//! [`Grid`](ghcal_model::Grid) of string cells.
//!
//! # Example
//!
//! ```ignore
//! use ghcal_ingest::{parse_csv, header_labels, read_csv_text};
//!
//! let text = read_csv_text(Path::new("occupancy.csv"))?;
//! let grid = parse_csv(text.trim());
//! let labels = header_labels(&grid);
//! ```

mod csv;
mod error;
mod reader;
mod sample;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Parsing ===
pub use csv::{DEFAULT_PREVIEW_ROWS, GridPreview, header_labels, parse_csv, preview};

// === Input Loading ===
pub use reader::{prepare_text, read_csv_text, read_stdin_text};

// === Sample Data ===
pub use sample::SAMPLE_CSV;
