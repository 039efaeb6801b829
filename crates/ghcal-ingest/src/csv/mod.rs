//! CSV text parsing and inspection.

mod header;
mod parser;

pub use header::{DEFAULT_PREVIEW_ROWS, GridPreview, header_labels, preview};
pub use parser::parse_csv;
