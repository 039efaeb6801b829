#![deny(unsafe_code)]

//! Column mapping for occupancy sheets.
//!
//! A [`MappingSelection`] is what the user picked; [`validate_selection`]
//! turns it into a [`ColumnMapping`](ghcal_model::ColumnMapping) the table
//! builder can trust.

mod error;
mod file;
mod selection;
mod validate;

pub use error::{MappingError, Result};
pub use file::{load_mapping, save_mapping};
pub use selection::MappingSelection;
pub use validate::validate_selection;
