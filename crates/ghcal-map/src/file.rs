//! Mapping files: a [`MappingSelection`] stored as JSON.

use std::path::Path;

use crate::error::{MappingError, Result};
use crate::selection::MappingSelection;

/// Read a selection from a JSON file.
pub fn load_mapping(path: &Path) -> Result<MappingSelection> {
    let text = std::fs::read_to_string(path).map_err(|source| MappingError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let selection = serde_json::from_str(&text).map_err(|source| MappingError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded mapping file");
    Ok(selection)
}

/// Write a selection as pretty-printed JSON.
pub fn save_mapping(path: &Path, selection: &MappingSelection) -> Result<()> {
    let json = serde_json::to_string_pretty(selection).map_err(|source| MappingError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json).map_err(|source| MappingError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "saved mapping file");
    Ok(())
}
