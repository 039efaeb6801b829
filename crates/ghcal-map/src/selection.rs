use serde::{Deserialize, Serialize};

use ghcal_model::{ColumnMapping, ROOM_COUNT};

/// Unvalidated column choices.
///
/// Any field may be missing or wrong here; [`crate::validate_selection`]
/// decides whether it describes a usable mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingSelection {
    #[serde(default)]
    pub month: Option<usize>,
    #[serde(default)]
    pub date: Option<usize>,
    #[serde(default)]
    pub rooms: Vec<usize>,
}

impl MappingSelection {
    /// Default choices for a sheet with `column_count` columns: month in
    /// column 0, date in column 1 and rooms in the six columns after that.
    ///
    /// Indices are clamped to the last existing column, so narrow sheets get
    /// a selection that validation will reject with a useful message rather
    /// than one pointing far outside the data.
    pub fn default_for(column_count: usize) -> Self {
        let last = column_count.saturating_sub(1);
        let defaults = ColumnMapping::default();
        Self {
            month: Some(defaults.month.min(last)),
            date: Some(defaults.date.min(last)),
            rooms: defaults.rooms.iter().map(|&index| index.min(last)).collect(),
        }
    }

    /// True when all eight fields have been chosen.
    pub fn is_complete(&self) -> bool {
        self.month.is_some() && self.date.is_some() && self.rooms.len() == ROOM_COUNT
    }
}

impl From<ColumnMapping> for MappingSelection {
    fn from(mapping: ColumnMapping) -> Self {
        Self {
            month: Some(mapping.month),
            date: Some(mapping.date),
            rooms: mapping.rooms.to_vec(),
        }
    }
}
