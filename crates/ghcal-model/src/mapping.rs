use serde::{Deserialize, Serialize};

use crate::ROOM_COUNT;

/// Validated correspondence between grid columns and semantic fields.
///
/// Room indices are expected to be distinct; the mapping validator in
/// `ghcal-map` enforces that before a table is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub month: usize,
    pub date: usize,
    pub rooms: [usize; ROOM_COUNT],
}

impl Default for ColumnMapping {
    /// Month in column 0, date in column 1, rooms in columns 2..=7.
    fn default() -> Self {
        Self {
            month: 0,
            date: 1,
            rooms: [2, 3, 4, 5, 6, 7],
        }
    }
}

impl ColumnMapping {
    /// Highest column index referenced by the mapping.
    pub fn max_column(&self) -> usize {
        self.rooms
            .iter()
            .copied()
            .chain([self.month, self.date])
            .max()
            .unwrap_or(0)
    }
}
