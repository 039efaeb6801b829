use std::collections::HashSet;

use ghcal_model::{ColumnMapping, ROOM_COUNT, room_label};

use crate::error::{MappingError, Result};
use crate::selection::MappingSelection;

fn check_range(field: String, index: usize, columns: Option<usize>) -> Result<()> {
    match columns {
        Some(columns) if index >= columns => Err(MappingError::ColumnOutOfRange {
            field,
            index,
            columns,
        }),
        _ => Ok(()),
    }
}

/// Validate a selection into a [`ColumnMapping`].
///
/// Checks, in order: month chosen, date chosen, exactly six rooms, rooms
/// distinct, and (when `column_count` is given) every index inside the grid.
pub fn validate_selection(
    selection: &MappingSelection,
    column_count: Option<usize>,
) -> Result<ColumnMapping> {
    let month = selection.month.ok_or(MappingError::MissingMonthColumn)?;
    let date = selection.date.ok_or(MappingError::MissingDateColumn)?;
    let rooms: [usize; ROOM_COUNT] =
        selection
            .rooms
            .as_slice()
            .try_into()
            .map_err(|_| MappingError::RoomCount {
                found: selection.rooms.len(),
            })?;

    let mut seen = HashSet::new();
    for &column in &rooms {
        if !seen.insert(column) {
            return Err(MappingError::DuplicateRoomColumn { column });
        }
    }

    check_range("Month".to_string(), month, column_count)?;
    check_range("Date".to_string(), date, column_count)?;
    for (slot, &column) in rooms.iter().enumerate() {
        check_range(room_label(slot), column, column_count)?;
    }

    let mapping = ColumnMapping { month, date, rooms };
    tracing::debug!(?mapping, "validated column mapping");
    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(month: Option<usize>, date: Option<usize>, rooms: &[usize]) -> MappingSelection {
        MappingSelection {
            month,
            date,
            rooms: rooms.to_vec(),
        }
    }

    #[test]
    fn accepts_complete_selection() {
        let mapping =
            validate_selection(&selection(Some(0), Some(1), &[2, 3, 4, 5, 6, 7]), Some(8))
                .expect("valid mapping");
        assert_eq!(mapping, ColumnMapping::default());
    }

    #[test]
    fn month_is_checked_first() {
        let err = validate_selection(&selection(None, None, &[]), None).unwrap_err();
        assert!(matches!(err, MappingError::MissingMonthColumn));
    }

    #[test]
    fn missing_date_is_rejected() {
        let err = validate_selection(&selection(Some(0), None, &[2, 3, 4, 5, 6, 7]), None)
            .unwrap_err();
        assert!(matches!(err, MappingError::MissingDateColumn));
    }

    #[test]
    fn room_count_must_be_six() {
        let err =
            validate_selection(&selection(Some(0), Some(1), &[2, 3, 4, 5, 6]), None).unwrap_err();
        assert!(matches!(err, MappingError::RoomCount { found: 5 }));
    }

    #[test]
    fn duplicate_rooms_are_rejected() {
        let err = validate_selection(&selection(Some(0), Some(1), &[2, 3, 4, 4, 6, 7]), None)
            .unwrap_err();
        assert!(matches!(err, MappingError::DuplicateRoomColumn { column: 4 }));
    }

    #[test]
    fn month_may_share_a_room_column() {
        assert!(validate_selection(&selection(Some(2), Some(1), &[2, 3, 4, 5, 6, 7]), None).is_ok());
    }

    #[test]
    fn out_of_range_names_the_field() {
        let err = validate_selection(&selection(Some(0), Some(1), &[2, 3, 4, 5, 6, 9]), Some(8))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Room 06 column 9 is out of range (CSV has 8 columns)"
        );
    }
}
