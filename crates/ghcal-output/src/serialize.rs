use ghcal_model::{Grid, OccupancyTable, ROOM_COUNT, room_label};

/// `Months, Date, Room 01 .. Room 06`.
pub fn export_header() -> Vec<String> {
    let mut header = vec!["Months".to_string(), "Date".to_string()];
    header.extend((0..ROOM_COUNT).map(room_label));
    header
}

/// Flatten the table into export rows, header first.
///
/// Months are emitted in `month_order`; labels missing from the table add no
/// rows. Days within a month are sorted numerically where possible.
pub fn serialize_table<S: AsRef<str>>(table: &OccupancyTable, month_order: &[S]) -> Grid {
    let mut grid = Grid::default();
    grid.push_row(export_header());
    for label in month_order {
        let Some(month) = table.month(label.as_ref()) else {
            continue;
        };
        for (position, day) in month.sorted_days().into_iter().enumerate() {
            let mut row = Vec::with_capacity(2 + ROOM_COUNT);
            row.push(if position == 0 {
                month.label().to_string()
            } else {
                String::new()
            });
            row.push(day.label().to_string());
            row.extend(day.rooms().iter().cloned());
            grid.push_row(row);
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_has_eight_columns() {
        assert_eq!(
            export_header(),
            vec![
                "Months", "Date", "Room 01", "Room 02", "Room 03", "Room 04", "Room 05", "Room 06"
            ]
        );
    }

    #[test]
    fn empty_table_serializes_header_only() {
        let grid = serialize_table::<&str>(&OccupancyTable::new(), &[]);
        assert_eq!(grid.len(), 1);
    }
}
