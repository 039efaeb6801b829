//! Tests for calendar and availability views.

use ghcal_model::{OccupancyTable, RoomSlots};
use ghcal_transform::{availability, month_view};

fn slots(values: [&str; 6]) -> RoomSlots {
    values.map(str::to_string)
}

fn table() -> OccupancyTable {
    let mut table = OccupancyTable::new();
    table.set_day("JANUARY", "3", slots(["John Doe", "", "Peter", "", "Anna", "Tom"]));
    table.set_day("JANUARY", "1", slots(["John Doe", "Mary", "", "Alex", "", ""]));
    table.set_day("JANUARY", "2", slots(["", "Mary", "Peter", "", "Anna", ""]));
    table.ensure_month("MARCH");
    table
}

#[test]
fn month_view_sorts_days() {
    let view = month_view(&table(), "JANUARY");
    let days: Vec<&str> = view.days.iter().map(|day| day.day.as_str()).collect();
    assert_eq!(days, vec!["1", "2", "3"]);
}

#[test]
fn vacant_rooms_display_as_available() {
    let view = month_view(&table(), "JANUARY");
    let shown: Vec<&str> = view.days[0].display_rooms().collect();
    assert_eq!(
        shown,
        vec!["John Doe", "Mary", "Available", "Alex", "Available", "Available"]
    );
}

#[test]
fn month_without_days_has_message() {
    let view = month_view(&table(), "MARCH");
    assert!(view.is_empty());
    assert_eq!(
        view.empty_message(),
        "No day rows found for MARCH. Check column mapping or CSV format."
    );
    assert!(month_view(&table(), "APRIL").is_empty());
}

#[test]
fn availability_counts_per_room() {
    let summary = availability(&table(), "JANUARY");
    assert_eq!(summary.total_days, 3);
    let occupied: Vec<usize> = summary.rooms.iter().map(|room| room.occupied).collect();
    assert_eq!(occupied, vec![2, 2, 2, 1, 2, 1]);
    assert_eq!(summary.rooms[0].room, "Room 01");
    assert_eq!(summary.rooms[3].free(), 2);
    assert_eq!(summary.free_slots(), 3 * 6 - 10);
}

#[test]
fn availability_of_unknown_month_is_zero() {
    let summary = availability(&table(), "APRIL");
    assert_eq!(summary.total_days, 0);
    assert_eq!(summary.free_slots(), 0);
    assert_eq!(summary.rooms.len(), 6);
}

#[test]
fn month_view_serializes() {
    let json = serde_json::to_value(month_view(&table(), "JANUARY")).unwrap();
    assert_eq!(json["month"], "JANUARY");
    assert_eq!(json["days"][2]["rooms"][5], "Tom");
}
