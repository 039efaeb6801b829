//! Shared data model for the guest-house occupancy calendar.
//!
//! - [`Grid`]: parsed CSV cells, possibly ragged
//! - [`ColumnMapping`]: which grid columns hold the month, date and rooms
//! - [`OccupancyTable`]: month -> day -> six occupant slots

pub mod day;
pub mod grid;
pub mod mapping;
pub mod table;

pub use day::{compare_day_labels, sort_day_labels};
pub use grid::Grid;
pub use mapping::ColumnMapping;
pub use table::{DayEntry, MergeOutcome, MonthEntry, OccupancyTable};

/// Number of rooms in the guest house.
pub const ROOM_COUNT: usize = 6;

/// Occupant names for one day, one slot per room. An empty string is a vacant room.
pub type RoomSlots = [String; ROOM_COUNT];

/// Six vacant slots.
pub fn vacant_rooms() -> RoomSlots {
    RoomSlots::default()
}

/// Display label for a room, 0-based index in, `Room 01`..`Room 06` out.
pub fn room_label(index: usize) -> String {
    format!("Room {:02}", index + 1)
}
