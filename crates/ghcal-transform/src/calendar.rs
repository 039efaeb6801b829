//! Calendar view of one month.

use serde::Serialize;

use ghcal_model::{OccupancyTable, RoomSlots};

/// Text shown for a vacant room.
pub const AVAILABLE: &str = "Available";

/// One day cell of the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub day: String,
    pub rooms: RoomSlots,
}

impl CalendarDay {
    /// Room text for display: the occupant, or [`AVAILABLE`].
    pub fn display_rooms(&self) -> impl Iterator<Item = &str> {
        self.rooms
            .iter()
            .map(|name| if name.is_empty() { AVAILABLE } else { name.as_str() })
    }
}

/// Days of a month in calendar order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthView {
    pub month: String,
    pub days: Vec<CalendarDay>,
}

impl MonthView {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Message shown in place of the calendar when a month has no day rows.
    pub fn empty_message(&self) -> String {
        format!(
            "No day rows found for {}. Check column mapping or CSV format.",
            self.month
        )
    }
}

/// The days of `month`, sorted numerically where possible.
///
/// An unknown month yields an empty view.
pub fn month_view(table: &OccupancyTable, month: &str) -> MonthView {
    let days = table
        .month(month)
        .map(|entry| {
            entry
                .sorted_days()
                .into_iter()
                .map(|day| CalendarDay {
                    day: day.label().to_string(),
                    rooms: day.rooms().clone(),
                })
                .collect()
        })
        .unwrap_or_default();
    MonthView {
        month: month.to_string(),
        days,
    }
}
