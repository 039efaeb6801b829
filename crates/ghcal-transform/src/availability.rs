//! Per-room occupancy counts for a month.

use serde::Serialize;

use ghcal_model::{OccupancyTable, ROOM_COUNT, room_label};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomAvailability {
    pub room: String,
    pub occupied: usize,
    pub total_days: usize,
}

impl RoomAvailability {
    pub fn free(&self) -> usize {
        self.total_days - self.occupied
    }
}

/// Occupancy summary for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Availability {
    pub month: String,
    pub total_days: usize,
    pub rooms: Vec<RoomAvailability>,
}

impl Availability {
    pub fn occupied_slots(&self) -> usize {
        self.rooms.iter().map(|room| room.occupied).sum()
    }

    /// Vacant room-days across the month.
    pub fn free_slots(&self) -> usize {
        self.total_days * ROOM_COUNT - self.occupied_slots()
    }
}

/// Count occupied days per room. A slot holding only whitespace is vacant.
pub fn availability(table: &OccupancyTable, month: &str) -> Availability {
    let (total_days, counts) = table
        .month(month)
        .map_or((0, [0; ROOM_COUNT]), |entry| {
            (entry.len(), entry.occupied_per_room())
        });
    Availability {
        month: month.to_string(),
        total_days,
        rooms: counts
            .iter()
            .enumerate()
            .map(|(index, &occupied)| RoomAvailability {
                room: room_label(index),
                occupied,
                total_days,
            })
            .collect(),
    }
}
