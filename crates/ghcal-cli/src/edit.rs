//! `--set MONTH/DAY=r1|r2|r3|r4|r5|r6` day edits.

use std::str::FromStr;

use ghcal_model::{ROOM_COUNT, RoomSlots};

/// One manual correction: the full set of occupants for a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEdit {
    pub month: String,
    pub day: String,
    pub rooms: RoomSlots,
}

impl FromStr for DayEdit {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (key, rooms) = value
            .split_once('=')
            .ok_or_else(|| format!("expected MONTH/DAY=ROOMS, got '{value}'"))?;
        let (month, day) = key
            .rsplit_once('/')
            .ok_or_else(|| format!("expected MONTH/DAY before '=', got '{key}'"))?;
        let month = month.trim();
        let day = day.trim();
        if month.is_empty() || day.is_empty() {
            return Err(format!("month and day must not be empty in '{key}'"));
        }
        let names: Vec<String> = rooms.split('|').map(|name| name.trim().to_string()).collect();
        let rooms: RoomSlots = names.try_into().map_err(|names: Vec<String>| {
            format!(
                "expected {ROOM_COUNT} room values separated by '|', got {}",
                names.len()
            )
        })?;
        Ok(Self {
            month: month.to_string(),
            day: day.to_string(),
            rooms,
        })
    }
}
