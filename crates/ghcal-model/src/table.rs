//! Month -> day -> occupant slots, in first-seen order.

use serde::{Deserialize, Serialize};

use crate::day::compare_day_labels;
use crate::{ROOM_COUNT, RoomSlots};

/// Result of folding a row into an existing month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The day was new and the slots were stored as given.
    Inserted,
    /// The day existed; `filled` vacant slots took a value from the new row.
    Merged { filled: usize },
}

/// Occupants of one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    label: String,
    rooms: RoomSlots,
}

impl DayEntry {
    pub fn new(label: impl Into<String>, rooms: RoomSlots) -> Self {
        Self {
            label: label.into(),
            rooms,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn rooms(&self) -> &RoomSlots {
        &self.rooms
    }

    /// Number of slots holding a non-blank occupant.
    pub fn occupied_count(&self) -> usize {
        self.rooms
            .iter()
            .filter(|name| !name.trim().is_empty())
            .count()
    }

    /// Fill vacant slots from `incoming`; occupied slots are never overwritten.
    fn merge(&mut self, incoming: RoomSlots) -> usize {
        let mut filled = 0;
        for (slot, value) in self.rooms.iter_mut().zip(incoming) {
            if slot.is_empty() && !value.is_empty() {
                *slot = value;
                filled += 1;
            }
        }
        filled
    }
}

/// All days recorded under one month label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthEntry {
    label: String,
    days: Vec<DayEntry>,
}

impl MonthEntry {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            days: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Days in first-seen order.
    pub fn days(&self) -> &[DayEntry] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn day(&self, label: &str) -> Option<&DayEntry> {
        self.days.iter().find(|day| day.label == label)
    }

    pub fn contains_day(&self, label: &str) -> bool {
        self.day(label).is_some()
    }

    /// Days ordered by [`compare_day_labels`]. Ties keep first-seen order.
    pub fn sorted_days(&self) -> Vec<&DayEntry> {
        let mut days: Vec<&DayEntry> = self.days.iter().collect();
        days.sort_by(|a, b| compare_day_labels(&a.label, &b.label));
        days
    }

    /// Insert a new day, or fill the vacant slots of an existing one.
    pub fn merge_day(&mut self, label: &str, rooms: RoomSlots) -> MergeOutcome {
        match self.days.iter_mut().find(|day| day.label == label) {
            Some(existing) => MergeOutcome::Merged {
                filled: existing.merge(rooms),
            },
            None => {
                self.days.push(DayEntry::new(label, rooms));
                MergeOutcome::Inserted
            }
        }
    }

    /// Replace a day's slots wholesale, appending the day if it is new.
    pub fn set_day(&mut self, label: &str, rooms: RoomSlots) {
        match self.days.iter_mut().find(|day| day.label == label) {
            Some(existing) => existing.rooms = rooms,
            None => self.days.push(DayEntry::new(label, rooms)),
        }
    }

    /// Occupied-day count per room.
    pub fn occupied_per_room(&self) -> [usize; ROOM_COUNT] {
        let mut counts = [0usize; ROOM_COUNT];
        for day in &self.days {
            for (count, name) in counts.iter_mut().zip(day.rooms.iter()) {
                if !name.trim().is_empty() {
                    *count += 1;
                }
            }
        }
        counts
    }
}

/// Occupancy for every month seen in the source, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyTable {
    months: Vec<MonthEntry>,
}

impl OccupancyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no month has been recorded.
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Number of months.
    pub fn len(&self) -> usize {
        self.months.len()
    }

    /// Total number of days across all months.
    pub fn day_count(&self) -> usize {
        self.months.iter().map(MonthEntry::len).sum()
    }

    pub fn months(&self) -> &[MonthEntry] {
        &self.months
    }

    pub fn month_labels(&self) -> Vec<String> {
        self.months
            .iter()
            .map(|month| month.label.clone())
            .collect()
    }

    pub fn month(&self, label: &str) -> Option<&MonthEntry> {
        self.months.iter().find(|month| month.label == label)
    }

    pub fn month_mut(&mut self, label: &str) -> Option<&mut MonthEntry> {
        self.months.iter_mut().find(|month| month.label == label)
    }

    pub fn contains_month(&self, label: &str) -> bool {
        self.month(label).is_some()
    }

    /// The month entry for `label`, appended empty if it does not exist yet.
    pub fn ensure_month(&mut self, label: &str) -> &mut MonthEntry {
        let index = match self.months.iter().position(|month| month.label == label) {
            Some(index) => index,
            None => {
                self.months.push(MonthEntry::new(label));
                self.months.len() - 1
            }
        };
        &mut self.months[index]
    }

    pub fn rooms(&self, month: &str, day: &str) -> Option<&RoomSlots> {
        self.month(month)
            .and_then(|entry| entry.day(day))
            .map(DayEntry::rooms)
    }

    /// Overwrite one day's slots. Missing months and days are created.
    pub fn set_day(&mut self, month: &str, day: &str, rooms: RoomSlots) {
        self.ensure_month(month).set_day(day, rooms);
    }
}
