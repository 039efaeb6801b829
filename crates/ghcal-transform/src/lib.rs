//! Occupancy table building and calendar views.
//!
//! - [`build_table`]: fold grid rows into month -> day -> rooms
//! - [`set_day`]: overwrite one day after a manual correction
//! - [`month_view`] / [`availability`]: what a calendar screen shows

pub mod availability;
pub mod build;
pub mod calendar;

pub use availability::{Availability, RoomAvailability, availability};
pub use build::{BuildStats, build_table, build_table_with_stats, normalize_day_label, set_day};
pub use calendar::{AVAILABLE, CalendarDay, MonthView, month_view};
