//! CLI library components for the occupancy calendar.

pub mod edit;
pub mod export;
pub mod logging;
