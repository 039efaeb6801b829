//! Session state for the occupancy calendar.
//!
//! A [`Session`] owns everything one editing session needs: the parsed grid,
//! the confirmed column mapping, the occupancy table and the month display
//! order. Presentation layers hold a `Session` and call its methods; nothing
//! here is global.

mod error;
mod session;

pub use error::{Result, SessionError};
pub use session::Session;
