//! Domain error taxonomy surfaced by the use cases.
//!
//! Every failure here is user-correctable or an infrastructure fault;
//! none is fatal, and each failure path leaves the store in its prior
//! state.

use thiserror::Error;

use crate::ids::RoomId;

#[derive(Debug, Error)]
pub enum SearchError {
    /// Check-in or check-out was not provided. Nothing is written.
    #[error("check-in and check-out dates are required")]
    MissingDates,

    #[error("storage error: {0}")]
    Storage(String),
}

#[derive(Debug, Error)]
pub enum AuthError {
    /// No user matched the submitted credentials. The session is left
    /// untouched.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("storage error: {0}")]
    Storage(String),
}

#[derive(Debug, Error)]
pub enum BookingError {
    /// The requested room id does not resolve to a catalog room.
    #[error("room {0} does not exist")]
    UnknownRoom(RoomId),

    /// Check-out must be strictly after check-in.
    #[error("check-out must be after check-in")]
    InvalidDateRange,

    /// Guest count exceeds the room capacity.
    #[error("room holds at most {capacity} guests, {requested} requested")]
    CapacityExceeded { capacity: u32, requested: u32 },

    #[error("storage error: {0}")]
    Storage(String),
}
