//! Booking and search domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::{BookingId, RoomId};

/// A committed booking.
///
/// `room_id` must reference a room that existed in the catalog at booking
/// time; `check_out` is strictly after `check_in` and `guests` never
/// exceeds the room capacity. The booking commit path validates all three
/// before any write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub room_id: RoomId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
}

/// The most recent search, persisted for the results view to read back.
///
/// Both dates are always present in the persisted form; validation happens
/// before the write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
}

/// A search as submitted from the UI, dates possibly missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchForm {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: u32,
}

impl SearchForm {
    /// Validate the form into persistable criteria.
    ///
    /// Returns `None` when either date is missing.
    pub fn into_criteria(self) -> Option<SearchCriteria> {
        Some(SearchCriteria {
            check_in: self.check_in?,
            check_out: self.check_out?,
            guests: self.guests,
        })
    }
}
