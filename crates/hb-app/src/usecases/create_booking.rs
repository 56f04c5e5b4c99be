//! Use case for committing a booking.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn, Instrument};

use hb_core::booking::Booking;
use hb_core::ids::{BookingId, RoomId};
use hb_core::ports::BookingError;
use hb_core::EntityStore;

/// A booking as submitted from the booking view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub room_id: RoomId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
}

/// Validates and commits a booking against the stored catalog.
///
/// All invariants are checked before any write; a rejected request leaves
/// the booking collection exactly as it was.
pub struct CreateBooking {
    store: EntityStore,
}

impl CreateBooking {
    pub fn new(store: EntityStore) -> Self {
        Self { store }
    }

    /// Execute the use case.
    pub async fn execute(&self, request: BookingRequest) -> Result<Booking, BookingError> {
        let span = info_span!("usecase.create_booking.execute");

        async {
            let rooms = self
                .store
                .rooms()
                .await
                .map_err(|e| BookingError::Storage(e.to_string()))?
                .unwrap_or_default();

            let room = rooms
                .iter()
                .find(|r| r.id == request.room_id)
                .ok_or(BookingError::UnknownRoom(request.room_id))?;

            if request.check_out <= request.check_in {
                warn!(room_id = %request.room_id, "booking rejected: inverted date range");
                return Err(BookingError::InvalidDateRange);
            }

            if request.guests > room.capacity {
                warn!(room_id = %request.room_id, "booking rejected: over capacity");
                return Err(BookingError::CapacityExceeded {
                    capacity: room.capacity,
                    requested: request.guests,
                });
            }

            let booking = Booking {
                id: BookingId::new(),
                room_id: request.room_id,
                check_in: request.check_in,
                check_out: request.check_out,
                guests: request.guests,
            };

            let mut bookings = self
                .store
                .bookings()
                .await
                .map_err(|e| BookingError::Storage(e.to_string()))?
                .unwrap_or_default();
            bookings.push(booking.clone());

            self.store
                .set_bookings(&bookings)
                .await
                .map_err(|e| BookingError::Storage(e.to_string()))?;

            info!(booking_id = %booking.id, room_id = %booking.room_id, "booking committed");
            Ok(booking)
        }
        .instrument(span)
        .await
    }
}
