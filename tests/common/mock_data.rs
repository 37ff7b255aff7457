//! Mock data builders for seats and sessions.
//!
//! Builders construct seat snapshots in memory so tests never need a
//! running seat service.

use roost::{Seat, SeatStatus, UserDetails};

/// Builder for test seats
pub struct SeatBuilder {
    seat: Seat,
}

impl SeatBuilder {
    /// Create a builder for an available seat with the given id
    pub fn new(id: u32) -> Self {
        Self {
            seat: Seat {
                id,
                status: SeatStatus::Available,
                price: 5,
                booking_time: None,
                booked_by: None,
                user_details: None,
            },
        }
    }

    /// Mark the seat as occupied by the given identifier
    pub fn occupied_by(mut self, w3_id: &str) -> Self {
        self.seat.status = SeatStatus::Occupied;
        self.seat.booked_by = Some(w3_id.to_string());
        self.seat.booking_time = Some("2025-06-01T12:00:00Z".to_string());
        self
    }

    /// Set the occupant's display name
    pub fn named(mut self, full_name: &str) -> Self {
        self.seat.user_details = Some(UserDetails {
            full_name: Some(full_name.to_string()),
        });
        self
    }

    /// Set the booking timestamp
    pub fn booked_at(mut self, timestamp: &str) -> Self {
        self.seat.booking_time = Some(timestamp.to_string());
        self
    }

    pub fn build(self) -> Seat {
        self.seat
    }
}

/// An available seat
pub fn mock_seat(id: u32) -> Seat {
    SeatBuilder::new(id).build()
}

/// An occupied seat booked by the given identifier
pub fn mock_occupied_seat(id: u32, w3_id: &str) -> Seat {
    SeatBuilder::new(id).occupied_by(w3_id).build()
}

/// A full floor of `count` available seats, ids starting at 1
pub fn mock_floor(count: u32) -> Vec<Seat> {
    (1..=count).map(mock_seat).collect()
}
