//! Wire types for the seat service.
//!
//! The seat service is an external collaborator reached over four HTTP
//! endpoints (list, book, release, login redirect). The client never owns
//! seat state: it holds a read-through snapshot of this data, replaced
//! wholesale on every fetch.

pub mod client;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use client::{SeatServiceClient, get_or_init_client};

/// Seat cost in Blu Dollars, charged to the manager's cost center
pub const SEAT_COST: u32 = 5;

/// Occupancy status of a seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Available,
    Occupied,
}

impl fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeatStatus::Available => write!(f, "available"),
            SeatStatus::Occupied => write!(f, "occupied"),
        }
    }
}

/// Occupant metadata attached to a booked seat
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// A bookable desk/unit as returned by `GET /seats`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    /// Positive, stable identifier; the zone is implied by the numeric range
    pub id: u32,
    pub status: SeatStatus,
    /// Seat cost in Blu Dollars
    #[serde(default = "default_price")]
    pub price: u32,
    /// Booking timestamp, present when occupied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_time: Option<String>,
    /// Identifier of the occupant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booked_by: Option<String>,
    /// Occupant display details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_details: Option<UserDetails>,
}

fn default_price() -> u32 {
    SEAT_COST
}

impl Seat {
    pub fn is_available(&self) -> bool {
        self.status == SeatStatus::Available
    }
}

/// Cosmetic grouping of seats by id range, used only for color coding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    A,
    B,
    C,
    D,
}

impl Zone {
    /// Zone for a seat id: 1-25 A, 26-50 B, 51-75 C, everything above D
    pub fn for_seat(id: u32) -> Self {
        match id {
            0..=25 => Zone::A,
            26..=50 => Zone::B,
            51..=75 => Zone::C,
            _ => Zone::D,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::A => write!(f, "A"),
            Zone::B => write!(f, "B"),
            Zone::C => write!(f, "C"),
            Zone::D => write!(f, "D"),
        }
    }
}

/// Body of `POST /book`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub seat_id: u32,
    pub w3_id: String,
    pub name: String,
    pub date: String,
    pub time_slot: String,
}

/// Identity returned by `GET /me` for an authenticated session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub w3_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl SessionUser {
    /// Display name for booking requests, falling back to a generic label
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Employee")
    }
}
