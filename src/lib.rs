pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod session;
pub mod tui;

pub use api::{
    BookingRequest, Seat, SeatServiceClient, SeatStatus, SessionUser, UserDetails, Zone,
    get_or_init_client,
};
pub use config::Config;
pub use error::{Result, RoostError};
pub use session::{IdentifierCheck, ProbeOutcome, check_identifier, probe};
