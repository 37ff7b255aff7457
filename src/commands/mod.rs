//! Command implementations for the CLI

pub mod board;
pub mod config;
pub mod login;
pub mod seats;

pub use board::cmd_board;
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use login::cmd_login;
pub use seats::cmd_seats;
