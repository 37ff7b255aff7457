//! Terminal user interface

pub mod app;
pub mod board;
pub mod components;
pub mod login;
pub mod theme;

pub use app::App;
