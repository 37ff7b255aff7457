//! Reusable TUI components

pub mod footer;
pub mod search_box;
pub mod summary;
pub mod toast;

pub use footer::{Footer, Shortcut};
pub use search_box::InlineSearchBox;
pub use summary::SummaryPanel;
pub use toast::{Toast, ToastNotification};
