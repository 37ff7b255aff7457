//! Interactive seat board command (`roost board`)
//!
//! Runs the full-screen TUI: session probe, sign-in if needed, then the
//! live floor plan.

use iocraft::prelude::*;

use crate::error::{Result, RoostError};
use crate::tui::App;

/// Launch the seat board TUI
pub async fn cmd_board() -> Result<()> {
    element!(App)
        .fullscreen()
        .await
        .map_err(|e| RoostError::Other(format!("TUI error: {e}")))
}
