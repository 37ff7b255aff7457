//! Sign-in helper (`roost login`)
//!
//! The seat service authenticates through a browser redirect flow that sets
//! a session cookie. This command checks whether a session already exists
//! and prints the sign-in URL when it does not.

use owo_colors::OwoColorize;

use crate::api::get_or_init_client;
use crate::error::Result;
use crate::session::{self, ProbeOutcome};

/// Check the current session, printing the sign-in URL when absent
pub async fn cmd_login() -> Result<()> {
    let client = get_or_init_client()?;

    match session::probe(&client, "").await {
        ProbeOutcome::Authenticated(user) => {
            println!(
                "{} signed in as {}",
                "✓".green().bold(),
                user.display_name().cyan()
            );
        }
        ProbeOutcome::Unauthenticated { login_url } => {
            println!("{}", "No active session.".yellow());
            println!("\nSign in with your corporate account in a browser:");
            println!("  {}", login_url.cyan().underline());
            println!("\nThen run {} again.", "roost login".bold());
        }
    }

    Ok(())
}
