//! Top-level application component
//!
//! Runs the startup session probe and switches between the sign-in screen
//! and the seat board. The board is mounted only once a session exists, so
//! its poller starts and stops with authentication.

#![allow(clippy::clone_on_copy)]

use iocraft::prelude::*;

use crate::api::{SessionUser, get_or_init_client};
use crate::session::{self, ProbeOutcome};
use crate::tui::board::SeatBoard;
use crate::tui::login::LoginScreen;
use crate::tui::theme::theme;

/// Props for the App component
#[derive(Default, Props)]
pub struct AppProps {}

/// Application root: session probe, then login or board
#[component]
pub fn App(_props: &AppProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let (width, height) = hooks.use_terminal_size();

    let theme = theme();

    let session: State<Option<SessionUser>> = hooks.use_state(|| None);
    let checking = hooks.use_state(|| true);

    // Startup probe: an existing session cookie skips the sign-in screen
    let probe_handler: Handler<()> = hooks.use_async_handler({
        let session_slot = session.clone();
        let checking_slot = checking.clone();

        move |_: ()| {
            let mut session_slot = session_slot.clone();
            let mut checking_slot = checking_slot.clone();

            async move {
                if let Ok(client) = get_or_init_client()
                    && let ProbeOutcome::Authenticated(user) = session::probe(&client, "").await
                {
                    session_slot.set(Some(user));
                }
                checking_slot.set(false);
            }
        }
    });

    let mut probe_started = hooks.use_state(|| false);
    if !probe_started.get() {
        probe_started.set(true);
        probe_handler.clone()(());
    }

    let current_session = session.read().clone();

    element! {
        View(width, height) {
            #(Some(if checking.get() {
                element! {
                    View(
                        width: 100pct,
                        height: 100pct,
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                    ) {
                        Text(content: "Checking session...", color: theme.text_dimmed)
                    }
                }
                .into_any()
            } else {
                match current_session {
                    Some(user) => element! {
                        SeatBoard(user: Some(user))
                    }
                    .into_any(),
                    None => element! {
                        LoginScreen(session: Some(session))
                    }
                    .into_any(),
                }
            }))
        }
    }
}
