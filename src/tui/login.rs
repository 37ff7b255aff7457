//! Sign-in screen
//!
//! Collects the user's w3 identifier, validates it against the corporate
//! domain locally, then probes the seat service for a valid session. The
//! probe is the authoritative check; when it fails the user is pointed at
//! the browser-based sign-in flow and can retry with Enter.

#![allow(clippy::clone_on_copy)]

use iocraft::prelude::*;

use crate::api::{SessionUser, get_or_init_client};
use crate::config::Config;
use crate::session::{self, IdentifierCheck, ProbeOutcome};
use crate::tui::components::Footer;
use crate::tui::components::footer::login_shortcuts;
use crate::tui::theme::theme;

/// Props for the LoginScreen component
#[derive(Default, Props)]
pub struct LoginScreenProps {
    /// Slot the screen fills on successful sign-in
    pub session: Option<State<Option<SessionUser>>>,
}

/// Sign-in screen shown until the session probe succeeds
#[component]
pub fn LoginScreen(props: &LoginScreenProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let theme = theme();

    let session_slot = props.session;

    let mut w3_id = hooks.use_state(String::new);
    let mut error: State<Option<String>> = hooks.use_state(|| None);
    let login_url: State<Option<String>> = hooks.use_state(|| None);
    let mut probing = hooks.use_state(|| false);
    let mut should_exit = hooks.use_state(|| false);

    // The corporate domain the identifier must contain
    let domain = hooks.use_state(|| {
        Config::load()
            .map(|c| c.auth.domain)
            .unwrap_or_else(|e| {
                tracing::warn!("config load failed, using default domain: {e}");
                crate::config::DEFAULT_DOMAIN.to_string()
            })
    });

    let probe_handler: Handler<String> = hooks.use_async_handler({
        let error_slot = error.clone();
        let login_url_slot = login_url.clone();
        let probing_slot = probing.clone();

        move |entered: String| {
            let session_slot = session_slot.clone();
            let mut error_slot = error_slot.clone();
            let mut login_url_slot = login_url_slot.clone();
            let mut probing_slot = probing_slot.clone();

            async move {
                let outcome = match get_or_init_client() {
                    Ok(client) => session::probe(&client, &entered).await,
                    Err(e) => {
                        error_slot.set(Some(format!("Configuration error: {e}")));
                        probing_slot.set(false);
                        return;
                    }
                };

                match outcome {
                    ProbeOutcome::Authenticated(user) => {
                        if let Some(mut slot) = session_slot {
                            slot.set(Some(user));
                        }
                    }
                    ProbeOutcome::Unauthenticated { login_url: url } => {
                        login_url_slot.set(Some(url));
                        error_slot.set(Some(
                            "No active session. Complete sign-in in your browser, then press Enter to retry.".to_string(),
                        ));
                    }
                }
                probing_slot.set(false);
            }
        }
    });

    let probe_handler_for_events = probe_handler.clone();

    hooks.use_terminal_events({
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('q') {
                    should_exit.set(true);
                    return;
                }

                if code == KeyCode::Enter && !probing.get() {
                    let entered = w3_id.to_string();
                    match session::check_identifier(&entered, &domain.read()) {
                        IdentifierCheck::Valid => {
                            error.set(None);
                            probing.set(true);
                            probe_handler_for_events(entered);
                        }
                        IdentifierCheck::Invalid { domain } => {
                            error.set(Some(format!(
                                "Please enter a valid {domain} w3 id"
                            )));
                        }
                    }
                }
            }
            _ => {}
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let error_text = error.read().clone();
    let login_url_text = login_url.read().clone();
    let is_probing = probing.get();

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            View(
                flex_grow: 1.0,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                flex_direction: FlexDirection::Column,
            ) {
                View(
                    width: 60,
                    flex_direction: FlexDirection::Column,
                    border_style: BorderStyle::Round,
                    border_color: theme.border_focused,
                    padding: 1,
                    row_gap: 1,
                ) {
                    Text(
                        content: "Roost · Lunch Seat Booking",
                        color: theme.highlight,
                        weight: Weight::Bold,
                    )

                    View(flex_direction: FlexDirection::Row) {
                        Text(content: "w3 ID: ", color: theme.text)
                        View(flex_grow: 1.0) {
                            TextInput(
                                value: w3_id.to_string(),
                                has_focus: true,
                                on_change: move |new_value| w3_id.set(new_value),
                                color: theme.text,
                            )
                        }
                    }

                    #(error_text.map(|message| {
                        element! {
                            Text(content: message, color: Color::Red)
                        }
                    }))

                    #(login_url_text.map(|url| {
                        element! {
                            Text(
                                content: format!("Sign in at: {url}"),
                                color: theme.text_dimmed,
                            )
                        }
                    }))

                    #(is_probing.then(|| {
                        element! {
                            Text(content: "Checking session...", color: theme.text_dimmed)
                        }
                    }))
                }
            }

            Footer(shortcuts: login_shortcuts())
        }
    }
}
