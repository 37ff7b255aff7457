//! Interactive seat board
//!
//! Renders the floor-plan grid, booking summary panel, colleague search
//! and toast bar, and owns the background poller that keeps the seat
//! snapshot fresh. All state transitions go through the pure reducer in
//! [`model`]; this module only wires hooks, network effects, and layout.

// Allow clone on Copy types - used intentionally in async closures for clarity
#![allow(clippy::clone_on_copy)]
#![allow(clippy::redundant_closure)]

pub mod keymap;
pub mod model;

use std::sync::Arc;
use std::time::Duration;

use iocraft::prelude::*;
use jiff::Timestamp;

use crate::api::{BookingRequest, SessionUser, get_or_init_client};
use crate::tui::components::toast::Toast;
use crate::tui::components::{Footer, InlineSearchBox, SummaryPanel, ToastNotification};
use crate::tui::theme::theme;

use keymap::key_to_action;
use model::{
    BoardAction, BoardState, BoardViewModel, CellEmphasis, GRID_COLUMNS, SeatCell, SnapshotGate,
    compute_board_view_model, reduce_board_state, smart_assign,
};

/// How often the seat snapshot is refreshed in the background
const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// UI tick driving toast expiry and countdown re-render
const TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Apply an action to a board state slot
fn dispatch(board: &mut State<BoardState>, action: BoardAction) {
    let current = board.read().clone();
    board.set(reduce_board_state(current, action));
}

/// One gated fetch of the seat snapshot. Poll failures are non-fatal: the
/// last good snapshot stays on screen.
async fn fetch_snapshot(gate: &SnapshotGate, mut board: State<BoardState>) {
    let seq = gate.begin();

    let client = match get_or_init_client() {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!("seat service client unavailable: {e}");
            return;
        }
    };

    match client.list_seats().await {
        Ok(seats) => {
            if gate.try_apply(seq) {
                dispatch(&mut board, BoardAction::ApplySnapshot(seats));
            }
        }
        Err(e) => {
            tracing::warn!("seat snapshot fetch failed: {e}");
        }
    }
}

/// Props for the SeatBoard component
#[derive(Default, Props)]
pub struct SeatBoardProps {
    /// The authenticated user; bookings are made in their name
    pub user: Option<SessionUser>,
}

/// Main seat board component
#[component]
pub fn SeatBoard(props: &SeatBoardProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let theme = theme();

    let user = props.user.clone().unwrap_or_default();

    let mut board: State<BoardState> = hooks.use_state(BoardState::new);
    let mut search_query = hooks.use_state(String::new);
    let now = hooks.use_state(Timestamp::now);

    // Shared between the poll loop and post-write refreshes so a stale poll
    // response can never overwrite a newer one.
    let gate: State<Arc<SnapshotGate>> = hooks.use_state(|| Arc::new(SnapshotGate::new()));

    // Background poll loop. The future is owned by this component: when the
    // board unmounts the loop is dropped with it.
    let poll_handler: Handler<()> = hooks.use_async_handler({
        let board_slot = board.clone();
        let gate_slot = gate.clone();

        move |_: ()| {
            let board_slot = board_slot.clone();
            let gate = gate_slot.read().clone();

            async move {
                loop {
                    fetch_snapshot(&gate, board_slot.clone()).await;
                    tokio::time::sleep(POLL_INTERVAL).await;
                }
            }
        }
    });

    // One-shot refresh after a successful write, gated like the poller
    let refresh_handler: Handler<()> = hooks.use_async_handler({
        let board_slot = board.clone();
        let gate_slot = gate.clone();

        move |_: ()| {
            let board_slot = board_slot.clone();
            let gate = gate_slot.read().clone();

            async move {
                fetch_snapshot(&gate, board_slot.clone()).await;
            }
        }
    });

    // Book the given seat; toasts report the outcome
    let book_handler: Handler<BookingRequest> = hooks.use_async_handler({
        let board_slot = board.clone();
        let refresh_handler = refresh_handler.clone();

        move |request: BookingRequest| {
            let mut board_slot = board_slot.clone();
            let refresh_handler = refresh_handler.clone();

            async move {
                let client = match get_or_init_client() {
                    Ok(client) => client,
                    Err(e) => {
                        tracing::warn!("seat service client unavailable: {e}");
                        dispatch(
                            &mut board_slot,
                            BoardAction::ShowToast(Toast::error("Booking Failed.")),
                        );
                        return;
                    }
                };

                match client.book_seat(&request).await {
                    Ok(()) => {
                        dispatch(
                            &mut board_slot,
                            BoardAction::ShowToast(Toast::success(format!(
                                "Seat {} Reserved",
                                request.seat_id
                            ))),
                        );
                        refresh_handler(());
                    }
                    Err(e) => {
                        tracing::warn!("booking seat {} failed: {e}", request.seat_id);
                        dispatch(
                            &mut board_slot,
                            BoardAction::ShowToast(Toast::error("Booking Failed.")),
                        );
                    }
                }
            }
        }
    });

    // Release the given seat
    let release_handler: Handler<u32> = hooks.use_async_handler({
        let board_slot = board.clone();
        let refresh_handler = refresh_handler.clone();

        move |seat_id: u32| {
            let mut board_slot = board_slot.clone();
            let refresh_handler = refresh_handler.clone();

            async move {
                let client = match get_or_init_client() {
                    Ok(client) => client,
                    Err(e) => {
                        tracing::warn!("seat service client unavailable: {e}");
                        dispatch(
                            &mut board_slot,
                            BoardAction::ShowToast(Toast::error("Checkout Failed.")),
                        );
                        return;
                    }
                };

                match client.release_seat(seat_id).await {
                    Ok(()) => {
                        dispatch(
                            &mut board_slot,
                            BoardAction::ShowToast(Toast::success(format!(
                                "Checked out of Seat {seat_id}"
                            ))),
                        );
                        refresh_handler(());
                    }
                    Err(e) => {
                        tracing::warn!("releasing seat {seat_id} failed: {e}");
                        dispatch(
                            &mut board_slot,
                            BoardAction::ShowToast(Toast::error("Checkout Failed.")),
                        );
                    }
                }
            }
        }
    });

    // UI tick: advances the countdown clock and expires toasts
    let tick_handler: Handler<()> = hooks.use_async_handler({
        let board_slot = board.clone();
        let now_slot = now.clone();

        move |_: ()| {
            let mut board_slot = board_slot.clone();
            let mut now_slot = now_slot.clone();

            async move {
                loop {
                    tokio::time::sleep(TICK_INTERVAL).await;
                    now_slot.set(Timestamp::now());

                    let expired = board_slot
                        .read()
                        .toast
                        .as_ref()
                        .is_some_and(|t| t.is_expired());
                    if expired {
                        dispatch(&mut board_slot, BoardAction::DismissToast);
                    }
                }
            }
        }
    });

    // Kick off the poller and ticker on first render
    let mut loops_started = hooks.use_state(|| false);
    if !loops_started.get() {
        loops_started.set(true);
        poll_handler.clone()(());
        tick_handler.clone()(());
    }

    let book_handler_for_events = book_handler.clone();
    let release_handler_for_events = release_handler.clone();

    hooks.use_terminal_events({
        let user = user.clone();

        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let search_focused = board.read().search_focused;
                let Some(action) = key_to_action(code, modifiers, search_focused) else {
                    return;
                };

                match action {
                    BoardAction::Confirm => {
                        let state = board.read().clone();
                        let Some(seat) = state.selected_seat() else {
                            return;
                        };

                        if seat.is_available() {
                            book_handler_for_events(BookingRequest {
                                seat_id: seat.id,
                                w3_id: user.w3_id.clone(),
                                name: user.display_name().to_string(),
                                date: state.date.to_string(),
                                time_slot: state.time_slot.to_string(),
                            });
                        } else {
                            release_handler_for_events(seat.id);
                        }
                    }
                    BoardAction::SmartAssign => {
                        let next = smart_assign(board.read().clone(), &mut rand::rng());
                        board.set(next);
                    }
                    BoardAction::ClearSearchAndExit => {
                        search_query.set(String::new());
                        dispatch(&mut board, BoardAction::ClearSearchAndExit);
                    }
                    other => {
                        dispatch(&mut board, other);
                    }
                }
            }
            _ => {}
        }
    });

    if board.read().should_exit {
        system.exit();
    }

    // The search query lives in its own slot so the text input can edit it;
    // fold it into the state snapshot before computing the view model.
    let mut vm_state = board.read().clone();
    vm_state.search_query = search_query.to_string();
    let vm = compute_board_view_model(&vm_state, now.get());

    let header_right = format!(
        "{} · {}   {}/{} available",
        vm.header.date_label, vm.header.time_label, vm.header.available_count, vm.header.total_count,
    );
    let user_label = user.display_name().to_string();

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            // Header row
            View(
                width: 100pct,
                height: 1,
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::SpaceBetween,
                padding_left: 1,
                padding_right: 1,
                background_color: theme.border,
            ) {
                Text(
                    content: format!("Roost · Lunch Seat Booking · {user_label}"),
                    color: theme.text,
                    weight: Weight::Bold,
                )
                Text(content: header_right, color: theme.text)
            }

            // Search bar
            View(
                width: 100pct,
                padding_left: 1,
                padding_right: 1,
                height: 1,
            ) {
                InlineSearchBox(
                    value: Some(search_query),
                    has_focus: vm.search_focused,
                )
            }

            // Main content area
            View(
                flex_grow: 1.0,
                width: 100pct,
                flex_direction: FlexDirection::Row,
            ) {
                #(Some(render_grid(&vm)))

                SummaryPanel(summary: vm.summary.clone())
            }

            // Toast notification
            ToastNotification(toast: vm.toast.clone())

            // Footer
            Footer(shortcuts: vm.shortcuts.clone())
        }
    }
}

/// Render the floor-plan grid, ten seats per row
fn render_grid(vm: &BoardViewModel) -> AnyElement<'static> {
    let theme = theme();

    if vm.is_loading {
        return element! {
            View(
                flex_grow: 1.0,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                border_style: BorderStyle::Round,
                border_color: theme.border,
            ) {
                Text(content: "Loading seats...", color: theme.text_dimmed)
            }
        }
        .into_any();
    }

    let rows: Vec<Vec<SeatCell>> = vm
        .grid
        .chunks(GRID_COLUMNS)
        .map(|row| row.to_vec())
        .collect();

    element! {
        View(
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.border,
            padding: 1,
            row_gap: 1,
        ) {
            #(rows.into_iter().map(|row| {
                element! {
                    View(flex_direction: FlexDirection::Row, column_gap: 1) {
                        #(row.into_iter().map(|cell| render_cell(cell)))
                    }
                }
            }))
        }
    }
    .into_any()
}

fn render_cell(cell: SeatCell) -> AnyElement<'static> {
    let theme = theme();

    let (color, weight) = match cell.emphasis {
        CellEmphasis::SearchMatch => (theme.search_match, Weight::Bold),
        CellEmphasis::Selected => (theme.selected, Weight::Bold),
        CellEmphasis::Occupied => (theme.occupied, Weight::Normal),
        CellEmphasis::Available(zone) => (theme.zone_color(zone), Weight::Normal),
    };

    let background = cell.is_cursor.then_some(theme.highlight);

    element! {
        View(
            width: 4,
            height: 1,
            justify_content: JustifyContent::Center,
            background_color: background,
        ) {
            Text(content: format!("{:>3}", cell.id), color: color, weight: weight)
        }
    }
    .into_any()
}
