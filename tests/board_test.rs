//! Seat board integration tests
//!
//! These complement the unit tests in `src/tui/board/model.rs` by driving
//! the reducer and view model through realistic action sequences: polling
//! while a seat is selected, booking flows, search, and countdown
//! rendering.

mod common;

use common::mock_data::{SeatBuilder, mock_floor, mock_occupied_seat, mock_seat};
use iocraft::prelude::{KeyCode, KeyModifiers};
use jiff::Timestamp;
use roost::SeatStatus;
use roost::tui::board::keymap::key_to_action;
use roost::tui::board::model::*;

fn now() -> Timestamp {
    "2025-06-01T12:00:00Z".parse().unwrap()
}

/// Drive a key through the keymap and reducer in one step
fn press(state: BoardState, code: KeyCode) -> BoardState {
    match key_to_action(code, KeyModifiers::NONE, state.search_focused) {
        Some(action) => reduce_board_state(state, action),
        None => state,
    }
}

// ============================================================================
// Polling while interacting
// ============================================================================

#[test]
fn test_selection_survives_snapshot_with_changed_status() {
    // User selects seat 5, then a poll reports it booked by someone else.
    let mut state = BoardState {
        seats: mock_floor(10),
        ..BoardState::default()
    };
    state = reduce_board_state(state, BoardAction::SelectSeat(5));
    assert_eq!(state.selected_id, Some(5));

    let mut snapshot = mock_floor(10);
    snapshot[4] = SeatBuilder::new(5)
        .occupied_by("colleague@ibm.com")
        .named("A Colleague")
        .build();
    state = reduce_board_state(state, BoardAction::ApplySnapshot(snapshot));

    // The selection sticks to the id and now reflects the occupied seat, so
    // the summary panel flips from booking to releasing.
    let vm = compute_board_view_model(&state, now());
    let summary = vm.summary.expect("selection survives the poll");
    assert_eq!(summary.seat_id, 5);
    assert_eq!(summary.status, SeatStatus::Occupied);
    assert_eq!(summary.action, PrimaryAction::Release);
    assert_eq!(summary.occupant.as_deref(), Some("A Colleague"));
}

#[test]
fn test_selection_cleared_when_seat_disappears() {
    let mut state = BoardState {
        seats: mock_floor(10),
        ..BoardState::default()
    };
    state = reduce_board_state(state, BoardAction::SelectSeat(10));

    // The backend stops returning seat 10 entirely.
    state = reduce_board_state(state, BoardAction::ApplySnapshot(mock_floor(9)));
    assert_eq!(state.selected_id, None);
    assert!(compute_board_view_model(&state, now()).summary.is_none());
}

#[test]
fn test_stale_poll_response_is_dropped() {
    let gate = SnapshotGate::new();

    // A post-booking refresh starts after a slow poll but lands first.
    let poll_seq = gate.begin();
    let refresh_seq = gate.begin();

    assert!(gate.try_apply(refresh_seq), "fresh refresh applies");
    assert!(!gate.try_apply(poll_seq), "stale poll must not revert it");
}

// ============================================================================
// Keyboard flows
// ============================================================================

#[test]
fn test_navigate_and_select_flow() {
    let mut state = BoardState {
        seats: mock_floor(30),
        ..BoardState::default()
    };

    state = press(state, KeyCode::Char('j'));
    state = press(state, KeyCode::Char('j'));
    state = press(state, KeyCode::Char('l'));
    assert_eq!(state.cursor, 21);

    state = press(state, KeyCode::Enter);
    assert_eq!(state.selected_id, Some(22));
}

#[test]
fn test_search_focus_suspends_board_keys() {
    let mut state = BoardState {
        seats: mock_floor(10),
        ..BoardState::default()
    };

    state = press(state, KeyCode::Char('/'));
    assert!(state.search_focused);

    // Movement keys go to the text input, not the cursor.
    state = press(state, KeyCode::Char('j'));
    assert_eq!(state.cursor, 0);

    state = press(state, KeyCode::Enter);
    assert!(!state.search_focused, "Enter exits search");
}

#[test]
fn test_escape_clears_search() {
    let mut state = BoardState {
        seats: mock_floor(10),
        search_query: "ada".to_string(),
        search_focused: true,
        ..BoardState::default()
    };

    state = press(state, KeyCode::Esc);
    assert!(!state.search_focused);
    assert!(state.search_query.is_empty());
}

#[test]
fn test_quit_key() {
    let state = press(BoardState::default(), KeyCode::Char('q'));
    assert!(state.should_exit);
}

// ============================================================================
// Booking failure
// ============================================================================

#[test]
fn test_failed_booking_toasts_without_flipping_status() {
    let mut state = BoardState {
        seats: vec![mock_seat(1), mock_occupied_seat(2, "x@ibm.com")],
        ..BoardState::default()
    };

    state = reduce_board_state(state, BoardAction::SelectSeat(1));
    let vm = compute_board_view_model(&state, now());
    let summary = vm.summary.unwrap();
    assert_eq!(summary.seat_id, 1);
    assert_eq!(summary.action.label(), "Confirm & Book");

    // The booking call fails; the handler reports it and changes nothing
    // else. No optimistic flip: seat 1 is still rendered available.
    state = reduce_board_state(
        state,
        BoardAction::ShowToast(roost::tui::components::Toast::error("Booking Failed.")),
    );

    let vm = compute_board_view_model(&state, now());
    assert_eq!(vm.toast.unwrap().message, "Booking Failed.");
    assert_ne!(vm.grid[0].emphasis, CellEmphasis::Occupied);
    assert_eq!(state.seats[0].status, SeatStatus::Available);
    assert_eq!(state.selected_id, Some(1));
}

// ============================================================================
// Search and highlighting
// ============================================================================

#[test]
fn test_search_highlights_colleague_seat() {
    let mut seats = mock_floor(26);
    seats[7] = SeatBuilder::new(8)
        .occupied_by("ada@ibm.com")
        .named("Ada Lovelace")
        .build();
    seats[25] = mock_occupied_seat(26, "grace@ibm.com");

    let state = BoardState {
        seats,
        search_query: "lovelace".to_string(),
        ..BoardState::default()
    };

    let vm = compute_board_view_model(&state, now());
    assert_eq!(vm.grid[7].emphasis, CellEmphasis::SearchMatch);
    assert_eq!(vm.grid[25].emphasis, CellEmphasis::Occupied);
}

#[test]
fn test_zone_colors_follow_id_ranges() {
    use roost::Zone;

    let state = BoardState {
        seats: vec![mock_seat(1), mock_seat(26), mock_seat(51), mock_seat(76)],
        ..BoardState::default()
    };

    let vm = compute_board_view_model(&state, now());
    assert_eq!(vm.grid[0].emphasis, CellEmphasis::Available(Zone::A));
    assert_eq!(vm.grid[1].emphasis, CellEmphasis::Available(Zone::B));
    assert_eq!(vm.grid[2].emphasis, CellEmphasis::Available(Zone::C));
    assert_eq!(vm.grid[3].emphasis, CellEmphasis::Available(Zone::D));
}

// ============================================================================
// Countdown
// ============================================================================

#[test]
fn test_countdown_updates_with_poll_clock() {
    let mut state = BoardState {
        seats: vec![
            SeatBuilder::new(1)
                .occupied_by("ada@ibm.com")
                .booked_at("2025-06-01T12:00:00Z")
                .build(),
        ],
        ..BoardState::default()
    };
    state = reduce_board_state(state, BoardAction::SelectSeat(1));

    let early: Timestamp = "2025-06-01T12:05:00Z".parse().unwrap();
    let vm = compute_board_view_model(&state, early);
    assert_eq!(vm.summary.unwrap().countdown.as_deref(), Some("40m left"));

    let late: Timestamp = "2025-06-01T12:50:00Z".parse().unwrap();
    let vm = compute_board_view_model(&state, late);
    assert_eq!(vm.summary.unwrap().countdown.as_deref(), Some("Expiring..."));
}

#[test]
fn test_countdown_never_changes_status_locally() {
    // A seat past its hold window stays occupied until a poll says otherwise.
    let state = BoardState {
        seats: vec![
            SeatBuilder::new(1)
                .occupied_by("ada@ibm.com")
                .booked_at("2025-06-01T10:00:00Z")
                .build(),
        ],
        ..BoardState::default()
    };

    let vm = compute_board_view_model(&state, now());
    assert_eq!(vm.grid[0].emphasis, CellEmphasis::Occupied);
    assert_eq!(vm.header.available_count, 0);
}

// ============================================================================
// Smart assign
// ============================================================================

#[test]
fn test_smart_assign_across_many_states() {
    let mut seats = mock_floor(20);
    for seat in seats.iter_mut().filter(|s| s.id % 2 == 0) {
        *seat = SeatBuilder::new(seat.id).occupied_by("x@ibm.com").build();
    }

    let state = BoardState {
        seats,
        ..BoardState::default()
    };

    let mut rng = rand::rng();
    for _ in 0..10 {
        let next = smart_assign(state.clone(), &mut rng);
        let id = next.selected_id.expect("a seat is always picked");
        assert_eq!(id % 2, 1, "only available seats are eligible");
    }
}

// ============================================================================
// Header
// ============================================================================

#[test]
fn test_header_counts_and_filters() {
    let mut state = BoardState {
        seats: vec![mock_seat(1), mock_occupied_seat(2, "x@ibm.com"), mock_seat(3)],
        ..BoardState::default()
    };
    state = reduce_board_state(state, BoardAction::CycleDate);
    state = reduce_board_state(state, BoardAction::CycleTimeSlot);

    let vm = compute_board_view_model(&state, now());
    assert_eq!(vm.header.available_count, 2);
    assert_eq!(vm.header.total_count, 3);
    assert_eq!(vm.header.date_label, "Tomorrow");
    assert_eq!(vm.header.time_label, "12:30 PM");
}
