//! Seat board model types for testable state management
//!
//! This module separates state (`BoardState`) from view
//! (`BoardViewModel`), enabling unit testing without the iocraft
//! framework. State transitions are pure; network effects (booking,
//! releasing, polling) are handled by the component and re-enter the
//! model through `BoardAction::ApplySnapshot` and toast actions.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use jiff::Timestamp;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::api::{Seat, SeatStatus, Zone};
use crate::tui::components::footer::{Shortcut, board_shortcuts, search_shortcuts};
use crate::tui::components::toast::Toast;

/// Seats per grid row on the floor plan
pub const GRID_COLUMNS: usize = 10;

/// Booking hold window used for the countdown estimate. Display only: the
/// authoritative expiry lives server-side and is observed through polls.
pub const HOLD_MINUTES: i64 = 45;

// ============================================================================
// Filters
// ============================================================================

/// Date filter. Cosmetic: never sent on fetches, only attached to booking
/// requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingDate {
    #[default]
    Today,
    Tomorrow,
    DayAfter,
}

impl BookingDate {
    pub const ALL: [BookingDate; 3] =
        [BookingDate::Today, BookingDate::Tomorrow, BookingDate::DayAfter];

    /// Next value in display order, wrapping around
    pub fn cycle(self) -> Self {
        match self {
            BookingDate::Today => BookingDate::Tomorrow,
            BookingDate::Tomorrow => BookingDate::DayAfter,
            BookingDate::DayAfter => BookingDate::Today,
        }
    }
}

impl fmt::Display for BookingDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingDate::Today => write!(f, "Today"),
            BookingDate::Tomorrow => write!(f, "Tomorrow"),
            BookingDate::DayAfter => write!(f, "Day After"),
        }
    }
}

/// Lunch time slot filter. Cosmetic, like [`BookingDate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeSlot {
    #[default]
    Noon,
    HalfPast,
    One,
    HalfPastOne,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 4] = [
        TimeSlot::Noon,
        TimeSlot::HalfPast,
        TimeSlot::One,
        TimeSlot::HalfPastOne,
    ];

    /// Next value in display order, wrapping around
    pub fn cycle(self) -> Self {
        match self {
            TimeSlot::Noon => TimeSlot::HalfPast,
            TimeSlot::HalfPast => TimeSlot::One,
            TimeSlot::One => TimeSlot::HalfPastOne,
            TimeSlot::HalfPastOne => TimeSlot::Noon,
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeSlot::Noon => write!(f, "12:00 PM"),
            TimeSlot::HalfPast => write!(f, "12:30 PM"),
            TimeSlot::One => write!(f, "1:00 PM"),
            TimeSlot::HalfPastOne => write!(f, "1:30 PM"),
        }
    }
}

// ============================================================================
// Snapshot sequencing
// ============================================================================

/// Orders snapshot applications when fetches overlap.
///
/// Every fetch (periodic poll or post-write refresh) takes a sequence
/// number via [`SnapshotGate::begin`]; [`SnapshotGate::try_apply`] accepts a
/// response only if it is newer than the last applied one, so an
/// out-of-order arrival can never revert the board to stale state.
#[derive(Debug, Default)]
pub struct SnapshotGate {
    issued: AtomicU64,
    applied: AtomicU64,
}

impl SnapshotGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the sequence number for a new fetch
    pub fn begin(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Record a response as applied. Returns false when a newer response
    /// has already been applied, in which case the caller must drop it.
    pub fn try_apply(&self, seq: u64) -> bool {
        loop {
            let current = self.applied.load(Ordering::SeqCst);
            if seq <= current {
                return false;
            }
            if self
                .applied
                .compare_exchange(current, seq, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                return true;
            }
        }
    }
}

// ============================================================================
// State
// ============================================================================

/// Raw state that changes during user interaction and polling
#[derive(Debug, Clone, Default)]
pub struct BoardState {
    /// Snapshot of the seat collection as last fetched; always replaced
    /// wholesale, never patched
    pub seats: Vec<Seat>,
    /// Selected seat id. Invariant: always present in `seats`.
    pub selected_id: Option<u32>,
    /// Grid cursor as an index into `seats`
    pub cursor: usize,

    /// Current colleague search query
    pub search_query: String,
    /// Whether the search box is focused
    pub search_focused: bool,

    /// Chosen date filter
    pub date: BookingDate,
    /// Chosen time slot filter
    pub time_slot: TimeSlot,

    /// Transient notification
    pub toast: Option<Toast>,
    /// Whether the first snapshot is still outstanding
    pub is_loading: bool,
    /// Whether the application should exit
    pub should_exit: bool,
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    /// The currently selected seat, resolved against the snapshot
    pub fn selected_seat(&self) -> Option<&Seat> {
        let id = self.selected_id?;
        self.seats.iter().find(|s| s.id == id)
    }
}

// ============================================================================
// Actions
// ============================================================================

/// All actions on the seat board.
///
/// Network effects (`Confirm`, `SmartAssign`) are dispatched by the
/// component; the reducer leaves state untouched for them.
#[derive(Debug, Clone)]
pub enum BoardAction {
    // Cursor
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,

    // Selection
    SelectAtCursor,
    SelectSeat(u32),

    // Search
    FocusSearch,
    ExitSearch,
    ClearSearchAndExit,

    // Filters
    CycleDate,
    CycleTimeSlot,

    // Data
    ApplySnapshot(Vec<Seat>),

    // Notifications
    ShowToast(Toast),
    DismissToast,

    // Effects (handled by the component)
    Confirm,
    SmartAssign,

    // App
    Quit,
}

/// Pure function: apply an action to the state (reducer pattern)
pub fn reduce_board_state(mut state: BoardState, action: BoardAction) -> BoardState {
    let seat_count = state.seats.len();

    match action {
        BoardAction::CursorLeft => {
            state.cursor = state.cursor.saturating_sub(1);
        }
        BoardAction::CursorRight => {
            if seat_count > 0 {
                state.cursor = (state.cursor + 1).min(seat_count - 1);
            }
        }
        BoardAction::CursorUp => {
            state.cursor = state.cursor.saturating_sub(GRID_COLUMNS);
        }
        BoardAction::CursorDown => {
            if seat_count > 0 {
                state.cursor = (state.cursor + GRID_COLUMNS).min(seat_count - 1);
            }
        }

        BoardAction::SelectAtCursor => {
            if let Some(seat) = state.seats.get(state.cursor) {
                state.selected_id = Some(seat.id);
            }
        }
        BoardAction::SelectSeat(id) => {
            if state.seats.iter().any(|s| s.id == id) {
                state.selected_id = Some(id);
            }
        }

        BoardAction::FocusSearch => {
            state.search_focused = true;
        }
        BoardAction::ExitSearch => {
            state.search_focused = false;
        }
        BoardAction::ClearSearchAndExit => {
            state.search_query.clear();
            state.search_focused = false;
        }

        BoardAction::CycleDate => {
            state.date = state.date.cycle();
        }
        BoardAction::CycleTimeSlot => {
            state.time_slot = state.time_slot.cycle();
        }

        BoardAction::ApplySnapshot(seats) => {
            // Wholesale replacement; the selection is re-resolved by id and
            // cleared when the backend stops returning it.
            if let Some(id) = state.selected_id
                && !seats.iter().any(|s| s.id == id)
            {
                state.selected_id = None;
            }
            state.cursor = state.cursor.min(seats.len().saturating_sub(1));
            state.seats = seats;
            state.is_loading = false;
        }

        BoardAction::ShowToast(toast) => {
            state.toast = Some(toast);
        }
        BoardAction::DismissToast => {
            state.toast = None;
        }

        // Network effects: no pure state change
        BoardAction::Confirm | BoardAction::SmartAssign => {}

        BoardAction::Quit => {
            state.should_exit = true;
        }
    }

    state
}

/// Pick a uniformly random available seat and select it; with none
/// available, surface a toast and leave the selection unchanged.
pub fn smart_assign<R: Rng + ?Sized>(mut state: BoardState, rng: &mut R) -> BoardState {
    let available: Vec<u32> = state
        .seats
        .iter()
        .filter(|s| s.is_available())
        .map(|s| s.id)
        .collect();

    match available.choose(rng) {
        Some(&id) => {
            state.selected_id = Some(id);
            state.toast = Some(Toast::success(format!("Smart assign picked Seat #{id}")));
        }
        None => {
            state.toast = Some(Toast::error("No seats available!"));
        }
    }

    state
}

// ============================================================================
// Search
// ============================================================================

/// Case-insensitive substring match of the query against the occupant's
/// display name or booking identifier. An empty query matches nothing.
pub fn seat_matches_query(seat: &Seat, query: &str) -> bool {
    if query.is_empty() {
        return false;
    }
    let query = query.to_lowercase();

    if let Some(full_name) = seat.user_details.as_ref().and_then(|d| d.full_name.as_ref())
        && full_name.to_lowercase().contains(&query)
    {
        return true;
    }

    if let Some(booked_by) = &seat.booked_by
        && booked_by.to_lowercase().contains(&query)
    {
        return true;
    }

    false
}

// ============================================================================
// Countdown
// ============================================================================

/// Client-side countdown estimate: booking time plus the 45-minute hold
/// window minus now. Never used to flip a seat's status locally.
pub fn time_left(booking_time: Option<&str>, now: Timestamp) -> String {
    let Some(raw) = booking_time else {
        return "45m 00s".to_string();
    };

    let Some(booked_at) = parse_booking_time(raw) else {
        return "45m 00s".to_string();
    };

    let expires_at = booked_at.as_second() + HOLD_MINUTES * 60;
    let remaining = expires_at - now.as_second();

    if remaining <= 0 {
        return "Expiring...".to_string();
    }

    format!("{}m left", remaining / 60)
}

/// Parse the backend's booking timestamp.
///
/// The service emits RFC 3339 when a timezone-aware datetime is stored, but
/// naive UTC datetimes ("2025-06-01T12:00:00.123456") also appear; those
/// are interpreted as UTC.
fn parse_booking_time(raw: &str) -> Option<Timestamp> {
    if let Ok(ts) = raw.parse::<Timestamp>() {
        return Some(ts);
    }
    let civil: jiff::civil::DateTime = raw.parse().ok()?;
    civil
        .to_zoned(jiff::tz::TimeZone::UTC)
        .ok()
        .map(|z| z.timestamp())
}

// ============================================================================
// View model
// ============================================================================

/// Visual precedence of a grid cell: search match > selected > occupied >
/// zone color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellEmphasis {
    SearchMatch,
    Selected,
    Occupied,
    Available(Zone),
}

/// One cell of the floor-plan grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatCell {
    pub id: u32,
    pub emphasis: CellEmphasis,
    pub is_cursor: bool,
}

/// Primary action of the summary panel, context-sensitive on the selected
/// seat's status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryAction {
    Book,
    Release,
}

impl PrimaryAction {
    pub fn label(self) -> &'static str {
        match self {
            PrimaryAction::Book => "Confirm & Book",
            PrimaryAction::Release => "Release Seat",
        }
    }
}

/// View model for the booking summary panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryViewModel {
    pub seat_id: u32,
    pub status: SeatStatus,
    pub price: u32,
    pub date_label: String,
    pub time_label: String,
    /// Countdown estimate; present only for occupied seats
    pub countdown: Option<String>,
    pub occupant: Option<String>,
    pub action: PrimaryAction,
}

/// View model for the header bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderViewModel {
    pub date_label: String,
    pub time_label: String,
    pub available_count: usize,
    pub total_count: usize,
}

/// Computed view model for rendering the entire board
#[derive(Debug, Clone)]
pub struct BoardViewModel {
    pub header: HeaderViewModel,
    pub grid: Vec<SeatCell>,
    pub summary: Option<SummaryViewModel>,
    pub toast: Option<Toast>,
    pub shortcuts: Vec<Shortcut>,
    pub is_loading: bool,
    pub search_focused: bool,
}

/// Pure function: compute the view model from state
pub fn compute_board_view_model(state: &BoardState, now: Timestamp) -> BoardViewModel {
    let grid = state
        .seats
        .iter()
        .enumerate()
        .map(|(idx, seat)| {
            let emphasis = if seat_matches_query(seat, &state.search_query) {
                CellEmphasis::SearchMatch
            } else if state.selected_id == Some(seat.id) {
                CellEmphasis::Selected
            } else if !seat.is_available() {
                CellEmphasis::Occupied
            } else {
                CellEmphasis::Available(Zone::for_seat(seat.id))
            };

            SeatCell {
                id: seat.id,
                emphasis,
                is_cursor: idx == state.cursor && !state.search_focused,
            }
        })
        .collect();

    let summary = state.selected_seat().map(|seat| {
        let action = match seat.status {
            SeatStatus::Available => PrimaryAction::Book,
            SeatStatus::Occupied => PrimaryAction::Release,
        };

        let countdown = match seat.status {
            SeatStatus::Occupied => Some(time_left(seat.booking_time.as_deref(), now)),
            SeatStatus::Available => None,
        };

        let occupant = seat
            .user_details
            .as_ref()
            .and_then(|d| d.full_name.clone())
            .or_else(|| seat.booked_by.clone());

        SummaryViewModel {
            seat_id: seat.id,
            status: seat.status,
            price: seat.price,
            date_label: state.date.to_string(),
            time_label: state.time_slot.to_string(),
            countdown,
            occupant,
            action,
        }
    });

    let available_count = state.seats.iter().filter(|s| s.is_available()).count();

    let shortcuts = if state.search_focused {
        search_shortcuts()
    } else {
        board_shortcuts()
    };

    BoardViewModel {
        header: HeaderViewModel {
            date_label: state.date.to_string(),
            time_label: state.time_slot.to_string(),
            available_count,
            total_count: state.seats.len(),
        },
        grid,
        summary,
        toast: state.toast.clone(),
        shortcuts,
        is_loading: state.is_loading,
        search_focused: state.search_focused,
    }
}
