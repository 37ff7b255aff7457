//! Keyboard mapping for the seat board
//!
//! Pure function from key events to actions so bindings are testable
//! without a terminal.

use iocraft::prelude::{KeyCode, KeyModifiers};

use super::model::BoardAction;

/// Map a key event to a board action. Returns None for unbound keys.
///
/// While the search box is focused most keys belong to the text input;
/// only the exit bindings and quit are intercepted here.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    search_focused: bool,
) -> Option<BoardAction> {
    // Ctrl-Q quits from anywhere
    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('q') {
        return Some(BoardAction::Quit);
    }

    if search_focused {
        return match code {
            KeyCode::Enter => Some(BoardAction::ExitSearch),
            KeyCode::Esc => Some(BoardAction::ClearSearchAndExit),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('h') | KeyCode::Left => Some(BoardAction::CursorLeft),
        KeyCode::Char('l') | KeyCode::Right => Some(BoardAction::CursorRight),
        KeyCode::Char('k') | KeyCode::Up => Some(BoardAction::CursorUp),
        KeyCode::Char('j') | KeyCode::Down => Some(BoardAction::CursorDown),

        KeyCode::Enter => Some(BoardAction::SelectAtCursor),
        KeyCode::Char('c') => Some(BoardAction::Confirm),
        KeyCode::Char('a') => Some(BoardAction::SmartAssign),

        KeyCode::Char('/') => Some(BoardAction::FocusSearch),

        KeyCode::Char('d') => Some(BoardAction::CycleDate),
        KeyCode::Char('t') => Some(BoardAction::CycleTimeSlot),

        KeyCode::Char('q') => Some(BoardAction::Quit),

        _ => None,
    }
}
