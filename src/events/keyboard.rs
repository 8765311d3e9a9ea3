//! Keyboard handling while the list is closed.
//!
//! Once the list is open the active presenter owns the keyboard.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::select::SelectView;

use super::PickerAction;

/// Handle a key while the field is closed.
pub fn handle_closed_key(view: &SelectView<'_>, key: KeyEvent) -> PickerAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return PickerAction::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => PickerAction::Quit,

        KeyCode::Enter | KeyCode::Char(' ') if !view.disabled => {
            PickerAction::Toggle { animate: true }
        }

        // Owner-side controls
        KeyCode::Char('v') => PickerAction::CycleOwnerValue,
        KeyCode::Char('x') => PickerAction::ClearOwnerValue,
        KeyCode::Char('d') => PickerAction::ToggleDisabled,

        _ => PickerAction::None,
    }
}
