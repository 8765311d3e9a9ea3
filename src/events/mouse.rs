//! Mouse event handling.
//!
//! Mouse events are dispatched through the interaction registry, which is
//! populated by the presenter during each render.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::tui::interaction::InteractionRegistry;

use super::PickerAction;

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(interactions: &InteractionRegistry, mouse: MouseEvent) -> PickerAction {
    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::ScrollUp => interactions.handle_scroll_up(x, y),
        MouseEventKind::ScrollDown => interactions.handle_scroll_down(x, y),
        MouseEventKind::Down(MouseButton::Left) => interactions.handle_click(x, y),
        _ => PickerAction::None,
    }
}
