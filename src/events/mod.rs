//! Event handling: terminal input to picker actions.
//!
//! - `action` - the `PickerAction` vocabulary
//! - `keyboard` - keys while the list is closed
//! - `mouse` - clicks and scrolling through the interaction registry

mod action;
pub mod keyboard;
pub mod mouse;

pub use action::PickerAction;
pub use keyboard::handle_closed_key;
pub use mouse::handle_mouse_event;
