//! UI components for the select field.
//!
//! # Component Organization
//!
//! - `text_surface` - The closed field with its floating label and icon
//! - `done_bar` - Chevrons, cancel and done buttons above the sheet
//! - `sheet` - Bottom sheet presenter
//! - `dropdown` - Inline dropdown presenter

mod done_bar;
mod dropdown;
mod sheet;
mod text_surface;

pub use done_bar::render_done_bar;
pub use dropdown::DropdownPresenter;
pub use sheet::SheetPresenter;
pub use text_surface::{SurfaceFrame, render_text_surface};
