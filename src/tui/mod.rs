//! Terminal presentation of the select field.

pub mod components;
pub mod interaction;
pub mod presenter;
pub mod theme;
pub mod ui;

pub use presenter::{PresentationStyle, Presenter, for_style};
