//! A select input: a field that opens a list chooser and reports the
//! picked entry back to its owner.
//!
//! The state machine lives in [`select`]; [`tui`] renders it with ratatui.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod log;
pub mod picker;
pub mod select;
pub mod tui;
