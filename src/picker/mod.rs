//! Generic picker module
//!
//! Provides a trait and a row cursor for list-based selection surfaces.
//! Presenters use it for the highlighted row while the list is open.

mod cursor;
mod traits;

pub use cursor::RowCursor;
pub use traits::Picker;
