//! Action enum for decoupling input handling from state changes.
//!
//! Presenters and key maps translate raw terminal input into these; the app
//! applies them to the select field.

/// Actions that can be dispatched from event handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerAction {
    /// Nothing to do
    None,
    /// Quit the application
    Quit,

    // === Select field ===
    /// Open or close the list
    Toggle { animate: bool },
    /// A row was picked; the list stays open
    Pick(usize),
    /// A row was picked and the list closes
    Commit(usize),
    /// Done button on the sheet
    Done,
    /// Cancel button on the sheet
    Cancel,
    /// Previous-field chevron
    UpArrow,
    /// Next-field chevron
    DownArrow,

    // === Highlight (no selection change) ===
    HighlightNext,
    HighlightPrev,

    // === Owner side ===
    /// Move the owner's value to the next item
    CycleOwnerValue,
    /// Owner stops supplying a value
    ClearOwnerValue,
    /// Flip the disabled prop
    ToggleDisabled,
}

impl PickerAction {
    pub fn is_none(&self) -> bool {
        matches!(self, PickerAction::None)
    }
}
