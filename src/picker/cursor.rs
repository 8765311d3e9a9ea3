//! Highlight cursor over a snapshot of the working list.

use crate::select::Item;

use super::Picker;

/// Rows of an open list plus the highlighted one.
///
/// The highlight is independent from the committed selection until the
/// presenter reports a pick.
#[derive(Debug, Clone, Default)]
pub struct RowCursor {
    rows: Vec<Item>,
    highlighted: usize,
}

impl RowCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refresh the rows and start the highlight at `selected`.
    pub fn sync(&mut self, rows: &[Item], selected: usize) {
        self.rows = rows.to_vec();
        self.highlighted = 0;
        self.select_index(selected);
    }

    /// Scroll offset that keeps the highlight inside `visible` rows.
    pub fn scroll_offset(&self, visible: usize) -> usize {
        if visible == 0 {
            return self.highlighted;
        }
        (self.highlighted + 1).saturating_sub(visible)
    }
}

impl Picker for RowCursor {
    type Row = Item;

    fn rows(&self) -> &[Item] {
        &self.rows
    }

    fn highlighted(&self) -> usize {
        self.highlighted
    }

    fn set_highlighted(&mut self, index: usize) {
        self.highlighted = index;
    }
}
