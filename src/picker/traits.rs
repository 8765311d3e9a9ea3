//! Picker trait definition
//!
//! A generic trait for list-based selection surfaces.

/// A generic picker trait for list selection
///
/// Implementors only expose their rows and the highlighted index; moving the
/// highlight comes for free.
///
/// # Example
///
/// ```ignore
/// struct Rows {
///     labels: Vec<String>,
///     highlighted: usize,
/// }
///
/// impl Picker for Rows {
///     type Row = String;
///
///     fn rows(&self) -> &[Self::Row] {
///         &self.labels
///     }
///
///     fn highlighted(&self) -> usize {
///         self.highlighted
///     }
///
///     fn set_highlighted(&mut self, index: usize) {
///         self.highlighted = index;
///     }
/// }
/// ```
pub trait Picker {
    /// The type of rows in the picker
    type Row;

    /// Get the list of rows
    fn rows(&self) -> &[Self::Row];

    /// Get the highlighted index
    fn highlighted(&self) -> usize;

    /// Set the highlighted index
    fn set_highlighted(&mut self, index: usize);

    /// Get the number of rows
    fn len(&self) -> usize {
        self.rows().len()
    }

    /// Check if the picker is empty
    fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }

    /// Highlight the next row (wraps around)
    fn select_next(&mut self) {
        if !self.is_empty() {
            let next = (self.highlighted() + 1) % self.len();
            self.set_highlighted(next);
        }
    }

    /// Highlight the previous row (wraps around)
    fn select_prev(&mut self) {
        if !self.is_empty() {
            let prev = self.highlighted()
                .checked_sub(1)
                .unwrap_or(self.len() - 1);
            self.set_highlighted(prev);
        }
    }

    /// Get the highlighted row
    fn highlighted_row(&self) -> Option<&Self::Row> {
        self.rows().get(self.highlighted())
    }

    /// Highlight a specific index (clamped to valid range)
    fn select_index(&mut self, index: usize) {
        if !self.is_empty() {
            let clamped = index.min(self.len() - 1);
            self.set_highlighted(clamped);
        }
    }

    /// Highlight the first row
    fn select_first(&mut self) {
        self.set_highlighted(0);
    }

    /// Highlight the last row
    fn select_last(&mut self) {
        if !self.is_empty() {
            self.set_highlighted(self.len() - 1);
        }
    }
}
