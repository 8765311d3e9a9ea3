//! Read-only snapshot of a select field for presenters.

use super::animation::{OPEN_SCALE, OPEN_TRANSLATION, REST_SCALE};
use super::item::Item;
use super::orchestrator::AnimationType;

/// Everything a presenter needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct SelectView<'a> {
    pub items: &'a [Item],
    pub selected_item: &'a Item,
    pub selected_index: usize,
    pub show_picker: bool,
    pub animation_type: Option<AnimationType>,
    pub translation: f32,
    pub scale: f32,
    pub disabled: bool,
    pub hide_icon: bool,
    pub showing_placeholder: bool,
    /// Floating label text, taken from the placeholder
    pub placeholder_label: Option<&'a str>,
    pub placeholder_text_color: &'a str,
    pub native_dropdown_style: bool,
    pub hide_done_bar: bool,
    pub done_text: &'a str,
    pub children: Option<&'a str>,
}

impl SelectView<'_> {
    /// How far the label has lifted, 0.0 at rest and 1.0 fully open.
    pub fn lift_progress(&self) -> f32 {
        (self.translation / OPEN_TRANSLATION).clamp(0.0, 1.0)
    }

    /// Whether the label has shrunk past the halfway point.
    pub fn label_shrunk(&self) -> bool {
        self.scale < (REST_SCALE + OPEN_SCALE) / 2.0
    }

    /// Text shown in the field
    pub fn display_text(&self) -> &str {
        self.children.unwrap_or(&self.selected_item.label)
    }
}
