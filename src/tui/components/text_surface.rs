//! The closed field: selected label, floating label and dropdown icon.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::events::PickerAction;
use crate::select::SelectView;
use crate::tui::interaction::InteractionRegistry;
use crate::tui::theme::*;

/// How the field outline is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceFrame {
    /// Full box, label floats into the top border
    Boxed,
    /// Single underline below the text
    Underlined,
}

impl SurfaceFrame {
    /// Rows the surface occupies.
    pub fn height(self) -> u16 {
        match self {
            SurfaceFrame::Boxed => 3,
            SurfaceFrame::Underlined => 2,
        }
    }
}

/// Color of the field text.
pub fn text_color(view: &SelectView<'_>) -> Color {
    if view.disabled {
        return TEXT_DIM;
    }
    if view.showing_placeholder && view.children.is_none() {
        return parse_color(view.placeholder_text_color).unwrap_or(TEXT_DIM);
    }
    view.selected_item
        .color
        .as_deref()
        .and_then(parse_color)
        .unwrap_or(TEXT_WHITE)
}

fn border_color(view: &SelectView<'_>) -> Color {
    if view.disabled {
        TEXT_DIM
    } else if view.show_picker {
        FIELD_FOCUS
    } else {
        FIELD_BORDER
    }
}

/// Floating label text once it has lifted past the halfway point.
pub fn floating_label<'a>(view: &SelectView<'a>) -> Option<&'a str> {
    if view.lift_progress() < 0.5 || view.showing_placeholder {
        return None;
    }
    view.placeholder_label
}

/// Render the field and register it as the toggle target.
pub fn render_text_surface(
    frame: &mut Frame,
    area: Rect,
    view: &SelectView<'_>,
    surface: SurfaceFrame,
    interactions: &mut InteractionRegistry,
) {
    let area = Rect::new(area.x, area.y, area.width, surface.height().min(area.height));

    let text_area = match surface {
        SurfaceFrame::Boxed => {
            let mut block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::new().fg(border_color(view)));
            if let Some(label) = floating_label(view) {
                let style = if view.label_shrunk() {
                    Style::new().fg(TEXT_DIM).italic()
                } else {
                    Style::new().fg(border_color(view))
                };
                block = block.title(Span::styled(format!(" {} ", label), style));
            }
            let inner = block.inner(area);
            frame.render_widget(block, area);
            inner
        }
        SurfaceFrame::Underlined => {
            let [text, underline] =
                Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);
            let rule = "─".repeat(underline.width as usize);
            frame.render_widget(
                Paragraph::new(Line::styled(rule, Style::new().fg(border_color(view)))),
                underline,
            );
            text
        }
    };

    let [text, icon] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(2)]).areas(text_area);

    let mut spans = vec![Span::raw(" ")];
    spans.push(Span::styled(
        view.display_text().to_string(),
        Style::new().fg(text_color(view)),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), text);

    if !view.hide_icon {
        let glyph = if view.show_picker { "▴" } else { "▾" };
        frame.render_widget(
            Paragraph::new(Line::styled(glyph, Style::new().fg(ICON_GRAY))),
            icon,
        );
    }

    if !view.disabled {
        interactions.register_click("field", area.into(), PickerAction::Toggle { animate: true });
    }
}
