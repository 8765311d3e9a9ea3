//! Done bar on top of the sheet: field chevrons, cancel and done buttons.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::events::PickerAction;
use crate::select::SelectView;
use crate::tui::interaction::{ClickRegion, InteractionRegistry, InteractiveRegion};
use crate::tui::theme::*;

const CHEVRON_UP: &str = " ▲ ";
const CHEVRON_DOWN: &str = " ▼ ";
const CANCEL: &str = " Cancel ";

/// Priority shared by everything on the sheet.
pub const SHEET_PRIORITY: i32 = 10;

/// Render the bar into a single row.
pub fn render_done_bar(
    frame: &mut Frame,
    area: Rect,
    view: &SelectView<'_>,
    interactions: &mut InteractionRegistry,
) {
    let done = format!(" {} ", view.done_text);
    let done_width = done.chars().count() as u16;
    let chevrons_width = (CHEVRON_UP.chars().count() + CHEVRON_DOWN.chars().count()) as u16;
    let cancel_width = CANCEL.chars().count() as u16;

    let gap = area
        .width
        .saturating_sub(chevrons_width + cancel_width + done_width) as usize;

    let line = Line::from(vec![
        Span::styled(CHEVRON_UP, Style::new().fg(FIELD_FOCUS)),
        Span::styled(CHEVRON_DOWN, Style::new().fg(FIELD_FOCUS)),
        Span::raw(" ".repeat(gap)),
        Span::styled(CANCEL, Style::new().fg(SHEET_BAR_BORDER)),
        Span::styled(done, Style::new().fg(DONE_BLUE).bold()),
    ]);
    frame.render_widget(
        Paragraph::new(line).style(Style::new().bg(SHEET_BAR)),
        area,
    );

    let chevron_width = CHEVRON_UP.chars().count() as u16;
    let buttons = [
        ("up_arrow", 0, chevron_width, PickerAction::UpArrow),
        ("down_arrow", chevron_width, chevron_width, PickerAction::DownArrow),
        ("cancel", chevrons_width + gap as u16, cancel_width, PickerAction::Cancel),
        ("done", chevrons_width + gap as u16 + cancel_width, done_width, PickerAction::Done),
    ];
    for (id, offset, width, action) in buttons {
        let x = area.x.saturating_add(offset);
        let width = width.min(area.right().saturating_sub(x));
        if width == 0 {
            continue;
        }
        interactions.register(
            InteractiveRegion::clickable(id, ClickRegion::new(x, area.y, width, 1), action)
                .with_priority(SHEET_PRIORITY),
        );
    }
}
