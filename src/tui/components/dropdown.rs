//! Inline dropdown presenter.
//!
//! The list opens right below the field. Moving the cursor does not change
//! the selection; committing a row does and closes the list.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::events::PickerAction;
use crate::picker::{Picker, RowCursor};
use crate::select::SelectView;
use crate::tui::interaction::{ClickRegion, InteractionRegistry, InteractiveRegion};
use crate::tui::presenter::{PresentationStyle, Presenter};
use crate::tui::theme::*;

use super::text_surface::{SurfaceFrame, render_text_surface};

/// Rows shown before the list scrolls.
const MAX_ROWS: usize = 8;

const LIST_PRIORITY: i32 = 10;

#[derive(Debug, Default)]
pub struct DropdownPresenter {
    cursor: RowCursor,
}

impl DropdownPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlighted row, clamped to the rows currently on screen.
    fn highlighted(&self, view: &SelectView<'_>) -> usize {
        self.cursor
            .highlighted()
            .min(view.items.len().saturating_sub(1))
    }
}

/// Native style draws the underline; a headless field (custom children or
/// native style off) gets a plain box.
fn surface_frame(view: &SelectView<'_>) -> SurfaceFrame {
    if view.native_dropdown_style && view.children.is_none() {
        SurfaceFrame::Underlined
    } else {
        SurfaceFrame::Boxed
    }
}

impl Presenter for DropdownPresenter {
    fn style(&self) -> PresentationStyle {
        PresentationStyle::Dropdown
    }

    fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        view: &SelectView<'_>,
        interactions: &mut InteractionRegistry,
    ) {
        let surface = surface_frame(view);
        render_text_surface(frame, area, view, surface, interactions);

        if !view.show_picker {
            return;
        }

        let top = area.y + surface.height();
        let rows = view.items.len().min(MAX_ROWS) as u16;
        let height = (rows + 2).min(area.bottom().saturating_sub(top));
        if height < 3 {
            return;
        }
        let list_area = Rect::new(area.x, top, area.width, height);
        frame.render_widget(Clear, list_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::new().fg(FIELD_FOCUS))
            .style(Style::new().bg(Color::Black));
        let inner = block.inner(list_area);
        frame.render_widget(block, list_area);

        let highlighted = self.highlighted(view);
        let visible = inner.height as usize;
        let offset = if highlighted >= visible {
            highlighted - visible + 1
        } else {
            0
        };

        let mut lines: Vec<Line> = vec![];
        for (i, item) in view.items.iter().enumerate().skip(offset).take(visible) {
            let is_highlighted = i == highlighted;
            let cursor = if is_highlighted { "> " } else { "  " };
            let check = if i == view.selected_index { " ✓" } else { "" };
            let color = item.color.as_deref().and_then(parse_color).unwrap_or(TEXT_WHITE);

            lines.push(Line::from(vec![
                Span::styled(
                    cursor,
                    if is_highlighted {
                        Style::new().fg(HIGHLIGHT)
                    } else {
                        Style::new().fg(TEXT_DIM)
                    },
                ),
                Span::styled(
                    item.label.clone(),
                    if is_highlighted {
                        Style::new().fg(color).bold()
                    } else {
                        Style::new().fg(color)
                    },
                ),
                Span::styled(check, Style::new().fg(HIGHLIGHT)),
            ]));

            let row = ClickRegion::new(inner.x, inner.y + (i - offset) as u16, inner.width, 1);
            interactions.register(
                InteractiveRegion::clickable("row", row, PickerAction::Commit(i))
                    .with_priority(LIST_PRIORITY),
            );
        }
        frame.render_widget(Paragraph::new(lines), inner);

        interactions.register(
            InteractiveRegion::scrollable(
                "list",
                list_area.into(),
                PickerAction::HighlightPrev,
                PickerAction::HighlightNext,
            )
            .with_priority(LIST_PRIORITY),
        );
    }

    fn handle_key(&mut self, view: &SelectView<'_>, key: KeyEvent) -> PickerAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return PickerAction::Quit;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll(view, false),
            KeyCode::Down | KeyCode::Char('j') => self.scroll(view, true),
            KeyCode::Home => {
                self.cursor.select_first();
                PickerAction::None
            }
            KeyCode::End => {
                self.cursor.select_last();
                PickerAction::None
            }
            KeyCode::Enter | KeyCode::Char(' ') if !view.items.is_empty() => {
                PickerAction::Commit(self.highlighted(view))
            }
            KeyCode::Esc => PickerAction::Toggle { animate: false },
            _ => PickerAction::None,
        }
    }

    fn scroll(&mut self, view: &SelectView<'_>, forward: bool) -> PickerAction {
        if self.cursor.len() != view.items.len() {
            self.cursor.sync(view.items, view.selected_index);
        }
        if forward {
            self.cursor.select_next();
        } else {
            self.cursor.select_prev();
        }
        PickerAction::None
    }

    fn on_open(&mut self, view: &SelectView<'_>) {
        self.cursor.sync(view.items, view.selected_index);
    }
}
