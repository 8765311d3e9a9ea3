//! Bottom sheet presenter.
//!
//! Picking a row commits immediately while the sheet stays open, like a
//! wheel; the done bar closes it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::events::PickerAction;
use crate::select::{AnimationType, SelectView};
use crate::tui::interaction::{ClickRegion, InteractionRegistry, InteractiveRegion};
use crate::tui::presenter::{PresentationStyle, Presenter};
use crate::tui::theme::*;

use super::done_bar::{SHEET_PRIORITY, render_done_bar};
use super::text_surface::{SurfaceFrame, render_text_surface};

/// Rows visible in the wheel at once.
const WHEEL_ROWS: usize = 5;

#[derive(Debug, Default)]
pub struct SheetPresenter;

impl SheetPresenter {
    pub fn new() -> Self {
        Self
    }
}

/// Full sheet height for the given view.
fn sheet_height(view: &SelectView<'_>) -> u16 {
    let rows = view.items.len().clamp(1, WHEEL_ROWS) as u16;
    let bar = if view.hide_done_bar { 0 } else { 1 };
    rows + bar + 1
}

/// Height while the sheet slides in.
fn visible_height(view: &SelectView<'_>, full: u16) -> u16 {
    match view.animation_type {
        Some(AnimationType::Slide) => {
            let shown = (full as f32 * view.lift_progress()).ceil() as u16;
            shown.clamp(1, full)
        }
        _ => full,
    }
}

/// First row shown so the selection sits in the middle of the wheel.
fn wheel_offset(len: usize, selected: usize, visible: usize) -> usize {
    selected
        .saturating_sub(visible / 2)
        .min(len.saturating_sub(visible))
}

/// Row the wheel lands on after one step.
fn step(view: &SelectView<'_>, forward: bool) -> PickerAction {
    let last = view.items.len().saturating_sub(1);
    let current = view.selected_index;
    match forward {
        true if current < last => PickerAction::Pick(current + 1),
        false if current > 0 => PickerAction::Pick(current - 1),
        _ => PickerAction::None,
    }
}

impl Presenter for SheetPresenter {
    fn style(&self) -> PresentationStyle {
        PresentationStyle::Sheet
    }

    fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        view: &SelectView<'_>,
        interactions: &mut InteractionRegistry,
    ) {
        render_text_surface(frame, area, view, SurfaceFrame::Boxed, interactions);

        if !view.show_picker {
            return;
        }

        let full = sheet_height(view).min(area.height);
        let height = visible_height(view, full);
        let sheet_area = Rect::new(area.x, area.bottom() - height, area.width, height);

        // Tapping above the sheet closes it
        let backdrop = Rect::new(area.x, area.y, area.width, sheet_area.y - area.y);
        if backdrop.height > 0 {
            interactions.register(
                InteractiveRegion::clickable(
                    "backdrop",
                    backdrop.into(),
                    PickerAction::Toggle { animate: true },
                )
                .with_priority(SHEET_PRIORITY),
            );
        }

        frame.render_widget(Clear, sheet_area);

        let list_area = if view.hide_done_bar {
            sheet_area
        } else {
            let [bar, list] =
                Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(sheet_area);
            render_done_bar(frame, bar, view, interactions);
            list
        };

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::new().fg(SHEET_BAR_BORDER))
            .style(Style::new().bg(SHEET_LIST));
        let rows_area = block.inner(list_area);
        frame.render_widget(block, list_area);

        let visible = rows_area.height as usize;
        let offset = wheel_offset(view.items.len(), view.selected_index, visible);
        let faded = view.animation_type == Some(AnimationType::Fade) && view.lift_progress() < 0.5;

        let mut lines: Vec<Line> = vec![];
        for (i, item) in view.items.iter().enumerate().skip(offset).take(visible) {
            let is_selected = i == view.selected_index;
            let color = if faded {
                SHEET_BAR_BORDER
            } else {
                item.color.as_deref().and_then(parse_color).unwrap_or(FIELD_TEXT)
            };
            let style = if is_selected {
                Style::new().fg(color).bold()
            } else {
                Style::new().fg(color)
            };
            lines.push(Line::from(vec![Span::styled(item.label.clone(), style)]).centered());

            let row = ClickRegion::new(
                rows_area.x,
                rows_area.y + (i - offset) as u16,
                rows_area.width,
                1,
            );
            interactions.register_row(i, row, SHEET_PRIORITY);
        }
        frame.render_widget(Paragraph::new(lines), rows_area);

        interactions.register(
            InteractiveRegion::scrollable(
                "wheel",
                rows_area.into(),
                PickerAction::HighlightPrev,
                PickerAction::HighlightNext,
            )
            .with_priority(SHEET_PRIORITY),
        );
    }

    fn handle_key(&mut self, view: &SelectView<'_>, key: KeyEvent) -> PickerAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return PickerAction::Quit;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => step(view, false),
            KeyCode::Down | KeyCode::Char('j') => step(view, true),
            KeyCode::Home if !view.items.is_empty() => PickerAction::Pick(0),
            KeyCode::End if !view.items.is_empty() => PickerAction::Pick(view.items.len() - 1),
            KeyCode::Enter => PickerAction::Done,
            KeyCode::Esc => PickerAction::Cancel,
            KeyCode::BackTab => PickerAction::UpArrow,
            KeyCode::Tab => PickerAction::DownArrow,
            _ => PickerAction::None,
        }
    }

    fn scroll(&mut self, view: &SelectView<'_>, forward: bool) -> PickerAction {
        step(view, forward)
    }
}
