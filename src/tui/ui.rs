use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::presenter::PresentationStyle;
use super::theme::*;
use crate::app::App;

/// Width of the journal panel on the right.
const JOURNAL_WIDTH: u16 = 44;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.interactions.clear();

    // Main vertical layout: header, content, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(2), // Header + spacing
        Constraint::Min(0),    // Content
        Constraint::Length(1), // Hotkeys
    ])
    .split(area);

    render_header(frame, main_layout[0], app);

    // Horizontal split: field | gap | journal
    let content_layout = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(JOURNAL_WIDTH.min(area.width / 2)),
    ])
    .split(main_layout[1]);

    let view = app.select.view();
    app.presenter
        .render(frame, content_layout[0], &view, &mut app.interactions);

    render_journal(frame, content_layout[2], app);
    render_hotkeys(frame, main_layout[2], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled("selectfield", Style::new().fg(FIELD_FOCUS).bold()),
        Span::styled(
            format!("  {} presenter", app.presenter.style().as_str()),
            Style::new().fg(TEXT_DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_journal(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = vec![];

    let value = app
        .owner_value()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "(none)".to_string());
    lines.push(Line::from(vec![
        Span::styled("value    ", Style::new().fg(TEXT_DIM)),
        Span::styled(value, Style::new().fg(TEXT_WHITE)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("selected ", Style::new().fg(TEXT_DIM)),
        Span::styled(
            format!("{} @ {}", app.select.selected_item().label, app.select.selected_index()),
            Style::new().fg(TEXT_WHITE),
        ),
    ]));
    if app.select.is_disabled() {
        lines.push(Line::styled("disabled", Style::new().fg(TEXT_DIM).italic()));
    }
    lines.push(Line::raw(""));

    // Newest entries at the bottom
    let room = area.height.saturating_sub(2) as usize;
    let room = room.saturating_sub(lines.len());
    for entry in app.journal.tail(room) {
        lines.push(Line::styled(entry, Style::new().fg(HIGHLIGHT)));
    }

    let block = Block::default()
        .title(" Owner ")
        .title_style(Style::new().fg(FIELD_FOCUS).bold())
        .borders(Borders::ALL)
        .border_style(Style::new().fg(TEXT_DIM));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_hotkeys(frame: &mut Frame, area: Rect, app: &App) {
    let keys: &[(&str, &str)] = if !app.select.show_picker() {
        &[
            ("[Enter]", " open · "),
            ("[v]", " owner value · "),
            ("[x]", " clear value · "),
            ("[d]", " disable · "),
            ("[q]", " quit"),
        ]
    } else if app.presenter.style() == PresentationStyle::Sheet {
        &[
            ("[↑/↓]", " pick · "),
            ("[Tab/S-Tab]", " next/prev · "),
            ("[Enter]", " done · "),
            ("[Esc]", " cancel"),
        ]
    } else {
        &[
            ("[↑/↓]", " navigate · "),
            ("[Enter]", " select · "),
            ("[Esc]", " close"),
        ]
    };

    let spans: Vec<Span> = keys
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(*key, Style::new().fg(TEXT_WHITE)),
                Span::styled(*label, Style::new().fg(TEXT_DIM)),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
