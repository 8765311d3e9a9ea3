//! Presentation adapter.
//!
//! A presenter draws one select field and translates keys and wheel input into
//! [`PickerAction`]s. The variant is picked once when the app is composed.

use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};
use serde::Deserialize;

use crate::events::PickerAction;
use crate::select::SelectView;
use crate::tui::components::{DropdownPresenter, SheetPresenter};
use crate::tui::interaction::InteractionRegistry;

/// Which list surface the field opens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentationStyle {
    /// Bottom sheet with a done bar
    #[default]
    Sheet,
    /// Inline list under the field
    Dropdown,
}

impl PresentationStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresentationStyle::Sheet => "sheet",
            PresentationStyle::Dropdown => "dropdown",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "sheet" => Some(PresentationStyle::Sheet),
            "dropdown" => Some(PresentationStyle::Dropdown),
            _ => None,
        }
    }
}

pub trait Presenter {
    fn style(&self) -> PresentationStyle;

    /// Draw the field (and the list when open) into `area`, registering
    /// clickable regions as it goes.
    fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        view: &SelectView<'_>,
        interactions: &mut InteractionRegistry,
    );

    /// Map a key pressed while the list is open.
    fn handle_key(&mut self, view: &SelectView<'_>, key: KeyEvent) -> PickerAction;

    /// Mouse wheel over the list.
    fn scroll(&mut self, view: &SelectView<'_>, forward: bool) -> PickerAction;

    /// The list just opened.
    fn on_open(&mut self, _view: &SelectView<'_>) {}
}

pub fn for_style(style: PresentationStyle) -> Box<dyn Presenter> {
    match style {
        PresentationStyle::Sheet => Box::new(SheetPresenter::new()),
        PresentationStyle::Dropdown => Box::new(DropdownPresenter::new()),
    }
}
