//! Demo application: one select field plus the owner that controls its value.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use chrono::Local;
use crossterm::event::{KeyEvent, MouseEvent};
use serde_json::Value;

use crate::config::Config;
use crate::error::ConfigResult;
use crate::events::{PickerAction, handle_closed_key, handle_mouse_event};
use crate::log;
use crate::select::{AnimationEvent, InputSurface, Item, Select, SelectProps};
use crate::tui::interaction::InteractionRegistry;
use crate::tui::presenter::{self, Presenter};

/// Entries kept in the on-screen journal.
const JOURNAL_LIMIT: usize = 200;

/// Timestamped record of owner callbacks.
#[derive(Debug, Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<String>>>);

impl Journal {
    pub fn push(&self, entry: impl Into<String>) {
        let entry = entry.into();
        log::log(&format!("journal: {}", entry));
        let mut entries = self.0.borrow_mut();
        entries.push(format!("{} {}", Local::now().format("%H:%M:%S"), entry));
        if entries.len() > JOURNAL_LIMIT {
            let excess = entries.len() - JOURNAL_LIMIT;
            entries.drain(..excess);
        }
    }

    /// The most recent `n` entries, oldest first.
    pub fn tail(&self, n: usize) -> Vec<String> {
        let entries = self.0.borrow();
        entries[entries.len().saturating_sub(n)..].to_vec()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

/// Input handle that only records focus changes.
struct JournalInput(Journal);

impl InputSurface for JournalInput {
    fn focus(&mut self) {
        self.0.push("input focus");
    }

    fn blur(&mut self) {
        self.0.push("input blur");
    }
}

/// Built-in items when neither the config nor the CLI provide any.
pub fn demo_items() -> Vec<Item> {
    vec![
        Item::new("Apple", "apple").with_color("#FF4136"),
        Item::new("Banana", "banana").with_color("#FFDC00"),
        Item::new("Cherry", "cherry").with_color("#B10DC9"),
        Item::new("Kiwi", "kiwi").with_color("#2ECC40"),
        Item::new("Orange", "orange").with_color("#FF851B"),
        Item::new("None", ""),
    ]
}

pub struct App {
    pub select: Select,
    pub presenter: Box<dyn Presenter>,
    pub interactions: InteractionRegistry,
    pub journal: Journal,
    /// Items as the owner knows them
    pub items: Vec<Item>,
    /// The owner's current value, written by callbacks
    owner_value: Rc<RefCell<Option<Value>>>,
    /// Last value handed to the field
    delivered: Option<Value>,
    /// Position used by `CycleOwnerValue`
    owner_cursor: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config, value: Option<Value>) -> ConfigResult<Self> {
        let items = if config.items.is_empty() {
            demo_items()
        } else {
            config.items.clone()
        };

        let journal = Journal::default();
        let owner_value = Rc::new(RefCell::new(value.clone()));

        let hook = |name: &'static str| {
            let journal = journal.clone();
            move || journal.push(name)
        };

        let on_value_change = {
            let journal = journal.clone();
            let owner_value = owner_value.clone();
            move |value: &Value, index: usize| {
                journal.push(format!("on_value_change({}, {})", value, index));
                *owner_value.borrow_mut() = Some(value.clone());
            }
        };
        let on_cancel = {
            let journal = journal.clone();
            let owner_value = owner_value.clone();
            move || {
                journal.push("on_cancel");
                // The owner drops its value so the cancel sticks
                *owner_value.borrow_mut() = None;
            }
        };
        let on_animation_complete = {
            let journal = journal.clone();
            move |event: AnimationEvent| journal.push(format!("animation {:?}", event))
        };

        let props = config
            .apply(SelectProps::builder())
            .items(items.clone())
            .maybe_value(value.clone())
            .on_value_change(on_value_change)
            .on_open(hook("on_open"))
            .on_close(hook("on_close"))
            .on_done_press(hook("on_done_press"))
            .on_up_arrow(hook("on_up_arrow"))
            .on_down_arrow(hook("on_down_arrow"))
            .on_cancel(on_cancel)
            .on_animation_complete(on_animation_complete)
            .build()?;

        let mut select = Select::new(props)?;
        select.register_input(Box::new(JournalInput(journal.clone())));

        Ok(Self {
            select,
            presenter: presenter::for_style(config.style()),
            interactions: InteractionRegistry::new(),
            journal,
            items,
            delivered: value,
            owner_value,
            owner_cursor: 0,
            should_quit: false,
        })
    }

    pub fn owner_value(&self) -> Option<Value> {
        self.owner_value.borrow().clone()
    }

    /// Map a key press to an action.
    pub fn handle_key(&mut self, key: KeyEvent) -> PickerAction {
        let view = self.select.view();
        if view.show_picker {
            self.presenter.handle_key(&view, key)
        } else {
            handle_closed_key(&view, key)
        }
    }

    /// Map a mouse event to an action using the regions of the last frame.
    pub fn handle_mouse(&self, mouse: MouseEvent) -> PickerAction {
        handle_mouse_event(&self.interactions, mouse)
    }

    /// Apply an action to the field, then hand the owner's value back to it.
    pub fn dispatch(&mut self, action: PickerAction, now: Instant) {
        if action.is_none() {
            return;
        }
        log::log_action(&format!("{:?}", action));
        let was_open = self.select.show_picker();

        match action {
            PickerAction::None => {}
            PickerAction::Quit => self.should_quit = true,
            PickerAction::Toggle { animate } => {
                self.select.toggle_picker(animate, now);
            }
            PickerAction::Pick(index) => self.pick(index),
            PickerAction::Commit(index) => {
                self.pick(index);
                if self.select.show_picker() {
                    self.select.toggle_picker(false, now);
                }
            }
            PickerAction::Done => self.select.on_done(now),
            PickerAction::Cancel => self.select.cancel_and_close(now),
            PickerAction::UpArrow => self.select.on_up_arrow(now),
            PickerAction::DownArrow => self.select.on_down_arrow(now),
            PickerAction::HighlightNext | PickerAction::HighlightPrev => {
                let forward = action == PickerAction::HighlightNext;
                let next = self.presenter.scroll(&self.select.view(), forward);
                if !next.is_none() {
                    self.dispatch(next, now);
                    return;
                }
            }
            PickerAction::CycleOwnerValue => self.cycle_owner_value(),
            PickerAction::ClearOwnerValue => {
                self.journal.push("owner cleared value");
                *self.owner_value.borrow_mut() = None;
            }
            PickerAction::ToggleDisabled => {
                let disabled = !self.select.is_disabled();
                self.journal.push(format!("owner set disabled={}", disabled));
                self.select.set_disabled(disabled);
            }
        }

        if !was_open && self.select.show_picker() {
            self.presenter.on_open(&self.select.view());
        }
        self.deliver_owner_value();
    }

    /// Advance animations; returns whether another frame is needed soon.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.select.tick(now);
        self.deliver_owner_value();
        self.select.is_animating()
    }

    fn pick(&mut self, index: usize) {
        if let Err(e) = self.select.on_value_change(index) {
            log::log(&format!("pick failed: {}", e));
        }
    }

    fn cycle_owner_value(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let item = &self.items[self.owner_cursor % self.items.len()];
        self.owner_cursor = (self.owner_cursor + 1) % self.items.len();
        self.journal.push(format!("owner set value {}", item.value));
        *self.owner_value.borrow_mut() = Some(item.value.clone());
    }

    /// Re-deliver the value prop when the owner changed it.
    fn deliver_owner_value(&mut self) {
        let current = self.owner_value.borrow().clone();
        if current != self.delivered {
            self.delivered = current.clone();
            self.select.set_value(current);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::presenter::PresentationStyle;
    use crossterm::event::{KeyCode, KeyModifiers};
    use serde_json::json;
    use std::time::Duration;

    fn app(style: PresentationStyle, value: Option<Value>) -> App {
        let config = Config::default().with_overrides(Some(style), None, false);
        App::new(&config, value).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn journal_has(app: &App, needle: &str) -> bool {
        app.journal.tail(JOURNAL_LIMIT).iter().any(|e| e.ends_with(needle))
    }

    #[test]
    fn test_starts_with_owner_value() {
        let app = app(PresentationStyle::Sheet, Some(json!("cherry")));
        assert_eq!(app.select.selected_item().label, "Cherry");
        assert!(app.journal.is_empty());
    }

    #[test]
    fn test_sheet_pick_then_done() {
        let mut app = app(PresentationStyle::Sheet, None);
        let now = Instant::now();

        let action = app.handle_key(key(KeyCode::Enter));
        assert_eq!(action, PickerAction::Toggle { animate: true });
        app.dispatch(action, now);
        assert!(app.select.show_picker());

        let action = app.handle_key(key(KeyCode::Down));
        assert_eq!(action, PickerAction::Pick(1));
        app.dispatch(action, now);
        assert_eq!(app.owner_value(), Some(json!("apple")));

        let action = app.handle_key(key(KeyCode::Enter));
        app.dispatch(action, now);
        assert!(!app.select.show_picker());
        assert!(journal_has(&app, "on_done_press"));
        assert_eq!(app.select.selected_item().label, "Apple");
    }

    #[test]
    fn test_sheet_cancel_clears_owner_value() {
        let mut app = app(PresentationStyle::Sheet, Some(json!("kiwi")));
        let now = Instant::now();
        app.dispatch(PickerAction::Toggle { animate: true }, now);
        let action = app.handle_key(key(KeyCode::Esc));
        app.dispatch(action, now);

        assert!(!app.select.show_picker());
        assert_eq!(app.owner_value(), None);
        assert!(app.select.is_showing_placeholder());
        assert!(journal_has(&app, "on_cancel"));
    }

    #[test]
    fn test_dropdown_commit_closes() {
        let mut app = app(PresentationStyle::Dropdown, None);
        let now = Instant::now();
        app.dispatch(PickerAction::Toggle { animate: true }, now);

        let action = app.handle_key(key(KeyCode::Down));
        app.dispatch(action, now);
        let action = app.handle_key(key(KeyCode::Down));
        app.dispatch(action, now);
        let action = app.handle_key(key(KeyCode::Enter));
        assert_eq!(action, PickerAction::Commit(2));
        app.dispatch(action, now);

        assert!(!app.select.show_picker());
        assert_eq!(app.owner_value(), Some(json!("banana")));
    }

    #[test]
    fn test_owner_value_change_reaches_field() {
        let mut app = app(PresentationStyle::Sheet, None);
        app.dispatch(PickerAction::CycleOwnerValue, Instant::now());
        assert_eq!(app.select.selected_item().label, "Apple");
        assert!(journal_has(&app, "on_value_change(\"apple\", 1)"));

        app.dispatch(PickerAction::ClearOwnerValue, Instant::now());
        // An absent value never moves the selection
        assert_eq!(app.select.selected_item().label, "Apple");
    }

    #[test]
    fn test_disabled_field_ignores_toggle() {
        let mut app = app(PresentationStyle::Sheet, None);
        app.dispatch(PickerAction::ToggleDisabled, Instant::now());
        assert_eq!(app.handle_key(key(KeyCode::Enter)), PickerAction::None);
        app.dispatch(PickerAction::Toggle { animate: true }, Instant::now());
        assert!(!app.select.show_picker());
    }

    #[test]
    fn test_tick_reports_animation() {
        let mut app = app(PresentationStyle::Sheet, None);
        let start = Instant::now();
        app.dispatch(PickerAction::Toggle { animate: true }, start);
        assert!(app.tick(start + Duration::from_millis(100)));
        assert!(!app.tick(start + Duration::from_millis(400)));
        assert!(journal_has(&app, "animation Finished(Lift)"));
    }

    #[test]
    fn test_close_blurs_input() {
        let mut app = app(PresentationStyle::Sheet, None);
        let now = Instant::now();
        app.dispatch(PickerAction::Toggle { animate: true }, now);
        app.dispatch(PickerAction::Toggle { animate: true }, now);
        let tail = app.journal.tail(2);
        assert!(tail[0].ends_with("input focus"));
        assert!(tail[1].ends_with("input blur"));
    }
}
