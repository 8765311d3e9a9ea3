//! The select field: owns selection, visibility and animation state and
//! sequences owner callbacks around every transition.

use std::collections::VecDeque;
use std::time::Instant;

use serde_json::Value;

use super::animation::{AnimationEvent, AnimationTarget, LabelAnimation};
use super::item::{Item, ItemKey, Placeholder, normalize};
use super::orchestrator::{
    AnimationType, Lifecycle, ToggleContext, TogglePlan, VisibilityState, plan_toggle,
};
use super::props::{ArrowTiming, HookFn, SelectProps, validate_entries};
use super::reconcile::{SelectionState, reconcile};
use super::resolver::resolve;
use super::view::SelectView;
use crate::error::{ConfigError, ConfigResult};
use crate::log;

/// Handle to the text surface a presenter draws for the field.
///
/// Closing the picker focuses and immediately releases it so no stale
/// input state lingers.
pub trait InputSurface {
    fn focus(&mut self);
    fn blur(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arrow {
    Up,
    Down,
}

/// A select field instance.
pub struct Select {
    props: SelectProps,
    selection: SelectionState,
    visibility: VisibilityState,
    animation: LabelAnimation,
    input: Option<Box<dyn InputSurface>>,
    /// Arrow hooks waiting for the running animation, oldest first
    pending_arrows: VecDeque<Arrow>,
}

impl Select {
    /// Create the field and run the first reconcile pass.
    pub fn new(props: SelectProps) -> ConfigResult<Self> {
        let eq = props.equality;
        let selection = match SelectionState::initial(&props.inputs, eq) {
            Some(initial) => initial.state,
            None => {
                let working = normalize(&props.inputs.items, &props.inputs.placeholder);
                let found = resolve(
                    &working,
                    props.inputs.item_key.as_ref(),
                    props.inputs.value.as_ref(),
                    eq,
                )
                .ok_or(ConfigError::EmptySelection)?;
                SelectionState {
                    selected_item: found.selected_item.clone(),
                    items: working,
                }
            }
        };

        let mut select = Self {
            animation: LabelAnimation::new(props.animation),
            props,
            selection,
            visibility: VisibilityState::default(),
            input: None,
            pending_arrows: VecDeque::new(),
        };
        select.reconcile_inputs();
        Ok(select)
    }

    // === External inputs ===

    /// Replace all props and reconcile.
    pub fn set_props(&mut self, props: SelectProps) {
        self.props = props;
        self.reconcile_inputs();
    }

    pub fn set_value(&mut self, value: Option<Value>) {
        self.props.inputs.value = value;
        self.reconcile_inputs();
    }

    /// Replace the items. Rejected lists leave the field untouched.
    pub fn set_items(&mut self, items: Vec<Item>) -> ConfigResult<()> {
        validate_entries(&items, &self.props.inputs.placeholder)?;
        self.props.inputs.items = items;
        self.reconcile_inputs();
        Ok(())
    }

    pub fn set_placeholder(&mut self, placeholder: Placeholder) -> ConfigResult<()> {
        validate_entries(&self.props.inputs.items, &placeholder)?;
        self.props.inputs.placeholder = placeholder;
        self.reconcile_inputs();
        Ok(())
    }

    pub fn set_item_key(&mut self, key: Option<ItemKey>) {
        self.props.inputs.item_key = key;
        self.reconcile_inputs();
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.props.disabled = disabled;
    }

    /// Run one reconcile pass; the owner hears about a selection change
    /// before the new state is committed.
    fn reconcile_inputs(&mut self) {
        let Some(result) = reconcile(&self.selection, &self.props.inputs, self.props.equality) else {
            return;
        };

        if let Some(change) = &result.notify {
            log::log_event(&format!(
                "reconcile: selection -> '{}' at {}",
                result.next.selected_item.label, change.index
            ));
            (self.props.callbacks.on_value_change)(&change.value, change.index);
        }
        if result.items_changed {
            log::log_event(&format!("reconcile: {} entries", result.next.items.len()));
        }

        self.selection = result.next;
    }

    // === User interaction ===

    /// A row was picked in the list widget.
    ///
    /// The index comes straight from the presenter, so no lookup runs.
    pub fn on_value_change(&mut self, index: usize) -> ConfigResult<()> {
        let len = self.selection.items.len();
        let Some(item) = self.selection.items.get(index).cloned() else {
            log::log_event(&format!("pick: row {} ignored ({} entries)", index, len));
            return Err(ConfigError::ItemIndexOutOfRange { index, len });
        };

        (self.props.callbacks.on_value_change)(&item.value, index);
        self.selection.selected_item = item;
        Ok(())
    }

    /// Flip between open and closed.
    ///
    /// Returns `false` when the request was ignored because the field is
    /// disabled.
    pub fn toggle_picker(&mut self, animate: bool, now: Instant) -> bool {
        self.toggle(animate, now).is_some()
    }

    fn toggle(&mut self, animate: bool, now: Instant) -> Option<TogglePlan> {
        let ctx = ToggleContext {
            disabled: self.props.disabled,
            modal: self.props.modal,
        };
        let Some(plan) = plan_toggle(self.visibility, &self.selection.selected_item, &ctx, animate)
        else {
            log::log_event("toggle: ignored, field is disabled");
            return None;
        };

        let hook = match plan.lifecycle {
            Lifecycle::Open => &mut self.props.callbacks.on_open,
            Lifecycle::Close => &mut self.props.callbacks.on_close,
        };
        fire(hook);

        if let Some(target) = plan.animation {
            self.animation.start(target, now);
        }

        self.visibility = plan.next;
        log::log_event(&format!(
            "toggle: show_picker={} animation={}",
            self.visibility.show_picker,
            self.visibility.animation_type.map(|a| a.as_str()).unwrap_or("-")
        ));

        if plan.blur_input {
            if let Some(input) = self.input.as_mut() {
                input.focus();
                input.blur();
            }
        }
        Some(plan)
    }

    /// Done button: close with animation, then notify.
    pub fn on_done(&mut self, now: Instant) {
        self.toggle_picker(true, now);
        fire(&mut self.props.callbacks.on_done_press);
    }

    /// Cancel button: close with animation, then cancel.
    pub fn cancel_and_close(&mut self, now: Instant) {
        self.toggle_picker(true, now);
        self.on_cancel(now);
    }

    /// Drop the selection back to the first entry and reset the label.
    ///
    /// The owner's value-changed callback is not invoked.
    pub fn on_cancel(&mut self, now: Instant) {
        if let Some(first) = self.selection.items.first() {
            self.selection.selected_item = first.clone();
        }
        log::log_event(&format!("cancel: selection -> '{}'", self.selection.selected_item.label));
        fire(&mut self.props.callbacks.on_cancel);
        self.animation.start(AnimationTarget::Reset, now);
    }

    pub fn on_up_arrow(&mut self, now: Instant) {
        self.arrow(Arrow::Up, now);
    }

    pub fn on_down_arrow(&mut self, now: Instant) {
        self.arrow(Arrow::Down, now);
    }

    fn arrow(&mut self, arrow: Arrow, now: Instant) {
        let launched = self
            .toggle(false, now)
            .is_some_and(|plan| plan.animation.is_some());

        match self.props.arrow_timing {
            ArrowTiming::AfterAnimation if launched => self.pending_arrows.push_back(arrow),
            _ => {
                // Earlier presses still owe their hooks
                self.flush_arrows();
                self.fire_arrow(arrow);
            }
        }
    }

    fn flush_arrows(&mut self) {
        while let Some(arrow) = self.pending_arrows.pop_front() {
            self.fire_arrow(arrow);
        }
    }

    fn fire_arrow(&mut self, arrow: Arrow) {
        let hook = match arrow {
            Arrow::Up => &mut self.props.callbacks.on_up_arrow,
            Arrow::Down => &mut self.props.callbacks.on_down_arrow,
        };
        fire(hook);
    }

    /// Advance the label animation; delivers completion events.
    pub fn tick(&mut self, now: Instant) -> Option<AnimationEvent> {
        let event = self.animation.tick(now)?;
        log::log_event(&format!("animation: {:?}", event));

        if let Some(f) = self.props.callbacks.on_animation_complete.as_mut() {
            f(event);
        }
        self.flush_arrows();
        Some(event)
    }

    // === Input surface ===

    pub fn register_input(&mut self, input: Box<dyn InputSurface>) {
        self.input = Some(input);
    }

    pub fn unregister_input(&mut self) -> Option<Box<dyn InputSurface>> {
        self.input.take()
    }

    // === Read access ===

    pub fn items(&self) -> &[Item] {
        &self.selection.items
    }

    pub fn selected_item(&self) -> &Item {
        &self.selection.selected_item
    }

    pub fn selected_index(&self) -> usize {
        self.selection.selected_index(self.props.equality).unwrap_or(0)
    }

    pub fn show_picker(&self) -> bool {
        self.visibility.show_picker
    }

    pub fn animation_type(&self) -> Option<AnimationType> {
        self.visibility.animation_type
    }

    pub fn visibility(&self) -> VisibilityState {
        self.visibility
    }

    pub fn animation(&self) -> &LabelAnimation {
        &self.animation
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    pub fn is_disabled(&self) -> bool {
        self.props.disabled
    }

    pub fn props(&self) -> &SelectProps {
        &self.props
    }

    /// Whether the text surface should be styled as a placeholder.
    pub fn is_showing_placeholder(&self) -> bool {
        match self.props.inputs.placeholder.item() {
            Some(placeholder) => placeholder.label == self.selection.selected_item.label,
            None => false,
        }
    }

    /// Borrowed snapshot for presenters.
    pub fn view(&self) -> SelectView<'_> {
        SelectView {
            items: &self.selection.items,
            selected_item: &self.selection.selected_item,
            selected_index: self.selected_index(),
            show_picker: self.visibility.show_picker,
            animation_type: self.visibility.animation_type,
            translation: self.animation.translation(),
            scale: self.animation.scale(),
            disabled: self.props.disabled,
            hide_icon: self.props.hide_icon,
            showing_placeholder: self.is_showing_placeholder(),
            placeholder_label: match &self.props.inputs.placeholder {
                Placeholder::Hidden => None,
                Placeholder::Default => Some(super::item::DEFAULT_PLACEHOLDER_LABEL),
                Placeholder::Custom(item) => Some(item.label.as_str()),
            },
            placeholder_text_color: &self.props.placeholder_text_color,
            native_dropdown_style: self.props.native_dropdown_style,
            hide_done_bar: self.props.hide_done_bar,
            done_text: &self.props.done_text,
            children: self.props.children.as_deref(),
        }
    }
}

fn fire(hook: &mut Option<HookFn>) {
    if let Some(f) = hook.as_mut() {
        f();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::animation::{OPEN_SCALE, OPEN_TRANSLATION, REST_SCALE, REST_TRANSLATION};
    use crate::select::item::DEFAULT_PLACEHOLDER_LABEL;
    use crate::select::props::SelectPropsBuilder;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    type Journal = Rc<RefCell<Vec<String>>>;

    fn ab() -> Vec<Item> {
        vec![Item::new("A", 1), Item::new("B", 2)]
    }

    /// Builder with every hook writing into `journal`.
    fn recorded(journal: &Journal) -> SelectPropsBuilder {
        let j = |journal: &Journal, name: &'static str| {
            let journal = journal.clone();
            move || journal.borrow_mut().push(name.to_string())
        };
        let values = journal.clone();
        SelectProps::builder()
            .items(ab())
            .on_value_change(move |v, i| values.borrow_mut().push(format!("value {} {}", v, i)))
            .on_open(j(journal, "open"))
            .on_close(j(journal, "close"))
            .on_done_press(j(journal, "done"))
            .on_cancel(j(journal, "cancel"))
            .on_up_arrow(j(journal, "up"))
            .on_down_arrow(j(journal, "down"))
    }

    fn entries(journal: &Journal) -> Vec<String> {
        journal.borrow().clone()
    }

    #[test]
    fn test_constructed_with_matching_value() {
        let journal = Journal::default();
        let select = Select::new(recorded(&journal).value(2).build().unwrap()).unwrap();

        assert_eq!(select.selected_item(), &Item::new("B", 2));
        assert_eq!(select.items().len(), 3);
        assert_eq!(select.items()[0].label, DEFAULT_PLACEHOLDER_LABEL);
        assert!(entries(&journal).is_empty());
        assert!(!select.is_showing_placeholder());
    }

    #[test]
    fn test_constructed_without_placeholder_and_no_match() {
        let journal = Journal::default();
        let props = recorded(&journal)
            .placeholder(Placeholder::Hidden)
            .value(3)
            .build()
            .unwrap();
        let select = Select::new(props).unwrap();

        assert_eq!(select.items().len(), 2);
        assert_eq!(select.selected_item(), &Item::new("A", 1));
        assert_eq!(select.selected_index(), 0);
        assert!(entries(&journal).is_empty());
    }

    #[test]
    fn test_constructed_without_value_shows_placeholder() {
        let journal = Journal::default();
        let select = Select::new(recorded(&journal).build().unwrap()).unwrap();
        assert!(select.is_showing_placeholder());
        assert_eq!(select.selected_index(), 0);
    }

    #[test]
    fn test_only_placeholder() {
        let props = SelectProps::builder().on_value_change(|_, _| {}).build().unwrap();
        let select = Select::new(props).unwrap();
        assert_eq!(select.items().len(), 1);
        assert!(select.is_showing_placeholder());
    }

    #[test]
    fn test_external_value_change_notifies_once() {
        let seen: Rc<RefCell<Vec<(Value, usize)>>> = Rc::default();
        let sink = seen.clone();
        let props = SelectProps::builder()
            .items(ab())
            .value(1)
            .on_value_change(move |v, i| sink.borrow_mut().push((v.clone(), i)))
            .build()
            .unwrap();
        let mut select = Select::new(props).unwrap();

        select.set_value(Some(json!(2)));
        assert_eq!(*seen.borrow(), vec![(json!(2), 2)]);
        assert_eq!(select.selected_item(), &Item::new("B", 2));

        // Same value again: nothing fires
        select.set_value(Some(json!(2)));
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_external_value_change_not_committed_when_owner_fails() {
        // A panicking owner aborts the pass; the old selection must survive,
        // which only holds if the owner is called before the commit.
        let props = SelectProps::builder()
            .items(ab())
            .value(1)
            .on_value_change(|_, _| panic!("owner rejected the change"))
            .build()
            .unwrap();
        let mut select = Select::new(props).unwrap();
        assert_eq!(select.selected_item(), &Item::new("A", 1));

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            select.set_value(Some(json!(2)));
        }));
        assert!(outcome.is_err());
        assert_eq!(select.selected_item(), &Item::new("A", 1));
    }

    #[test]
    fn test_row_pick_skips_resolver() {
        let journal = Journal::default();
        let mut select = Select::new(recorded(&journal).value(1).build().unwrap()).unwrap();

        select.on_value_change(2).unwrap();
        assert_eq!(entries(&journal), vec!["value 2 2".to_string()]);
        assert_eq!(select.selected_item(), &Item::new("B", 2));
    }

    #[test]
    fn test_row_pick_takes_index_as_authoritative() {
        // Two rows share a value; a resolver would always pick the first.
        let props = SelectProps::builder()
            .items(vec![Item::new("One", 1), Item::new("Uno", 1)])
            .placeholder(Placeholder::Hidden)
            .on_value_change(|_, _| {})
            .build()
            .unwrap();
        let mut select = Select::new(props).unwrap();
        select.on_value_change(1).unwrap();
        assert_eq!(select.selected_item().label, "Uno");
    }

    #[test]
    fn test_row_pick_out_of_range() {
        let journal = Journal::default();
        let mut select = Select::new(recorded(&journal).build().unwrap()).unwrap();
        assert_eq!(
            select.on_value_change(9),
            Err(ConfigError::ItemIndexOutOfRange { index: 9, len: 3 })
        );
        assert!(entries(&journal).is_empty());
    }

    #[test]
    fn test_toggle_twice_with_animation() {
        let journal = Journal::default();
        let mut select = Select::new(recorded(&journal).value(2).build().unwrap()).unwrap();
        let now = Instant::now();

        assert!(select.toggle_picker(true, now));
        assert!(select.show_picker());
        assert_eq!(select.animation_type(), Some(AnimationType::Slide));

        assert!(select.toggle_picker(true, now));
        assert!(!select.show_picker());
        assert_eq!(select.animation_type(), Some(AnimationType::Slide));
        assert_eq!(entries(&journal), vec!["open", "close"]);
    }

    #[test]
    fn test_toggle_while_disabled() {
        let journal = Journal::default();
        let mut select = Select::new(recorded(&journal).disabled(true).build().unwrap()).unwrap();
        assert!(!select.toggle_picker(true, Instant::now()));
        assert!(!select.show_picker());
        assert!(entries(&journal).is_empty());
    }

    #[test]
    fn test_open_lifts_label() {
        let journal = Journal::default();
        let mut select = Select::new(recorded(&journal).build().unwrap()).unwrap();
        let start = Instant::now();

        select.toggle_picker(true, start);
        assert!(select.is_animating());
        assert_eq!(
            select.tick(start + Duration::from_millis(300)),
            Some(AnimationEvent::Finished(AnimationTarget::Lift))
        );
        assert_eq!(select.animation().translation(), OPEN_TRANSLATION);
        assert_eq!(select.animation().scale(), OPEN_SCALE);
    }

    #[test]
    fn test_close_without_empty_value_keeps_label_lifted() {
        let journal = Journal::default();
        let mut select = Select::new(recorded(&journal).value(1).build().unwrap()).unwrap();
        let start = Instant::now();

        select.toggle_picker(true, start);
        select.tick(start + Duration::from_millis(300));
        select.toggle_picker(true, start + Duration::from_millis(400));
        assert!(!select.is_animating());
        assert_eq!(select.animation().translation(), OPEN_TRANSLATION);
    }

    #[test]
    fn test_close_with_empty_value_resets_label() {
        let props = SelectProps::builder()
            .items(vec![Item::new("None", ""), Item::new("Some", "x")])
            .placeholder(Placeholder::Hidden)
            .on_value_change(|_, _| {})
            .build()
            .unwrap();
        let mut select = Select::new(props).unwrap();
        let start = Instant::now();

        select.toggle_picker(true, start);
        select.toggle_picker(true, start + Duration::from_millis(100));
        assert_eq!(
            select.tick(start + Duration::from_millis(400)),
            Some(AnimationEvent::Finished(AnimationTarget::Reset))
        );
        assert_eq!(select.animation().translation(), REST_TRANSLATION);
        assert_eq!(select.animation().scale(), REST_SCALE);
    }

    #[test]
    fn test_cancel_resolves_to_first_entry() {
        let journal = Journal::default();
        let mut select = Select::new(recorded(&journal).value(2).build().unwrap()).unwrap();
        let now = Instant::now();

        select.toggle_picker(true, now);
        select.cancel_and_close(now);

        assert!(!select.show_picker());
        assert_eq!(select.selected_item().label, DEFAULT_PLACEHOLDER_LABEL);
        assert!(select.items().contains(select.selected_item()));
        assert_eq!(select.animation().in_flight(), Some(AnimationTarget::Reset));
        assert_eq!(entries(&journal), vec!["open", "close", "cancel"]);
    }

    #[test]
    fn test_value_redelivery_after_cancel_restores_selection() {
        let journal = Journal::default();
        let mut select = Select::new(recorded(&journal).value(2).build().unwrap()).unwrap();
        select.on_cancel(Instant::now());

        select.set_value(Some(json!(2)));
        assert_eq!(select.selected_item(), &Item::new("B", 2));
        assert_eq!(entries(&journal), vec!["cancel", "value 2 2"]);
    }

    #[test]
    fn test_done_closes_then_notifies() {
        let journal = Journal::default();
        let mut select = Select::new(recorded(&journal).value(1).build().unwrap()).unwrap();
        let now = Instant::now();

        select.toggle_picker(true, now);
        select.on_done(now);
        assert!(!select.show_picker());
        assert_eq!(entries(&journal), vec!["open", "close", "done"]);
    }

    #[test]
    fn test_arrow_waits_for_animation() {
        let journal = Journal::default();
        let mut select = Select::new(recorded(&journal).build().unwrap()).unwrap();
        let start = Instant::now();

        // Opening launches the lift animation, so the hook waits for it.
        select.on_down_arrow(start);
        assert_eq!(entries(&journal), vec!["open"]);
        assert_eq!(select.animation_type(), None);

        select.tick(start + Duration::from_millis(300));
        assert_eq!(entries(&journal), vec!["open", "down"]);
    }

    #[test]
    fn test_arrow_fires_immediately_without_animation() {
        let journal = Journal::default();
        let mut select = Select::new(recorded(&journal).value(1).build().unwrap()).unwrap();
        let start = Instant::now();

        select.toggle_picker(true, start);
        select.tick(start + Duration::from_millis(300));

        // Closing with a non-empty value launches nothing.
        select.on_up_arrow(start + Duration::from_millis(400));
        assert_eq!(entries(&journal), vec!["open", "close", "up"]);
    }

    #[test]
    fn test_arrows_within_one_animation_keep_order() {
        // Empty value: the close launches a reset, so both hooks wait for it.
        let journal = Journal::default();
        let props = recorded(&journal)
            .items(vec![Item::new("None", ""), Item::new("X", "x")])
            .placeholder(Placeholder::Hidden)
            .build()
            .unwrap();
        let mut select = Select::new(props).unwrap();
        let start = Instant::now();

        select.on_up_arrow(start);
        select.on_down_arrow(start + Duration::from_millis(50));
        assert_eq!(entries(&journal), vec!["open", "close"]);

        select.tick(start + Duration::from_secs(2));
        assert_eq!(entries(&journal), vec!["open", "close", "up", "down"]);
    }

    #[test]
    fn test_arrow_without_animation_flushes_earlier_hooks() {
        // Null placeholder value: the close launches nothing.
        let journal = Journal::default();
        let mut select = Select::new(recorded(&journal).build().unwrap()).unwrap();
        let start = Instant::now();

        select.on_up_arrow(start);
        select.on_down_arrow(start + Duration::from_millis(50));
        assert_eq!(entries(&journal), vec!["open", "close", "up", "down"]);

        select.tick(start + Duration::from_secs(2));
        assert_eq!(entries(&journal), vec!["open", "close", "up", "down"]);
    }

    #[test]
    fn test_arrow_immediate_timing() {
        let journal = Journal::default();
        let props = recorded(&journal)
            .arrow_timing(ArrowTiming::Immediate)
            .build()
            .unwrap();
        let mut select = Select::new(props).unwrap();
        select.on_up_arrow(Instant::now());
        assert_eq!(entries(&journal), vec!["open", "up"]);
    }

    #[test]
    fn test_animation_completion_is_reported() {
        let events: Rc<RefCell<Vec<AnimationEvent>>> = Rc::default();
        let sink = events.clone();
        let props = SelectProps::builder()
            .items(ab())
            .on_value_change(|_, _| {})
            .on_animation_complete(move |e| sink.borrow_mut().push(e))
            .build()
            .unwrap();
        let mut select = Select::new(props).unwrap();
        let start = Instant::now();

        select.toggle_picker(true, start);
        select.tick(start + Duration::from_millis(150));
        select.tick(start + Duration::from_millis(300));
        select.tick(start + Duration::from_millis(450));
        assert_eq!(*events.borrow(), vec![AnimationEvent::Finished(AnimationTarget::Lift)]);
    }

    struct RecordingInput(Journal);

    impl InputSurface for RecordingInput {
        fn focus(&mut self) {
            self.0.borrow_mut().push("focus".to_string());
        }

        fn blur(&mut self) {
            self.0.borrow_mut().push("blur".to_string());
        }
    }

    #[test]
    fn test_close_focuses_then_blurs_input() {
        let journal = Journal::default();
        let mut select = Select::new(recorded(&journal).build().unwrap()).unwrap();
        select.register_input(Box::new(RecordingInput(journal.clone())));
        let now = Instant::now();

        select.toggle_picker(true, now);
        select.toggle_picker(true, now);
        assert_eq!(entries(&journal), vec!["open", "close", "focus", "blur"]);
    }

    #[test]
    fn test_items_update_keeps_selection() {
        let journal = Journal::default();
        let mut select = Select::new(recorded(&journal).value(2).build().unwrap()).unwrap();

        select
            .set_items(vec![Item::new("Z", 0), Item::new("A", 1), Item::new("B", 2)])
            .unwrap();
        assert_eq!(select.items().len(), 4);
        assert_eq!(select.selected_item(), &Item::new("B", 2));
        assert_eq!(select.selected_index(), 3);
        assert!(entries(&journal).is_empty());
    }

    #[test]
    fn test_invalid_item_updates_are_rejected() {
        let journal = Journal::default();
        let props = recorded(&journal)
            .placeholder(Placeholder::Hidden)
            .value(2)
            .build()
            .unwrap();
        let mut select = Select::new(props).unwrap();

        assert_eq!(select.set_items(vec![]), Err(ConfigError::EmptySelection));
        assert!(matches!(
            select.set_items(vec![Item::new("", 3)]),
            Err(ConfigError::InvalidItem { index: 0, .. })
        ));
        assert_eq!(select.items(), ab().as_slice());
        assert_eq!(select.selected_item(), &Item::new("B", 2));

        // Hiding the placeholder over an empty list is refused too
        let mut select = Select::new(recorded(&journal).items(vec![]).build().unwrap()).unwrap();
        assert_eq!(
            select.set_placeholder(Placeholder::Hidden),
            Err(ConfigError::EmptySelection)
        );
        assert_eq!(select.items().len(), 1);
        assert!(select.set_placeholder(Placeholder::Custom(Item::new("Pick", ""))).is_ok());
        assert_eq!(select.items()[0].label, "Pick");
        assert!(entries(&journal).is_empty());
    }

    #[test]
    fn test_item_key_selects_by_key() {
        let props = SelectProps::builder()
            .items(vec![
                Item::new("A", 1).with_key("a"),
                Item::new("B", 1).with_key("b"),
            ])
            .value(1)
            .item_key("b")
            .on_value_change(|_, _| {})
            .build()
            .unwrap();
        let select = Select::new(props).unwrap();
        assert_eq!(select.selected_item().label, "B");
    }
}
