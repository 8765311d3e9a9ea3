//! Props handed to a select field and their validation.

use serde::Deserialize;
use serde_json::Value;

use super::animation::{AnimationConfig, AnimationEvent};
use super::item::{Item, ItemKey, Placeholder};
use super::orchestrator::ModalConfig;
use super::reconcile::SelectInputs;
use super::resolver::{ValueEq, deep_equal};
use crate::error::{ConfigError, ConfigResult};

/// Default text color used while the placeholder is showing.
pub const DEFAULT_PLACEHOLDER_TEXT_COLOR: &str = "#C7C7CD";

/// Default label of the done button.
pub const DEFAULT_DONE_TEXT: &str = "Done";

pub type ValueChangeFn = Box<dyn FnMut(&Value, usize)>;
pub type HookFn = Box<dyn FnMut()>;
pub type AnimationFn = Box<dyn FnMut(AnimationEvent)>;

/// When the arrow hooks fire relative to the toggle they trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrowTiming {
    /// Right after the toggle
    Immediate,
    /// Once the animation started by the toggle finishes
    #[default]
    AfterAnimation,
}

/// Owner callbacks.
pub struct Callbacks {
    pub on_value_change: ValueChangeFn,
    pub on_open: Option<HookFn>,
    pub on_close: Option<HookFn>,
    pub on_done_press: Option<HookFn>,
    pub on_cancel: Option<HookFn>,
    pub on_up_arrow: Option<HookFn>,
    pub on_down_arrow: Option<HookFn>,
    pub on_animation_complete: Option<AnimationFn>,
}

/// Everything the owner configures on a select field.
pub struct SelectProps {
    pub inputs: SelectInputs,
    pub disabled: bool,
    pub hide_icon: bool,
    pub placeholder_text_color: String,
    /// Draw the dropdown surface with its underline and placeholder color
    pub native_dropdown_style: bool,
    pub hide_done_bar: bool,
    pub done_text: String,
    pub modal: ModalConfig,
    /// Replaces the default text surface
    pub children: Option<String>,
    pub arrow_timing: ArrowTiming,
    pub equality: ValueEq,
    pub animation: AnimationConfig,
    pub callbacks: Callbacks,
}

impl SelectProps {
    pub fn builder() -> SelectPropsBuilder {
        SelectPropsBuilder::default()
    }
}

/// Builder for [`SelectProps`].
///
/// `build` fails fast on contract violations instead of letting them surface
/// later as broken state.
pub struct SelectPropsBuilder {
    items: Vec<Item>,
    placeholder: Placeholder,
    value: Option<Value>,
    item_key: Option<ItemKey>,
    disabled: bool,
    hide_icon: bool,
    placeholder_text_color: String,
    native_dropdown_style: bool,
    hide_done_bar: bool,
    done_text: String,
    modal: ModalConfig,
    children: Option<String>,
    arrow_timing: ArrowTiming,
    equality: ValueEq,
    animation: AnimationConfig,
    on_value_change: Option<ValueChangeFn>,
    on_open: Option<HookFn>,
    on_close: Option<HookFn>,
    on_done_press: Option<HookFn>,
    on_cancel: Option<HookFn>,
    on_up_arrow: Option<HookFn>,
    on_down_arrow: Option<HookFn>,
    on_animation_complete: Option<AnimationFn>,
}

impl Default for SelectPropsBuilder {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            placeholder: Placeholder::Default,
            value: None,
            item_key: None,
            disabled: false,
            hide_icon: false,
            placeholder_text_color: DEFAULT_PLACEHOLDER_TEXT_COLOR.to_string(),
            native_dropdown_style: true,
            hide_done_bar: false,
            done_text: DEFAULT_DONE_TEXT.to_string(),
            modal: ModalConfig::default(),
            children: None,
            arrow_timing: ArrowTiming::default(),
            equality: deep_equal,
            animation: AnimationConfig::default(),
            on_value_change: None,
            on_open: None,
            on_close: None,
            on_done_press: None,
            on_cancel: None,
            on_up_arrow: None,
            on_down_arrow: None,
            on_animation_complete: None,
        }
    }
}

impl SelectPropsBuilder {
    pub fn items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    pub fn placeholder(mut self, placeholder: Placeholder) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn maybe_value(mut self, value: Option<Value>) -> Self {
        self.value = value;
        self
    }

    pub fn item_key(mut self, key: impl Into<ItemKey>) -> Self {
        self.item_key = Some(key.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn hide_icon(mut self, hide: bool) -> Self {
        self.hide_icon = hide;
        self
    }

    pub fn placeholder_text_color(mut self, color: impl Into<String>) -> Self {
        self.placeholder_text_color = color.into();
        self
    }

    pub fn native_dropdown_style(mut self, native: bool) -> Self {
        self.native_dropdown_style = native;
        self
    }

    pub fn hide_done_bar(mut self, hide: bool) -> Self {
        self.hide_done_bar = hide;
        self
    }

    pub fn done_text(mut self, text: impl Into<String>) -> Self {
        self.done_text = text.into();
        self
    }

    pub fn modal(mut self, modal: ModalConfig) -> Self {
        self.modal = modal;
        self
    }

    pub fn children(mut self, text: impl Into<String>) -> Self {
        self.children = Some(text.into());
        self
    }

    pub fn arrow_timing(mut self, timing: ArrowTiming) -> Self {
        self.arrow_timing = timing;
        self
    }

    pub fn equality(mut self, eq: ValueEq) -> Self {
        self.equality = eq;
        self
    }

    pub fn animation(mut self, config: AnimationConfig) -> Self {
        self.animation = config;
        self
    }

    pub fn on_value_change(mut self, f: impl FnMut(&Value, usize) + 'static) -> Self {
        self.on_value_change = Some(Box::new(f));
        self
    }

    pub fn on_open(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_open = Some(Box::new(f));
        self
    }

    pub fn on_close(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(f));
        self
    }

    pub fn on_done_press(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_done_press = Some(Box::new(f));
        self
    }

    pub fn on_cancel(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_cancel = Some(Box::new(f));
        self
    }

    pub fn on_up_arrow(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_up_arrow = Some(Box::new(f));
        self
    }

    pub fn on_down_arrow(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_down_arrow = Some(Box::new(f));
        self
    }

    pub fn on_animation_complete(mut self, f: impl FnMut(AnimationEvent) + 'static) -> Self {
        self.on_animation_complete = Some(Box::new(f));
        self
    }

    /// Validate and assemble the props.
    pub fn build(self) -> ConfigResult<SelectProps> {
        let on_value_change = self
            .on_value_change
            .ok_or(ConfigError::MissingCallback("on_value_change"))?;

        validate_entries(&self.items, &self.placeholder)?;

        Ok(SelectProps {
            inputs: SelectInputs {
                items: self.items,
                placeholder: self.placeholder,
                value: self.value,
                item_key: self.item_key,
            },
            disabled: self.disabled,
            hide_icon: self.hide_icon,
            placeholder_text_color: self.placeholder_text_color,
            native_dropdown_style: self.native_dropdown_style,
            hide_done_bar: self.hide_done_bar,
            done_text: self.done_text,
            modal: self.modal,
            children: self.children,
            arrow_timing: self.arrow_timing,
            equality: self.equality,
            animation: self.animation,
            callbacks: Callbacks {
                on_value_change,
                on_open: self.on_open,
                on_close: self.on_close,
                on_done_press: self.on_done_press,
                on_cancel: self.on_cancel,
                on_up_arrow: self.on_up_arrow,
                on_down_arrow: self.on_down_arrow,
                on_animation_complete: self.on_animation_complete,
            },
        })
    }
}

/// Reject blank labels and lists with nothing to select.
pub fn validate_entries(items: &[Item], placeholder: &Placeholder) -> ConfigResult<()> {
    for (index, item) in items.iter().enumerate() {
        if item.label.trim().is_empty() {
            return Err(ConfigError::InvalidItem {
                index,
                reason: "label is empty".to_string(),
            });
        }
    }

    if items.is_empty() && placeholder.is_hidden() {
        return Err(ConfigError::EmptySelection);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_callback_is_rejected() {
        let result = SelectProps::builder().items(vec![Item::new("A", 1)]).build();
        assert_eq!(result.err(), Some(ConfigError::MissingCallback("on_value_change")));
    }

    #[test]
    fn test_blank_label_is_rejected() {
        let result = SelectProps::builder()
            .items(vec![Item::new("A", 1), Item::new("  ", 2)])
            .on_value_change(|_, _| {})
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidItem { index: 1, .. })));
    }

    #[test]
    fn test_nothing_selectable_is_rejected() {
        let result = SelectProps::builder()
            .placeholder(Placeholder::Hidden)
            .on_value_change(|_, _| {})
            .build();
        assert_eq!(result.err(), Some(ConfigError::EmptySelection));
    }

    #[test]
    fn test_empty_items_with_placeholder_is_allowed() {
        let props = SelectProps::builder().on_value_change(|_, _| {}).build().unwrap();
        assert!(props.inputs.items.is_empty());
        assert_eq!(props.inputs.placeholder, Placeholder::Default);
    }

    #[test]
    fn test_defaults() {
        let props = SelectProps::builder()
            .items(vec![Item::new("A", 1)])
            .on_value_change(|_, _| {})
            .build()
            .unwrap();
        assert_eq!(props.done_text, DEFAULT_DONE_TEXT);
        assert_eq!(props.placeholder_text_color, DEFAULT_PLACEHOLDER_TEXT_COLOR);
        assert!(props.native_dropdown_style);
        assert!(!props.disabled);
        assert!(props.inputs.value.is_none());
        assert_eq!(props.arrow_timing, ArrowTiming::AfterAnimation);
    }
}
