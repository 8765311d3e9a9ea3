//! Open/close state machine.
//!
//! `plan_toggle` decides what a toggle request does without touching any
//! state; the component applies the plan in a fixed order: lifecycle hook,
//! animation launch, visibility flip, input blur.

use serde::Deserialize;

use super::animation::AnimationTarget;
use super::item::Item;

/// How the list chooser appears.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationType {
    #[default]
    Slide,
    Fade,
    None,
}

impl AnimationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationType::Slide => "slide",
            AnimationType::Fade => "fade",
            AnimationType::None => "none",
        }
    }
}

/// Caller-supplied configuration for the modal list surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    pub animation_type: Option<AnimationType>,
}

/// Whether the picker is shown and how it was last toggled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityState {
    pub show_picker: bool,
    /// Only set after an animated toggle
    pub animation_type: Option<AnimationType>,
}

/// Which lifecycle hook accompanies a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Open,
    Close,
}

/// Inputs besides the visibility state that shape a toggle.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToggleContext {
    pub disabled: bool,
    pub modal: ModalConfig,
}

/// Everything a single toggle does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TogglePlan {
    pub next: VisibilityState,
    pub lifecycle: Lifecycle,
    pub animation: Option<AnimationTarget>,
    /// Focus then release the registered input surface
    pub blur_input: bool,
}

/// Decide the outcome of `toggle_picker(animate)`.
///
/// Returns `None` while disabled.
pub fn plan_toggle(
    current: VisibilityState,
    selected_item: &Item,
    ctx: &ToggleContext,
    animate: bool,
) -> Option<TogglePlan> {
    if ctx.disabled {
        return None;
    }

    let animation_type = animate.then(|| ctx.modal.animation_type.unwrap_or_default());
    let opening = !current.show_picker;

    let (lifecycle, animation) = if opening {
        (Lifecycle::Open, Some(AnimationTarget::Lift))
    } else if selected_item.has_empty_value() {
        (Lifecycle::Close, Some(AnimationTarget::Reset))
    } else {
        (Lifecycle::Close, None)
    };

    Some(TogglePlan {
        next: VisibilityState {
            show_picker: opening,
            animation_type,
        },
        lifecycle,
        animation,
        blur_input: !opening,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn closed() -> VisibilityState {
        VisibilityState::default()
    }

    fn chosen() -> Item {
        Item::new("B", 2)
    }

    #[test]
    fn test_open_with_default_animation() {
        let plan = plan_toggle(closed(), &chosen(), &ToggleContext::default(), true).unwrap();
        assert!(plan.next.show_picker);
        assert_eq!(plan.next.animation_type, Some(AnimationType::Slide));
        assert_eq!(plan.lifecycle, Lifecycle::Open);
        assert_eq!(plan.animation, Some(AnimationTarget::Lift));
        assert!(!plan.blur_input);
    }

    #[test]
    fn test_toggle_twice_keeps_slide() {
        let ctx = ToggleContext::default();
        let open = plan_toggle(closed(), &chosen(), &ctx, true).unwrap();
        let close = plan_toggle(open.next, &chosen(), &ctx, true).unwrap();
        assert!(!close.next.show_picker);
        assert_eq!(close.next.animation_type, Some(AnimationType::Slide));
        assert_eq!(close.lifecycle, Lifecycle::Close);
        assert!(close.blur_input);
    }

    #[test]
    fn test_modal_override_and_unanimated() {
        let ctx = ToggleContext {
            disabled: false,
            modal: ModalConfig { animation_type: Some(AnimationType::Fade) },
        };
        let plan = plan_toggle(closed(), &chosen(), &ctx, true).unwrap();
        assert_eq!(plan.next.animation_type, Some(AnimationType::Fade));

        let plan = plan_toggle(closed(), &chosen(), &ctx, false).unwrap();
        assert_eq!(plan.next.animation_type, None);
    }

    #[test]
    fn test_disabled_is_noop() {
        let ctx = ToggleContext { disabled: true, ..Default::default() };
        assert!(plan_toggle(closed(), &chosen(), &ctx, true).is_none());
    }

    #[test]
    fn test_close_resets_only_for_empty_value() {
        let open = VisibilityState { show_picker: true, animation_type: None };
        let ctx = ToggleContext::default();

        let plan = plan_toggle(open, &Item::new("none", ""), &ctx, false).unwrap();
        assert_eq!(plan.animation, Some(AnimationTarget::Reset));

        let plan = plan_toggle(open, &chosen(), &ctx, false).unwrap();
        assert_eq!(plan.animation, None);

        let plan = plan_toggle(open, &Item::new("placeholder", Value::Null), &ctx, false).unwrap();
        assert_eq!(plan.animation, None);
    }
}
