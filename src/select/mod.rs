//! Select field core
//!
//! Leaf first:
//! - `item` - entries, placeholder, working list
//! - `resolver` - equality and lookup of the selected entry
//! - `reconcile` - derived-state reconciliation on input delivery
//! - `animation` - the lift/reset label animation
//! - `orchestrator` - open/close state machine
//! - `props` - owner configuration and validation
//! - `component` - the `Select` instance tying it together
//! - `view` - snapshot handed to presenters

mod animation;
mod component;
mod item;
mod orchestrator;
mod props;
mod reconcile;
mod resolver;
mod view;

pub use animation::{
    AnimatedScalar, AnimationConfig, AnimationEvent, AnimationTarget, Easing, LabelAnimation,
    OPEN_SCALE, OPEN_TRANSLATION, REST_SCALE, REST_TRANSLATION,
};
pub use component::{InputSurface, Select};
pub use item::{
    DEFAULT_PLACEHOLDER_COLOR, DEFAULT_PLACEHOLDER_LABEL, Item, ItemKey, Placeholder, normalize,
};
pub use orchestrator::{
    AnimationType, Lifecycle, ModalConfig, ToggleContext, TogglePlan, VisibilityState, plan_toggle,
};
pub use props::{
    ArrowTiming, Callbacks, DEFAULT_DONE_TEXT, DEFAULT_PLACEHOLDER_TEXT_COLOR, SelectProps,
    SelectPropsBuilder,
};
pub use reconcile::{InitialSelection, Reconciliation, SelectInputs, SelectionState, ValueChange, reconcile};
pub use resolver::{Resolution, ValueEq, deep_equal, items_equal, lists_equal, resolve};
pub use view::SelectView;
