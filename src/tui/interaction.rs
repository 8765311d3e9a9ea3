//! Component-level mouse interactivity system.
//!
//! Presenters register their interactive regions during render, and mouse
//! events are routed to the region under the pointer.
//!
//! # Example
//!
//! ```ignore
//! registry.register(InteractiveRegion::clickable(
//!     "row",
//!     ClickRegion::new(x, y, width, 1),
//!     PickerAction::Pick(3),
//! ));
//! ```

use crate::events::PickerAction;

/// A rectangular screen region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Check if a point is within this region
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }
}

impl From<ratatui::layout::Rect> for ClickRegion {
    fn from(rect: ratatui::layout::Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// An interactive region that can respond to mouse events.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Identifier for debugging/logging
    pub id: &'static str,

    pub bounds: ClickRegion,

    /// Action to dispatch on left click (None = not clickable)
    pub on_click: Option<PickerAction>,

    /// Action to dispatch on scroll up (None = not scrollable)
    pub on_scroll_up: Option<PickerAction>,

    /// Action to dispatch on scroll down (None = not scrollable)
    pub on_scroll_down: Option<PickerAction>,

    /// Priority for overlapping regions (higher = checked first)
    /// Use this for sheets that should capture clicks over the field
    pub priority: i32,
}

impl InteractiveRegion {
    /// Create a new clickable region
    pub fn clickable(id: &'static str, bounds: ClickRegion, action: PickerAction) -> Self {
        Self {
            id,
            bounds,
            on_click: Some(action),
            on_scroll_up: None,
            on_scroll_down: None,
            priority: 0,
        }
    }

    /// Create a new scrollable region
    pub fn scrollable(
        id: &'static str,
        bounds: ClickRegion,
        scroll_up: PickerAction,
        scroll_down: PickerAction,
    ) -> Self {
        Self {
            id,
            bounds,
            on_click: None,
            on_scroll_up: Some(scroll_up),
            on_scroll_down: Some(scroll_down),
            priority: 0,
        }
    }

    /// Set the priority (for builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    /// Register a simple clickable region
    pub fn register_click(&mut self, id: &'static str, bounds: ClickRegion, action: PickerAction) {
        self.register(InteractiveRegion::clickable(id, bounds, action));
    }

    /// Register a list row; rows sit above the field
    pub fn register_row(&mut self, index: usize, bounds: ClickRegion, priority: i32) {
        self.register(
            InteractiveRegion::clickable("row", bounds, PickerAction::Pick(index))
                .with_priority(priority),
        );
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Find the action to dispatch for a click at (x, y)
    pub fn handle_click(&self, x: u16, y: u16) -> PickerAction {
        self.best(x, y, |r| r.on_click.as_ref())
    }

    /// Find the action to dispatch for a scroll up at (x, y)
    pub fn handle_scroll_up(&self, x: u16, y: u16) -> PickerAction {
        self.best(x, y, |r| r.on_scroll_up.as_ref())
    }

    /// Find the action to dispatch for a scroll down at (x, y)
    pub fn handle_scroll_down(&self, x: u16, y: u16) -> PickerAction {
        self.best(x, y, |r| r.on_scroll_down.as_ref())
    }

    /// Action of the highest-priority region under (x, y) that handles the event
    fn best(
        &self,
        x: u16,
        y: u16,
        handler: impl Fn(&InteractiveRegion) -> Option<&PickerAction>,
    ) -> PickerAction {
        self.regions
            .iter()
            .filter(|r| r.contains(x, y))
            .filter_map(|r| handler(r).map(|action| (r.priority, action)))
            .max_by_key(|(priority, _)| *priority)
            .map(|(_, action)| action.clone())
            .unwrap_or(PickerAction::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_contains() {
        let region = InteractiveRegion::clickable(
            "test",
            ClickRegion::new(10, 10, 20, 10),
            PickerAction::None,
        );

        assert!(region.contains(10, 10)); // top-left corner
        assert!(region.contains(15, 15)); // center
        assert!(region.contains(29, 19)); // just inside bottom-right
        assert!(!region.contains(30, 20)); // just outside
        assert!(!region.contains(9, 10)); // just left
    }

    #[test]
    fn test_priority_ordering() {
        let mut registry = InteractionRegistry::new();

        registry.register(InteractiveRegion::clickable(
            "field",
            ClickRegion::new(0, 0, 100, 100),
            PickerAction::Toggle { animate: true },
        ));
        registry.register_row(2, ClickRegion::new(20, 20, 60, 1), 10);

        assert_eq!(registry.handle_click(50, 20), PickerAction::Pick(2));
        assert_eq!(registry.handle_click(5, 5), PickerAction::Toggle { animate: true });
        assert_eq!(registry.handle_click(200, 200), PickerAction::None);
    }

    #[test]
    fn test_scroll_routing() {
        let mut registry = InteractionRegistry::new();
        registry.register(InteractiveRegion::scrollable(
            "list",
            ClickRegion::new(0, 0, 10, 10),
            PickerAction::HighlightPrev,
            PickerAction::HighlightNext,
        ));

        assert_eq!(registry.handle_scroll_up(1, 1), PickerAction::HighlightPrev);
        assert_eq!(registry.handle_scroll_down(1, 1), PickerAction::HighlightNext);
        assert_eq!(registry.handle_click(1, 1), PickerAction::None);

        registry.clear();
        assert!(registry.is_empty());
    }
}
