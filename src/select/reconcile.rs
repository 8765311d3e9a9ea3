//! Derived-state reconciliation.
//!
//! Runs on every delivery of external inputs and decides whether the working
//! list or the selected entry changed. The function is pure: the caller is
//! responsible for invoking the owner's callback before committing the
//! returned state.

use serde_json::Value;

use super::item::{Item, ItemKey, Placeholder, normalize};
use super::resolver::{ValueEq, items_equal, lists_equal, resolve};

/// The externally controlled part of the props.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectInputs {
    pub items: Vec<Item>,
    pub placeholder: Placeholder,
    /// `None` means the owner has not supplied a current value.
    pub value: Option<Value>,
    pub item_key: Option<ItemKey>,
}

/// Items plus the entry currently selected among them.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub items: Vec<Item>,
    pub selected_item: Item,
}

/// Resolution result detached from the list it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct InitialSelection {
    pub state: SelectionState,
    pub index: usize,
}

impl SelectionState {
    /// State right after construction, before the first reconcile pass.
    ///
    /// With a current value the lookup runs against the raw items, without
    /// the placeholder. Without one the placeholder (or the first item) is
    /// selected from the working list. Returns `None` when the list searched
    /// is empty.
    pub fn initial(inputs: &SelectInputs, eq: ValueEq) -> Option<InitialSelection> {
        let items = if inputs.value.is_some() {
            inputs.items.clone()
        } else {
            normalize(&inputs.items, &inputs.placeholder)
        };
        let found = resolve(&items, inputs.item_key.as_ref(), inputs.value.as_ref(), eq)?;
        let (selected_item, index) = (found.selected_item.clone(), found.index);
        Some(InitialSelection {
            index,
            state: SelectionState { items, selected_item },
        })
    }

    /// Position of the selected entry, if it is a member of `items`.
    pub fn selected_index(&self, eq: ValueEq) -> Option<usize> {
        self.items
            .iter()
            .position(|item| items_equal(item, &self.selected_item, eq))
    }
}

/// Owner notification produced by a reconcile pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueChange {
    pub value: Value,
    pub index: usize,
}

/// Output of a reconcile pass that changed something.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub next: SelectionState,
    pub items_changed: bool,
    /// Set when the selected entry changed; must be delivered before `next`
    /// is committed.
    pub notify: Option<ValueChange>,
}

/// Compute the next selection state from the previous one and new inputs.
///
/// Returns `None` when neither the working list nor the selection changed.
pub fn reconcile(prev: &SelectionState, inputs: &SelectInputs, eq: ValueEq) -> Option<Reconciliation> {
    let working = normalize(&inputs.items, &inputs.placeholder);
    let items_changed = !lists_equal(&prev.items, &working, eq);

    let found = resolve(&working, inputs.item_key.as_ref(), inputs.value.as_ref(), eq)?;
    let selection_changed =
        inputs.value.is_some() && !items_equal(&prev.selected_item, found.selected_item, eq);

    if !items_changed && !selection_changed {
        return None;
    }

    let notify = selection_changed.then(|| ValueChange {
        value: found.selected_item.value.clone(),
        index: found.index,
    });
    let selected_item = if selection_changed {
        found.selected_item.clone()
    } else {
        prev.selected_item.clone()
    };
    let items = if items_changed { working } else { prev.items.clone() };

    Some(Reconciliation {
        next: SelectionState { items, selected_item },
        items_changed,
        notify,
    })
}
