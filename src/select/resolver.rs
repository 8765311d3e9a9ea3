//! Selection resolver: finds which entry of the working list is selected.

use serde_json::Value;

use super::item::{Item, ItemKey};
use crate::log;

/// Equality predicate used to match opaque values.
pub type ValueEq = fn(&Value, &Value) -> bool;

/// Structural equality over JSON-like values.
///
/// Numbers compare numerically, so `1` and `1.0` are equal. Objects compare
/// key-wise regardless of insertion order.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(a, b)| deep_equal(a, b))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter().all(|(k, v)| y.get(k).is_some_and(|w| deep_equal(v, w)))
        }
        _ => a == b,
    }
}

/// Field-wise item comparison with `eq` used for values.
pub fn items_equal(a: &Item, b: &Item, eq: ValueEq) -> bool {
    let same_key = match (&a.key, &b.key) {
        (Some(x), Some(y)) => x.same_as(y),
        (x, y) => x == y,
    };
    a.label == b.label && same_key && a.color == b.color && eq(&a.value, &b.value)
}

/// Element-wise list comparison.
pub fn lists_equal(a: &[Item], b: &[Item], eq: ValueEq) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| items_equal(x, y, eq))
}

/// Whether `candidate` matches the lookup criterion.
///
/// Keys win when both sides carry one, otherwise values are compared.
pub fn matches(candidate: &Item, key: Option<&ItemKey>, value: Option<&Value>, eq: ValueEq) -> bool {
    match (ItemKey::active(candidate.key.as_ref()), ItemKey::active(key)) {
        (Some(a), Some(b)) => a.same_as(b),
        _ => value.is_some_and(|v| eq(&candidate.value, v)),
    }
}

/// Outcome of a lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution<'a> {
    pub selected_item: &'a Item,
    pub index: usize,
}

/// Find the selected entry of `items`.
///
/// Falls back to index 0 when nothing matches. Returns `None` only for an
/// empty list.
pub fn resolve<'a>(
    items: &'a [Item],
    key: Option<&ItemKey>,
    value: Option<&Value>,
    eq: ValueEq,
) -> Option<Resolution<'a>> {
    let first = items.first()?;

    let found = items
        .iter()
        .enumerate()
        .find(|(_, item)| matches(item, key, value, eq));

    Some(match found {
        Some((index, selected_item)) => Resolution { selected_item, index },
        None => {
            if value.is_some() {
                log::log_event(&format!(
                    "resolve: no entry matches {:?}, falling back to '{}'",
                    value, first.label
                ));
            }
            Resolution { selected_item: first, index: 0 }
        }
    })
}
