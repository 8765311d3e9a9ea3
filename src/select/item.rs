//! Item model: selectable entries, the placeholder, and the working list.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// Label shown by the default placeholder entry.
pub const DEFAULT_PLACEHOLDER_LABEL: &str = "Select an item...";

/// Muted color of the default placeholder entry.
pub const DEFAULT_PLACEHOLDER_COLOR: &str = "#9EA0A4";

/// Optional stable identity for an item.
///
/// Numeric keys may be fractional.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemKey {
    Num(Number),
    Str(String),
}

impl ItemKey {
    /// Whether this key takes part in matching.
    ///
    /// Empty strings and zero count as unset.
    pub fn is_set(&self) -> bool {
        match self {
            ItemKey::Num(n) => n.as_f64().is_some_and(|f| f != 0.0),
            ItemKey::Str(s) => !s.is_empty(),
        }
    }

    /// Key identity used for lookups; `1` and `1.0` are the same key.
    pub fn same_as(&self, other: &ItemKey) -> bool {
        match (self, other) {
            (ItemKey::Num(a), ItemKey::Num(b)) => a == b || a.as_f64() == b.as_f64(),
            (ItemKey::Str(a), ItemKey::Str(b)) => a == b,
            _ => false,
        }
    }

    /// Key if present and set
    pub fn active(key: Option<&ItemKey>) -> Option<&ItemKey> {
        key.filter(|k| k.is_set())
    }
}

impl From<&str> for ItemKey {
    fn from(s: &str) -> Self {
        ItemKey::Str(s.to_string())
    }
}

impl From<String> for ItemKey {
    fn from(s: String) -> Self {
        ItemKey::Str(s)
    }
}

impl From<i64> for ItemKey {
    fn from(n: i64) -> Self {
        ItemKey::Num(n.into())
    }
}

impl std::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemKey::Num(n) => write!(f, "{}", n),
            ItemKey::Str(s) => write!(f, "{}", s),
        }
    }
}

/// A selectable entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub label: String,
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<ItemKey>,
    /// Hex color such as `#9EA0A4`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Item {
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            key: None,
            color: None,
        }
    }

    pub fn with_key(mut self, key: impl Into<ItemKey>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Whether the value is an empty string or an empty array.
    pub fn has_empty_value(&self) -> bool {
        match &self.value {
            Value::String(s) => s.is_empty(),
            Value::Array(a) => a.is_empty(),
            _ => false,
        }
    }
}

/// The synthetic first entry of the working list.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Placeholder {
    /// `Select an item...` with a null value and muted color
    #[default]
    Default,
    /// No placeholder entry at all
    Hidden,
    Custom(Item),
}

impl Placeholder {
    /// The entry this placeholder contributes, if any.
    pub fn item(&self) -> Option<Item> {
        match self {
            Placeholder::Default => Some(
                Item::new(DEFAULT_PLACEHOLDER_LABEL, Value::Null)
                    .with_color(DEFAULT_PLACEHOLDER_COLOR),
            ),
            Placeholder::Hidden => None,
            Placeholder::Custom(item) => Some(item.clone()),
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, Placeholder::Hidden)
    }

    /// Build from a loose configuration object.
    ///
    /// An empty object hides the placeholder. Missing fields fall back to an
    /// empty label and a null value.
    pub fn from_fields(fields: Map<String, Value>) -> Result<Self, serde_json::Error> {
        if fields.is_empty() {
            return Ok(Placeholder::Hidden);
        }

        let label = match fields.get("label") {
            Some(Value::String(s)) => s.clone(),
            _ => String::new(),
        };
        let value = fields.get("value").cloned().unwrap_or(Value::Null);
        let key = match fields.get("key") {
            Some(k) => Some(serde_json::from_value(k.clone())?),
            None => None,
        };
        let color = match fields.get("color") {
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        };

        Ok(Placeholder::Custom(Item { label, value, key, color }))
    }
}

impl<'de> Deserialize<'de> for Placeholder {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = Map::<String, Value>::deserialize(deserializer)?;
        Placeholder::from_fields(fields).map_err(serde::de::Error::custom)
    }
}

/// Build the working list: the placeholder (if any) followed by `items`.
pub fn normalize(items: &[Item], placeholder: &Placeholder) -> Vec<Item> {
    let mut working = Vec::with_capacity(items.len() + 1);
    if let Some(entry) = placeholder.item() {
        working.push(entry);
    }
    working.extend(items.iter().cloned());
    working
}
