//! Property maps, the unit of style configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// A mapping from property names to values.
///
/// Props are the building blocks of styles: one `Props` holds the settings
/// for a single target category ("canvas", "legend", ...) or one caller-side
/// override set. Multiple props are merged with last-wins precedence before
/// application, so overrides layer naturally on top of style defaults.
///
/// # Example
///
/// ```rust
/// use plotstyle::Props;
///
/// let canvas = Props::new()
///     .prop("FillStyle", 1001)
///     .prop("TopMargin", 0.05);
///
/// assert_eq!(canvas.number("TopMargin"), Some(0.05));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Props {
    entries: BTreeMap<String, Value>,
}

impl Props {
    /// Creates an empty property map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning the updated map for chaining.
    pub fn prop(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a property in place, overwriting any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Looks up a property by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Looks up a property and returns it as a float.
    ///
    /// Returns `None` if the property is absent or not numeric.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_f64)
    }

    /// Returns true if a property with the given name exists.
    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Merges another property map into this one.
    ///
    /// Values from `other` win on name collisions.
    pub fn merge_from(&mut self, other: &Props) {
        for (name, value) in &other.entries {
            self.entries.insert(name.clone(), value.clone());
        }
    }

    /// Merges an ordered sequence of property sources into a new map.
    ///
    /// `None` entries are skipped silently, so optional override sets can be
    /// passed straight through. Later sources win on name collisions, and the
    /// merge is associative in effect: merging `[a, b, c]` equals merging
    /// `a` with `b` first and the result with `c`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use plotstyle::{Props, Value};
    ///
    /// let defaults = Props::new().prop("LineWidth", 2).prop("LineColor", 1);
    /// let overrides = Props::new().prop("LineColor", 628);
    ///
    /// let merged = Props::merged([Some(&defaults), None, Some(&overrides)]);
    /// assert_eq!(merged.get("LineColor"), Some(&Value::Int(628)));
    /// assert_eq!(merged.get("LineWidth"), Some(&Value::Int(2)));
    /// ```
    pub fn merged<'a, I>(sources: I) -> Props
    where
        I: IntoIterator<Item = Option<&'a Props>>,
    {
        let mut merged = Props::new();
        for source in sources.into_iter().flatten() {
            merged.merge_from(source);
        }
        merged
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates over property names in name order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    /// Returns the number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map holds no properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Props::new();
        for (name, value) in iter {
            props.insert(name, value);
        }
        props
    }
}
