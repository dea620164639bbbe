//! Style presets and their named registry.
//!
//! This module provides the core styling primitives:
//!
//! - [`Style`]: A named preset of property groups and top-level values
//! - [`Styles`]: A registry of named styles with stack-scoped activation
//! - [`StyleScope`]: A guard that keeps a style active while it lives
//! - [`StyleError`]: Errors from registry lookups
//!
//! Styles group properties by target category ("canvas", "legend", ...) and
//! carry a handful of top-level scalars shared across categories (text size,
//! canvas dimensions).

mod error;
mod registry;

pub use error::StyleError;
pub use registry::{StyleScope, Styles, DEFAULT_STYLE_NAME};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::props::Props;
use crate::value::Value;

/// One entry of a style: a property group or a top-level value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleEntry {
    /// A property group for one target category, e.g. "canvas" or "legend".
    Group(Props),
    /// A top-level scalar shared across groups, e.g. "canvas_width".
    Value(Value),
}

impl StyleEntry {
    /// Returns the group, if this entry is one.
    pub fn as_group(&self) -> Option<&Props> {
        match self {
            StyleEntry::Group(props) => Some(props),
            StyleEntry::Value(_) => None,
        }
    }

    /// Returns the value, if this entry is one.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            StyleEntry::Value(value) => Some(value),
            StyleEntry::Group(_) => None,
        }
    }
}

/// A named preset of display properties.
///
/// A style maps entry names to either property groups (one per target
/// category) or top-level values. Styles are plain data: they are registered
/// with a [`Styles`] registry and applied to targets through a
/// [`PropertyTable`](crate::PropertyTable).
///
/// Styles serialize as a single mapping, so a preset reads naturally from a
/// JSON or YAML document: mapping values become groups, everything else
/// becomes a top-level value.
///
/// # Example
///
/// ```rust
/// use plotstyle::{Props, Style};
///
/// let style = Style::new()
///     .value("canvas_width", 800)
///     .group("canvas", Props::new().prop("FillStyle", 1001));
///
/// assert_eq!(style.number("canvas_width"), Some(800.0));
/// assert!(style.get_group("canvas").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style {
    entries: BTreeMap<String, StyleEntry>,
}

impl Style {
    /// Creates an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property group, returning the updated style for chaining.
    pub fn group(mut self, name: impl Into<String>, props: Props) -> Self {
        self.set_group(name, props);
        self
    }

    /// Adds a top-level value, returning the updated style for chaining.
    pub fn value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_value(name, value);
        self
    }

    /// Sets a property group in place, overwriting any previous entry.
    pub fn set_group(&mut self, name: impl Into<String>, props: Props) {
        self.entries.insert(name.into(), StyleEntry::Group(props));
    }

    /// Sets a top-level value in place, overwriting any previous entry.
    pub fn set_value(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.entries
            .insert(name.into(), StyleEntry::Value(value.into()));
    }

    /// Looks up a property group by name.
    pub fn get_group(&self, name: &str) -> Option<&Props> {
        self.entries.get(name).and_then(StyleEntry::as_group)
    }

    /// Looks up a property group for mutation.
    pub fn group_mut(&mut self, name: &str) -> Option<&mut Props> {
        match self.entries.get_mut(name) {
            Some(StyleEntry::Group(props)) => Some(props),
            _ => None,
        }
    }

    /// Looks up a top-level value by name.
    pub fn get_value(&self, name: &str) -> Option<&Value> {
        self.entries.get(name).and_then(StyleEntry::as_value)
    }

    /// Looks up a top-level value and returns it as a float.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.get_value(name).and_then(Value::as_f64)
    }

    /// Returns true if an entry with the given name exists.
    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterates over entry names in name order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the style holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
