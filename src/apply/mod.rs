//! Property application to target objects.
//!
//! This module provides the application primitives:
//!
//! - [`PropertyTable`]: A per-target-type table of named setters
//! - [`Args`]: The positional-argument view a setter receives
//! - [`ApplyError`] / [`PropertyError`]: Errors from application
//!
//! A table is built once per supported target type and maps property names
//! ("FillStyle", "TopMargin", ...) to setter functions. Applying a property
//! map then only touches names the table knows; unknown names are skipped,
//! since style groups routinely carry properties that not every target
//! supports.

mod color;
mod error;

pub use color::COLOR_FLAGS_ALL;
pub use error::{ApplyError, PropertyError};

use std::collections::BTreeMap;
use std::fmt;

use crate::props::Props;
use crate::style::Styles;
use crate::value::Value;

/// A setter for one property of a target of type `T`.
///
/// Setters receive the property value as positional [`Args`]: one argument
/// for a scalar value, one per element for a list value.
pub type Setter<T> = fn(&mut T, Args<'_>) -> Result<(), PropertyError>;

/// Positional arguments passed to a setter.
///
/// Produced from a [`Value`] by the unpacking rule: a list contributes its
/// elements, a scalar contributes itself. The typed accessors fail with
/// [`PropertyError::MissingArg`] or [`PropertyError::WrongType`] so that
/// malformed style entries surface with the argument position attached.
#[derive(Debug, Clone, Copy)]
pub struct Args<'a> {
    values: &'a [Value],
}

impl<'a> Args<'a> {
    /// Creates the argument view for a property value.
    pub fn of(value: &'a Value) -> Self {
        Self {
            values: value.args(),
        }
    }

    /// Returns the number of positional arguments.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no arguments.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the argument at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&'a Value> {
        self.values.get(index)
    }

    fn at(&self, index: usize) -> Result<&'a Value, PropertyError> {
        self.values
            .get(index)
            .ok_or(PropertyError::MissingArg { index })
    }

    /// Returns the argument at `index` as a boolean.
    pub fn bool_at(&self, index: usize) -> Result<bool, PropertyError> {
        self.at(index)?
            .as_bool()
            .ok_or(PropertyError::WrongType {
                index,
                expected: "bool",
            })
    }

    /// Returns the argument at `index` as an integer.
    pub fn i64_at(&self, index: usize) -> Result<i64, PropertyError> {
        self.at(index)?
            .as_i64()
            .ok_or(PropertyError::WrongType {
                index,
                expected: "integer",
            })
    }

    /// Returns the argument at `index` as a 32-bit integer.
    pub fn i32_at(&self, index: usize) -> Result<i32, PropertyError> {
        i32::try_from(self.i64_at(index)?).map_err(|_| PropertyError::WrongType {
            index,
            expected: "i32",
        })
    }

    /// Returns the argument at `index` as a float, accepting integers.
    pub fn f64_at(&self, index: usize) -> Result<f64, PropertyError> {
        self.at(index)?
            .as_f64()
            .ok_or(PropertyError::WrongType {
                index,
                expected: "number",
            })
    }

    /// Returns the argument at `index` as a string slice.
    pub fn str_at(&self, index: usize) -> Result<&'a str, PropertyError> {
        self.at(index)?
            .as_str()
            .ok_or(PropertyError::WrongType {
                index,
                expected: "string",
            })
    }
}

/// A table of named property setters for targets of type `T`.
///
/// Tables replace by-name method lookup with an explicit registration step:
/// each supported target type gets one table, built once, mapping property
/// names to setter functions. Application merges its property sources
/// (last-wins), then invokes the registered setter for each merged name and
/// silently skips names the table does not know.
///
/// # Example
///
/// ```rust
/// use plotstyle::{Props, PropertyTable};
///
/// #[derive(Default)]
/// struct Pad {
///     top_margin: f64,
///     ticks: (bool, bool),
/// }
///
/// let table = PropertyTable::<Pad>::new()
///     .setter("TopMargin", |pad, args| {
///         pad.top_margin = args.f64_at(0)?;
///         Ok(())
///     })
///     .setter("Ticks", |pad, args| {
///         pad.ticks = (args.bool_at(0)?, args.bool_at(1)?);
///         Ok(())
///     });
///
/// let mut pad = Pad::default();
/// let props = Props::new()
///     .prop("TopMargin", 0.05)
///     .prop("Ticks", (true, true))
///     .prop("FillStyle", 4000); // no setter registered, skipped
///
/// table.apply(&mut pad, [Some(&props)])?;
/// assert_eq!(pad.top_margin, 0.05);
/// assert_eq!(pad.ticks, (true, true));
/// # Ok::<(), plotstyle::ApplyError>(())
/// ```
pub struct PropertyTable<T> {
    setters: BTreeMap<String, Setter<T>>,
}

impl<T> PropertyTable<T> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            setters: BTreeMap::new(),
        }
    }

    /// Registers a setter under a property name, returning the updated table
    /// for chaining. Registering a name twice replaces the earlier setter.
    pub fn setter(mut self, name: impl Into<String>, setter: Setter<T>) -> Self {
        self.insert(name, setter);
        self
    }

    /// Registers a setter in place.
    pub fn insert(&mut self, name: impl Into<String>, setter: Setter<T>) {
        self.setters.insert(name.into(), setter);
    }

    /// Returns true if a setter is registered under the given name.
    pub fn has(&self, name: &str) -> bool {
        self.setters.contains_key(name)
    }

    /// Iterates over registered property names in name order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.setters.keys().map(|s| s.as_str())
    }

    /// Returns the number of registered setters.
    pub fn len(&self) -> usize {
        self.setters.len()
    }

    /// Returns true if no setters are registered.
    pub fn is_empty(&self) -> bool {
        self.setters.is_empty()
    }

    /// Applies merged property sources to a target.
    ///
    /// `sources` is an ordered sequence of optional property maps; `None`
    /// entries are skipped and later sources win on name collisions. Each
    /// merged property with a registered setter is applied with the
    /// positional unpacking of its value; properties without a registered
    /// setter are skipped silently.
    ///
    /// # Errors
    ///
    /// Returns [`ApplyError::Property`] when a setter fails, naming the
    /// property. Setter rejections are not intercepted; application stops at
    /// the first failure, leaving earlier properties applied.
    pub fn apply<'a, I>(&self, target: &mut T, sources: I) -> Result<(), ApplyError>
    where
        I: IntoIterator<Item = Option<&'a Props>>,
    {
        let merged = Props::merged(sources);
        for (name, value) in merged.iter() {
            let Some(setter) = self.setters.get(name) else {
                continue;
            };
            setter(target, Args::of(value)).map_err(|source| ApplyError::Property {
                name: name.to_string(),
                source,
            })?;
        }
        Ok(())
    }

    /// Applies a named group of the registry's current style to a target,
    /// merged with an optional override source.
    ///
    /// # Errors
    ///
    /// Returns [`ApplyError::Style`] if the current style has no such group,
    /// or [`ApplyError::Property`] when a setter fails.
    pub fn apply_group(
        &self,
        target: &mut T,
        styles: &Styles,
        group: &str,
        extra: Option<&Props>,
    ) -> Result<(), ApplyError> {
        let props = styles.group(group)?;
        self.apply(target, [Some(props), extra])
    }
}

impl<T> Default for PropertyTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for PropertyTable<T> {
    fn clone(&self) -> Self {
        Self {
            setters: self.setters.clone(),
        }
    }
}

impl<T> fmt::Debug for PropertyTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyTable")
            .field("setters", &self.setters.keys().collect::<Vec<_>>())
            .finish()
    }
}
