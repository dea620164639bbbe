//! Registry of named styles with stack-scoped activation.

use std::cell::RefCell;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::error::StyleError;
use super::Style;
use crate::props::Props;
use crate::value::Value;

/// The name of the style that is active when no scope is.
pub const DEFAULT_STYLE_NAME: &str = "default";

/// A registry of named styles with stack-scoped activation.
///
/// Styles are registered under names and activated through [`Styles::use_style`],
/// which returns a [`StyleScope`] guard. While a guard lives, its style is the
/// current one; guards nest, and dropping a guard restores whatever was active
/// before it. With no active scope, the style named
/// [`DEFAULT_STYLE_NAME`] is current. An empty default style is registered at
/// construction and is never removed.
///
/// The activation stack lives in a `RefCell`, so a registry is for
/// single-threaded use: scopes may nest freely within one thread (dropped in
/// LIFO order), but the registry must not be shared across threads without
/// external synchronization.
///
/// # Example
///
/// ```rust
/// use plotstyle::{Props, Style, Styles};
///
/// let mut styles = Styles::new();
/// styles.set(
///     "publication",
///     Style::new().group("canvas", Props::new().prop("FillStyle", 4000)),
/// );
///
/// assert_eq!(styles.current_name(), "default");
/// {
///     let scope = styles.use_style("publication")?;
///     assert_eq!(styles.current_name(), "publication");
///     assert!(scope.style().has("canvas"));
/// }
/// assert_eq!(styles.current_name(), "default");
/// # Ok::<(), plotstyle::StyleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Styles {
    styles: HashMap<String, Style>,
    stack: RefCell<Vec<String>>,
}

impl Styles {
    /// Creates a registry holding an empty default style.
    pub fn new() -> Self {
        let mut registry = Self {
            styles: HashMap::new(),
            stack: RefCell::new(Vec::new()),
        };
        registry.set(DEFAULT_STYLE_NAME, Style::new());
        registry
    }

    /// Creates a registry whose default style is the built-in preset.
    ///
    /// See [`default_style`](crate::default_style) for the preset contents.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.set(DEFAULT_STYLE_NAME, crate::presets::default_style());
        registry
    }

    /// Returns the style registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::UnknownStyle`] if no style with that name exists.
    pub fn get(&self, name: &str) -> Result<&Style, StyleError> {
        self.styles.get(name).ok_or_else(|| StyleError::UnknownStyle {
            name: name.to_string(),
        })
    }

    /// Returns the style registered under `name` for mutation.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::UnknownStyle`] if no style with that name exists.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Style, StyleError> {
        self.styles
            .get_mut(name)
            .ok_or_else(|| StyleError::UnknownStyle {
                name: name.to_string(),
            })
    }

    /// Registers `style` under `name`, overwriting any previous style, and
    /// returns the stored style for further configuration.
    pub fn set(&mut self, name: impl Into<String>, style: Style) -> &mut Style {
        match self.styles.entry(name.into()) {
            Entry::Occupied(mut occupied) => {
                occupied.insert(style);
                occupied.into_mut()
            }
            Entry::Vacant(vacant) => vacant.insert(style),
        }
    }

    /// Activates the style registered under `name` for the lifetime of the
    /// returned scope guard.
    ///
    /// The name is pushed onto the activation stack and popped again when the
    /// guard drops, on every exit path including panics. Scopes nest; guards
    /// must be dropped in LIFO order.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::UnknownStyle`] if no style with that name exists.
    /// The activation stack is untouched in that case.
    pub fn use_style(&self, name: &str) -> Result<StyleScope<'_>, StyleError> {
        if !self.styles.contains_key(name) {
            return Err(StyleError::UnknownStyle {
                name: name.to_string(),
            });
        }

        self.stack.borrow_mut().push(name.to_string());
        Ok(StyleScope {
            registry: self,
            name: name.to_string(),
        })
    }

    /// Returns the name of the currently active style: the top of the
    /// activation stack, or [`DEFAULT_STYLE_NAME`] when no scope is active.
    pub fn current_name(&self) -> String {
        self.stack
            .borrow()
            .last()
            .cloned()
            .unwrap_or_else(|| DEFAULT_STYLE_NAME.to_string())
    }

    /// Returns the currently active style.
    pub fn current(&self) -> &Style {
        // the stack only ever holds names checked at push time and the
        // default style is registered at construction
        self.styles
            .get(&self.current_name())
            .expect("current style is always registered")
    }

    /// Returns the named property group of the current style.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::MissingGroup`] naming the current style if the
    /// group does not exist.
    pub fn group(&self, name: &str) -> Result<&Props, StyleError> {
        self.current()
            .get_group(name)
            .ok_or_else(|| StyleError::MissingGroup {
                group: name.to_string(),
                style: self.current_name(),
            })
    }

    /// Returns the named top-level value of the current style.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::MissingValue`] naming the current style if the
    /// value does not exist.
    pub fn value(&self, name: &str) -> Result<&Value, StyleError> {
        self.current()
            .get_value(name)
            .ok_or_else(|| StyleError::MissingValue {
                value: name.to_string(),
                style: self.current_name(),
            })
    }

    /// Returns the named top-level value of the current style as a float.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::MissingValue`] if the value does not exist, or
    /// [`StyleError::NotANumber`] if it exists but is not numeric.
    pub fn number(&self, name: &str) -> Result<f64, StyleError> {
        let value = self.value(name)?;
        value.as_f64().ok_or_else(|| StyleError::NotANumber {
            value: name.to_string(),
            style: self.current_name(),
        })
    }

    /// Returns true if a style with the given name is registered.
    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Iterates over registered style names in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(|s| s.as_str())
    }

    /// Returns the number of currently active scopes.
    pub fn depth(&self) -> usize {
        self.stack.borrow().len()
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard keeping a style active; returned by [`Styles::use_style`].
///
/// Dropping the guard pops its style name from the activation stack,
/// restoring the previously active style.
#[derive(Debug)]
pub struct StyleScope<'a> {
    registry: &'a Styles,
    name: String,
}

impl StyleScope<'_> {
    /// Returns the name of the style this scope activates.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the style this scope activates.
    pub fn style(&self) -> &Style {
        // checked to be registered when the scope was created, and styles
        // are never removed from the registry
        self.registry
            .styles
            .get(&self.name)
            .expect("scoped style is always registered")
    }
}

impl Drop for StyleScope<'_> {
    fn drop(&mut self) {
        let popped = self.registry.stack.borrow_mut().pop();
        debug_assert_eq!(popped.as_deref(), Some(self.name.as_str()));
    }
}
