//! Property values.

use serde::{Deserialize, Serialize};

/// A single property value, as stored in styles and handed to setters.
///
/// A scalar is passed to a setter as one positional argument. A
/// [`Value::List`] is unpacked into multiple positional arguments, which is
/// how multi-argument setters (margin tuples, tick pairs, RGB triplets)
/// receive their values. A list always unpacks; there is no way to pass a
/// whole list as a single argument.
///
/// # Example
///
/// ```rust
/// use plotstyle::Value;
///
/// let width = Value::from(800);
/// assert_eq!(width.args().len(), 1);
///
/// let ticks = Value::from((true, true));
/// assert_eq!(ticks.args().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
}

impl Value {
    /// Returns true if this value is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Returns the boolean value, if this is a [`Value::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer value, if this is a [`Value::Int`].
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the numeric value as a float.
    ///
    /// Both [`Value::Int`] and [`Value::Float`] qualify; style numbers are
    /// written interchangeably as `0` or `0.0`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the string value, if this is a [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the list elements, if this is a [`Value::List`].
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the positional arguments this value expands to when passed
    /// to a setter: the elements for a list, the value itself otherwise.
    pub fn args(&self) -> &[Value] {
        match self {
            Value::List(items) => items,
            scalar => std::slice::from_ref(scalar),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl<A, B> From<(A, B)> for Value
where
    A: Into<Value>,
    B: Into<Value>,
{
    fn from((a, b): (A, B)) -> Self {
        Value::List(vec![a.into(), b.into()])
    }
}

impl<A, B, C> From<(A, B, C)> for Value
where
    A: Into<Value>,
    B: Into<Value>,
    C: Into<Value>,
{
    fn from((a, b, c): (A, B, C)) -> Self {
        Value::List(vec![a.into(), b.into(), c.into()])
    }
}

impl<A, B, C, D> From<(A, B, C, D)> for Value
where
    A: Into<Value>,
    B: Into<Value>,
    C: Into<Value>,
    D: Into<Value>,
{
    fn from((a, b, c, d): (A, B, C, D)) -> Self {
        Value::List(vec![a.into(), b.into(), c.into(), d.into()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_args_is_self() {
        let v = Value::from(1001);
        assert_eq!(v.args(), &[Value::Int(1001)]);
    }

    #[test]
    fn test_list_args_are_elements() {
        let v = Value::from((0, 0, 1, 1));
        assert_eq!(v.args().len(), 4);
        assert_eq!(v.args()[2], Value::Int(1));
    }

    #[test]
    fn test_as_f64_accepts_int() {
        assert_eq!(Value::from(22).as_f64(), Some(22.0));
        assert_eq!(Value::from(0.045).as_f64(), Some(0.045));
        assert_eq!(Value::from("x").as_f64(), None);
    }

    #[test]
    fn test_tuple_conversion_mixes_types() {
        let v = Value::from((true, 0.5));
        assert_eq!(
            v,
            Value::List(vec![Value::Bool(true), Value::Float(0.5)])
        );
    }

    #[test]
    fn test_serde_untagged_roundtrip() {
        let v: Value = serde_json::from_str("800").unwrap();
        assert_eq!(v, Value::Int(800));

        let v: Value = serde_json::from_str("0.105").unwrap();
        assert_eq!(v, Value::Float(0.105));

        let v: Value = serde_json::from_str("[true, true]").unwrap();
        assert_eq!(v, Value::from((true, true)));

        let json = serde_json::to_string(&Value::from("S")).unwrap();
        assert_eq!(json, "\"S\"");
    }
}
