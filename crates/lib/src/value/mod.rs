//! Dynamically-typed value trees.
//!
//! [`Value`] is the domain the comparator works over. Leaf variants hold
//! primitives or callables; [`Value::Object`] holds a shared, immutable
//! compound node (record, array, pattern, date or class instance).
//!
//! [`Value::Undefined`] doubles as the absence marker: a key that is missing
//! from a record reads as `Undefined` during comparison, which is what makes a
//! missing property equal to one explicitly set to `Undefined`.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::Result;

pub mod function;
pub mod json;
mod macros;
pub mod object;
pub mod pattern;

pub use function::{Class, ClassBuilder, Function};
pub use object::{Kind, Object, ObjectBuilder, Property};
pub use pattern::Pattern;

/// A node of a dynamically-typed value tree.
///
/// # Direct Comparisons
///
/// `Value` implements `PartialEq` with Rust primitives for ergonomic checks.
/// Deep comparison of two values goes through [`crate::equal`].
///
/// ```
/// # use loose_deep_equal::Value;
/// let text = Value::from("hello");
/// let number = Value::from(42);
///
/// assert!(text == "hello");
/// assert!(number == 42);
/// assert!(!(number == "hello"));
/// ```
#[derive(Clone, Default)]
pub enum Value {
    /// Explicitly defined as absent
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    /// Callable leaf, equal only to itself
    Function(Function),
    /// Compound value
    Object(Object),
}

impl Value {
    /// A plain record built from key/value pairs.
    ///
    /// ```
    /// # use loose_deep_equal::Value;
    /// let v = Value::record([("a", Value::from(1)), ("b", Value::Undefined)]);
    /// assert_eq!(v.as_object().unwrap().keys().count(), 2);
    /// ```
    pub fn record<I, K, V>(pairs: I) -> Value
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        pairs
            .into_iter()
            .fold(Object::record(), |builder, (k, v)| builder.property(k, v))
            .build()
            .into()
    }

    /// A record with no inherited behaviour, built from key/value pairs.
    pub fn bare_record<I, K, V>(pairs: I) -> Value
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        pairs
            .into_iter()
            .fold(Object::bare(), |builder, (k, v)| builder.property(k, v))
            .build()
            .into()
    }

    /// A dense array.
    pub fn array<I, V>(items: I) -> Value
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Object::array().elements(items).build().into()
    }

    /// An array where `None` marks a hole.
    pub fn array_with_holes<I>(slots: I) -> Value
    where
        I: IntoIterator<Item = Option<Value>>,
    {
        slots
            .into_iter()
            .fold(Object::array(), |builder, slot| match slot {
                Some(value) => builder.element(value),
                None => builder.hole(),
            })
            .build()
            .into()
    }

    /// A pattern object.
    pub fn regexp(source: impl Into<String>, flags: &str) -> Result<Value> {
        Ok(Object::regexp(Pattern::new(source, flags)?).build().into())
    }

    /// A date at the given instant.
    pub fn date(instant: DateTime<Utc>) -> Value {
        Object::date(instant).build().into()
    }

    /// A date from milliseconds since the epoch; NaN makes an invalid date.
    pub fn date_millis(millis: f64) -> Value {
        Object::date_millis(millis).build().into()
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true for the not-a-number leaf
    pub fn is_nan(&self) -> bool {
        matches!(self, Value::Number(n) if n.is_nan())
    }

    /// Returns true if this value has classifiable internals
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::Function(_) => "function",
            Value::Object(_) => "object",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(function) => Some(function),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Identity/primitive equality.
    ///
    /// Primitives compare by value (`0` equals `-0`, NaN equals nothing);
    /// functions and objects compare by reference.
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{s:?}"),
            Value::Function(function) => write!(f, "{function:?}"),
            other => write!(f, "{other}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::Text(s) => write!(f, "{s}"),
            Value::Function(function) => write!(f, "{function:?}"),
            Value::Object(object) => write!(f, "{object}"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        // Beyond 2^53 this loses precision, as any f64 number would
        Value::Number(value as f64)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::Number(value as f64)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Value::Function(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::array(value)
    }
}

// PartialEq implementations for comparing Value with primitives
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Value::Text(s) if s == other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, Value::Number(n) if n == other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        *self == *other as f64
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        *self == *other as f64
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Value::Bool(b) if b == other)
    }
}

// Reverse implementations for symmetry
impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for f64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i32 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
