//! Value classification.
//!
//! Decides which comparison rule applies to a value from its structure alone:
//! internal slots first (sequence, pattern), then whether it overrides the
//! reduce-to-primitive or render-as-text behaviour, and finally plain record.

use crate::{
    Result,
    errors::{Behavior, Error},
    value::{Class, Function, Kind, Object, Value, object::Internal},
};

/// The comparison rule a value falls under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Primitive or callable, compared by identity/primitive equality
    Leaf,
    /// Ordered, length-bearing collection
    Sequence,
    /// Source text plus mode flags
    Pattern,
    /// Overrides `valueOf` or `toString`
    CustomIdentity,
    /// Any other key-value mapping
    Record,
}

/// Classifies a value. Anything without internals is a [`Shape::Leaf`].
///
/// ```
/// use loose_deep_equal::{Value, compare::{Shape, classify}};
///
/// assert_eq!(classify(&Value::from(1)), Shape::Leaf);
/// assert_eq!(classify(&Value::array([1, 2])), Shape::Sequence);
/// assert_eq!(classify(&Value::record([("a", 1)])), Shape::Record);
/// ```
pub fn classify(value: &Value) -> Shape {
    match value {
        Value::Object(object) => classify_object(object),
        _ => Shape::Leaf,
    }
}

pub(crate) fn classify_object(object: &Object) -> Shape {
    match object.internal() {
        Internal::Elements(_) => Shape::Sequence,
        Internal::Pattern(_) => Shape::Pattern,
        _ if reducer(object).is_some() || renderer(object).is_some() => Shape::CustomIdentity,
        _ => Shape::Record,
    }
}

/// Source of an overridden behaviour.
pub(crate) enum Override<'a> {
    /// Function stored on the object itself or found on its class chain
    Function(&'a Function),
    /// Built-in behaviour of a date's time slot
    Time(f64),
}

/// The object's reduce-to-primitive, if it differs from the inherited default.
pub(crate) fn reducer(object: &Object) -> Option<Override<'_>> {
    lookup(object, "valueOf", |class| class.value_of())
}

/// The object's render-as-text, if it differs from the inherited default.
pub(crate) fn renderer(object: &Object) -> Option<Override<'_>> {
    lookup(object, "toString", |class| class.to_string_fn())
}

fn lookup<'a>(
    object: &'a Object,
    name: &str,
    on_class: impl Fn(&'a Class) -> Option<&'a Function>,
) -> Option<Override<'a>> {
    if let Some(function) = object.own_function(name) {
        return Some(Override::Function(function));
    }
    if let Kind::Instance(class) = object.kind() {
        if let Some(function) = on_class(class) {
            return Some(Override::Function(function));
        }
    }
    object.time().map(Override::Time)
}

/// Reduces an object to a primitive. Without an override this is the object itself.
pub(crate) fn reduce(object: &Object) -> Result<Value> {
    match reducer(object) {
        Some(Override::Function(function)) => invoke(function, object, Behavior::ValueOf),
        Some(Override::Time(millis)) => Ok(Value::Number(millis)),
        None => Ok(Value::Object(object.clone())),
    }
}

/// Renders an object as text. Without an override this is `[object Object]`.
pub(crate) fn render(object: &Object) -> Result<Value> {
    match renderer(object) {
        Some(Override::Function(function)) => invoke(function, object, Behavior::ToString),
        Some(Override::Time(millis)) => Ok(Value::Text(Object::render_time(millis))),
        None => Ok(Value::from("[object Object]")),
    }
}

fn invoke(function: &Function, object: &Object, behavior: Behavior) -> Result<Value> {
    function.call(object).map_err(|exception| {
        tracing::debug!(%behavior, function = function.name(), "Behaviour raised");
        Error::thrown(behavior, exception)
    })
}
