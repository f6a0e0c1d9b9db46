//! The recursive comparator.
//!
//! [`equal`] walks two value trees in lockstep. At every node it first tries
//! identity/primitive equality, then the reflexive NaN rule, then rejects
//! mismatched kinds, and finally dispatches on the node's [`Shape`]:
//!
//! - **Sequence**: lengths must match, then every index from last to first.
//!   Holes read as `Undefined`; named properties on the array are ignored.
//! - **Pattern**: source text and canonical flags.
//! - **Custom identity**: the results of the overridden `valueOf` (or, failing
//!   that, `toString`) on both sides, compared strictly.
//! - **Record**: key reconciliation, where a missing key equals `Undefined`.
//!
//! Recursion depth follows nesting depth. Value trees can not form reference
//! cycles, but a getter that manufactures ever-deeper values will exhaust the
//! stack like any unbounded recursion would.

use crate::{
    Result,
    value::{Object, Value},
};

pub mod classify;
pub mod keys;

pub use classify::{Shape, classify};

/// The absence marker a missing key or array hole resolves to.
pub(crate) static UNDEFINED: Value = Value::Undefined;

/// Deep equality where a missing record key equals an explicit `Undefined`.
///
/// Returns `Ok(false)` for any shape or value mismatch. Returns an error only
/// when a user-supplied behaviour (accessor, `valueOf`, `toString`) raised
/// while being evaluated; the comparison is abandoned at that point.
///
/// ```
/// use loose_deep_equal::{Value, equal, record};
///
/// let a = record! { "a" => 1, "b" => record! { "c" => 2 } };
/// let b = record! { "b" => record! { "c" => 2, "d" => Value::Undefined }, "a" => 1 };
/// assert!(equal(&a, &b).unwrap());
///
/// let c = record! { "a" => Value::Null };
/// assert!(!equal(&c, &record! {}).unwrap());
/// ```
pub fn equal(a: &Value, b: &Value) -> Result<bool> {
    if a.strict_equals(b) {
        return Ok(true);
    }

    match (a, b) {
        (Value::Object(a), Value::Object(b)) => equal_objects(a, b),
        _ => Ok(a.is_nan() && b.is_nan()),
    }
}

fn equal_objects(a: &Object, b: &Object) -> Result<bool> {
    if a.kind() != b.kind() {
        tracing::trace!(
            left = a.kind().name(),
            right = b.kind().name(),
            "Kind tags differ"
        );
        return Ok(false);
    }

    match (classify::classify_object(a), classify::classify_object(b)) {
        (Shape::Sequence, Shape::Sequence) => equal_sequences(a, b),
        (Shape::Pattern, Shape::Pattern) => Ok(a.pattern() == b.pattern()),
        (Shape::CustomIdentity, _) | (_, Shape::CustomIdentity) => equal_custom(a, b),
        _ => keys::reconcile(a, b),
    }
}

fn equal_sequences(a: &Object, b: &Object) -> Result<bool> {
    let (Some(left), Some(right)) = (a.elements(), b.elements()) else {
        return Ok(false);
    };
    if left.len() != right.len() {
        tracing::trace!(left = left.len(), right = right.len(), "Lengths differ");
        return Ok(false);
    }

    for (index, (x, y)) in left.iter().zip(right).enumerate().rev() {
        let x = x.as_ref().unwrap_or(&UNDEFINED);
        let y = y.as_ref().unwrap_or(&UNDEFINED);
        if !equal(x, y)? {
            tracing::trace!(index, "Elements differ");
            return Ok(false);
        }
    }
    Ok(true)
}

/// Compares by reduction when either side overrides it, else by rendering.
fn equal_custom(a: &Object, b: &Object) -> Result<bool> {
    let (left, right) =
        if classify::reducer(a).is_some() || classify::reducer(b).is_some() {
            (classify::reduce(a)?, classify::reduce(b)?)
        } else {
            (classify::render(a)?, classify::render(b)?)
        };
    Ok(left.strict_equals(&right))
}
